//! # REST API Errors
//!
//! Error types for the REST API module and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// Body sent for every server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Create request carried no fields
    #[error("there is no data to add")]
    NoData,

    /// Body is not a JSON object
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Client tried to choose a document identifier
    #[error("_id is assigned by the store")]
    IdentifierSupplied,

    /// Order is missing a required field
    #[error("Missing required fields")]
    MissingFields,

    /// Order field has the wrong JSON type
    #[error("Invalid data types")]
    InvalidTypes,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store operation failed, including malformed identifiers
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Request reached a handler in a state routing should rule out
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NoData
            | RestError::InvalidBody(_)
            | RestError::IdentifierSupplied
            | RestError::MissingFields
            | RestError::InvalidTypes => StatusCode::BAD_REQUEST,

            RestError::Store(_) | RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        // Server-side detail stays in the logs
        let message = if err.status_code().is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            err.to_string()
        };
        Self { message }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
