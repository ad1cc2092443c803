//! # Request Extractors
//!
//! Per-request values the handlers receive as arguments:
//!
//! - [`CollectionHandle`] resolved from the `{collection}` path segment
//! - [`JsonDocument`] parsed from the request body

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde_json::Value;

use super::errors::RestError;
use super::state::GatewayState;
use crate::store::{CollectionHandle, Document};

/// Path parameter naming the target collection
pub const COLLECTION_PARAM: &str = "collection";

/// Binds the `{collection}` segment to a handle.
///
/// The name is taken as-is: no allow-list and no existence check, so a
/// handle always comes back, even for a collection nobody has written yet.
impl FromRequestParts<GatewayState> for CollectionHandle {
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &GatewayState,
    ) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::Internal(e.body_text()))?;

        let name = params.get(COLLECTION_PARAM).ok_or_else(|| {
            RestError::Internal(format!("route has no {{{}}} segment", COLLECTION_PARAM))
        })?;

        tracing::trace!(collection = %name, "collection resolved");
        Ok(state.collection(name))
    }
}

/// A JSON object request body.
///
/// A missing or blank body yields an empty document, leaving the
/// "no data" decision to the handler. Anything that is not a JSON object is
/// rejected as a client error.
#[derive(Debug, Clone)]
pub struct JsonDocument(pub Document);

impl<S> FromRequest<S> for JsonDocument
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RestError::InvalidBody(e.body_text()))?;

        parse_document(&bytes).map(JsonDocument)
    }
}

fn parse_document(bytes: &[u8]) -> Result<Document, RestError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Document::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(doc)) => Ok(doc),
        Ok(_) => Err(RestError::InvalidBody("expected a JSON object".to_string())),
        Err(e) => Err(RestError::InvalidBody(e.to_string())),
    }
}
