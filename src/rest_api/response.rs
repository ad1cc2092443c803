//! # Response Formatting
//!
//! Response bodies for the collection and order endpoints.

use serde::Serialize;

use crate::store::DocumentId;

/// Create response for generic collections
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub message: String,
    pub inserted_id: DocumentId,
}

impl InsertResponse {
    pub fn new(inserted_id: DocumentId) -> Self {
        Self {
            message: "Document successfully created".to_string(),
            inserted_id,
        }
    }
}

/// Outcome marker of a delete or update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Error,
}

/// Delete/update response. Always sent with 200; only `msg` differs.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeResponse {
    pub msg: Outcome,
}

impl OutcomeResponse {
    /// Success iff the store touched exactly one document
    pub fn from_count(count: u64) -> Self {
        let msg = if count == 1 {
            Outcome::Success
        } else {
            Outcome::Error
        };
        Self { msg }
    }
}

/// Create response for orders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order_id: DocumentId,
}

impl OrderCreatedResponse {
    pub fn new(order_id: DocumentId) -> Self {
        Self {
            message: "Order successfully created".to_string(),
            order_id,
        }
    }
}
