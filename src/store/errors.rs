//! # Store Errors
//!
//! Error types for the document store layer.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
///
/// Everything here is an opaque "operation failed" signal to the HTTP layer;
/// the detail is only ever logged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Identifier text is not a valid ObjectId
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Update attempted to change a document's `_id`
    #[error("Performing an update on the path '_id' would modify the immutable field '_id'")]
    ImmutableId,

    /// Store acknowledged an insert without an ObjectId
    #[error("Insert did not return an ObjectId")]
    MissingInsertedId,

    /// Document could not be encoded for the store
    #[error("Encode error: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    /// Error reported by the database driver
    #[error("Driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// In-process store lock was poisoned
    #[error("Store lock poisoned")]
    Poisoned,
}
