//! # Document Store Adapter
//!
//! Collection-scoped access to the backing document database.
//!
//! The process owns exactly one store for its lifetime. Handlers receive it
//! through router state as a [`SharedStore`] and never reach it any other way.

pub mod collection;
pub mod document;
pub mod errors;
pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

pub use collection::CollectionHandle;
pub use document::{Document, DocumentId, ID_FIELD};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Store shared by every request
pub type SharedStore = Arc<dyn DocumentStore>;

/// Primitive operations on named collections
///
/// Collections are created implicitly on first write; reading a collection
/// that was never written yields no documents rather than an error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Verify the store is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// All documents of a collection in natural order, each with its `_id`
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Insert a document without an `_id` and return the assigned identifier
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<DocumentId>;

    /// Insert a document with `field` set to the timestamp `at`.
    ///
    /// Stores with a native date type keep it as a date; the default writes
    /// an RFC 3339 string with millisecond precision.
    async fn insert_stamped(
        &self,
        collection: &str,
        mut document: Document,
        field: &str,
        at: DateTime<Utc>,
    ) -> StoreResult<DocumentId> {
        document.insert(
            field.to_string(),
            Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        self.insert_one(collection, document).await
    }

    /// Delete by identifier, returning the number of documents removed
    async fn delete_one(&self, collection: &str, id: DocumentId) -> StoreResult<u64>;

    /// Set the given fields on one document, returning the number matched
    async fn update_one(
        &self,
        collection: &str,
        id: DocumentId,
        changes: Document,
    ) -> StoreResult<u64>;
}
