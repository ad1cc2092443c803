//! # Collection Handle
//!
//! A store reference bound to one collection name for a single request.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{Document, DocumentId, SharedStore, StoreResult};

/// Handle to a named collection
///
/// Cheap to build; one is resolved per request and dropped with it.
#[derive(Clone)]
pub struct CollectionHandle {
    name: String,
    store: SharedStore,
}

impl CollectionHandle {
    /// Bind `name` in `store`. Any name is accepted.
    pub fn new(store: SharedStore, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Document>> {
        self.store.find_all(&self.name).await
    }

    pub async fn insert(&self, document: Document) -> StoreResult<DocumentId> {
        self.store.insert_one(&self.name, document).await
    }

    /// Insert with `field` stamped as a timestamp
    pub async fn insert_stamped(
        &self,
        document: Document,
        field: &str,
        at: DateTime<Utc>,
    ) -> StoreResult<DocumentId> {
        self.store
            .insert_stamped(&self.name, document, field, at)
            .await
    }

    pub async fn delete_by_id(&self, id: DocumentId) -> StoreResult<u64> {
        self.store.delete_one(&self.name, id).await
    }

    pub async fn update_by_id(&self, id: DocumentId, changes: Document) -> StoreResult<u64> {
        self.store.update_one(&self.name, id, changes).await
    }
}

impl fmt::Debug for CollectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_handles_share_the_underlying_store() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let writer = CollectionHandle::new(store.clone(), "lessons");
        let reader = CollectionHandle::new(store, "lessons");

        let doc = json!({"topic": "Math"}).as_object().cloned().unwrap();
        let id = writer.insert(doc).await.unwrap();

        let docs = reader.find_all().await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["_id"], json!(id.to_hex()));
    }

    #[tokio::test]
    async fn test_names_are_isolated() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let lessons = CollectionHandle::new(store.clone(), "lessons");
        let users = CollectionHandle::new(store, "users");

        let doc = json!({"topic": "Art"}).as_object().cloned().unwrap();
        lessons.insert(doc).await.unwrap();

        assert!(users.find_all().await.unwrap().is_empty());
        assert_eq!(users.name(), "users");
    }
}
