//! # In-Memory Store
//!
//! Process-local [`DocumentStore`] with the same observable semantics as the
//! MongoDB adapter: insertion order, ObjectId identifiers, `$set` merges.
//! Used by tests and by `serve --in-memory`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use super::document::prepare_update;
use super::{Document, DocumentId, DocumentStore, StoreError, StoreResult, ID_FIELD};

/// A stored document and its identifier
#[derive(Debug, Clone)]
struct StoredDocument {
    id: DocumentId,
    fields: Document,
}

impl StoredDocument {
    /// Render with `_id` the way the store returns documents
    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert(ID_FIELD.to_string(), Value::String(self.id.to_hex()));
        for (k, v) in &self.fields {
            doc.insert(k.clone(), v.clone());
        }
        doc
    }
}

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Collection name -> documents in insertion order
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against a collection, creating it on first use
    fn with_collection<T, F>(&self, name: &str, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Vec<StoredDocument>) -> StoreResult<T>,
    {
        let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        let collection = collections.entry(name.to_string()).or_default();
        f(collection)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        self.collections
            .read()
            .map(|_| ())
            .map_err(|_| StoreError::Poisoned)
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().map(StoredDocument::to_document).collect())
            .unwrap_or_default())
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> StoreResult<DocumentId> {
        document.remove(ID_FIELD);
        let id = DocumentId::generate();
        self.with_collection(collection, |docs| {
            docs.push(StoredDocument {
                id,
                fields: document,
            });
            Ok(id)
        })
    }

    async fn delete_one(&self, collection: &str, id: DocumentId) -> StoreResult<u64> {
        self.with_collection(collection, |docs| {
            match docs.iter().position(|doc| doc.id == id) {
                Some(pos) => {
                    docs.remove(pos);
                    Ok(1)
                }
                None => Ok(0),
            }
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        id: DocumentId,
        changes: Document,
    ) -> StoreResult<u64> {
        let changes = prepare_update(id, changes)?;
        self.with_collection(collection, |docs| {
            let Some(doc) = docs.iter_mut().find(|doc| doc.id == id) else {
                return Ok(0);
            };
            for (k, v) in changes {
                doc.fields.insert(k, v);
            }
            Ok(1)
        })
    }
}
