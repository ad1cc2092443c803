//! # MongoDB Store
//!
//! [`DocumentStore`] backed by the official MongoDB driver. The driver's
//! client is internally pooled, so one `MongoStore` serves every request.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, Bson};
use mongodb::{Client, Collection, Database};
use serde_json::Value;

use super::document::prepare_update;
use super::{Document, DocumentId, DocumentStore, StoreError, StoreResult};

/// Store over one MongoDB database
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Build a client for `uri` and bind `database`.
    ///
    /// The driver connects lazily; call [`DocumentStore::ping`] to find out
    /// whether the server is actually reachable.
    pub async fn connect(uri: &str, database: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            database: client.database(database),
        })
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    fn collection(&self, name: &str) -> Collection<bson::Document> {
        self.database.collection(name)
    }

    async fn insert_encoded(
        &self,
        collection: &str,
        document: bson::Document,
    ) -> StoreResult<DocumentId> {
        let result = self.collection(collection).insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .map(DocumentId::from)
            .ok_or(StoreError::MissingInsertedId)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        let docs: Vec<bson::Document> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(to_json_document).collect())
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<DocumentId> {
        self.insert_encoded(collection, bson::to_document(&document)?)
            .await
    }

    async fn insert_stamped(
        &self,
        collection: &str,
        document: Document,
        field: &str,
        at: DateTime<Utc>,
    ) -> StoreResult<DocumentId> {
        self.insert_encoded(collection, stamped_document(&document, field, at)?)
            .await
    }

    async fn delete_one(&self, collection: &str, id: DocumentId) -> StoreResult<u64> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id.object_id() })
            .await?;
        Ok(result.deleted_count)
    }

    async fn update_one(
        &self,
        collection: &str,
        id: DocumentId,
        changes: Document,
    ) -> StoreResult<u64> {
        let changes = prepare_update(id, changes)?;
        let filter = doc! { "_id": id.object_id() };

        // Empty `$set` is rejected before MongoDB 5.0
        if changes.is_empty() {
            return Ok(self.collection(collection).count_documents(filter).await?);
        }

        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": bson::to_document(&changes)? })
            .await?;
        Ok(result.matched_count)
    }
}

/// Encode `document` with `field` holding a BSON date
fn stamped_document(
    document: &Document,
    field: &str,
    at: DateTime<Utc>,
) -> StoreResult<bson::Document> {
    let mut encoded = bson::to_document(document)?;
    encoded.insert(field, bson::DateTime::from_millis(at.timestamp_millis()));
    Ok(encoded)
}

/// Convert a stored document into plain JSON
fn to_json_document(document: bson::Document) -> Document {
    document
        .into_iter()
        .map(|(key, value)| (key, to_json(value)))
        .collect()
}

/// ObjectIds become hex strings and dates RFC 3339 strings with
/// milliseconds; everything else takes its relaxed extended-JSON form.
fn to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis()) {
            Some(at) => Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(doc) => Value::Object(to_json_document(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use mongodb::bson::DateTime;
    use serde_json::json;

    #[test]
    fn test_object_ids_render_as_hex() {
        let oid = ObjectId::new();
        let doc = doc! { "_id": oid, "name": "Alice" };
        let json = Value::Object(to_json_document(doc));
        assert_eq!(json, json!({"_id": oid.to_hex(), "name": "Alice"}));
    }

    #[test]
    fn test_nested_values_are_converted() {
        let oid = ObjectId::new();
        let doc = doc! {
            "lessonIDs": [oid, 2_i32],
            "meta": { "owner": oid, "score": 1.5 },
        };
        let json = Value::Object(to_json_document(doc));
        assert_eq!(json["lessonIDs"], json!([oid.to_hex(), 2]));
        assert_eq!(json["meta"]["owner"], json!(oid.to_hex()));
        assert_eq!(json["meta"]["score"], json!(1.5));
    }

    #[test]
    fn test_dates_render_as_rfc3339() {
        let doc = doc! { "createdAt": DateTime::from_millis(0) };
        let json = Value::Object(to_json_document(doc));
        assert_eq!(json["createdAt"], json!("1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_stamped_field_is_a_bson_date() {
        use chrono::TimeZone;

        let body = json!({"name": "Alice", "createdAt": "client value"});
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let encoded = stamped_document(body.as_object().unwrap(), "createdAt", at).unwrap();

        assert_eq!(
            encoded.get("createdAt"),
            Some(&Bson::DateTime(DateTime::from_millis(at.timestamp_millis())))
        );
        assert_eq!(encoded.get_str("name").unwrap(), "Alice");

        let json = Value::Object(to_json_document(encoded));
        assert_eq!(json["createdAt"], json!("2024-03-01T12:30:00.000Z"));
    }

    #[test]
    fn test_json_documents_encode_verbatim() {
        let body = json!({"name": "Alice", "tags": ["a", "b"], "n": 2});
        let encoded = bson::to_document(body.as_object().unwrap()).unwrap();
        assert_eq!(encoded.get_str("name").unwrap(), "Alice");
        assert_eq!(encoded.get_array("tags").unwrap().len(), 2);
    }
}
