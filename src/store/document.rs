//! # Documents and Identifiers
//!
//! Documents are schema-less JSON objects. Once persisted each one carries
//! a store-assigned `_id`, an ObjectId rendered as 24 hex characters.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::errors::StoreError;

/// Field holding a document's identifier
pub const ID_FIELD: &str = "_id";

/// A schema-less JSON document
pub type Document = Map<String, Value>;

/// Store-assigned document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    /// Hex form used in JSON bodies
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for DocumentId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| StoreError::InvalidIdentifier(s.to_string()))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Reduce an update to the fields a `$set` may touch.
///
/// `_id` may be restated but never changed. The result may be empty, in which
/// case the update only matches.
pub(crate) fn prepare_update(id: DocumentId, mut changes: Document) -> Result<Document, StoreError> {
    if let Some(restated) = changes.remove(ID_FIELD) {
        if restated != Value::String(id.to_hex()) {
            return Err(StoreError::ImmutableId);
        }
    }
    Ok(changes)
}
