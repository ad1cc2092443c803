//! # Collection Routes
//!
//! Generic CRUD over any collection named in the URL:
//!
//! - `GET    /collections/{collection}`
//! - `POST   /collections/{collection}`
//! - `DELETE /collections/{collection}/{id}`
//! - `PUT    /collections/{collection}/{id}`

use axum::{
    extract::Path,
    routing::{get, put},
    Json, Router,
};

use super::errors::{RestError, RestResult};
use super::extract::JsonDocument;
use super::response::{InsertResponse, OutcomeResponse};
use super::state::GatewayState;
use crate::store::{CollectionHandle, Document, DocumentId, ID_FIELD};

/// Build the collection router
pub fn collection_routes() -> Router<GatewayState> {
    Router::new()
        .route(
            "/collections/{collection}",
            get(list_documents).post(create_document),
        )
        .route(
            "/collections/{collection}/{id}",
            put(update_document).delete(delete_document),
        )
}

/// List every document of the collection
async fn list_documents(collection: CollectionHandle) -> RestResult<Json<Vec<Document>>> {
    let documents = collection.find_all().await?;
    Ok(Json(documents))
}

/// Insert the body as a new document
async fn create_document(
    collection: CollectionHandle,
    JsonDocument(document): JsonDocument,
) -> RestResult<Json<InsertResponse>> {
    if document.is_empty() {
        return Err(RestError::NoData);
    }
    if document.contains_key(ID_FIELD) {
        return Err(RestError::IdentifierSupplied);
    }

    let id = collection.insert(document).await?;
    tracing::info!(collection = %collection.name(), id = %id, "document created");
    Ok(Json(InsertResponse::new(id)))
}

/// Delete one document by identifier
async fn delete_document(
    collection: CollectionHandle,
    Path((_, id)): Path<(String, String)>,
) -> RestResult<Json<OutcomeResponse>> {
    let id: DocumentId = id.parse()?;
    let deleted = collection.delete_by_id(id).await?;
    Ok(Json(OutcomeResponse::from_count(deleted)))
}

/// Merge the body into one document
async fn update_document(
    collection: CollectionHandle,
    Path((_, id)): Path<(String, String)>,
    JsonDocument(changes): JsonDocument,
) -> RestResult<Json<OutcomeResponse>> {
    let id: DocumentId = id.parse()?;
    let matched = collection.update_by_id(id, changes).await?;
    Ok(Json(OutcomeResponse::from_count(matched)))
}
