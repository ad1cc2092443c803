//! # Order Routes
//!
//! `POST /orders` and `GET /orders`, fixed to the `orders` collection.
//!
//! Orders are the one place the gateway looks inside a body: the four
//! client fields must be present and truthy, `lessonIDs` must be an array
//! and `numSpaces` a number. `createdAt` is always stamped here, as a date
//! where the store has one.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{Number, Value};

use super::errors::{RestError, RestResult};
use super::extract::JsonDocument;
use super::response::OrderCreatedResponse;
use super::state::GatewayState;
use crate::store::Document;

/// Collection every order lands in
pub const ORDERS_COLLECTION: &str = "orders";

/// Server-assigned creation time of an order
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Build the order router
pub fn order_routes() -> Router<GatewayState> {
    Router::new().route("/orders", get(list_orders).post(create_order))
}

/// A validated order, before it is stamped and stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub name: Value,
    pub phone_number: Value,
    pub lesson_ids: Vec<Value>,
    pub num_spaces: Number,
}

impl NewOrder {
    /// Validate a request body. Nothing touches the store before this passes.
    pub fn from_document(body: &Document) -> RestResult<Self> {
        let field = |key: &str| body.get(key).filter(|v| is_truthy(v));

        let (Some(name), Some(phone), Some(lessons), Some(spaces)) = (
            field("name"),
            field("phoneNumber"),
            field("lessonIDs"),
            field("numSpaces"),
        ) else {
            return Err(RestError::MissingFields);
        };

        match (lessons, spaces) {
            (Value::Array(lessons), Value::Number(spaces)) => Ok(Self {
                name: name.clone(),
                phone_number: phone.clone(),
                lesson_ids: lessons.clone(),
                num_spaces: spaces.clone(),
            }),
            _ => Err(RestError::InvalidTypes),
        }
    }

    /// Stored form, without the creation stamp
    pub fn into_document(self) -> Document {
        let mut doc = Document::new();
        doc.insert("name".into(), self.name);
        doc.insert("phoneNumber".into(), self.phone_number);
        doc.insert("lessonIDs".into(), Value::Array(self.lesson_ids));
        doc.insert("numSpaces".into(), Value::Number(self.num_spaces));
        doc
    }
}

/// JavaScript truthiness: `null`, `false`, `0` and `""` are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validate and insert an order
async fn create_order(
    State(state): State<GatewayState>,
    JsonDocument(body): JsonDocument,
) -> RestResult<(StatusCode, Json<OrderCreatedResponse>)> {
    let order = NewOrder::from_document(&body)?;

    let id = state
        .collection(ORDERS_COLLECTION)
        .insert_stamped(order.into_document(), CREATED_AT_FIELD, Utc::now())
        .await?;

    tracing::info!(order_id = %id, "order created");
    Ok((StatusCode::CREATED, Json(OrderCreatedResponse::new(id))))
}

/// List every order
async fn list_orders(State(state): State<GatewayState>) -> RestResult<Json<Vec<Document>>> {
    let orders = state.collection(ORDERS_COLLECTION).find_all().await?;
    Ok(Json(orders))
}
