//! # REST API Module
//!
//! HTTP endpoints for CRUD on any collection plus the orders extension.
//! Handlers receive their collection as an explicit per-request
//! [`CollectionHandle`](crate::store::CollectionHandle) and report failures
//! as [`RestError`].

pub mod collections;
pub mod errors;
pub mod extract;
pub mod orders;
pub mod response;
pub mod state;

pub use collections::collection_routes;
pub use errors::{RestError, RestResult};
pub use extract::JsonDocument;
pub use orders::{order_routes, NewOrder, CREATED_AT_FIELD, ORDERS_COLLECTION};
pub use response::{InsertResponse, OrderCreatedResponse, Outcome, OutcomeResponse};
pub use state::GatewayState;
