//! # HTTP Server Module
//!
//! Front door of the gateway: combines the REST routers into one Axum
//! server.
//!
//! # Endpoints
//!
//! - `/` - Plain-text welcome
//! - `/collections/{name}[/{id}]` - Generic collection CRUD
//! - `/orders` - Order creation and listing
//! - `/images/*` - Static files

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{HttpServer, WELCOME_MESSAGE};
