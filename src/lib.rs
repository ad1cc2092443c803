//! docgate - REST gateway over document database collections
//!
//! Generic CRUD for any collection named in the URL, plus an orders
//! extension, backed by MongoDB or an in-process store.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod store;
