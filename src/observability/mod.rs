//! # Observability
//!
//! Structured logging through `tracing`: subscriber installation and the
//! per-request logging middleware.

pub mod logging;
pub mod request_log;

pub use logging::init_logging;
pub use request_log::{log_requests, REQUEST_ID_HEADER};
