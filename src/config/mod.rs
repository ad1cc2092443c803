//! # Configuration
//!
//! Database settings come from a properties file; HTTP settings live in
//! [`crate::http_server::HttpServerConfig`] and are driven by CLI flags.

pub mod database;
pub mod errors;
pub mod properties;

pub use database::DbConfig;
pub use errors::{ConfigError, ConfigResult};
pub use properties::Properties;

/// Default location of the database properties file
pub const DEFAULT_DB_CONFIG_PATH: &str = "conf/db.properties";
