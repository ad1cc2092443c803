//! CLI argument definitions using clap
//!
//! Commands:
//! - docgate serve --config <path>
//! - docgate ping --config <path>

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_DB_CONFIG_PATH;
use crate::http_server::HttpServerConfig;

/// docgate - REST gateway over document database collections
#[derive(Parser, Debug)]
#[command(name = "docgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to the database and serve HTTP
    Serve(ServeArgs),

    /// Check that the database is reachable, then exit
    Ping {
        /// Path to database properties file
        #[arg(long, default_value = DEFAULT_DB_CONFIG_PATH)]
        config: PathBuf,

        /// Collection to sample after connecting
        #[arg(long, default_value = "products")]
        collection: String,

        #[command(flatten)]
        log: LogArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Path to database properties file
    #[arg(long, default_value = DEFAULT_DB_CONFIG_PATH)]
    pub config: PathBuf,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind to
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Directory served under /images
    #[arg(long, default_value = "images")]
    pub images: PathBuf,

    /// Allowed CORS origin; repeat for several. Any origin when omitted.
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,

    /// Serve from a process-local store instead of MongoDB
    #[arg(long)]
    pub in_memory: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

impl ServeArgs {
    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            images_dir: self.images.clone(),
            cors_origins: self.cors_origins.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Log level or filter directive; RUST_LOG wins when set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
