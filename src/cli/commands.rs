//! CLI command implementations
//!
//! Boot order for `serve`: logging, runtime, store connection (verified with
//! a ping), then the listener. A store that cannot be reached stops the
//! process before any port is bound.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::config::DbConfig;
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::{DocumentStore, MemoryStore, MongoStore, SharedStore};

use super::args::{Cli, Command, LogArgs, ServeArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(args),
        Command::Ping {
            config,
            collection,
            log,
        } => ping(&config, &collection, &log),
    }
}

/// Connect to the store and serve HTTP until shutdown
pub fn serve(args: ServeArgs) -> CliResult<()> {
    setup_logging(&args.log)?;

    let rt = runtime()?;
    rt.block_on(async {
        let store: SharedStore = if args.in_memory {
            info!("Using in-memory store");
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(connect(&args.config).await?)
        };

        let server = HttpServer::new(args.http_config(), store);
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Connect, ping and report the size of one collection
pub fn ping(config_path: &Path, collection: &str, log: &LogArgs) -> CliResult<()> {
    setup_logging(log)?;

    let rt = runtime()?;
    rt.block_on(async {
        let store = connect(config_path).await?;
        let documents = store.find_all(collection).await?;
        info!(
            database = %store.database_name(),
            collection = %collection,
            documents = documents.len(),
            "Database reachable"
        );
        println!(
            "{}.{}: {} documents",
            store.database_name(),
            collection,
            documents.len()
        );
        Ok(())
    })
}

/// Load the database config, build the client and verify it answers
async fn connect(config_path: &Path) -> CliResult<MongoStore> {
    let db = DbConfig::load(config_path)?;
    info!(
        config = %config_path.display(),
        uri = %db.redacted_uri(),
        database = %db.name,
        "Connecting to MongoDB"
    );

    let store = MongoStore::connect(&db.connection_uri(), &db.name).await?;
    store.ping().await?;

    info!(database = %db.name, "Connected to MongoDB");
    Ok(store)
}

fn setup_logging(log: &LogArgs) -> CliResult<()> {
    init_logging(&log.log_level, log.log_json)
        .map_err(|e| CliError::boot_failed(format!("Failed to initialise logging: {}", e)))
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}
