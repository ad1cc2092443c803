//! CLI module for docgate
//!
//! Provides command-line interface for:
//! - serve: Connect to the database and serve HTTP
//! - ping: Verify database connectivity and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, LogArgs, ServeArgs};
pub use commands::{ping, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
