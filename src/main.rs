//! docgate CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Any error is fatal:
//! it is printed to stderr and the process exits non-zero.

use docgate::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
