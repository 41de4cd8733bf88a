//! CLI module for custdb
//!
//! Provides command-line interface for:
//! - serve: Load the data file and serve the HTTP API
//! - list: One-shot filtered, paginated listing
//! - get: One-shot single-record lookup
//! - cities: One-shot city aggregation

mod args;
mod commands;
mod config;
mod errors;
mod io;

use tracing_subscriber::EnvFilter;

pub use args::{Cli, Command, ListArgs};
pub use commands::{cities, get, list, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};

/// Install logging, parse arguments, and run the selected command
pub fn run() -> CliResult<()> {
    init_logging();
    commands::run()
}

/// Log to stderr at `info` unless `RUST_LOG` says otherwise
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
