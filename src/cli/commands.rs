//! CLI command implementations
//!
//! Every command loads the configuration and the data file first. `serve`
//! then hands the store to the HTTP server; the one-shot commands run a
//! single operation and print its JSON result.

use std::path::Path;
use std::sync::Arc;

use crate::http_server::{HttpServer, ListParams};
use crate::query::{ListQuery, QueryEngine};
use crate::store::RecordStore;

use super::args::{Command, ListArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::List { config, query } => list(&config, query),
        Command::Get { config, id } => get(&config, &id),
        Command::Cities { config } => cities(&config),
    }
}

/// Load config and the record store it points to
fn boot(config_path: &Path) -> CliResult<(Config, RecordStore)> {
    let config = Config::load(config_path)?;
    let store = RecordStore::load(&config.data_file)?;
    Ok((config, store))
}

/// Serve the HTTP API until interrupted
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let (mut config, store) = boot(config_path)?;

    // CLI port overrides config
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    let server = HttpServer::with_config(config.server, Arc::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::io_error(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Print one page of customers
pub fn list(config_path: &Path, args: ListArgs) -> CliResult<()> {
    let (_config, store) = boot(config_path)?;
    let query = list_query(args);
    write_json(&QueryEngine::new(&store).list(&query))
}

/// Print a single customer
pub fn get(config_path: &Path, id: &str) -> CliResult<()> {
    let (_config, store) = boot(config_path)?;
    let customer = store.find(id).ok_or_else(CliError::not_found)?;
    write_json(&customer)
}

/// Print the customer count per city
pub fn cities(config_path: &Path) -> CliResult<()> {
    let (_config, store) = boot(config_path)?;
    write_json(&QueryEngine::new(&store).count_by_city())
}

/// Build an engine query the same way the HTTP listing does
fn list_query(args: ListArgs) -> ListQuery {
    ListParams {
        first_name: args.first_name,
        last_name: args.last_name,
        city: args.city,
        page: args.page,
        limit: args.limit,
    }
    .into_query()
}
