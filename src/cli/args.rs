//! CLI argument definitions using clap
//!
//! Commands:
//! - custdb serve --config <path> [--port <n>]
//! - custdb list --config <path> [filters] [--page <n> --limit <n>]
//! - custdb get --config <path> <id>
//! - custdb cities --config <path>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// custdb - An in-memory customer record query service
#[derive(Parser, Debug)]
#[command(name = "custdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the data file and serve the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./custdb.json")]
        config: PathBuf,

        /// Port to listen on (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List customers once and exit
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./custdb.json")]
        config: PathBuf,

        #[command(flatten)]
        query: ListArgs,
    },

    /// Print a single customer and exit
    Get {
        /// Path to configuration file
        #[arg(long, default_value = "./custdb.json")]
        config: PathBuf,

        /// Customer id
        id: String,
    },

    /// Print the customer count per city and exit
    Cities {
        /// Path to configuration file
        #[arg(long, default_value = "./custdb.json")]
        config: PathBuf,
    },
}

/// Filter and page options for `list`
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Case-insensitive first name fragment
    #[arg(long)]
    pub first_name: Option<String>,

    /// Case-insensitive last name fragment
    #[arg(long)]
    pub last_name: Option<String>,

    /// Case-insensitive city fragment
    #[arg(long)]
    pub city: Option<String>,

    /// 1-based page number
    #[arg(long)]
    pub page: Option<String>,

    /// Page size
    #[arg(long)]
    pub limit: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
