//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Query the Ordnance Survey Names API
#[derive(Parser, Debug)]
#[command(name = "os-names")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (falls back to the OS_NAMES_API_KEY environment variable)
    #[arg(short, long, global = true, env = "OS_NAMES_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Override the API endpoint
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout: u64,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every entry matching a query
    Find {
        /// Free-text place-name query
        query: String,

        /// Entries requested per page
        #[arg(long, default_value = "100")]
        page_size: u32,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Print the server's total match count for a query
    Count {
        /// Free-text place-name query
        query: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Entry count followed by the first entry
    Pretty,
    /// One JSON entry per line
    Json,
}
