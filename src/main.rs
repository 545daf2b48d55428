//! os-names CLI
//!
//! Queries the Ordnance Survey Names API from the command line.

use clap::Parser;
use os_names::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        // A rejected fetch keeps its distinguished exit status; anything
        // else is a generic failure.
        let code = if e.is_http_status() { 2 } else { 1 };
        std::process::exit(code);
    }
}
