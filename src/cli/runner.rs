//! CLI runner - executes commands

use crate::auth::ApiKey;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::Result;
use crate::find::NamesClient;
use crate::types::GazetteerEntry;
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Find {
                query,
                page_size,
                format,
            } => self.find(query, *page_size, *format).await,
            Commands::Count { query } => self.count(query).await,
        }
    }

    async fn find(&self, query: &str, page_size: u32, format: OutputFormat) -> Result<()> {
        let client = self.client(page_size)?;
        let entries = client.find_all(query).await?;

        match format {
            OutputFormat::Json => print_jsonl(&entries),
            OutputFormat::Pretty => print_summary(query, &entries),
        }
    }

    async fn count(&self, query: &str) -> Result<()> {
        let client = self.client(1)?;
        let total = client.total_results(query).await?;
        println!("{total}");
        Ok(())
    }

    /// Build a client from the global flags
    fn client(&self, page_size: u32) -> Result<NamesClient> {
        let api_key = match &self.cli.key {
            Some(key) => ApiKey::new(key),
            None => ApiKey::from_env()?,
        };

        let mut builder = NamesClient::builder(api_key)
            .page_size(page_size)
            .timeout(Duration::from_secs(self.cli.timeout));
        if let Some(base_url) = &self.cli.base_url {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }
}

fn print_jsonl(entries: &[GazetteerEntry]) -> Result<()> {
    for entry in entries {
        println!("{}", serde_json::to_string(entry)?);
    }
    Ok(())
}

fn print_summary(query: &str, entries: &[GazetteerEntry]) -> Result<()> {
    println!("{} entries for {query:?}", entries.len());
    if let Some(first) = entries.first() {
        println!("{}", serde_json::to_string_pretty(first)?);
    }
    Ok(())
}
