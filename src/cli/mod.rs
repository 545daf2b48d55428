//! Command-line interface
//!
//! # Commands
//!
//! - `find` - Fetch and print every entry matching a query
//! - `count` - Print the server's total match count for a query

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
