//! # os-names
//!
//! Client for the UK Ordnance Survey [Names API], a gazetteer of
//! authoritative place names, roads and postcodes for Great Britain.
//!
//! The `/find` operation matches a free-text query and serves results in
//! offset-bounded pages; [`NamesClient`] fetches single pages and
//! [`fetch_all`] aggregates every page into one ordered list. Entries are
//! opaque JSON records passed through verbatim.
//!
//! [Names API]: https://osdatahub.os.uk/docs/names/overview
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use os_names::{ApiKey, NamesClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = NamesClient::new(ApiKey::from_env()?);
//!
//!     let places = client.find_all("Glasgow").await?;
//!     println!("{} entries", places.len());
//!     if let Some(first) = places.first() {
//!         println!("{first:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// API key handling
pub mod auth;

/// HTTP transport with a fixed timeout
pub mod http;

/// Place-name lookup and offset pagination
pub mod find;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::ApiKey;
pub use error::{Error, Result};
pub use find::{
    fetch_all, NamesClient, NamesClientBuilder, PageFetcher, PageRequest, PageResult,
    DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE,
};
pub use types::{GazetteerEntry, JsonObject, JsonValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
