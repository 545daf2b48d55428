//! Error types for the Names API client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for this crate
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// No API key was supplied and none was found in the environment
    #[error("Missing API key: set {env_var} or pass a key explicitly")]
    MissingApiKey {
        /// Environment variable that was consulted
        env_var: &'static str,
    },

    /// The server answered outside the success range
    #[error("HTTP {status} from {url}: {body}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Response body, as returned by the server
        body: String,
        /// Full request URL, query string included
        url: String,
    },

    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured URL did not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
            url: url.into(),
        }
    }

    /// Whether this is a rejected fetch: the server answered, but with a
    /// non-success status code.
    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::HttpStatus { .. })
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
