//! API key handling
//!
//! The Names API authenticates every request with a `key` query parameter
//! issued by the OS Data Hub. The key is an explicit value handed to the
//! client at construction time; nothing in this crate reads process-global
//! state behind the caller's back.

use crate::error::{Error, Result};
use std::fmt;

/// Environment variable the key is read from by [`ApiKey::from_env`]
pub const API_KEY_ENV: &str = "OS_NAMES_API_KEY";

/// Query parameter name the key is sent as
pub(crate) const API_KEY_PARAM: &str = "key";

/// An OS Data Hub project API key.
///
/// `Debug` output is redacted so keys don't leak into logs.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap an explicit key value
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from the `OS_NAMES_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(Self(key)),
            _ => Err(Error::MissingApiKey {
                env_var: API_KEY_ENV,
            }),
        }
    }

    /// The raw key value, for placing into a request
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}
