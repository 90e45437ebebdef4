//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache time-to-live in seconds; also the sweep cadence
    pub cache_ttl_secs: u64,
    /// Base URL of the PokeAPI, overridable for tests
    pub base_url: String,
}

/// Default cache time-to-live: five minutes.
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Public PokeAPI root.
const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Cache time-to-live in seconds (default: 300)
    /// - `POKEAPI_BASE_URL` - API root (default: `https://pokeapi.co/api/v2`)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Returns the cache time-to-live as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
