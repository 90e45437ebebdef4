//! PokeAPI Client
//!
//! Read-through HTTP client for the PokeAPI: every fetch consults the
//! response cache first and memoizes fresh bodies on a miss. The cache
//! only ever sees raw response bytes; deserialization happens on the way
//! out, for cached and fresh bodies alike.

use tracing::{debug, trace};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationPage, Pokemon};

// == PokeAPI Client ==
/// HTTP client for the PokeAPI with response memoization.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    /// Underlying HTTP client, connection-pooled by reqwest
    http: reqwest::Client,
    /// Response cache keyed by request URL
    cache: Cache,
    /// API root, no trailing slash
    base_url: String,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client over an existing cache handle.
    pub fn new(cache: Cache, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            cache,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from configuration, owning a fresh cache.
    ///
    /// Must be called from within a tokio runtime, since constructing the
    /// cache starts its sweep task.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Cache::new(config.cache_ttl()), &config.base_url)
    }

    // == Accessors ==
    /// Returns the URL of the first page of the location-area listing.
    pub fn first_location_page(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// Returns the response cache handle.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == Fetch ==
    /// Returns the body at `url`, from the cache when possible.
    ///
    /// On a miss the body is fetched, rejected if the status is above 299,
    /// and memoized before being returned.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            trace!(url, "cache hit");
            return Ok(body);
        }
        debug!(url, "cache miss, fetching");

        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        if status > 299 {
            return Err(PokedexError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        self.cache.put(url, body.to_vec()).await;
        Ok(body.to_vec())
    }

    // == Location Page ==
    /// Fetches one page of the location-area listing.
    ///
    /// Takes the full page URL so the pagination cursors returned by the
    /// API can be followed directly.
    pub async fn location_page(&self, url: &str) -> Result<LocationPage> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Location Area ==
    /// Fetches the encounters at a named location area.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        let body = self.fetch(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Pokemon ==
    /// Fetches a Pokemon's record by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let body = self.fetch(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
