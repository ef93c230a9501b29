//! PokeAPI HTTP client
//!
//! Fetches location pages, area details, and pokemon from PokeAPI, going
//! through the expiring cache so that a page revisited within the TTL costs
//! no network round-trip. The cache stores the raw response bytes keyed by
//! full URL; decoding happens after the cache, so hits and misses go through
//! the same parsing path.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, PokemonDetail};

/// Client for the PokeAPI REST service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Cache,
}

impl ApiClient {
    /// Creates a client from configuration, backed by the given cache.
    pub fn new(config: &Config, cache: Cache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    /// URL of the first location-area page.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// The cache backing this client.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == Raw fetch ==
    /// Returns the response body for `url`, from the cache when possible.
    ///
    /// On a miss the body is fetched, stored under the full URL, and
    /// returned. The cache lock is never held across the HTTP call.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(hit) = self.cache.get(url).await {
            debug!("Cache hit for {}", url);
            return Ok(hit);
        }

        debug!("Cache miss for {}, fetching", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::ApiStatus {
                status,
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?.to_vec();
        self.cache.add(url, bytes.clone()).await;
        Ok(bytes)
    }

    fn decode<T: DeserializeOwned>(url: &str, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }

    // == Typed fetchers ==
    /// Fetches one page of the location-area listing.
    ///
    /// `url` is a pagination cursor from a previous page; `None` starts at
    /// the first page.
    pub async fn location_page(&self, url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match url {
            Some(u) => u.to_string(),
            None => self.first_page_url(),
        };
        let bytes = self.fetch_bytes(&url).await?;
        Self::decode(&url, &bytes)
    }

    /// Fetches the details of a single location area.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        let bytes = self.fetch_bytes(&url).await?;
        Self::decode(&url, &bytes)
    }

    /// Fetches the details of a single pokemon.
    pub async fn pokemon(&self, name: &str) -> Result<PokemonDetail> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let bytes = self.fetch_bytes(&url).await?;
        Self::decode(&url, &bytes)
    }
}
