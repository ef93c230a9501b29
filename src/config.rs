//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache entry time-to-live in seconds
    pub cache_ttl_secs: u64,
    /// Background reaper sweep interval in seconds
    pub reap_interval_secs: u64,
    /// Base URL of the PokeAPI service
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,
}

/// Default PokeAPI endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache entry TTL in seconds (default: 10)
    /// - `POKEDEX_REAP_INTERVAL_SECS` - Reaper sweep interval in seconds (default: 10)
    /// - `POKEDEX_API_BASE_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - HTTP timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("POKEDEX_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            reap_interval_secs: env::var("POKEDEX_REAP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            api_base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            http_timeout_secs: env::var("POKEDEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 10,
            reap_interval_secs: 10,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl_secs, 10);
        assert_eq!(config.reap_interval_secs, 10);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("POKEDEX_CACHE_TTL_SECS");
        env::remove_var("POKEDEX_REAP_INTERVAL_SECS");
        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_HTTP_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl_secs, 10);
        assert_eq!(config.reap_interval_secs, 10);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.http_timeout_secs, 30);
    }
}
