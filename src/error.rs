//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror.
//!
//! A cache miss is deliberately not represented here: "not in the cache" is
//! a routine outcome modeled as `Option::None` on the cache itself, and the
//! caller's job is to fetch from PokeAPI and re-add.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex CLI.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// HTTP transport failure (connection, timeout, TLS)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    ApiStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The API answered 200 but the body did not match the expected shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading from the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
