//! Pokedex CLI - An interactive PokeAPI client
//!
//! Provides a Pokedex REPL over PokeAPI with an expiring in-memory cache.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::ApiClient;
pub use cache::Cache;
pub use commands::{command_registry, AppState};
pub use config::Config;
pub use error::{PokedexError, Result};
