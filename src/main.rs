//! Pokedex CLI - An interactive PokeAPI client
//!
//! Provides a Pokedex REPL over PokeAPI with an expiring in-memory cache.

mod api;
mod cache;
mod commands;
mod config;
mod error;
mod models;
mod repl;
mod tasks;

use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::ApiClient;
use cache::Cache;
use commands::{command_registry, AppState};
use config::Config;

/// Main entry point for the Pokedex CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the expiring cache, which starts the background reaper
/// 4. Create the PokeAPI client on top of the cache
/// 5. Build the command dispatch table
/// 6. Run the REPL until `exit` or end of input
/// 7. Shut the reaper down and leave
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Pokedex CLI");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, reap_interval={}s, base_url={}",
        config.cache_ttl_secs, config.reap_interval_secs, config.api_base_url
    );

    // Create the cache; construction spawns the reaper task
    let cache = Cache::with_reap_interval(
        Duration::from_secs(config.cache_ttl_secs),
        Duration::from_secs(config.reap_interval_secs),
    );
    info!("Cache initialized, background reaper started");

    // Create the API client on top of the cache
    let client = ApiClient::new(&config, cache.clone()).context("failed to build HTTP client")?;

    // Build the dispatch table and run the REPL
    let commands = command_registry();
    let mut state = AppState::new(client);
    repl::run(&mut state, &commands)
        .await
        .context("REPL terminated abnormally")?;

    // Stop the background reaper before leaving
    cache.shutdown();
    info!("Reaper stopped, shutdown complete");

    Ok(())
}
