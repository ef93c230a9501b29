//! API Module
//!
//! HTTP client for the PokeAPI REST service, with cache read-through.
//!
//! # Endpoints consumed
//! - `GET /location-area/` - paginated location listing
//! - `GET /location-area/{name}` - pokemon encounters in an area
//! - `GET /pokemon/{name}` - pokemon details

pub mod client;

pub use client::ApiClient;
