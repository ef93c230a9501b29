//! Response models for the PokeAPI endpoints this client consumes
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing PokeAPI response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    LocationAreaDetail, LocationAreaPage, NamedResource, PokemonDetail, PokemonEncounter,
    PokemonStat, PokemonTypeSlot,
};
