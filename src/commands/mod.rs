//! Commands Module
//!
//! The REPL's command set: the dispatch table plus one handler per command.
//!
//! # Commands
//! - `help` - usage summary
//! - `exit` - leave the Pokedex
//! - `map` / `nmap` - page forward/backward through location areas
//! - `explore <area>` - list pokemon encountered in an area
//! - `catch <pokemon>` - attempt a catch
//! - `inspect <pokemon>` - stats of a caught pokemon
//! - `pokedex` - list caught pokemon

pub mod handlers;
pub mod registry;

pub use handlers::{AppState, Pokedex, ReplAction};
pub use registry::{command_registry, CliCommand, CommandCallback, CommandFuture};
