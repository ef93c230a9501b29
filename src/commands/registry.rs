//! Command Registry
//!
//! Builds the dispatch table the REPL loop runs on. The table is constructed
//! once at startup and passed by reference into the loop; there is no global
//! mutable command state.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::commands::handlers::{self, AppState, ReplAction};
use crate::error::Result;

/// The future a command handler returns; borrows the state for its duration.
pub type CommandFuture<'a> = Pin<Box<dyn Future<Output = Result<ReplAction>> + Send + 'a>>;

/// An async command handler over the shared REPL state and one argument.
pub type CommandCallback = for<'a> fn(&'a mut AppState, &'a str) -> CommandFuture<'a>;

/// One entry of the dispatch table.
pub struct CliCommand {
    /// The word the user types
    pub name: &'static str,
    /// One-line description shown by `help`
    pub description: &'static str,
    /// The handler to run
    pub callback: CommandCallback,
}

/// Creates the dispatch table with all commands configured.
pub fn command_registry() -> HashMap<&'static str, CliCommand> {
    let commands = [
        CliCommand {
            name: "help",
            description: "Displays a help message",
            callback: handlers::cmd_help,
        },
        CliCommand {
            name: "exit",
            description: "Exit the Pokedex",
            callback: handlers::cmd_exit,
        },
        CliCommand {
            name: "map",
            description: "Show the next 20 locations",
            callback: handlers::cmd_map,
        },
        CliCommand {
            name: "nmap",
            description: "Show the previous 20 locations",
            callback: handlers::cmd_nmap,
        },
        CliCommand {
            name: "explore",
            description: "List all Pokemon in this area",
            callback: handlers::cmd_explore,
        },
        CliCommand {
            name: "catch",
            description: "Attempt to catch a Pokemon",
            callback: handlers::cmd_catch,
        },
        CliCommand {
            name: "inspect",
            description: "Get the stats of a caught Pokemon",
            callback: handlers::cmd_inspect,
        },
        CliCommand {
            name: "pokedex",
            description: "List all caught Pokemon",
            callback: handlers::cmd_pokedex,
        },
    ];

    commands.into_iter().map(|cmd| (cmd.name, cmd)).collect()
}
