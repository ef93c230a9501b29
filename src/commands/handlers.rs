//! Command Handlers
//!
//! One handler per REPL command, plus the state they share. Handlers print
//! their results directly; that output is the product of this program, so it
//! goes to stdout rather than the log.

use rand::Rng;
use tracing::info;

use crate::api::ApiClient;
use crate::commands::registry::{command_registry, CommandFuture};

// == Repl Action ==
/// What the REPL loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplAction {
    /// Keep reading input
    Continue,
    /// Leave the loop and shut down
    Quit,
}

// == Pokedex ==
/// The caught pokemon, in catch order.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: Vec<String>,
}

impl Pokedex {
    /// Creates an empty pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch. Catching the same pokemon twice keeps one record.
    pub fn record(&mut self, name: &str) {
        if !self.contains(name) {
            self.caught.push(name.to_string());
        }
    }

    /// Whether `name` has been caught.
    pub fn contains(&self, name: &str) -> bool {
        self.caught.iter().any(|n| n == name)
    }

    /// Caught pokemon in catch order.
    pub fn names(&self) -> &[String] {
        &self.caught
    }

    /// True when nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}

// == App State ==
/// State shared by every command: the API client (which owns the cache),
/// the pagination cursors, and the player's pokedex.
#[derive(Debug)]
pub struct AppState {
    /// PokeAPI client with cache read-through
    pub client: ApiClient,
    /// URL of the next location page; None once the listing is exhausted
    pub next_url: Option<String>,
    /// URL of the previous location page; None on the first page
    pub prev_url: Option<String>,
    /// Caught pokemon
    pub pokedex: Pokedex,
}

impl AppState {
    /// Creates the initial state: pagination starts at the first page.
    pub fn new(client: ApiClient) -> Self {
        let next_url = Some(client.first_page_url());
        Self {
            client,
            next_url,
            prev_url: None,
            pokedex: Pokedex::new(),
        }
    }
}

// == Handlers ==

/// Handler for `help`.
pub fn cmd_help<'a>(_state: &'a mut AppState, _arg: &'a str) -> CommandFuture<'a> {
    Box::pin(async move {
        println!("Welcome to the Pokedex!");
        println!();
        println!("Usage:");
        println!();
        let mut commands: Vec<_> = command_registry().into_values().collect();
        commands.sort_by_key(|cmd| cmd.name);
        for cmd in commands {
            println!("{:<8} {}", format!("{}:", cmd.name), cmd.description);
        }
        println!();
        Ok(ReplAction::Continue)
    })
}

/// Handler for `exit`.
pub fn cmd_exit<'a>(_state: &'a mut AppState, _arg: &'a str) -> CommandFuture<'a> {
    Box::pin(async move {
        println!("Closing the Pokedex... Goodbye!");
        Ok(ReplAction::Quit)
    })
}

/// Handler for `map`: prints the next page of location areas and advances
/// the pagination cursors.
pub fn cmd_map<'a>(state: &'a mut AppState, _arg: &'a str) -> CommandFuture<'a> {
    Box::pin(async move {
        let Some(url) = state.next_url.clone() else {
            println!("You're on the last page");
            return Ok(ReplAction::Continue);
        };

        let page = state.client.location_page(Some(&url)).await?;
        state.next_url = page.next.clone();
        state.prev_url = page.previous.clone();

        println!();
        for location in &page.results {
            println!("{}", location.name);
        }
        Ok(ReplAction::Continue)
    })
}

/// Handler for `nmap`: prints the previous page of location areas.
pub fn cmd_nmap<'a>(state: &'a mut AppState, _arg: &'a str) -> CommandFuture<'a> {
    Box::pin(async move {
        let Some(url) = state.prev_url.clone() else {
            println!("At the beginning, no previous maps...");
            return Ok(ReplAction::Continue);
        };

        let page = state.client.location_page(Some(&url)).await?;
        state.next_url = page.next.clone();
        state.prev_url = page.previous.clone();

        println!();
        for location in &page.results {
            println!("{}", location.name);
        }
        Ok(ReplAction::Continue)
    })
}

/// Handler for `explore <area>`: lists the pokemon encountered in an area.
pub fn cmd_explore<'a>(state: &'a mut AppState, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(async move {
        if arg.is_empty() {
            println!("Usage: explore <area>");
            return Ok(ReplAction::Continue);
        }

        let detail = state.client.location_area(arg).await?;

        println!();
        for encounter in &detail.pokemon_encounters {
            println!("{}", encounter.pokemon.name);
        }
        Ok(ReplAction::Continue)
    })
}

/// Handler for `catch <pokemon>`: rolls against the pokemon's base
/// experience and records a success in the pokedex.
pub fn cmd_catch<'a>(state: &'a mut AppState, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(async move {
        if arg.is_empty() {
            println!("Usage: catch <pokemon>");
            return Ok(ReplAction::Continue);
        }

        println!("Throwing a Pokeball at {arg}...");
        let pokemon = state.client.pokemon(arg).await?;

        // base_experience is null for a few pokemon; treat those as trivial
        // to catch rather than refusing the attempt
        let threshold = pokemon.base_experience.unwrap_or(1).max(1);
        let roll = rand::rng().random_range(0..=threshold * 2);

        if roll > threshold {
            println!("{} was caught!", pokemon.name);
            println!("You may now inspect it with the inspect command.");
            state.pokedex.record(&pokemon.name);
            info!("Caught {} (roll {} > {})", pokemon.name, roll, threshold);
        } else {
            println!("{} escaped!", pokemon.name);
        }
        Ok(ReplAction::Continue)
    })
}

/// Handler for `inspect <pokemon>`: prints the stats of a caught pokemon.
pub fn cmd_inspect<'a>(state: &'a mut AppState, arg: &'a str) -> CommandFuture<'a> {
    Box::pin(async move {
        if arg.is_empty() {
            println!("Usage: inspect <pokemon>");
            return Ok(ReplAction::Continue);
        }

        if !state.pokedex.contains(arg) {
            println!("You have not caught that pokemon");
            return Ok(ReplAction::Continue);
        }

        let pokemon = state.client.pokemon(arg).await?;

        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Stats:");
        for stat in &pokemon.stats {
            println!("  -{}: {}", stat.stat.name, stat.base_stat);
        }
        println!("Types:");
        for slot in &pokemon.types {
            println!("  - {}", slot.kind.name);
        }
        Ok(ReplAction::Continue)
    })
}

/// Handler for `pokedex`: lists everything caught so far.
pub fn cmd_pokedex<'a>(state: &'a mut AppState, _arg: &'a str) -> CommandFuture<'a> {
    Box::pin(async move {
        if state.pokedex.is_empty() {
            println!("Your Pokedex is empty...");
            return Ok(ReplAction::Continue);
        }

        println!("Your Pokemon:");
        for name in state.pokedex.names() {
            println!("  - {name}");
        }
        Ok(ReplAction::Continue)
    })
}
