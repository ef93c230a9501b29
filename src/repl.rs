//! REPL Module
//!
//! The interactive prompt: read a line, tokenize it, dispatch the first word
//! against the command table, repeat. The loop owns no command logic and no
//! cache access; commands reach the cache through the API client.

use std::collections::HashMap;
use std::io::Write;

use tokio::io::AsyncBufReadExt;
use tracing::debug;

use crate::commands::{AppState, CliCommand, ReplAction};
use crate::error::Result;

/// Splits raw input into words: leading/trailing whitespace is dropped and
/// any run of whitespace separates tokens.
pub fn clean_input(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Runs the REPL until `exit` or end of input.
///
/// The first word of each line selects a command from `commands`; the second
/// word, if any, is passed as the argument. Unknown commands and command
/// errors are reported and the loop keeps going.
pub async fn run(
    state: &mut AppState,
    commands: &HashMap<&'static str, CliCommand>,
) -> Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("Pokedex > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // End of input quits like `exit`
            println!();
            break;
        };

        let words = clean_input(&line);
        let Some(&name) = words.first() else {
            continue;
        };
        let arg = words.get(1).copied().unwrap_or("");

        match commands.get(name) {
            Some(cmd) => {
                debug!("Dispatching command {}", cmd.name);
                match (cmd.callback)(state, arg).await {
                    Ok(ReplAction::Continue) => {}
                    Ok(ReplAction::Quit) => break,
                    Err(err) => println!("error executing command {}: {}", cmd.name, err),
                }
            }
            None => println!("Unknown command"),
        }
    }

    Ok(())
}
