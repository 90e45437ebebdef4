//! REPL Module
//!
//! The interactive read-eval-print loop: reads a line from stdin,
//! normalizes it, dispatches the first word to a command handler, and
//! prints any command error without leaving the loop.

pub mod commands;

use std::collections::HashMap;
use std::io::{self, Write};
use std::ops::ControlFlow;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::client::PokeApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::Pokemon;

// == Command Registry ==
/// A registered command: its name, usage line, and help description.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command the REPL understands, in help display order.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    Command {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    Command {
        name: "map",
        usage: "map",
        description: "Display the next 20 locations",
    },
    Command {
        name: "mapb",
        usage: "mapb",
        description: "Display the previous 20 locations",
    },
    Command {
        name: "explore",
        usage: "explore <location>",
        description: "Display pokemon at explored location",
    },
    Command {
        name: "catch",
        usage: "catch <name>",
        description: "Attempt to catch the named pokemon",
    },
    Command {
        name: "inspect",
        usage: "inspect <name>",
        description: "Display information about a captured pokemon",
    },
    Command {
        name: "pokedex",
        usage: "pokedex",
        description: "Display the names of all captured pokemon",
    },
];

/// Returns the names of all registered commands.
pub fn command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|command| command.name).collect()
}

// == Pagination ==
/// Cursors into the location-area listing.
///
/// `next` starts at the first page; `previous` is empty until the first
/// page has been fetched.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub next: Option<String>,
    pub previous: Option<String>,
}

// == Session ==
/// Everything a REPL session owns: the API client (and through it the
/// response cache), the paging cursors, and the caught Pokemon.
#[derive(Debug)]
pub struct Session {
    pub client: PokeApiClient,
    pub pokedex: HashMap<String, Pokemon>,
    pub pagination: Pagination,
}

impl Session {
    /// Creates a session over an existing client, cursored at the first
    /// location page.
    pub fn new(client: PokeApiClient) -> Self {
        let first_page = client.first_location_page();
        Self {
            client,
            pokedex: HashMap::new(),
            pagination: Pagination {
                next: Some(first_page),
                previous: None,
            },
        }
    }

    /// Creates a session from configuration, including a fresh cache.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_config(config: &Config) -> Self {
        Self::new(PokeApiClient::from_config(config))
    }
}

// == Input Normalization ==
/// Lowercases the input and splits it into whitespace-separated words.
pub fn clean_input(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

// == Dispatch ==
/// Routes one normalized input line to its command handler.
///
/// Returns `Break` when the session should end, `Continue` otherwise.
/// Unknown commands are reported on stdout and are not errors.
pub async fn dispatch(session: &mut Session, input: &[String]) -> Result<ControlFlow<()>> {
    let Some((command, args)) = input.split_first() else {
        return Ok(ControlFlow::Continue(()));
    };
    match command.as_str() {
        "help" => commands::help(),
        "exit" => {
            commands::exit();
            return Ok(ControlFlow::Break(()));
        }
        "map" => commands::map(session).await?,
        "mapb" => commands::map_back(session).await?,
        "explore" => commands::explore(session, args).await?,
        "catch" => commands::catch(session, args).await?,
        "inspect" => commands::inspect(session, args)?,
        "pokedex" => commands::pokedex(session),
        _ => println!("Unknown command"),
    }
    Ok(ControlFlow::Continue(()))
}

// == Run Loop ==
/// Runs the REPL until `exit`, end of stdin, or Ctrl-C.
///
/// Command failures are printed and the loop continues; only I/O failures
/// on stdin/stdout end the loop with an error.
pub async fn run(session: &mut Session) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Pokedex > ");
        io::stdout().flush()?;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!();
                info!("interrupt received, closing the Pokedex");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    break;
                };

                let input = clean_input(&line);
                if input.is_empty() {
                    continue;
                }

                match dispatch(session, &input).await {
                    Ok(ControlFlow::Break(())) => break,
                    Ok(ControlFlow::Continue(())) => {}
                    Err(err) => println!("Error: {err}"),
                }
            }
        }
    }

    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_trims_and_splits() {
        let cases = [
            ("  hello  world  ", vec!["hello", "world"]),
            ("testing......    ", vec!["testing......"]),
            ("Charmander BULBASAUR", vec!["charmander", "bulbasaur"]),
            ("", Vec::new()),
            ("   ", Vec::new()),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_command_names_unique_and_present() {
        let names = command_names();

        let mut sorted = names.clone();
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            assert_ne!(pair[0], pair[1], "duplicate command name: {}", pair[0]);
        }

        for expected in [
            "help", "exit", "map", "mapb", "explore", "catch", "inspect", "pokedex",
        ] {
            assert!(names.contains(&expected), "missing command `{expected}`");
        }
    }

    #[tokio::test]
    async fn test_dispatch_unknown_command_continues() {
        let mut session = Session::from_config(&Config {
            cache_ttl_secs: 60,
            base_url: "http://localhost:9".to_string(),
        });

        let input = clean_input("blastoise");
        let flow = dispatch(&mut session, &input).await.unwrap();
        assert_eq!(flow, ControlFlow::Continue(()));
    }

    #[tokio::test]
    async fn test_dispatch_exit_breaks() {
        let mut session = Session::from_config(&Config {
            cache_ttl_secs: 60,
            base_url: "http://localhost:9".to_string(),
        });

        let input = clean_input("exit");
        let flow = dispatch(&mut session, &input).await.unwrap();
        assert_eq!(flow, ControlFlow::Break(()));
    }

    #[test]
    fn test_session_starts_at_first_page() {
        // Session construction spawns the cache sweep task.
        let rt = tokio::runtime::Runtime::new().unwrap();
        let _guard = rt.enter();

        let session = Session::from_config(&Config::default());
        assert_eq!(
            session.pagination.next.as_deref(),
            Some("https://pokeapi.co/api/v2/location-area")
        );
        assert!(session.pagination.previous.is_none());
        assert!(session.pokedex.is_empty());
    }
}
