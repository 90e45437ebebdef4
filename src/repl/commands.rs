//! REPL Commands
//!
//! Handler functions for each Pokedex command. Handlers print their
//! user-facing output to stdout and report failures through the shared
//! error type; the REPL loop decides what to do with either.

use rand::{rng, Rng};

use crate::error::{PokedexError, Result};
use crate::repl::{Session, COMMANDS};

// == Help ==
/// Prints usage for every registered command.
pub fn help() {
    println!("Welcome to the Pokedex!");
    println!("Usage:");
    println!();
    for command in COMMANDS {
        println!("{}: {}", command.usage, command.description);
    }
}

// == Exit ==
/// Prints the goodbye line; the loop itself breaks afterwards.
pub fn exit() {
    println!("Closing the Pokedex... Goodbye!");
}

// == Map ==
/// Fetches and prints the next page of location areas.
pub async fn map(session: &mut Session) -> Result<()> {
    let url = session
        .pagination
        .next
        .clone()
        .ok_or(PokedexError::NoNextPage)?;
    page(session, &url).await
}

// == Map Back ==
/// Fetches and prints the previous page of location areas.
pub async fn map_back(session: &mut Session) -> Result<()> {
    let url = session
        .pagination
        .previous
        .clone()
        .ok_or(PokedexError::NoPreviousPage)?;
    page(session, &url).await
}

/// Shared paging path: fetch a page, advance both cursors, list names.
async fn page(session: &mut Session, url: &str) -> Result<()> {
    let page = session.client.location_page(url).await?;

    session.pagination.next = page.next;
    session.pagination.previous = page.previous;

    for location in &page.results {
        println!("{}", location.name);
    }
    Ok(())
}

// == Explore ==
/// Prints the Pokemon encountered at the named location area.
pub async fn explore(session: &Session, args: &[String]) -> Result<()> {
    let area = args.first().ok_or(PokedexError::MissingArgument {
        command: "explore",
        argument: "location area",
    })?;

    let encounters = session.client.location_area(area).await?;
    for encounter in &encounters.pokemon_encounters {
        println!("{}", encounter.pokemon.name);
    }
    Ok(())
}

// == Catch ==
/// Throws a Pokeball at the named Pokemon.
///
/// The record is fetched through the cache, so repeat throws at the same
/// Pokemon skip the network; a cached record still gets a fresh roll.
pub async fn catch(session: &mut Session, args: &[String]) -> Result<()> {
    let name = args.first().ok_or(PokedexError::MissingArgument {
        command: "catch",
        argument: "pokemon name",
    })?;

    let pokemon = session.client.pokemon(name).await?;
    println!("Throwing a Pokeball at {name}...");

    let roll = rng().random_range(0..=200);
    if escapes(pokemon.base_experience, roll) {
        println!("{name} escaped!");
    } else {
        println!("{name} was caught!");
        println!("You may now inspect it with the inspect command.");
        session.pokedex.insert(pokemon.name.clone(), pokemon);
    }
    Ok(())
}

/// A Pokemon escapes when its base experience beats the throw roll.
fn escapes(base_experience: Option<u32>, roll: u32) -> bool {
    base_experience.unwrap_or(0) > roll
}

// == Inspect ==
/// Prints the record of a previously caught Pokemon.
pub fn inspect(session: &Session, args: &[String]) -> Result<()> {
    let name = args.first().ok_or(PokedexError::MissingArgument {
        command: "inspect",
        argument: "pokemon name",
    })?;

    let pokemon = session
        .pokedex
        .get(name)
        .ok_or_else(|| PokedexError::NotCaught(name.clone()))?;

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
    Ok(())
}

// == Pokedex ==
/// Lists the names of every caught Pokemon.
pub fn pokedex(session: &Session) {
    println!("Your Pokedex:");
    for pokemon in session.pokedex.values() {
        println!(" - {}", pokemon.name);
    }
}
