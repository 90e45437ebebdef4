//! API Payload Models
//!
//! serde-shaped records of the PokeAPI responses this client consumes.
//! Unknown payload fields are ignored on deserialization; only the fields
//! the commands actually read are modeled.

mod location;
mod pokemon;

pub use location::{LocationArea, LocationPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
