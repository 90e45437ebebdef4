//! Client Module
//!
//! The PokeAPI HTTP client and its cache-backed fetch path.

mod pokeapi;

pub use pokeapi::PokeApiClient;
