//! Pokedex CLI - an interactive client for the PokeAPI
//!
//! Pages through location areas, catches Pokemon, and memoizes API
//! responses in a TTL cache swept by a background task.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::PokeApiClient;
pub use config::Config;
pub use tasks::spawn_sweep_task;
