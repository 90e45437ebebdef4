//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror. A cache miss is not
//! represented here: missing cache entries are routine and surface as
//! `None` from the cache, never as an error.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex CLI.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level HTTP failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the API
    #[error("response failed with status code {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("malformed response payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Command invoked without its required argument
    #[error("{command} requires a {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Inspecting a pokemon that was never caught
    #[error("you have not caught {0} yet")]
    NotCaught(String),

    /// Paging back past the first page of locations
    #[error("you're on the first page")]
    NoPreviousPage,

    /// Paging forward past the last page of locations
    #[error("you're on the last page")]
    NoNextPage,
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
