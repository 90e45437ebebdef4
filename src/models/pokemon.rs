//! Pokemon payloads
//!
//! Shape of the Pokemon detail response, reduced to the fields the catch
//! and inspect commands read.

use serde::Deserialize;

use crate::models::NamedResource;

/// One Pokemon's record.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Null in the API for some forms; treated as zero when rolling a catch
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// A base stat value and the stat it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// A type slot, e.g. grass/poison for bulbasaur.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
