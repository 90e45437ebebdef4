//! Location payloads
//!
//! Shapes for the location-area listing and detail responses.

use serde::Deserialize;

/// A name/url pair, the API's universal reference shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of location areas with cursors to the neighboring pages.
///
/// `next` and `previous` are absolute URLs; either is null at the ends of
/// the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationPage {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location area, reduced to its Pokemon encounters.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One Pokemon that can be encountered at a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_page_deserialize() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationPage = serde_json::from_str(json).unwrap();
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_location_area_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
                {"pokemon": {"name": "staryu", "url": "https://pokeapi.co/api/v2/pokemon/120/"}}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert_eq!(area.pokemon_encounters.len(), 2);
        assert_eq!(area.pokemon_encounters[1].pokemon.name, "staryu");
    }

    #[test]
    fn test_location_area_empty_encounters() {
        let json = r#"{"pokemon_encounters": []}"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert!(area.pokemon_encounters.is_empty());
    }
}
