//! Response DTOs for the PokeAPI endpoints this client consumes
//!
//! Defines the structure of the JSON bodies PokeAPI returns. Only the fields
//! the commands actually print are modeled; serde ignores the rest.

use serde::Deserialize;

/// A name plus the URL of the full resource, PokeAPI's standard reference shape.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the paginated location-area listing (`GET /location-area/`)
///
/// `next` and `previous` are null at the ends of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

/// Details for a single location area (`GET /location-area/{name}`)
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    /// The pokemon that can be encountered in this area
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A single possible encounter within a location area
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Details for a single pokemon (`GET /pokemon/{name}`)
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    /// Null for some pokemon (e.g. certain alternate forms)
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonTypeSlot>,
}

/// One base-stat line of a pokemon
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One type slot of a pokemon
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_page_deserialize() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_location_page_last_page() {
        let json = r#"{
            "count": 2,
            "next": null,
            "previous": "https://pokeapi.co/api/v2/location-area/?offset=0&limit=20",
            "results": []
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert!(page.next.is_none());
        assert!(page.previous.is_some());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_location_detail_deserialize() {
        let json = r#"{
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
                {"pokemon": {"name": "magikarp", "url": "https://pokeapi.co/api/v2/pokemon/129/"}}
            ]
        }"#;

        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.pokemon_encounters.len(), 2);
        assert_eq!(detail.pokemon_encounters[1].pokemon.name, "magikarp");
    }

    #[test]
    fn test_pokemon_detail_deserialize() {
        let json = r#"{
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "stats": [
                {"base_stat": 35, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 55, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}}
            ],
            "types": [
                {"type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
            ]
        }"#;

        let pokemon: PokemonDetail = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, Some(112));
        assert_eq!(pokemon.height, 4);
        assert_eq!(pokemon.weight, 60);
        assert_eq!(pokemon.stats[1].stat.name, "attack");
        assert_eq!(pokemon.types[0].kind.name, "electric");
    }

    #[test]
    fn test_pokemon_detail_null_base_experience() {
        let json = r#"{
            "name": "eternatus-eternamax",
            "base_experience": null,
            "height": 1000,
            "weight": 9500,
            "stats": [],
            "types": []
        }"#;

        let pokemon: PokemonDetail = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.base_experience, None);
    }

    #[test]
    fn test_pokemon_detail_ignores_extra_fields() {
        // PokeAPI bodies carry far more fields than the commands print
        let json = r#"{
            "name": "ditto",
            "base_experience": 101,
            "height": 3,
            "weight": 40,
            "stats": [],
            "types": [],
            "abilities": [{"ability": {"name": "limber"}}],
            "order": 214
        }"#;

        let pokemon: PokemonDetail = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "ditto");
    }
}
