use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the PokéAPI, without a trailing slash.
    pub api_url: String,
    /// Amount of Pokémon listed in the catalog.
    pub catalog_limit: usize,
    /// Game version whose flavor text is shown.
    pub flavor_version: String,
    /// Per-request timeout. Requests may hang forever if unset.
    pub timeout: Option<Duration>,
}

impl Config {
    pub const API_URL: &'static str = "https://pokeapi.co/api/v2";
    pub const CATALOG_LIMIT: usize = 151;
    pub const FLAVOR_VERSION: &'static str = "firered";

    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(api_url) = env::var("POKEDEX_API_URL") {
            config.api_url = api_url.trim_end_matches('/').to_owned();
        }

        if let Some(limit) = parse("POKEDEX_CATALOG_LIMIT") {
            config.catalog_limit = limit;
        }

        if let Ok(version) = env::var("POKEDEX_FLAVOR_VERSION") {
            config.flavor_version = version;
        }

        if let Some(seconds) = parse("POKEDEX_TIMEOUT_SECS") {
            config.timeout = Some(Duration::from_secs(seconds));
        }

        config
    }

    pub fn listing_url(&self, limit: usize) -> String {
        format!("{}/pokemon?limit={limit}", self.api_url)
    }

    pub fn pokemon_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/pokemon/{id}", self.api_url)
    }

    pub fn species_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/pokemon-species/{id}", self.api_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Self::API_URL.to_owned(),
            catalog_limit: Self::CATALOG_LIMIT,
            flavor_version: Self::FLAVOR_VERSION.to_owned(),
            timeout: None,
        }
    }
}

fn parse<T: FromStr>(variable: &str) -> Option<T> {
    let value = env::var(variable).ok()?;

    match value.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring invalid {variable}: {value:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_target_the_public_api() {
        let config = Config::default();

        assert_eq!(config.listing_url(151), "https://pokeapi.co/api/v2/pokemon?limit=151");
        assert_eq!(config.pokemon_url(25), "https://pokeapi.co/api/v2/pokemon/25");
        assert_eq!(
            config.species_url(25),
            "https://pokeapi.co/api/v2/pokemon-species/25"
        );
        assert_eq!(config.flavor_version, "firered");
        assert_eq!(config.timeout, None);
    }
}
