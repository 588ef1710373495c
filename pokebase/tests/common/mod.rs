//! Canned PokéAPI documents served through an in-memory transport.
#![allow(dead_code)]

use pokebase::session::Transport;
use pokebase::{Cause, Config, Session};

use bytes::Bytes;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const API_URL: &str = "https://pokeapi.test/api/v2";

#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    documents: Arc<HashMap<String, Value>>,
    delays: Arc<HashMap<String, Duration>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Fixtures {
    pub fn new(documents: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            documents: Arc::new(documents.into_iter().collect()),
            delays: Arc::default(),
            requests: Arc::default(),
        }
    }

    /// Slows down the responses of the given URLs.
    pub fn delayed(mut self, delays: impl IntoIterator<Item = (String, Duration)>) -> Self {
        self.delays = Arc::new(delays.into_iter().collect());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn session(&self) -> Session<Self> {
        Session::with_transport(
            self.clone(),
            Config {
                api_url: API_URL.to_owned(),
                ..Config::default()
            },
        )
    }
}

impl Transport for Fixtures {
    async fn get(&self, url: &str) -> Result<Bytes, Cause> {
        self.requests.lock().unwrap().push(url.to_owned());

        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }

        match self.documents.get(url) {
            Some(document) => Ok(Bytes::from(document.to_string())),
            None => Err(Cause::NotFound(url.to_owned())),
        }
    }
}

pub fn id(id: u32) -> pokebase::Id {
    pokebase::Id::try_from(id).unwrap()
}

pub fn pokemon_url(id: u32) -> String {
    format!("{API_URL}/pokemon/{id}/")
}

pub fn listing(names: &[(u32, &str)]) -> (String, Value) {
    let results: Vec<Value> = names
        .iter()
        .map(|(id, name)| json!({ "name": name, "url": pokemon_url(*id) }))
        .collect();

    (
        format!("{API_URL}/pokemon?limit={}", names.len()),
        json!({ "count": 1302, "next": null, "previous": null, "results": results }),
    )
}

pub fn artwork_url(id: u32) -> String {
    format!("https://sprites.test/other/official-artwork/{id}.png")
}

/// A summary document as returned by the follow-up catalog lookups.
pub fn summary(id: u32, name: &str) -> (String, Value) {
    (
        pokemon_url(id),
        json!({
            "id": id,
            "name": name,
            "sprites": {
                "front_default": format!("https://sprites.test/{id}.png"),
                "other": {
                    "official-artwork": { "front_default": artwork_url(id) }
                }
            }
        }),
    )
}

pub fn bulbasaur() -> Value {
    json!({
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.test/api/v2/type/12/" } },
            { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.test/api/v2/type/4/" } }
        ],
        "moves": [
            { "move": { "name": "razor-wind", "url": "https://pokeapi.test/api/v2/move/13/" } },
            { "move": { "name": "swords-dance", "url": "https://pokeapi.test/api/v2/move/14/" } },
            { "move": { "name": "cut", "url": "https://pokeapi.test/api/v2/move/15/" } }
        ],
        "stats": stats([45, 49, 49, 65, 65, 45]),
        "sprites": {
            "other": { "official-artwork": { "front_default": artwork_url(1) } }
        }
    })
}

pub fn stats(base: [u32; 6]) -> Value {
    let names = [
        "hp",
        "attack",
        "defense",
        "special-attack",
        "special-defense",
        "speed",
    ];

    Value::Array(
        base.iter()
            .zip(names)
            .map(|(base_stat, name)| {
                json!({
                    "base_stat": base_stat,
                    "effort": 0,
                    "stat": { "name": name, "url": "https://pokeapi.test/api/v2/stat/" }
                })
            })
            .collect(),
    )
}

pub fn species(entries: &[(&str, &str, &str)]) -> Value {
    let entries: Vec<Value> = entries
        .iter()
        .map(|(text, language, version)| {
            json!({
                "flavor_text": text,
                "language": { "name": language, "url": "https://pokeapi.test/api/v2/language/" },
                "version": { "name": version, "url": "https://pokeapi.test/api/v2/version/" }
            })
        })
        .collect();

    json!({ "id": 1, "name": "bulbasaur", "flavor_text_entries": entries })
}

pub fn detail_url(id: u32) -> String {
    format!("{API_URL}/pokemon/{id}")
}

pub fn species_url(id: u32) -> String {
    format!("{API_URL}/pokemon-species/{id}")
}
