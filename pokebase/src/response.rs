//! The subset of PokéAPI documents we care about.
use crate::pokemon;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: pokemon::Id,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl Pokemon {
    pub fn artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()?
            .official_artwork
            .as_ref()?
            .front_default
            .as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Species {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

impl Species {
    pub fn flavor_text(&self, version: &str) -> Option<&str> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.version.name == version)
            .map(|entry| entry.flavor_text.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub version: NamedResource,
}
