use crate::name;

/// The number of moves kept in a [`Detail`].
pub const MAX_MOVES: usize = 2;

/// The fully resolved attributes of a single Pokémon.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub number: String,
    pub name: String,
    pub artwork: Option<String>,
    pub types: Vec<String>,
    /// As reported upstream, without any unit conversion.
    pub weight: f64,
    /// In metres.
    pub height: f64,
    pub moves: Vec<String>,
    /// A single line. Empty when no entry exists for the requested version.
    pub flavor_text: String,
    pub stats: Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    /// The highest possible base stat.
    pub const MAX: u32 = 255;

    /// Maps base stats positionally, in upstream order.
    ///
    /// Returns `None` if fewer than six stats are given.
    pub fn from_base(base: &[u32]) -> Option<Self> {
        let &[hp, attack, defense, special_attack, special_defense, speed, ..] = base else {
            return None;
        };

        Some(Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> {
        [
            ("HP", self.hp),
            ("ATK", self.attack),
            ("DEF", self.defense),
            ("SATK", self.special_attack),
            ("SDEF", self.special_defense),
            ("SPD", self.speed),
        ]
        .into_iter()
    }
}

/// Converts a height in decimetres to metres.
pub fn height(decimetres: u32) -> f64 {
    f64::from(decimetres) / 10.0
}

/// Weights are displayed exactly as they come.
///
/// Unlike heights, they are not converted from hectograms.
pub fn weight(raw: u32) -> f64 {
    f64::from(raw)
}

/// Collapses line breaks, form feeds and repeated spaces into single spaces.
pub fn flavor_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Formats the first few moves for display.
pub fn moves<'a>(identifiers: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    identifiers
        .into_iter()
        .take(MAX_MOVES)
        .map(name::title)
        .collect()
}
