use serde::{Deserialize, Serialize};

use std::fmt;

/// The National Pokédex number of a Pokémon.
///
/// Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Id(u32);

impl Id {
    pub const FIRST: Self = Self(1);

    /// Parses a routed identifier.
    ///
    /// Only plain decimal digits denoting a positive number are accepted.
    pub fn parse(route: &str) -> Option<Self> {
        if route.is_empty() || !route.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }

        Self::try_from(route.parse::<u32>().ok()?).ok()
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The zero-padded display number (`7` becomes `"007"`).
    pub fn number(self) -> String {
        format!("{:03}", self.0)
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn previous(self) -> Option<Self> {
        Self::try_from(self.0 - 1).ok()
    }
}

impl TryFrom<u32> for Id {
    type Error = InvalidId;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        if id == 0 { Err(InvalidId) } else { Ok(Self(id)) }
    }
}

impl From<Id> for u32 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidId;

impl fmt::Display for InvalidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pokémon ids start at 1")
    }
}

impl std::error::Error for InvalidId {}
