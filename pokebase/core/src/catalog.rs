use crate::name;
use crate::pokemon;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: pokemon::Id,
    pub number: String,
    pub name: String,
    pub artwork: Option<String>,
}

impl Entry {
    pub fn new(id: pokemon::Id, name: &str, artwork: Option<String>) -> Self {
        Self {
            id,
            number: id.number(),
            name: name::capitalize(name),
            artwork,
        }
    }
}

/// An ordered list of catalog entries, in listing order.
///
/// Ids are unique. Cloning is cheap.
#[derive(Clone)]
pub struct Catalog(Arc<Inner>);

struct Inner {
    positions: BTreeMap<pokemon::Id, usize>,
    entries: Arc<[Entry]>,
}

impl Catalog {
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut positions = BTreeMap::new();
        let mut unique = Vec::new();

        for entry in entries {
            if positions.contains_key(&entry.id) {
                log::warn!("Skipping duplicate catalog entry: #{}", entry.number);
                continue;
            }

            let _ = positions.insert(entry.id, unique.len());
            unique.push(entry);
        }

        Self(Arc::new(Inner {
            positions,
            entries: unique.into(),
        }))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.0.entries
    }

    pub fn get(&self, id: pokemon::Id) -> Option<&Entry> {
        Some(&self.0.entries[self.position(id)?])
    }

    pub fn position(&self, id: pokemon::Id) -> Option<usize> {
        self.0.positions.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }

    /// Returns true if both catalogs share the same entries.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new([])
    }
}

impl FromIterator<Entry> for Catalog {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("entries", &self.len())
            .finish()
    }
}
