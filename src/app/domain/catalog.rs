use serde::{Deserialize, Serialize};

use super::style::StyleId;

/// A style in use, paired with its lowercased display name at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleCatalogEntry {
    pub name: String,
    pub id: StyleId,
}

impl StyleCatalogEntry {
    pub fn new(name: &str, id: StyleId) -> Self {
        Self {
            name: name.to_lowercase(),
            id,
        }
    }
}

/// Every distinct style used in the document, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<StyleCatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<StyleCatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[StyleCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive exact lookup. Styles sharing a name resolve to the
    /// first one seen.
    pub fn lookup(&self, name: &str) -> Option<&StyleId> {
        let needle = name.to_lowercase();
        self.entries.iter().find(|e| e.name == needle).map(|e| &e.id)
    }

    /// Entries whose name contains `query`, ignoring case.
    pub fn suggest(&self, query: &str) -> Vec<&StyleCatalogEntry> {
        let needle = query.to_lowercase();
        self.entries.iter().filter(|e| e.name.contains(&needle)).collect()
    }
}
