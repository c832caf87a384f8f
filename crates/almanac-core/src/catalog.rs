//! Translation catalog interface.
//!
//! Localized template strings are supplied externally. The core only
//! depends on the narrow lookup contract: a namespaced key resolves to
//! a translated string, or to a caller-provided default when no
//! translation exists. Lookup never fails.

use std::collections::HashMap;

use serde::Deserialize;

/// Lookup contract for localized strings.
///
/// Implementations must be total: when a key has no translation, the
/// caller's `default` is returned verbatim.
pub trait LocaleCatalog {
    fn translate(&self, key: &str, default: &str) -> String;
}

/// Map-backed catalog.
///
/// Deserializes transparently from a flat `key -> value` mapping, so a
/// catalog can be loaded from a JSON or TOML translation file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StaticCatalog {
    entries: HashMap<String, String>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LocaleCatalog for StaticCatalog {
    fn translate(&self, key: &str, default: &str) -> String {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => {
                tracing::debug!(key, "no translation for key, using default");
                default.to_string()
            }
        }
    }
}

impl FromIterator<(String, String)> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
