use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A change category, e.g. `Features` rendered as `feat`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Category {
    /// Human-readable label
    pub name: String,
    /// Canonical abbreviation written into the message
    pub short_code: String,
    /// Alternate names that resolve to this category
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Category {
    pub fn new(name: &str, short_code: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            short_code: short_code.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Every string this category can be selected by: the name, the short code and the aliases,
    /// in that order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.short_code.as_str()]
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
    }
}

/// Lookup from every identifying string of every category to its owner.
///
/// Keys are matched exactly and case-sensitively. When two categories share a key the one
/// registered later wins; duplicates are not reported.
#[derive(Debug, Default)]
pub struct CategoryRegistry<'a> {
    entries: HashMap<&'a str, &'a Category>,
}

impl<'a> CategoryRegistry<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        let entries = categories
            .iter()
            .flat_map(|category| category.keys().map(move |key| (key, category)))
            .collect();

        Self { entries }
    }

    pub fn resolve(&self, key: &str) -> Option<&'a Category> {
        self.entries.get(key).copied()
    }

    /// All selectable strings, sorted for display
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().map(|k| k.to_string()).collect();
        keys.sort();
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
