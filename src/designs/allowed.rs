//! Token allow-lists
//!
//! An allow-list mirrors the token structure loosely: a category maps either to an
//! array of keys (`"spacing": ["sm", "md"]`) or to an object of subcategories
//! (`"colors": {"primary": ["500", "600"]}`). Anything else (booleans, the
//! `navigationPattern` string, ...) is kept verbatim so the document round-trips.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The restriction attached to one allow-list category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Restriction {
    /// Flat list of permitted keys; non-string members never match
    Keys(Vec<Value>),
    /// Per-subcategory restrictions; only array entries restrict anything
    Nested(IndexMap<String, Value>),
    /// Any other shape
    Other(Value),
}

impl Restriction {
    /// String members of a flat list
    pub fn flat_keys(&self) -> Option<Vec<&str>> {
        match self {
            Restriction::Keys(items) => Some(items.iter().filter_map(Value::as_str).collect()),
            _ => None,
        }
    }

    /// Permitted keys of a nested subcategory, when that entry is a string array
    pub fn subcategory_keys(&self, subcategory: &str) -> Option<Vec<&str>> {
        match self {
            Restriction::Nested(map) => match map.get(subcategory) {
                Some(Value::Array(items)) => Some(items.iter().filter_map(Value::as_str).collect()),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Optional per-system allow-list, keyed by token category (`colors`, `spacing`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedTokens(IndexMap<String, Restriction>);

impl AllowedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by tests and fixtures: restrict a flat category
    pub fn with_keys(mut self, category: &str, keys: &[&str]) -> Self {
        self.0.insert(
            category.to_string(),
            Restriction::Keys(keys.iter().map(|k| Value::String(k.to_string())).collect()),
        );
        self
    }

    /// Builder used by tests and fixtures: restrict one subcategory of a nested category
    pub fn with_subcategory_keys(mut self, category: &str, subcategory: &str, keys: &[&str]) -> Self {
        let keys = Value::Array(keys.iter().map(|k| Value::String(k.to_string())).collect());
        match self.0.get_mut(category) {
            Some(Restriction::Nested(map)) => {
                map.insert(subcategory.to_string(), keys);
            }
            _ => {
                let mut map = IndexMap::new();
                map.insert(subcategory.to_string(), keys);
                self.0.insert(category.to_string(), Restriction::Nested(map));
            }
        }
        self
    }

    pub fn category(&self, category: &str) -> Option<&Restriction> {
        self.0.get(category)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Permitted keys for a flat category, when it is restricted by an array
    pub fn keys(&self, category: &str) -> Option<Vec<&str>> {
        self.0.get(category).and_then(Restriction::flat_keys)
    }

    /// Permitted keys for `category.subcategory`, when that entry is an array
    pub fn subcategory_keys(&self, category: &str, subcategory: &str) -> Option<Vec<&str>> {
        self.0
            .get(category)
            .and_then(|r| r.subcategory_keys(subcategory))
    }

    /// Whether `category` is a nested restriction that mentions `subcategory`
    pub fn names_subcategory(&self, category: &str, subcategory: &str) -> bool {
        matches!(self.0.get(category), Some(Restriction::Nested(map)) if map.contains_key(subcategory))
    }

    /// `navigationPattern`: topbar, sidebar, hamburger, ...
    pub fn navigation_pattern(&self) -> Option<&str> {
        match self.0.get("navigationPattern") {
            Some(Restriction::Other(Value::String(pattern))) => Some(pattern.as_str()),
            _ => None,
        }
    }

    /// `animations.types`, the animation effects this system permits
    pub fn animation_types(&self) -> Option<Vec<&str>> {
        self.subcategory_keys("animations", "types")
    }
}
