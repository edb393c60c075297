//! List key derivation
//!
//! Keys must be stable across renders for list diffing to work. The
//! fallback is a deterministic page-and-position key, never a random
//! value.

use crate::types::{Item, JsonValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How list keys are derived from items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// Extract the key from a named item field, falling back to the
    /// positional key when the field is absent
    Field(String),
    /// Always use the positional key
    Positional,
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self::Field("id".to_string())
    }
}

/// A stable key for one rendered row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKey {
    /// Identifier extracted from the item itself
    Id(String),
    /// Deterministic fallback: where the item sits in the aggregate
    Position { page: usize, index: usize },
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Position { page, index } => write!(f, "p{page}:{index}"),
        }
    }
}

/// Derive the key for an item at a given aggregate position
pub fn item_key(policy: &KeyPolicy, item: &Item, page: usize, index: usize) -> ItemKey {
    if let KeyPolicy::Field(field) = policy {
        if let Some(id) = extract_id(item, field) {
            return ItemKey::Id(id);
        }
    }
    ItemKey::Position { page, index }
}

/// Read an identifier field as a string. Only strings and numbers qualify;
/// anything else falls through to the positional key.
fn extract_id(item: &Item, field: &str) -> Option<String> {
    match item.get(field)? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
