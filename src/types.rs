//! Common types used throughout pagefeed
//!
//! Shared type aliases and small enums used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// A list item as delivered by the server.
///
/// Items are opaque to the controller; the only field it ever inspects is
/// the identifier named by the key policy.
pub type Item = JsonValue;

// ============================================================================
// Fetch Status
// ============================================================================

/// Aggregate fetch status exposed to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    /// No fetch has been issued (no endpoint configured)
    #[default]
    Idle,
    /// First page fetch in flight, nothing rendered yet
    Loading,
    /// At least one page fetched successfully
    Success,
    /// A next-page fetch is in flight behind already-rendered items
    FetchingNextPage,
    /// The most recent fetch failed
    Error,
}

impl FetchStatus {
    /// True while any fetch is in flight
    pub fn is_fetching(self) -> bool {
        matches!(self, Self::Loading | Self::FetchingNextPage)
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff between transport retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}
