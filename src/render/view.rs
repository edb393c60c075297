//! Display states and the item-renderer seam

use super::keys::ItemKey;
use crate::types::Item;

/// What the consuming UI should draw right now
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    /// No endpoint configured; nothing to draw, no fetch issued
    Inert,
    /// First page in flight; a loading indicator replaces the list
    Loading {
        /// Indicator color
        color: String,
    },
    /// Fetch failed with nothing to show; the message replaces the list
    Error {
        /// Human-readable failure description, prefixed
        message: String,
    },
    /// All fetches succeeded but produced zero items
    Empty {
        /// The configured empty-state message
        message: String,
    },
    /// One or more items to lay out
    List(ListView),
}

/// The renderable list: flattened rows plus layout hints
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    /// Keyed rows in aggregate order
    pub rows: Vec<ListRow>,
    /// Number of columns to lay rows out in
    pub column_count: u32,
    /// Trailing loading indicator color, present exactly while a
    /// next-page fetch is in flight
    pub trailing_loader: Option<String>,
}

impl ListView {
    /// Render every row through an item renderer, in order
    pub fn render_with<R: ItemRenderer>(&self, renderer: &R) -> Vec<R::Output> {
        self.rows
            .iter()
            .map(|row| renderer.render_item(&row.item, &row.key))
            .collect()
    }
}

/// One keyed row
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    /// Stable list key
    pub key: ItemKey,
    /// The item itself, opaque to the controller
    pub item: Item,
}

/// Capability invoked once per item to produce its visual representation
pub trait ItemRenderer {
    /// Whatever the consuming UI renders rows into
    type Output;

    /// Produce the representation for one item
    fn render_item(&self, item: &Item, key: &ItemKey) -> Self::Output;
}

impl<F, R> ItemRenderer for F
where
    F: Fn(&Item, &ItemKey) -> R,
{
    type Output = R;

    fn render_item(&self, item: &Item, key: &ItemKey) -> R {
        self(item, key)
    }
}

/// The empty-state message for an entity noun
pub fn empty_message(entity: &str) -> String {
    format!("No {entity} found.")
}

/// The error display line for a failure description
pub fn error_message(description: &str) -> String {
    format!("Error: {description}")
}

/// Fires the end-of-list trigger when the viewport nears the end of
/// rendered content.
///
/// Fires at most once per content extent: after firing, it re-arms only
/// when the total row count changes (i.e. a new page landed).
#[derive(Debug, Clone)]
pub struct EndReachedTracker {
    threshold: f32,
    fired_at: Option<usize>,
}

impl Default for EndReachedTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EndReachedTracker {
    /// Tracker with the default 0.7 proximity threshold
    pub fn new() -> Self {
        Self::with_threshold(0.7)
    }

    /// Tracker with a custom threshold in (0, 1]
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(f32::EPSILON, 1.0),
            fired_at: None,
        }
    }

    /// Report scroll progress. `last_visible` is the 1-based position of
    /// the last row on screen; `total` is the rendered row count. Returns
    /// true when the trigger should fire.
    pub fn update(&mut self, last_visible: usize, total: usize) -> bool {
        if total == 0 || self.fired_at == Some(total) {
            return false;
        }

        let progress = last_visible.min(total) as f32 / total as f32;
        if progress >= self.threshold {
            self.fired_at = Some(total);
            true
        } else {
            false
        }
    }

    /// Forget the last firing, e.g. after a full list reset
    pub fn reset(&mut self) {
        self.fired_at = None;
    }
}
