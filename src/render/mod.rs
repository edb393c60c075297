//! Rendering collaborator seam
//!
//! # Overview
//!
//! The controller never draws anything. It derives a `RenderState` and the
//! consuming UI maps that onto its own primitives: a loading indicator, an
//! error line, an empty-state message, or the flattened rows with an
//! optional trailing loader. Item visuals come from an injected
//! `ItemRenderer`; list keys come from a deterministic `KeyPolicy`.
//!
//! The proximity rule for firing the end-of-list trigger is a rendering
//! concern and lives here too (`EndReachedTracker`); the controller's
//! trigger itself is safe to call arbitrarily often.

mod keys;
mod view;

pub use keys::{item_key, ItemKey, KeyPolicy};
pub use view::{
    empty_message, error_message, EndReachedTracker, ItemRenderer, ListRow, ListView, RenderState,
};
