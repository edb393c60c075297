// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pagefeed
//!
//! A minimal, Rust-native infinite-scroll pagination engine for paged
//! HTTP APIs. One state machine: fetch a page, append it, render, fetch
//! the next when the viewport nears the end.
//!
//! ## Features
//!
//! - **Page-number pagination**: `pagination[page]` / `pagination[pageSize]`
//!   wire format with `meta.pagination` metadata
//! - **One fetch in flight**: the end-of-list trigger is idempotent and
//!   never duplicates a request
//! - **Identity resets**: changing the endpoint or refetch token discards
//!   the aggregate and starts over from page 1
//! - **UI-agnostic rendering seam**: display states and keyed rows,
//!   consumed by whatever draws them
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagefeed::{ListConfig, PaginationController, RenderState, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ListConfig::builder()
//!         .endpoint("https://api.example.com/products")
//!         .collection_path("data")
//!         .empty_message_entity("products")
//!         .build();
//!
//!     let mut controller = PaginationController::with_shared_client(config);
//!     controller.settle().await;
//!
//!     match controller.render_state() {
//!         RenderState::List(view) => { /* draw the rows */ }
//!         RenderState::Empty { message } => println!("{message}"),
//!         RenderState::Error { message } => eprintln!("{message}"),
//!         _ => {}
//!     }
//!
//!     if controller.has_next_page() {
//!         controller.on_end_reached();
//!         controller.settle().await;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PaginationController                         │
//! │  on_end_reached()    poll()/settle()    render_state()          │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬──────┴────────┬───────────┬─────────────┐
//! │   Page   │   Http    │    Source     │   Store   │   Render    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Request  │ GET       │ fetch_page    │ append    │ List/Empty  │
//! │ Response │ Retry     │ parse         │ flatten   │ Error/Load  │
//! │ has_next │ Backoff   │               │ reset     │ keys        │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// List configuration
pub mod config;

/// HTTP transport with retry support
pub mod http;

/// Page model and wire contract
pub mod page;

/// Fetch-by-page seam
pub mod source;

/// Aggregated page store
pub mod store;

/// The pagination state machine
pub mod controller;

/// Rendering collaborator seam
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{ListConfig, ListConfigBuilder, QueryKey};
pub use controller::{FetchOutcome, PaginationController, Phase};
pub use http::{shared_client, HttpClient, HttpClientConfig};
pub use page::{PageRequest, PageResponse};
pub use render::{
    EndReachedTracker, ItemKey, ItemRenderer, KeyPolicy, ListRow, ListView, RenderState,
};
pub use source::{HttpPageSource, PageSource};
pub use store::PageStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
