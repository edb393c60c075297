//! Pagination controller
//!
//! # Overview
//!
//! The core state machine. It owns the fetch-by-page source, the
//! aggregated page store, and at most one in-flight fetch, and it derives
//! the display state the rendering layer consumes.
//!
//! ```text
//! Disabled ──(endpoint set)──▶ LoadingFirstPage ──ok──▶ HasData ◀─┐
//!                                    │                    │       │ ok
//!                                    err                  trigger │
//!                                    ▼                    ▼       │
//!                                  Error ◀──err── LoadingNextPage ┘
//! ```
//!
//! Any identity change (endpoint or refetch token) discards the aggregate
//! and restarts from page 1. Exactly one fetch is in flight at a time; the
//! end-of-list trigger is an idempotent no-op while one is.

mod task;

pub use task::{FetchOutcome, FetchTask};

use crate::config::ListConfig;
use crate::error::Error;
use crate::http::HttpClient;
use crate::page::{PageRequest, PageResponse};
use crate::render::{empty_message, error_message, item_key, ListRow, ListView, RenderState};
use crate::source::{HttpPageSource, PageSource};
use crate::store::PageStore;
use crate::types::{FetchStatus, Item};
use std::sync::Arc;
use tracing::{debug, warn};

/// Lifecycle phase of the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No endpoint configured; the controller is inert
    Disabled,
    /// First page in flight
    LoadingFirstPage,
    /// At least one page committed, no fetch in flight
    HasData,
    /// A further page in flight behind committed data
    LoadingNextPage,
    /// The most recent fetch failed. Terminal for this identity; already
    /// committed pages stay in the store.
    Error {
        /// Human-readable failure description
        message: String,
    },
}

/// The infinite-pagination state machine
pub struct PaginationController {
    config: ListConfig,
    client: Option<Arc<HttpClient>>,
    source: Option<Arc<dyn PageSource>>,
    store: PageStore,
    phase: Phase,
    generation: u64,
    in_flight: Option<FetchTask>,
}

impl PaginationController {
    /// Create a controller fetching through an HTTP client. Must be called
    /// within a tokio runtime; the first-page fetch is dispatched
    /// immediately when an endpoint is configured.
    pub fn new(config: ListConfig, client: Arc<HttpClient>) -> Self {
        let source = config.endpoint.as_ref().map(|endpoint| {
            Arc::new(HttpPageSource::new(
                Arc::clone(&client),
                endpoint.clone(),
                config.collection_path.clone(),
            )) as Arc<dyn PageSource>
        });
        Self::from_parts(config, Some(client), source)
    }

    /// Create a controller on the process-wide shared client. Composition
    /// roots only; everything else should pass its client explicitly.
    pub fn with_shared_client(config: ListConfig) -> Self {
        Self::new(config, crate::http::shared_client())
    }

    /// Create a controller over a custom page source. The source is kept
    /// across identity changes; it is expected to serve whatever endpoint
    /// the identity names.
    pub fn with_source(config: ListConfig, source: Arc<dyn PageSource>) -> Self {
        let source = config.endpoint.is_some().then_some(source);
        Self::from_parts(config, None, source)
    }

    fn from_parts(
        config: ListConfig,
        client: Option<Arc<HttpClient>>,
        source: Option<Arc<dyn PageSource>>,
    ) -> Self {
        let store = PageStore::new(config.query_key());
        let mut controller = Self {
            config,
            client,
            source,
            store,
            phase: Phase::Disabled,
            generation: 0,
            in_flight: None,
        };
        if controller.source.is_some() {
            controller.phase = Phase::LoadingFirstPage;
            controller.dispatch(1);
        }
        controller
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// The active configuration
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Aggregate fetch status for the rendering layer
    pub fn status(&self) -> FetchStatus {
        match self.phase {
            Phase::Disabled => FetchStatus::Idle,
            Phase::LoadingFirstPage => FetchStatus::Loading,
            Phase::HasData => FetchStatus::Success,
            Phase::LoadingNextPage => FetchStatus::FetchingNextPage,
            Phase::Error { .. } => FetchStatus::Error,
        }
    }

    /// Flattened items across all committed pages, in fetch order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.store.items()
    }

    /// The aggregated page store
    pub fn store(&self) -> &PageStore {
        &self.store
    }

    /// Whether the last committed page reported another page
    pub fn has_next_page(&self) -> bool {
        self.store.has_next()
    }

    /// True while a next-page fetch is in flight
    pub fn is_fetching_next_page(&self) -> bool {
        matches!(self.phase, Phase::LoadingNextPage)
    }

    /// The failure description, when the controller is in its error phase
    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }

    // ============================================================================
    // Triggers
    // ============================================================================

    /// End-of-list trigger, fired by the rendering layer when the viewport
    /// nears the end of rendered content.
    ///
    /// Idempotent: a no-op when no next page exists, when any fetch is
    /// already in flight, or outside the has-data phase. Never issues a
    /// concurrent duplicate fetch.
    pub fn on_end_reached(&mut self) {
        if self.phase != Phase::HasData {
            return;
        }
        if self.in_flight.is_some() || !self.store.has_next() {
            return;
        }
        let next = self.store.next_page_number();
        debug!("end-of-list trigger: fetching page {next}");
        self.phase = Phase::LoadingNextPage;
        self.dispatch(next);
    }

    /// Replace the endpoint. A change is a full identity reset: the
    /// aggregate is discarded and page 1 is re-fetched (or the controller
    /// goes inert when the endpoint is removed).
    pub fn set_endpoint(&mut self, endpoint: Option<String>) {
        if self.config.endpoint == endpoint {
            return;
        }
        self.config.endpoint = endpoint;
        self.rebuild_source();
        self.reset_identity();
    }

    /// Replace the refetch token. A change forces a full reset and
    /// refetch from page 1.
    pub fn set_refetch_token(&mut self, token: u64) {
        if self.config.refetch_token == token {
            return;
        }
        self.config.refetch_token = token;
        self.reset_identity();
    }

    // ============================================================================
    // Pumping
    // ============================================================================

    /// Non-blocking pump: observe the in-flight fetch and, when it has
    /// finished, commit or fail accordingly. Responses issued under an
    /// older generation are discarded without touching state.
    pub fn poll(&mut self) -> FetchStatus {
        if let Some(task) = self.in_flight.take() {
            if task.is_finished() {
                let generation = task.generation();
                match task.into_outcome() {
                    FetchOutcome::Pending => {}
                    FetchOutcome::Resolved(page) => self.commit(generation, page),
                    FetchOutcome::Rejected(err) => self.fail(generation, &err),
                }
            } else {
                self.in_flight = Some(task);
            }
        }
        self.status()
    }

    /// Suspend until the in-flight fetch (if any) finishes, then process
    /// its outcome. Equivalent to polling, without the busy wait.
    pub async fn settle(&mut self) -> FetchStatus {
        if let Some(task) = self.in_flight.take() {
            let generation = task.generation();
            match task.join().await {
                FetchOutcome::Pending => {}
                FetchOutcome::Resolved(page) => self.commit(generation, page),
                FetchOutcome::Rejected(err) => self.fail(generation, &err),
            }
        }
        self.status()
    }

    // ============================================================================
    // Display
    // ============================================================================

    /// Derive the display state for the rendering layer
    pub fn render_state(&self) -> RenderState {
        match &self.phase {
            Phase::Disabled => RenderState::Inert,
            Phase::LoadingFirstPage => RenderState::Loading {
                color: self.config.loader_color.clone(),
            },
            Phase::Error { message } if self.store.page_count() == 0 => RenderState::Error {
                message: error_message(message),
            },
            Phase::HasData | Phase::Error { .. } if self.store.is_empty() => RenderState::Empty {
                message: empty_message(&self.config.empty_message_entity),
            },
            Phase::HasData | Phase::Error { .. } => RenderState::List(self.list_view(None)),
            Phase::LoadingNextPage => {
                RenderState::List(self.list_view(Some(self.config.loader_color.clone())))
            }
        }
    }

    fn list_view(&self, trailing_loader: Option<String>) -> ListView {
        let rows = self
            .store
            .items_with_positions()
            .map(|(page, index, item)| ListRow {
                key: item_key(&self.config.key_policy, item, page, index),
                item: item.clone(),
            })
            .collect();
        ListView {
            rows,
            column_count: self.config.column_count,
            trailing_loader,
        }
    }

    // ============================================================================
    // Internals
    // ============================================================================

    fn dispatch(&mut self, page: u32) {
        let Some(source) = &self.source else {
            self.phase = Phase::Disabled;
            return;
        };
        let request = PageRequest::new(page, self.config.items_per_page);
        self.in_flight = Some(FetchTask::spawn(
            Arc::clone(source),
            request,
            self.generation,
        ));
    }

    fn commit(&mut self, generation: u64, page: PageResponse) {
        if generation != self.generation {
            debug!("discarding stale page response from generation {generation}");
            return;
        }
        debug!(
            "committed page (next {}, of {}), {} items",
            page.next_page,
            page.total_pages,
            page.len()
        );
        self.store.append(page);
        self.phase = Phase::HasData;
    }

    fn fail(&mut self, generation: u64, err: &Error) {
        if generation != self.generation {
            debug!("discarding stale failure from generation {generation}");
            return;
        }
        warn!("page fetch failed: {err}");
        self.phase = Phase::Error {
            message: err.to_string(),
        };
    }

    fn rebuild_source(&mut self) {
        match (&self.client, &self.config.endpoint) {
            (Some(client), Some(endpoint)) => {
                self.source = Some(Arc::new(HttpPageSource::new(
                    Arc::clone(client),
                    endpoint.clone(),
                    self.config.collection_path.clone(),
                )));
            }
            (Some(_), None) => self.source = None,
            // Custom source: kept unless the endpoint went away entirely
            (None, Some(_)) => {}
            (None, None) => self.source = None,
        }
    }

    fn reset_identity(&mut self) {
        self.generation += 1;
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        self.store.reset(self.config.query_key());
        if self.source.is_some() && self.config.endpoint.is_some() {
            self.phase = Phase::LoadingFirstPage;
            self.dispatch(1);
        } else {
            self.phase = Phase::Disabled;
        }
    }
}

impl std::fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("phase", &self.phase)
            .field("generation", &self.generation)
            .field("pages", &self.store.page_count())
            .field("in_flight", &self.in_flight.is_some())
            .finish_non_exhaustive()
    }
}
