//! In-flight fetch tracking
//!
//! A fetch runs on a spawned tokio task and is observed from the outside
//! with three visible outcomes: pending, resolved with a page, or rejected
//! with an error. Observation never blocks; `join` suspends at the task
//! boundary only.

use crate::error::{Error, Result};
use crate::page::{PageRequest, PageResponse};
use crate::source::PageSource;
use futures::FutureExt;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Observable outcome of an in-flight fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// Still running
    Pending,
    /// Finished with a page
    Resolved(PageResponse),
    /// Finished with a failure
    Rejected(Error),
}

/// One in-flight page fetch
#[derive(Debug)]
pub struct FetchTask {
    handle: JoinHandle<Result<PageResponse>>,
    request: PageRequest,
    generation: u64,
}

impl FetchTask {
    /// Spawn the fetch for a request, tagged with the identity generation
    /// it was issued under
    pub fn spawn(source: Arc<dyn PageSource>, request: PageRequest, generation: u64) -> Self {
        let handle = tokio::spawn(async move { source.fetch_page(request).await });
        Self {
            handle,
            request,
            generation,
        }
    }

    /// The generation this fetch was issued under. A commit is only valid
    /// while this matches the controller's current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The request this fetch is serving
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// True once the underlying task has finished
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Consume the task and read its outcome without suspending. Returns
    /// `Pending` only in the unlikely race where the finished flag was
    /// observed before the result became readable.
    pub fn into_outcome(self) -> FetchOutcome {
        if !self.handle.is_finished() {
            return FetchOutcome::Pending;
        }
        match self.handle.now_or_never() {
            Some(Ok(Ok(page))) => FetchOutcome::Resolved(page),
            Some(Ok(Err(err))) => FetchOutcome::Rejected(err),
            Some(Err(join_err)) => {
                FetchOutcome::Rejected(Error::Other(format!("fetch task failed: {join_err}")))
            }
            None => FetchOutcome::Pending,
        }
    }

    /// Consume the task, suspending until it finishes
    pub async fn join(self) -> FetchOutcome {
        match self.handle.await {
            Ok(Ok(page)) => FetchOutcome::Resolved(page),
            Ok(Err(err)) => FetchOutcome::Rejected(err),
            Err(join_err) => {
                FetchOutcome::Rejected(Error::Other(format!("fetch task failed: {join_err}")))
            }
        }
    }

    /// Abort the underlying task. Used when the identity changes while a
    /// fetch is still in flight; the response, if it ever lands, belongs
    /// to a dead generation.
    pub fn abort(&self) {
        self.handle.abort();
    }
}
