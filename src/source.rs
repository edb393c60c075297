//! Fetch-by-page seam
//!
//! `PageSource` is the capability the controller consumes: give it a page
//! number, get back a parsed page. The production implementation issues a
//! paged GET through the HTTP client; tests substitute scripted sources.

use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::page::{parse_page, PageRequest, PageResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// A source of pages for one endpoint
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch a single page. The returned metadata is used verbatim for the
    /// has-more decision; no partial page is ever produced on failure.
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResponse>;
}

/// Page source backed by a paged HTTP GET endpoint
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Arc<HttpClient>,
    endpoint: String,
    collection_path: String,
}

impl HttpPageSource {
    /// Create a source for an endpoint
    pub fn new(
        client: Arc<HttpClient>,
        endpoint: impl Into<String>,
        collection_path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            collection_path: collection_path.into(),
        }
    }

    /// The endpoint this source fetches from
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResponse> {
        let config = RequestConfig::new().queries(request.query_params());
        let body = self.client.get_json(&self.endpoint, config).await?;
        let page = parse_page(&body, &self.collection_path)?;
        debug!(
            "fetched page {} of {} from {} ({} items)",
            request.page,
            page.total_pages,
            self.endpoint,
            page.len()
        );
        Ok(page)
    }
}
