//! Page request/response types

use crate::types::{Item, StringMap};
use serde::{Deserialize, Serialize};

/// Query parameter carrying the requested page number
pub const PAGE_PARAM: &str = "pagination[page]";

/// Query parameter carrying the requested page size
pub const PAGE_SIZE_PARAM: &str = "pagination[pageSize]";

/// A request for one page of items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Number of items per page
    pub page_size: u32,
}

impl PageRequest {
    /// Create a request for a specific page. Page numbers are 1-based;
    /// zero is clamped up rather than sent to the server.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size,
        }
    }

    /// The request for the first page
    pub fn first(page_size: u32) -> Self {
        Self::new(1, page_size)
    }

    /// Query parameters encoding this request on the wire
    pub fn query_params(&self) -> StringMap {
        let mut params = StringMap::new();
        params.insert(PAGE_PARAM.to_string(), self.page.to_string());
        params.insert(PAGE_SIZE_PARAM.to_string(), self.page_size.to_string());
        params
    }
}

/// One fetched page, with the server's pagination metadata interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Items extracted from the collection path, in server order
    pub items: Vec<Item>,
    /// The page number after this one (`meta.pagination.page + 1`)
    pub next_page: u32,
    /// Total page count reported by the server, unvalidated
    pub total_pages: u32,
}

impl PageResponse {
    /// Whether another page exists after this one.
    ///
    /// Equal and less both mean "more"; anything else terminates
    /// pagination for the current identity.
    pub fn has_next(&self) -> bool {
        self.next_page <= self.total_pages
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page carried no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
