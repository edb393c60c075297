//! Response body parsing
//!
//! Turns a raw JSON body into a `PageResponse` by extracting the item
//! collection at a configurable path and the pagination metadata block at
//! its fixed nested location. A missing pagination block is a hard error,
//! not a zero-page signal.

use super::types::PageResponse;
use crate::error::{Error, Result};
use crate::types::JsonValue;

/// Fixed location of the pagination metadata block in the response body
const PAGINATION_META_PATH: &str = "meta.pagination";

/// Parse a server body into a `PageResponse`.
///
/// `collection_path` is a dot-separated key path locating the item array
/// (default "data"). Pagination metadata is always read from
/// `meta.pagination.page` and `meta.pagination.pageCount`, verbatim.
pub fn parse_page(body: &JsonValue, collection_path: &str) -> Result<PageResponse> {
    let items = match lookup_path(body, collection_path) {
        Some(JsonValue::Array(items)) => items.clone(),
        Some(_) => {
            return Err(Error::malformed(
                collection_path,
                "expected an array of items",
            ))
        }
        None => {
            return Err(Error::malformed(
                collection_path,
                "collection field missing from response body",
            ))
        }
    };

    let pagination = lookup_path(body, PAGINATION_META_PATH)
        .ok_or_else(|| Error::malformed(PAGINATION_META_PATH, "pagination block missing"))?;

    let page = read_u32(pagination, "page")?;
    let total_pages = read_u32(pagination, "pageCount")?;

    Ok(PageResponse {
        items,
        next_page: page + 1,
        total_pages,
    })
}

/// Read a required non-negative integer field from the pagination block
fn read_u32(pagination: &JsonValue, field: &str) -> Result<u32> {
    pagination
        .get(field)
        .and_then(JsonValue::as_u64)
        .map(|n| n as u32)
        .ok_or_else(|| {
            Error::malformed(
                format!("{PAGINATION_META_PATH}.{field}"),
                "expected a non-negative integer",
            )
        })
}

/// Walk a dot-separated key path through nested objects
fn lookup_path<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        match current {
            JsonValue::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    Some(current)
}
