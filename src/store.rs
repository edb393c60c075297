//! Aggregated page store
//!
//! Holds the pages fetched for one query identity, in fetch order. The
//! flattened item view is a straight concatenation: stable order,
//! duplicates permitted, never deduplicated. An identity change discards
//! the aggregate wholesale; there is no incremental patching.

use crate::config::QueryKey;
use crate::page::PageResponse;
use crate::types::Item;

/// Ordered pages for a single `QueryKey`
#[derive(Debug, Clone)]
pub struct PageStore {
    key: QueryKey,
    pages: Vec<PageResponse>,
}

impl PageStore {
    /// Create an empty store for an identity
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            pages: Vec::new(),
        }
    }

    /// The identity this store aggregates for
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Append a fetched page. Insertion order is fetch order.
    pub fn append(&mut self, page: PageResponse) {
        self.pages.push(page);
    }

    /// The most recently fetched page
    pub fn last(&self) -> Option<&PageResponse> {
        self.pages.last()
    }

    /// All fetched pages in fetch order
    pub fn pages(&self) -> &[PageResponse] {
        &self.pages
    }

    /// Number of fetched pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Flattened items across all pages, in concatenation order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.pages.iter().flat_map(|page| page.items.iter())
    }

    /// Flattened items with their originating page index and position,
    /// used for deterministic key derivation
    pub fn items_with_positions(&self) -> impl Iterator<Item = (usize, usize, &Item)> {
        self.pages.iter().enumerate().flat_map(|(page_index, page)| {
            page.items
                .iter()
                .enumerate()
                .map(move |(item_index, item)| (page_index, item_index, item))
        })
    }

    /// Total number of items across all pages
    pub fn total_items(&self) -> usize {
        self.pages.iter().map(PageResponse::len).sum()
    }

    /// True when no page has been fetched or every page was empty
    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }

    /// Whether the last fetched page said another page exists.
    /// False before any page has been fetched.
    pub fn has_next(&self) -> bool {
        self.last().is_some_and(PageResponse::has_next)
    }

    /// The page number to fetch next, based on the last page's metadata.
    /// The first page when nothing has been fetched yet.
    pub fn next_page_number(&self) -> u32 {
        self.last().map_or(1, |page| page.next_page)
    }

    /// Discard everything and adopt a new identity
    pub fn reset(&mut self, key: QueryKey) {
        self.key = key;
        self.pages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key() -> QueryKey {
        QueryKey {
            endpoint: "/products".to_string(),
            refetch_token: 0,
        }
    }

    fn page(ids: &[u64], next_page: u32, total_pages: u32) -> PageResponse {
        PageResponse {
            items: ids.iter().map(|id| json!({"id": id})).collect(),
            next_page,
            total_pages,
        }
    }

    #[test]
    fn test_store_starts_empty() {
        let store = PageStore::new(key());
        assert!(store.is_empty());
        assert_eq!(store.page_count(), 0);
        assert!(!store.has_next());
        assert_eq!(store.next_page_number(), 1);
    }

    #[test]
    fn test_flattened_order_is_concatenation_order() {
        let mut store = PageStore::new(key());
        store.append(page(&[1, 2], 2, 3));
        store.append(page(&[3, 4], 3, 3));
        store.append(page(&[5], 4, 3));

        let ids: Vec<u64> = store.items().map(|item| item["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.total_items(), 5);
        assert_eq!(store.page_count(), 3);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = PageStore::new(key());
        store.append(page(&[1, 1], 2, 2));
        store.append(page(&[1], 3, 2));

        assert_eq!(store.total_items(), 3);
    }

    #[test]
    fn test_has_next_follows_last_page() {
        let mut store = PageStore::new(key());
        store.append(page(&[1], 2, 3));
        assert!(store.has_next());
        assert_eq!(store.next_page_number(), 2);

        store.append(page(&[2], 3, 3));
        assert!(store.has_next());

        store.append(page(&[3], 4, 3));
        assert!(!store.has_next());
    }

    #[test]
    fn test_items_with_positions() {
        let mut store = PageStore::new(key());
        store.append(page(&[10, 11], 2, 2));
        store.append(page(&[12], 3, 2));

        let positions: Vec<(usize, usize)> = store
            .items_with_positions()
            .map(|(page_index, item_index, _)| (page_index, item_index))
            .collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut store = PageStore::new(key());
        store.append(page(&[1, 2, 3], 2, 2));
        assert!(!store.is_empty());

        let new_key = QueryKey {
            endpoint: "/products".to_string(),
            refetch_token: 1,
        };
        store.reset(new_key.clone());

        assert!(store.is_empty());
        assert_eq!(store.page_count(), 0);
        assert_eq!(store.key(), &new_key);
        assert_eq!(store.next_page_number(), 1);
    }
}
