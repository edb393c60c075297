//! List configuration
//!
//! `ListConfig` carries every option the component recognizes, with the
//! documented defaults. The transport client is deliberately not part of
//! this struct: it is an explicit constructor dependency of the controller
//! so that nothing in core logic reaches for a hidden global.

use crate::render::KeyPolicy;
use serde::{Deserialize, Serialize};

/// Configuration for a paginated list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Target resource path or URL; absence disables fetching entirely
    pub endpoint: Option<String>,
    /// Page size sent as a query parameter
    pub items_per_page: u32,
    /// Field name locating the item collection inside the response body.
    /// Dot-separated for nested collections.
    pub collection_path: String,
    /// Opaque value; changing it forces a full reset and refetch from page 1
    pub refetch_token: u64,
    /// Number of columns the rendering layer should lay items out in
    pub column_count: u32,
    /// Noun inserted into the empty-state message
    pub empty_message_entity: String,
    /// Visual color of loading indicators
    pub loader_color: String,
    /// How list keys are derived from items
    #[serde(default)]
    pub key_policy: KeyPolicy,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            items_per_page: 30,
            collection_path: "data".to_string(),
            refetch_token: 0,
            column_count: 1,
            empty_message_entity: "items".to_string(),
            loader_color: "lightgrey".to_string(),
            key_policy: KeyPolicy::default(),
        }
    }
}

impl ListConfig {
    /// Create a new config builder
    pub fn builder() -> ListConfigBuilder {
        ListConfigBuilder::default()
    }

    /// Create a config for an endpoint with all other options at defaults
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    /// The cache identity of this configuration
    pub fn query_key(&self) -> QueryKey {
        QueryKey {
            endpoint: self.endpoint.clone().unwrap_or_default(),
            refetch_token: self.refetch_token,
        }
    }
}

/// Builder for list config
#[derive(Default)]
pub struct ListConfigBuilder {
    config: ListConfig,
}

impl ListConfigBuilder {
    /// Set the endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    /// Set the page size
    pub fn items_per_page(mut self, count: u32) -> Self {
        self.config.items_per_page = count;
        self
    }

    /// Set the collection path
    pub fn collection_path(mut self, path: impl Into<String>) -> Self {
        self.config.collection_path = path.into();
        self
    }

    /// Set the refetch token
    pub fn refetch_token(mut self, token: u64) -> Self {
        self.config.refetch_token = token;
        self
    }

    /// Set the column count
    pub fn column_count(mut self, columns: u32) -> Self {
        self.config.column_count = columns;
        self
    }

    /// Set the empty-state entity noun
    pub fn empty_message_entity(mut self, entity: impl Into<String>) -> Self {
        self.config.empty_message_entity = entity.into();
        self
    }

    /// Set the loader color
    pub fn loader_color(mut self, color: impl Into<String>) -> Self {
        self.config.loader_color = color.into();
        self
    }

    /// Set the key policy
    pub fn key_policy(mut self, policy: KeyPolicy) -> Self {
        self.config.key_policy = policy;
        self
    }

    /// Build the config
    pub fn build(self) -> ListConfig {
        self.config
    }
}

/// Identity of an aggregated page set.
///
/// Two configs with equal keys share cached pages; any key change discards
/// the aggregate wholesale and restarts from page 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryKey {
    /// Endpoint the pages were fetched from
    pub endpoint: String,
    /// Caller-supplied refetch token
    pub refetch_token: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ListConfig::default();
        assert!(config.endpoint.is_none());
        assert_eq!(config.items_per_page, 30);
        assert_eq!(config.collection_path, "data");
        assert_eq!(config.refetch_token, 0);
        assert_eq!(config.column_count, 1);
        assert_eq!(config.empty_message_entity, "items");
        assert_eq!(config.loader_color, "lightgrey");
    }

    #[test]
    fn test_config_builder() {
        let config = ListConfig::builder()
            .endpoint("https://api.example.com/products")
            .items_per_page(10)
            .collection_path("products")
            .refetch_token(3)
            .column_count(2)
            .empty_message_entity("Products")
            .loader_color("slategray")
            .build();

        assert_eq!(
            config.endpoint,
            Some("https://api.example.com/products".to_string())
        );
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.collection_path, "products");
        assert_eq!(config.refetch_token, 3);
        assert_eq!(config.column_count, 2);
        assert_eq!(config.empty_message_entity, "Products");
        assert_eq!(config.loader_color, "slategray");
    }

    #[test]
    fn test_query_key_changes_with_identity() {
        let mut config = ListConfig::for_endpoint("https://api.example.com/a");
        let key = config.query_key();

        config.refetch_token = 1;
        assert_ne!(key, config.query_key());

        config.refetch_token = 0;
        assert_eq!(key, config.query_key());

        config.endpoint = Some("https://api.example.com/b".to_string());
        assert_ne!(key, config.query_key());
    }

    #[test]
    fn test_for_endpoint() {
        let config = ListConfig::for_endpoint("/products");
        assert_eq!(config.endpoint, Some("/products".to_string()));
        assert_eq!(config.items_per_page, 30);
    }
}
