//! Integration tests using a mock HTTP server
//!
//! Drives the pagination controller end-to-end: config → paged GETs →
//! aggregated state → display states.

use pagefeed::{
    HttpClient, HttpClientConfig, ItemKey, ListConfig, PaginationController, RenderState,
};
use pagefeed::types::{BackoffType, FetchStatus};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_client() -> Arc<HttpClient> {
    let config = HttpClientConfig::builder()
        .max_retries(0)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_millis(100),
        )
        .build();
    Arc::new(HttpClient::with_config(config))
}

fn products_config(server: &MockServer) -> ListConfig {
    ListConfig::builder()
        .endpoint(format!("{}/products", server.uri()))
        .empty_message_entity("Products")
        .build()
}

// ============================================================================
// Single Page
// ============================================================================

#[tokio::test]
async fn test_single_page_renders_two_items_and_stops() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("pagination[page]", "1"))
        .and(query_param("pagination[pageSize]", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "name": "Product 1"},
                {"id": 2, "name": "Product 2"}
            ],
            "meta": {"pagination": {"page": 1, "pageCount": 1}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = PaginationController::new(products_config(&mock_server), fast_client());
    let status = controller.settle().await;
    assert_eq!(status, FetchStatus::Success);

    // Triggering past the end never issues another call (expect(1) above)
    controller.on_end_reached();
    controller.on_end_reached();
    controller.settle().await;

    match controller.render_state() {
        RenderState::List(view) => {
            assert_eq!(view.rows.len(), 2);
            assert_eq!(view.rows[0].key, ItemKey::Id("1".to_string()));
            assert_eq!(view.rows[0].item["name"], "Product 1");
            assert_eq!(view.rows[1].item["name"], "Product 2");
            assert!(view.trailing_loader.is_none());
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_page_renders_entity_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "meta": {"pagination": {"page": 1, "pageCount": 1}}
        })))
        .mount(&mock_server)
        .await;

    let mut controller = PaginationController::new(products_config(&mock_server), fast_client());
    controller.settle().await;

    assert_eq!(
        controller.render_state(),
        RenderState::Empty {
            message: "No Products found.".to_string()
        }
    );
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_transport_failure_renders_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Failed to fetch data"))
        .mount(&mock_server)
        .await;

    let mut controller = PaginationController::new(products_config(&mock_server), fast_client());
    let status = controller.settle().await;

    assert_eq!(status, FetchStatus::Error);
    match controller.render_state() {
        RenderState::Error { message } => {
            assert!(message.starts_with("Error: "));
            assert!(message.contains("Failed to fetch data"));
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_pagination_block_is_an_error_not_an_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}]
        })))
        .mount(&mock_server)
        .await;

    let mut controller = PaginationController::new(products_config(&mock_server), fast_client());
    let status = controller.settle().await;

    assert_eq!(status, FetchStatus::Error);
    match controller.render_state() {
        RenderState::Error { message } => {
            assert!(message.contains("meta.pagination"));
        }
        other => panic!("expected error, got {other:?}"),
    }
}

// ============================================================================
// Multiple Pages
// ============================================================================

#[tokio::test]
async fn test_second_page_appends_in_render_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("pagination[page]", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "name": "Product 1"}, {"id": 2, "name": "Product 2"}],
            "meta": {"pagination": {"page": 1, "pageCount": 2}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("pagination[page]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 3, "name": "Product 3"}],
            "meta": {"pagination": {"page": 2, "pageCount": 2}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = PaginationController::new(products_config(&mock_server), fast_client());
    controller.settle().await;
    assert!(controller.has_next_page());

    controller.on_end_reached();
    assert!(controller.is_fetching_next_page());
    controller.settle().await;

    let names: Vec<String> = controller
        .items()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Product 1", "Product 2", "Product 3"]);
    assert!(!controller.has_next_page());
}

#[tokio::test]
async fn test_custom_collection_path_and_page_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .and(query_param("pagination[page]", "1"))
        .and(query_param("pagination[pageSize]", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{"id": 10}],
            "meta": {"pagination": {"page": 1, "pageCount": 1}}
        })))
        .mount(&mock_server)
        .await;

    let config = ListConfig::builder()
        .endpoint(format!("{}/catalog", mock_server.uri()))
        .items_per_page(5)
        .collection_path("products")
        .build();
    let mut controller = PaginationController::new(config, fast_client());
    controller.settle().await;

    assert_eq!(controller.store().total_items(), 1);
}

// ============================================================================
// Identity Resets
// ============================================================================

#[tokio::test]
async fn test_refetch_token_change_refetches_from_page_one() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("pagination[page]", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}],
            "meta": {"pagination": {"page": 1, "pageCount": 1}}
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut controller = PaginationController::new(products_config(&mock_server), fast_client());
    controller.settle().await;
    assert_eq!(controller.store().total_items(), 1);

    controller.set_refetch_token(1);
    assert_eq!(controller.status(), FetchStatus::Loading);
    assert_eq!(controller.store().total_items(), 0);

    controller.settle().await;
    assert_eq!(controller.store().total_items(), 1);
}

#[tokio::test]
async fn test_endpoint_change_discards_old_aggregate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}, {"id": 2}],
            "meta": {"pagination": {"page": 1, "pageCount": 1}}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vendors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 9}],
            "meta": {"pagination": {"page": 1, "pageCount": 1}}
        })))
        .mount(&mock_server)
        .await;

    let mut controller = PaginationController::new(products_config(&mock_server), fast_client());
    controller.settle().await;
    assert_eq!(controller.store().total_items(), 2);

    controller.set_endpoint(Some(format!("{}/vendors", mock_server.uri())));
    controller.settle().await;

    let ids: Vec<u64> = controller
        .items()
        .map(|item| item["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![9]);
}
