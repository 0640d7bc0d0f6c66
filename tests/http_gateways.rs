//! Integration tests for the HTTP gateways using wiremock mocks.
//!
//! The gateways use a blocking client (they run on the worker thread), so
//! each call is moved onto a blocking task while the mock server runs on the
//! tokio runtime.

use eatery_map::catalog::{CatalogSource, HttpCatalogSource};
use eatery_map::reviews::{HttpReviewsGateway, ReviewsGateway};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn catalog_source_loads_and_normalizes() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "data": [
            {
                "id": 1,
                "attributes": {
                    "name": "Little Bird",
                    "description": "Garden cafe",
                    "city": "Lusaka",
                    "category": "Cafe",
                    "latitude": -15.4,
                    "longitude": 28.3,
                    "placeId": "place-1",
                    "images": { "data": [ { "attributes": { "url": "/uploads/a.jpg" } } ] }
                }
            },
            { "id": 2, "attributes": { "description": "record without a name" } }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/eateries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let url = format!("{}/eateries", server.uri());
    let eateries = tokio::task::spawn_blocking(move || {
        HttpCatalogSource::new(url).expect("client construction").load()
    })
    .await
    .expect("blocking task")
    .expect("catalog load");

    assert_eq!(eateries.len(), 1);
    assert_eq!(eateries[0].name, "Little Bird");
    assert_eq!(eateries[0].place_id.as_deref(), Some("place-1"));
    assert_eq!(eateries[0].media.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn catalog_source_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eateries"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = format!("{}/eateries", server.uri());
    let result = tokio::task::spawn_blocking(move || {
        HttpCatalogSource::new(url).expect("client construction").load()
    })
    .await
    .expect("blocking task");

    assert!(result.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn reviews_gateway_queries_the_proxy() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "reviews": [
            { "author_name": "Chipo", "rating": 5, "text": "Great", "time": 1700000000 },
            { "author_name": "Mwila", "rating": 4, "text": "", "time": 1690000000 }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/google-reviews"))
        .and(query_param("placeId", "place-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let base = server.uri();
    let reviews = tokio::task::spawn_blocking(move || {
        HttpReviewsGateway::new(base)
            .expect("client construction")
            .fetch("place-1")
    })
    .await
    .expect("blocking task")
    .expect("review fetch");

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].author_name, "Chipo");
    assert_eq!(reviews[0].rating, 5);
    assert_eq!(reviews[1].timestamp_seconds, 1_690_000_000);
}

#[tokio::test(flavor = "multi_thread")]
async fn reviews_gateway_treats_empty_payload_as_no_reviews() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google-reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let base = server.uri();
    let reviews = tokio::task::spawn_blocking(move || {
        HttpReviewsGateway::new(base)
            .expect("client construction")
            .fetch("place-1")
    })
    .await
    .expect("blocking task")
    .expect("review fetch");

    assert!(reviews.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn reviews_gateway_surfaces_proxy_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google-reviews"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let base = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        HttpReviewsGateway::new(base)
            .expect("client construction")
            .fetch("place-1")
    })
    .await
    .expect("blocking task");

    assert!(result.is_err());
}
