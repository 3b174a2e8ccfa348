mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::{Value, json};
use shortly::api::handlers::{redirect_handler, shorten_handler};
use shortly::state::AppState;

fn shorten_app(state: AppState) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_shorten_returns_well_formed_code() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();

    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        body["short_url"].as_str().unwrap(),
        format!("{}/{}", common::BASE_URL, code)
    );
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/target?x=1" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 307);
    assert_eq!(redirect.header("location"), "https://example.com/target?x=1");
}

#[tokio::test]
async fn test_shorten_bare_host_round_trip_adds_scheme() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "example.com" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 307);
    assert_eq!(redirect.header("location"), "http://example.com");
}

#[tokio::test]
async fn test_shorten_same_url_twice_yields_distinct_codes() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    first.assert_status_ok();
    second.assert_status_ok();

    let first_code = first.json::<Value>()["code"].as_str().unwrap().to_string();
    let second_code = second.json::<Value>()["code"].as_str().unwrap().to_string();

    assert_ne!(first_code, second_code);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_shorten_stores_submitted_text_verbatim() {
    // No write-time validation: free-form text is accepted and stored as-is.
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not a url at all" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 307);
    assert_eq!(redirect.header("location"), "http://not a url at all");
}
