//! Shared helpers for the API integration tests
#![allow(dead_code)]

use axum_test::TestServer;
use folio::prelude::*;
use serde_json::{json, Value};

pub const TOKEN: &str = "test-token";

/// Fresh server with empty in-memory stores and one accepted token
pub fn server() -> TestServer {
    let config = AppConfig {
        api_tokens: vec![TOKEN.to_string()],
        ..AppConfig::default()
    };
    let state = AppState::in_memory(&config);
    let auth = TokenAuth::new(config.api_tokens.clone());
    TestServer::new(build_router(state, auth))
}

pub async fn create_author(server: &TestServer, name: &str) -> String {
    let response = server
        .post("/api/v1/authors")
        .authorization_bearer(TOKEN)
        .json(&json!({ "name": name }))
        .await;
    assert_eq!(response.status_code(), axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"]["id"]
        .as_str()
        .expect("created author should have an id")
        .to_string()
}

pub async fn create_book(server: &TestServer, title: &str) -> String {
    let response = server
        .post("/api/v1/books")
        .authorization_bearer(TOKEN)
        .json(&json!({
            "title": title,
            "description": "A description",
            "publication_year": "1984",
        }))
        .await;
    assert_eq!(response.status_code(), axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"]["id"]
        .as_str()
        .expect("created book should have an id")
        .to_string()
}

/// Linked author ids for a book, as a sorted set
pub async fn linked_author_ids(server: &TestServer, book_id: &str) -> Vec<String> {
    let response = server
        .get(&format!("/api/v1/books/{book_id}/authors"))
        .authorization_bearer(TOKEN)
        .await;
    assert_eq!(response.status_code(), axum::http::StatusCode::OK);
    let mut ids: Vec<String> = response.json::<Value>()["data"]
        .as_array()
        .expect("relation listing should be an array")
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    ids
}

pub fn sorted(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids
}
