//! Shared fixtures for the endpoint tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use tiktok_business::Client;
use wiremock::{MockServer, Request, ResponseTemplate};

pub const ADVERTISER_ID: &str = "123456789";
pub const TOKEN: &str = "test-token";

/// A successful envelope around `data`
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": 0,
        "message": "OK",
        "request_id": "test-request-id",
        "data": data,
    }))
}

/// A failed envelope
pub fn api_error(code: i64, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": code,
        "message": message,
        "request_id": "test-request-id",
    }))
}

pub fn page_info(page: i64, page_size: i64, total_number: i64, total_page: i64) -> Value {
    json!({
        "page": page,
        "page_size": page_size,
        "total_number": total_number,
        "total_page": total_page,
    })
}

/// Starts a mock server and a client pointed at it
pub async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::builder()
        .access_token(TOKEN)
        .base_url(server.uri())
        .build()
        .unwrap();
    (server, client)
}

/// The only request the server received
pub async fn single_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

/// Every value sent for `key`, in order
pub fn query_values(request: &Request, key: &str) -> Vec<String> {
    request
        .url
        .query_pairs()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}

pub fn query_value(request: &Request, key: &str) -> Option<String> {
    query_values(request, key).into_iter().next()
}

/// Decodes a JSON encoded query parameter
pub fn query_json<T: serde::de::DeserializeOwned>(request: &Request, key: &str) -> T {
    let raw = query_value(request, key).unwrap_or_else(|| panic!("missing query param {key}"));
    serde_json::from_str(&raw).unwrap()
}
