// Shared helpers for the mock server tests

use balanced_client::prelude::*;
use mockito::ServerGuard;
use serde_json::Map;

pub const TEST_SECRET: &str = "test_secret";

/// `Basic base64("test_secret:")`
pub const BASIC_AUTH: &str = "Basic dGVzdF9zZWNyZXQ6";

pub fn test_config(server_url: &str) -> Config {
    Config::with_base_url_and_secret(server_url, Some(TEST_SECRET))
}

pub fn test_client(server: &ServerGuard) -> Client {
    Client::new(test_config(&server.url())).expect("Failed to create client")
}

/// Single item response body: `{"<key>": [item], "links": {}}`
pub fn envelope(key: &str, items: Value) -> String {
    let mut body = Map::new();
    body.insert(key.to_string(), items);
    body.insert("links".to_string(), json!({}));
    Value::Object(body).to_string()
}

/// List response body with a `meta` pagination object
pub fn page_envelope(key: &str, items: Value, offset: u32, limit: u32, total: u64) -> String {
    let href = |o: u32| format!("/{key}?limit={limit}&offset={o}");
    let next = if u64::from(offset + limit) < total {
        Value::String(href(offset + limit))
    } else {
        Value::Null
    };
    let previous = if offset > 0 {
        Value::String(href(offset.saturating_sub(limit)))
    } else {
        Value::Null
    };
    let last = match total {
        0 => 0,
        t => ((t - 1) / u64::from(limit) * u64::from(limit)) as u32,
    };
    let mut body = Map::new();
    body.insert(key.to_string(), items);
    body.insert("links".to_string(), json!({}));
    body.insert(
        "meta".to_string(),
        json!({
            "first": href(0),
            "href": href(offset),
            "last": href(last),
            "limit": limit,
            "next": next,
            "offset": offset,
            "previous": previous,
            "total": total
        }),
    );
    Value::Object(body).to_string()
}

/// Error response body with a single error
pub fn error_body(status: &str, status_code: u16, category_code: &str, description: &str) -> String {
    json!({
        "errors": [{
            "status": status,
            "category_code": category_code,
            "category_type": "request",
            "description": description,
            "request_id": "OHMfaf5ae6c9a2f11e3b2fd02a1fe53e539",
            "status_code": status_code
        }]
    })
    .to_string()
}
