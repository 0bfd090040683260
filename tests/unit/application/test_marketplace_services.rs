use crate::common::{BASIC_AUTH, envelope, page_envelope, test_client};
use balanced_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_first_api_key_is_created_without_auth() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api_keys")
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", Matcher::Missing)
        .with_status(201)
        .with_body(envelope(
            "api_keys",
            json!([{
                "id": "AK1",
                "href": "/api_keys/AK1",
                "secret": "ak-test-2eKlj1ZDfAcZSARMf3NMhBHywDej0avSY",
                "links": {},
                "meta": {},
                "created_at": "2014-03-06T19:13:46.224000Z"
            }]),
        ))
        .create_async()
        .await;

    let client = Client::new(Config::with_base_url_and_secret(&server.url(), None))
        .expect("Failed to create client");
    let api_key = client.api_keys().create().await.expect("Failed to create API key");

    mock.assert_async().await;
    assert_eq!(api_key.id.as_deref(), Some("AK1"));
    assert!(api_key.secret.as_deref().is_some_and(|s| s.starts_with("ak-test-")));
}

#[tokio::test]
async fn test_marketplace_create_with_new_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/marketplaces")
        .match_header("authorization", BASIC_AUTH)
        .with_status(201)
        .with_body(envelope(
            "marketplaces",
            json!([{
                "id": "TEST-MP1",
                "href": "/marketplaces/TEST-MP1",
                "name": "Test Marketplace",
                "support_email_address": "support@example.com",
                "support_phone_number": "+16505551234",
                "domain_url": "example.com",
                "in_escrow": 0,
                "unsettled_fees": 0,
                "production": false,
                "links": {"owner_customer": "CU1"},
                "meta": {}
            }]),
        ))
        .create_async()
        .await;

    let marketplace = test_client(&server)
        .marketplaces()
        .create()
        .await
        .expect("Failed to create marketplace");

    mock.assert_async().await;
    assert!(!marketplace.production);
    assert_eq!(
        marketplace.links.get("owner_customer").cloned().flatten().as_deref(),
        Some("CU1")
    );
}

#[tokio::test]
async fn test_api_key_fetch_list_delete() {
    let mut server = Server::new_async().await;
    let key = json!({"id": "AK1", "href": "/api_keys/AK1", "links": null});
    let fetch = server
        .mock("GET", "/api_keys/AK1")
        .with_status(200)
        .with_body(envelope("api_keys", json!([key.clone()])))
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api_keys")
        .with_status(200)
        .with_body(page_envelope("api_keys", json!([key]), 0, 10, 1))
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api_keys/AK1")
        .with_status(204)
        .create_async()
        .await;

    let client = test_client(&server);
    let fetched = client.api_keys().fetch("AK1").await.unwrap();
    let page = client.api_keys().list(&ListParams::new()).await.unwrap();
    let deleted = client.api_keys().delete("AK1").await.unwrap();

    fetch.assert_async().await;
    list.assert_async().await;
    delete.assert_async().await;
    assert!(fetched.secret.is_none());
    assert!(fetched.links.is_empty());
    assert_eq!(page.pagination.total, 1);
    assert!(deleted);
}

#[tokio::test]
async fn test_callback_create_and_delete() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/callbacks")
        .match_body(Matcher::Json(json!({
            "url": "http://www.example.com/callback",
            "method": "post"
        })))
        .with_status(201)
        .with_body(envelope(
            "callbacks",
            json!([{
                "id": "CB1",
                "href": "/callbacks/CB1",
                "url": "http://www.example.com/callback",
                "method": "post",
                "revision": "1.1",
                "links": {}
            }]),
        ))
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/callbacks/CB1")
        .with_status(204)
        .create_async()
        .await;

    let client = test_client(&server);
    let callback = client
        .callbacks()
        .create("http://www.example.com/callback", CallbackMethod::Post)
        .await
        .expect("Failed to create callback");
    let deleted = client.callbacks().delete("CB1").await.expect("Failed to delete callback");

    create.assert_async().await;
    delete.assert_async().await;
    assert_eq!(callback.method, Some(CallbackMethod::Post));
    assert_eq!(callback.revision.as_deref(), Some("1.1"));
    assert!(deleted);
}

#[tokio::test]
async fn test_failed_delete_is_an_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/callbacks/CB404")
        .with_status(404)
        .with_body("")
        .create_async()
        .await;

    let err = test_client(&server)
        .callbacks()
        .delete("CB404")
        .await
        .expect_err("404 should fail");

    mock.assert_async().await;
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_list_and_fetch_events() {
    let mut server = Server::new_async().await;
    let event = json!({
        "id": "EV1",
        "href": "/events/EV1",
        "type": "account.created",
        "occurred_at": "2014-03-06T19:13:46.224000Z",
        "links": {},
        "entity": {"customers": [{"id": "CU1", "href": "/customers/CU1"}]},
        "callback_statuses": {"failed": 0, "pending": 0, "retrying": 0, "succeeded": 1}
    });
    let list = server
        .mock("GET", "/events")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".into(), "0".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(page_envelope("events", json!([event.clone()]), 0, 1, 4))
        .create_async()
        .await;
    let fetch = server
        .mock("GET", "/events/EV1")
        .with_status(200)
        .with_body(envelope("events", json!([event])))
        .create_async()
        .await;

    let client = test_client(&server);
    let page = client.events().list(&ListParams::page(0, 1)).await.unwrap();
    let event = client.events().fetch("EV1").await.unwrap();

    list.assert_async().await;
    fetch.assert_async().await;
    assert!(page.pagination.has_next());
    assert_eq!(page.items[0], event);
    assert_eq!(event.event_type, "account.created");
    let entity = event.entity.expect("event carries an entity");
    assert_eq!(entity.customers[0].id.as_deref(), Some("CU1"));
}
