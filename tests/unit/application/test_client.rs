use crate::common::{BASIC_AUTH, envelope, test_config};
use balanced_client::prelude::*;
use mockito::Server;
use tokio_test::block_on;

#[test]
fn test_client_rejects_invalid_base_url() {
    let result = Client::new(Config::with_base_url_and_secret("::not a url::", None));
    assert!(matches!(result, Err(AppError::InvalidUrl(_))));
}

#[test]
fn test_client_exposes_config() {
    let client = Client::new(test_config("http://localhost:8080")).unwrap();
    assert_eq!(client.config().rest_api.base_url, "http://localhost:8080");
    assert_eq!(client.http_client().base_url().as_str(), "http://localhost:8080/");
}

#[test]
fn test_client_with_custom_reqwest_client() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/events/EV1")
        .match_header("authorization", BASIC_AUTH)
        .match_header("accept", ACCEPT_HEADER)
        .with_status(200)
        .with_body(envelope("events", json!([{"id": "EV1", "type": "debit.created"}])))
        .create();

    let http = reqwest::Client::builder().build().unwrap();
    let client = Client::with_http_client(test_config(&server.url()), http).unwrap();
    let event = block_on(client.events().fetch("EV1")).expect("Failed to fetch event");

    mock.assert();
    assert_eq!(event.event_type, "debit.created");
}

#[test]
fn test_services_can_be_used_as_trait_objects() {
    let client = Client::new(test_config("http://localhost:8080")).unwrap();
    let service: &dyn EventService = client.events();
    let result = block_on(service.fetch(""));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}
