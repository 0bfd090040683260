use crate::common::{envelope, error_body, page_envelope, test_client};
use balanced_client::prelude::*;
use mockito::{Matcher, Server};

fn hold_json(voided: bool) -> Value {
    json!({
        "id": "HL1",
        "href": "/card_holds/HL1",
        "amount": 5000,
        "currency": "USD",
        "description": "Some descriptive text for the debit in the dashboard",
        "expires_at": "2014-03-13T19:13:47.000000Z",
        "status": "succeeded",
        "voided_at": if voided { json!("2014-03-07T19:13:47.000000Z") } else { Value::Null },
        "links": {"card": "CC1", "debit": null}
    })
}

#[tokio::test]
async fn test_card_hold_create_capture_and_void() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/cards/CC1/card_holds")
        .match_body(Matcher::Json(json!({
            "amount": 5000,
            "description": "Some descriptive text for the debit in the dashboard"
        })))
        .with_status(201)
        .with_body(envelope("card_holds", json!([hold_json(false)])))
        .create_async()
        .await;
    let capture = server
        .mock("POST", "/card_holds/HL1/debits")
        .match_body(Matcher::Json(json!({"description": "capture"})))
        .with_status(201)
        .with_body(envelope(
            "debits",
            json!([{"id": "WD1", "href": "/debits/WD1", "amount": 5000, "status": "succeeded"}]),
        ))
        .create_async()
        .await;
    let void = server
        .mock("PUT", "/card_holds/HL1")
        .match_body(Matcher::Json(json!({"is_void": true})))
        .with_status(200)
        .with_body(envelope("card_holds", json!([hold_json(true)])))
        .create_async()
        .await;

    let client = test_client(&server);
    let hold = client
        .card_holds()
        .create(
            "CC1",
            &CardHold {
                amount: 5000,
                description: Some(
                    "Some descriptive text for the debit in the dashboard".to_string(),
                ),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create hold");
    assert!(!hold.is_voided());
    assert!(hold.expires_at.is_some());

    let debit = client
        .card_holds()
        .capture(
            "HL1",
            &Debit {
                description: Some("capture".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to capture hold");
    assert_eq!(debit.amount, Some(5000));

    let voided = client.card_holds().void("HL1").await.expect("Failed to void hold");

    create.assert_async().await;
    capture.assert_async().await;
    void.assert_async().await;
    assert!(voided.is_voided());
}

#[tokio::test]
async fn test_refund_debit_and_fetch_refund() {
    let mut server = Server::new_async().await;
    let refund_json = json!({
        "id": "RF1",
        "href": "/refunds/RF1",
        "amount": 3000,
        "status": "succeeded",
        "links": {"debit": "WD1", "dispute": null, "order": null}
    });
    let create = server
        .mock("POST", "/debits/WD1/refunds")
        .match_body(Matcher::Json(json!({"amount": 3000, "description": "partial"})))
        .with_status(201)
        .with_body(envelope("refunds", json!([refund_json.clone()])))
        .create_async()
        .await;
    let fetch = server
        .mock("GET", "/refunds/RF1")
        .with_status(200)
        .with_body(envelope("refunds", json!([refund_json])))
        .create_async()
        .await;

    let client = test_client(&server);
    let refund = client
        .debits()
        .refund(
            "WD1",
            &Refund {
                amount: Some(3000),
                description: Some("partial".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to refund debit");
    let fetched = client.refunds().fetch("RF1").await.expect("Failed to fetch refund");

    create.assert_async().await;
    fetch.assert_async().await;
    assert_eq!(refund, fetched);
    assert_eq!(fetched.links.and_then(|l| l.debit).as_deref(), Some("WD1"));
}

#[tokio::test]
async fn test_full_refund_sends_empty_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/debits/WD1/refunds")
        .match_body(Matcher::Json(json!({})))
        .with_status(201)
        .with_body(envelope("refunds", json!([{"id": "RF2", "href": "/refunds/RF2", "amount": 5000}])))
        .create_async()
        .await;

    let refund = test_client(&server)
        .debits()
        .refund("WD1", &Refund::default())
        .await
        .expect("Failed to refund debit");

    mock.assert_async().await;
    assert_eq!(refund.amount, Some(5000));
}

#[tokio::test]
async fn test_debit_fetch_list_update() {
    let mut server = Server::new_async().await;
    let debit_json = json!({"id": "WD1", "href": "/debits/WD1", "amount": 5000, "meta": {"a": "b"}});
    let fetch = server
        .mock("GET", "/debits/WD1")
        .with_status(200)
        .with_body(envelope("debits", json!([debit_json.clone()])))
        .create_async()
        .await;
    let list = server
        .mock("GET", "/debits")
        .match_query(Matcher::UrlEncoded("status".into(), "succeeded".into()))
        .with_status(200)
        .with_body(page_envelope("debits", json!([debit_json.clone()]), 0, 10, 1))
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/debits/WD1")
        .match_body(Matcher::Json(json!({"meta": {"a": "b"}})))
        .with_status(200)
        .with_body(envelope("debits", json!([debit_json])))
        .create_async()
        .await;

    let client = test_client(&server);
    let debit = client.debits().fetch("WD1").await.unwrap();
    let page = client
        .debits()
        .list(&ListParams::new().with_filter("status", "succeeded"))
        .await
        .unwrap();
    let updated = client
        .debits()
        .update("WD1", &json!({"meta": {"a": "b"}}))
        .await
        .unwrap();

    fetch.assert_async().await;
    list.assert_async().await;
    update.assert_async().await;
    assert_eq!(page.items[0], debit);
    assert_eq!(updated.meta.get("a").map(String::as_str), Some("b"));
}

#[tokio::test]
async fn test_credit_for_order_sets_order_href() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/bank_accounts/BA1/credits")
        .match_body(Matcher::Json(json!({
            "amount": 2000,
            "description": "payout",
            "order": "/orders/OR1"
        })))
        .with_status(201)
        .with_body(envelope(
            "credits",
            json!([{"id": "CR1", "href": "/credits/CR1", "amount": 2000, "links": {"order": "OR1"}}]),
        ))
        .create_async()
        .await;

    let credit = test_client(&server)
        .credits()
        .create_for_order("BA1", "OR1", &Credit::new(2000, "payout"))
        .await
        .expect("Failed to credit order");

    mock.assert_async().await;
    assert_eq!(credit.links.and_then(|l| l.order).as_deref(), Some("OR1"));
}

#[tokio::test]
async fn test_credit_to_card_over_limit_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;

    let err = test_client(&server)
        .credits()
        .create_to_card("CC1", &Credit::new(300_000, "too much"))
        .await
        .expect_err("should be rejected");

    mock.assert_async().await;
    assert!(err.to_string().contains("tried crediting 3000.00"));
}

#[tokio::test]
async fn test_credit_over_order_escrow_is_an_api_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/bank_accounts/BA1/credits")
        .with_status(409)
        .with_body(error_body(
            "Conflict",
            409,
            "insufficient-funds",
            "Order OR1 has insufficient funds.",
        ))
        .create_async()
        .await;

    let err = test_client(&server)
        .credits()
        .create_for_order("BA1", "OR1", &Credit::new(1_000_000, "too much"))
        .await
        .expect_err("should fail");

    mock.assert_async().await;
    let api = err.as_api_error().expect("API error");
    assert_eq!(api.status, StatusCode::CONFLICT);
    assert_eq!(api.category_code(), Some("insufficient-funds"));
    assert!(err.to_string().ends_with("409 Order OR1 has insufficient funds."));
}

#[tokio::test]
async fn test_reversal_create_and_update() {
    let mut server = Server::new_async().await;
    let reversal_json = json!({
        "id": "RV1",
        "href": "/reversals/RV1",
        "amount": 1000,
        "status": "pending",
        "links": {"credit": "CR1", "order": null}
    });
    let create = server
        .mock("POST", "/credits/CR1/reversals")
        .match_body(Matcher::Json(json!({"amount": 1000})))
        .with_status(201)
        .with_body(envelope("reversals", json!([reversal_json.clone()])))
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/reversals/RV1")
        .match_body(Matcher::Json(json!({"description": "returned"})))
        .with_status(200)
        .with_body(envelope("reversals", json!([reversal_json])))
        .create_async()
        .await;

    let client = test_client(&server);
    let reversal = client
        .reversals()
        .create(
            "CR1",
            &Reversal {
                amount: Some(1000),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to reverse credit");
    client
        .reversals()
        .update("RV1", &json!({"description": "returned"}))
        .await
        .expect("Failed to update reversal");

    create.assert_async().await;
    update.assert_async().await;
    assert_eq!(reversal.links.and_then(|l| l.credit).as_deref(), Some("CR1"));
}

#[tokio::test]
async fn test_list_disputes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/disputes")
        .with_status(200)
        .with_body(page_envelope(
            "disputes",
            json!([{
                "id": "DT1",
                "href": "/disputes/DT1",
                "amount": 5000,
                "currency": "USD",
                "reason": "fraud",
                "status": "lost",
                "initiated_at": "2014-03-06T19:13:46.224000Z",
                "respond_by": "2014-04-06T19:13:46.224000Z",
                "links": {"transaction": "WD1"}
            }]),
            0,
            10,
            1,
        ))
        .create_async()
        .await;

    let page = test_client(&server)
        .disputes()
        .list(&ListParams::new())
        .await
        .expect("Failed to list disputes");

    mock.assert_async().await;
    let dispute = &page.items[0];
    assert_eq!(dispute.status, Some(Status::Lost));
    assert!(dispute.respond_by > dispute.initiated_at);
}
