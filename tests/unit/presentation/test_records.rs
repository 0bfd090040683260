use assert_json_diff::assert_json_eq;
use balanced_client::prelude::*;

#[test]
fn test_default_record_serializes_to_empty_object() {
    assert_json_eq!(serde_json::to_value(Card::default()).unwrap(), json!({}));
    assert_json_eq!(serde_json::to_value(Customer::default()).unwrap(), json!({}));
    assert_json_eq!(serde_json::to_value(BankAccount::default()).unwrap(), json!({}));
}

#[test]
fn test_amount_required_records_always_send_amount() {
    assert_json_eq!(
        serde_json::to_value(Credit::new(100, "payout")).unwrap(),
        json!({"amount": 100, "description": "payout"})
    );
    assert_json_eq!(
        serde_json::to_value(CardHold::default()).unwrap(),
        json!({"amount": 0})
    );
}

#[test]
fn test_card_decodes_api_payload() {
    let json = r#"{
        "id": "CC4zyuNpxY0A0eAf87SeULCR",
        "href": "/cards/CC4zyuNpxY0A0eAf87SeULCR",
        "number": "xxxxxxxxxxxx5100",
        "expiration_month": 12,
        "expiration_year": 2020,
        "cvv": "xxx",
        "cvv_match": "yes",
        "cvv_result": "Match",
        "name": null,
        "address": {"city": null, "country_code": null, "line1": null, "line2": null, "postal_code": null, "state": null},
        "avs_postal_match": null,
        "avs_result": null,
        "avs_street_match": null,
        "bank_name": "BANK OF HAWAII",
        "brand": "MasterCard",
        "can_credit": false,
        "can_debit": true,
        "fingerprint": "fc4ccd5de54f42a5e75f76fbfde60948440c7a382ee7d21b2bc509ab9cfed788",
        "is_verified": true,
        "meta": {},
        "links": {"customer": null},
        "created_at": "2014-04-25T20:09:23.434009Z",
        "updated_at": "2014-04-25T20:09:23.434011Z"
    }"#;
    let card: Card = serde_json::from_str(json).unwrap();
    assert_eq!(card.brand.as_deref(), Some("MasterCard"));
    assert_eq!(card.address, Some(Address::default()));
    assert_eq!(card.is_verified, Some(true));
    assert!(card.customer_id().is_none());
}

#[test]
fn test_status_round_trip_and_finality() {
    let statuses: Vec<Status> =
        serde_json::from_str(r#"["pending", "succeeded", "failed", "won", "lost", "new"]"#).unwrap();
    assert_eq!(
        statuses,
        vec![
            Status::Pending,
            Status::Succeeded,
            Status::Failed,
            Status::Won,
            Status::Lost,
            Status::Unknown
        ]
    );
    assert!(!Status::Pending.is_final());
    assert!(Status::Succeeded.is_final());
    assert_eq!(serde_json::to_string(&Status::Succeeded).unwrap(), r#""succeeded""#);
}

#[test]
fn test_record_display_is_json() {
    let debit = Debit::new(5000, "Order #1");
    let shown = debit.to_string();
    let value: Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(value["amount"], 5000);
}

#[test]
fn test_bank_account_type_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&BankAccountType::Savings).unwrap(),
        r#""savings""#
    );
    assert_eq!(
        serde_json::to_string(&CallbackMethod::Put).unwrap(),
        r#""put""#
    );
}

#[test]
fn test_unknown_enum_values_decode() {
    let bank_account: BankAccount =
        serde_json::from_str(r#"{"id": "BA1", "account_type": "money_market"}"#).unwrap();
    assert_eq!(bank_account.account_type, Some(BankAccountType::Unknown));

    let callback: Callback =
        serde_json::from_str(r#"{"id": "CB1", "url": "http://example.com/hook", "method": "patch"}"#)
            .unwrap();
    assert_eq!(callback.method, Some(CallbackMethod::Unknown));
}
