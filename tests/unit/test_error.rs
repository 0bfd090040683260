use balanced_client::error::{ApiError, AppError};
use reqwest::{Method, StatusCode, Url};

fn url() -> Url {
    Url::parse("https://api.balancedpayments.com/debits/WD123").unwrap()
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("amount must be positive".to_string());
    assert_eq!(error.to_string(), "invalid input: amount must be positive");
}

#[test]
fn test_app_error_display_invalid_url() {
    let error = AppError::InvalidUrl("not a url".to_string());
    assert_eq!(error.to_string(), "invalid url: not a url");
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("response contained no cards".to_string());
    assert_eq!(
        error.to_string(),
        "deserialization error: response contained no cards"
    );
}

#[test]
fn test_app_error_from_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_err.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error:"));
}

#[test]
fn test_app_error_from_io_error() {
    let error: AppError = std::io::Error::other("broken pipe").into();
    assert!(matches!(error, AppError::Io(_)));
    assert_eq!(error.to_string(), "io error: broken pipe");
}

#[test]
fn test_api_error_display_embeds_request_and_first_description() {
    let body = r#"{"errors":[
        {"status":"Bad Request","category_code":"request","description":"Invalid field [amount]","status_code":400},
        {"status":"Bad Request","category_code":"request","description":"second","status_code":400}
    ]}"#;
    let error: AppError =
        ApiError::from_body(Method::PUT, url(), StatusCode::BAD_REQUEST, body.to_string()).into();
    assert_eq!(
        error.to_string(),
        "PUT https://api.balancedpayments.com/debits/WD123: 400 Invalid field [amount]"
    );
    let api = error.as_api_error().unwrap();
    assert_eq!(api.errors.len(), 2);
    assert_eq!(api.category_code(), Some("request"));
    assert_eq!(api.request_id(), None);
}

#[test]
fn test_api_error_keeps_raw_body() {
    let error = ApiError::from_body(
        Method::GET,
        url(),
        StatusCode::INTERNAL_SERVER_ERROR,
        "oops".to_string(),
    );
    assert_eq!(error.body, "oops");
    assert!(error.first().is_none());
}
