/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error types returned by every operation of the client.
//!
//! Two families exist: local or transport failures (bad URLs, encoding,
//! network) which are propagated as-is, and remote API failures (any non-2xx
//! status) which are decoded from the Balanced error envelope into
//! [`ApiError`]. Nothing is retried.

use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result alias used across the crate
pub type BalancedResult<T> = Result<T, AppError>;

/// One entry of the `errors` array in a Balanced error response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseError {
    /// Textual status, e.g. "Conflict"
    #[serde(default)]
    pub status: Option<String>,
    /// Machine readable category, e.g. "card-not-validated"
    #[serde(default)]
    pub category_code: Option<String>,
    /// Broad category, e.g. "request" or "logical"
    #[serde(default)]
    pub category_type: Option<String>,
    /// Human readable description of the failure
    #[serde(default)]
    pub description: Option<String>,
    /// Server side request identifier, useful for support requests
    #[serde(default)]
    pub request_id: Option<String>,
    /// Numeric HTTP status as reported in the body
    #[serde(default)]
    pub status_code: Option<u16>,
}

/// Error envelope returned by the API on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Errors reported by the server
    #[serde(default)]
    pub errors: Vec<ErrorResponseError>,
}

/// A non-2xx response from the Balanced API
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Method of the request that failed
    pub method: Method,
    /// Fully resolved URL of the request that failed
    pub url: Url,
    /// HTTP status of the response
    pub status: StatusCode,
    /// Errors decoded from the response body; empty if it was not an envelope
    pub errors: Vec<ErrorResponseError>,
    /// Raw response body
    pub body: String,
}

impl ApiError {
    /// Builds an `ApiError` from a failed response body
    pub fn from_body(method: Method, url: Url, status: StatusCode, body: String) -> Self {
        let errors = serde_json::from_str::<ErrorResponse>(&body)
            .map(|envelope| envelope.errors)
            .unwrap_or_default();
        Self {
            method,
            url,
            status,
            errors,
            body,
        }
    }

    /// First error reported by the server, if any
    pub fn first(&self) -> Option<&ErrorResponseError> {
        self.errors.first()
    }

    /// Category code of the first reported error
    pub fn category_code(&self) -> Option<&str> {
        self.first().and_then(|e| e.category_code.as_deref())
    }

    /// Description of the first reported error
    pub fn description(&self) -> Option<&str> {
        self.first().and_then(|e| e.description.as_deref())
    }

    /// Request id of the first reported error
    pub fn request_id(&self) -> Option<&str> {
        self.first().and_then(|e| e.request_id.as_deref())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {}",
            self.method,
            self.url,
            self.status.as_u16(),
            self.description().unwrap_or_default()
        )
    }
}

impl std::error::Error for ApiError {}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure
    Network(reqwest::Error),
    /// I/O failure
    Io(std::io::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// A path or base URL that could not be parsed
    InvalidUrl(String),
    /// Input rejected locally before any request was sent
    InvalidInput(String),
    /// Response decoded but did not contain what was expected
    Deserialization(String),
    /// The API answered with a status outside 200..=299
    Api(ApiError),
}

impl AppError {
    /// HTTP status of the failed response, when the error came from the API
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api(e) => Some(e.status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// The API error, when the error came from the API
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            AppError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidUrl(s) => write!(f, "invalid url: {s}"),
            AppError::InvalidInput(s) => write!(f, "invalid input: {s}"),
            AppError::Deserialization(s) => write!(f, "deserialization error: {s}"),
            AppError::Api(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}
