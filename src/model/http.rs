/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::{ACCEPT_HEADER, JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::{ApiError, AppError};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Query parameters attached to a request, in order
pub type Query = [(String, String)];

/// Authenticated transport shared by every resource service
///
/// Holds only immutable state: the configuration, the parsed base URL and a
/// `reqwest` connection pool. It is meant to be wrapped in an `Arc` once and
/// cloned into each service.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    base_url: Url,
}

impl HttpClient {
    /// Creates a new transport with its own `reqwest` client
    ///
    /// # Arguments
    /// * `config` - Configuration containing the secret and base URL
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Transport ready to use
    /// * `Err(AppError)` - If the base URL does not parse or the client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;
        Self::with_http_client(config, http_client)
    }

    /// Creates a new transport around a caller supplied `reqwest` client
    ///
    /// The user agent header is still set on every request.
    pub fn with_http_client(config: Config, http_client: Client) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.rest_api.base_url).map_err(|e| {
            AppError::InvalidUrl(format!("{}: {e}", config.rest_api.base_url))
        })?;
        Ok(Self {
            http_client,
            config: Arc::new(config),
            base_url,
        })
    }

    /// Configuration this transport was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URL every path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a relative path (or absolute href) against the base URL
    pub fn resolve(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::InvalidUrl(format!("{path}: {e}")))
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T, AppError> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, &[], body).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    /// Makes a DELETE request and returns the response status
    ///
    /// The body of a successful delete is never decoded, so 204 responses work.
    pub async fn delete(&self, path: &str) -> Result<StatusCode, AppError> {
        self.request_status(Method::DELETE, path, &[], None::<&()>)
            .await
    }

    /// Makes a request and decodes a 2xx JSON body into `T`
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let response = self.send(method, path, query, body).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Makes a request and returns the raw 2xx body without decoding it
    pub async fn request_raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<Vec<u8>, AppError> {
        let response = self.send(method, path, query, body).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Makes a request and returns only the 2xx status
    pub async fn request_status<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<StatusCode, AppError> {
        let response = self.send(method, path, query, body).await?;
        Ok(response.status())
    }

    /// Builds, authenticates and sends a request; non-2xx responses become `AppError::Api`
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let url = self.resolve(path)?;
        make_http_request(
            &self.http_client,
            self.config.credentials.secret.as_deref(),
            method,
            url,
            query,
            body,
        )
        .await
    }
}

/// Makes a single authenticated HTTP request against the Balanced API
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `secret` - API key secret sent as the basic auth username, if any
/// * `method` - HTTP method
/// * `url` - Fully resolved URL
/// * `query` - Query parameters appended to the URL
/// * `body` - Optional request body, serialized to JSON
///
/// # Returns
///
/// * `Ok(Response)` - Response with a 2xx status
/// * `Err(AppError)` - Transport failure, or `AppError::Api` carrying the decoded error envelope
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    secret: Option<&str>,
    method: Method,
    mut url: Url,
    query: &Query,
    body: Option<&B>,
) -> Result<Response, AppError> {
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    debug!("{} {}", method, url);

    let mut request = client
        .request(method.clone(), url.clone())
        .header(ACCEPT, ACCEPT_HEADER)
        .header(reqwest::header::USER_AGENT, USER_AGENT);

    if let Some(b) = body {
        let encoded = serde_json::to_vec(b)?;
        request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(encoded);
    }

    if let Some(secret) = secret.filter(|s| !s.is_empty()) {
        request = request.basic_auth(secret, None::<&str>);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    let api_error = ApiError::from_body(method, url, status, body);
    error!("Request failed: {}", api_error);
    Err(AppError::Api(api_error))
}
