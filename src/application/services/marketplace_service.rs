/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::marketplace::{
    ApiKeyService, CallbackService, EventService, MarketplaceService,
};
use crate::application::services::common::{
    create_one, delete_resource, fetch_one, fetch_page, resource_path,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::requests::CallbackRequest;
use crate::model::responses::{ApiKeyResponse, CallbackResponse, EventResponse, MarketplaceResponse};
use crate::presentation::api_key::ApiKey;
use crate::presentation::callback::{Callback, CallbackMethod};
use crate::presentation::event::Event;
use crate::presentation::marketplace::Marketplace;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the marketplace service
pub struct MarketplaceServiceImpl {
    http_client: Arc<HttpClient>,
}

impl MarketplaceServiceImpl {
    /// Creates a new instance of the marketplace service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl MarketplaceService for MarketplaceServiceImpl {
    async fn create(&self) -> Result<Marketplace, AppError> {
        info!("Creating marketplace");
        let marketplace: Marketplace =
            create_one::<MarketplaceResponse, ()>(&self.http_client, "/marketplaces", None).await?;
        debug!("Marketplace created: {:?}", marketplace.id);
        Ok(marketplace)
    }
}

/// Implementation of the API key service
pub struct ApiKeyServiceImpl {
    http_client: Arc<HttpClient>,
}

impl ApiKeyServiceImpl {
    /// Creates a new instance of the API key service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl ApiKeyService for ApiKeyServiceImpl {
    async fn create(&self) -> Result<ApiKey, AppError> {
        info!("Creating API key");
        let api_key: ApiKey = create_one::<ApiKeyResponse, ()>(&self.http_client, "/api_keys", None).await?;
        debug!("API key created: {:?}", api_key.id);
        Ok(api_key)
    }

    async fn fetch(&self, api_key_id: &str) -> Result<ApiKey, AppError> {
        debug!("Fetching API key: {}", api_key_id);
        fetch_one::<ApiKeyResponse>(&self.http_client, &resource_path("api_keys", api_key_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<ApiKey>, AppError> {
        fetch_page::<ApiKeyResponse>(&self.http_client, "/api_keys", params).await
    }

    async fn delete(&self, api_key_id: &str) -> Result<bool, AppError> {
        info!("Deleting API key: {}", api_key_id);
        delete_resource(&self.http_client, &resource_path("api_keys", api_key_id)?).await
    }
}

/// Implementation of the callback service
pub struct CallbackServiceImpl {
    http_client: Arc<HttpClient>,
}

impl CallbackServiceImpl {
    /// Creates a new instance of the callback service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl CallbackService for CallbackServiceImpl {
    async fn create(&self, url: &str, method: CallbackMethod) -> Result<Callback, AppError> {
        info!("Registering callback: {} {}", method, url);
        let body = CallbackRequest { url, method };
        create_one::<CallbackResponse, _>(&self.http_client, "/callbacks", Some(&body)).await
    }

    async fn fetch(&self, callback_id: &str) -> Result<Callback, AppError> {
        debug!("Fetching callback: {}", callback_id);
        fetch_one::<CallbackResponse>(&self.http_client, &resource_path("callbacks", callback_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<Callback>, AppError> {
        fetch_page::<CallbackResponse>(&self.http_client, "/callbacks", params).await
    }

    async fn delete(&self, callback_id: &str) -> Result<bool, AppError> {
        info!("Deleting callback: {}", callback_id);
        delete_resource(&self.http_client, &resource_path("callbacks", callback_id)?).await
    }
}

/// Implementation of the event service
pub struct EventServiceImpl {
    http_client: Arc<HttpClient>,
}

impl EventServiceImpl {
    /// Creates a new instance of the event service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl EventService for EventServiceImpl {
    async fn fetch(&self, event_id: &str) -> Result<Event, AppError> {
        debug!("Fetching event: {}", event_id);
        fetch_one::<EventResponse>(&self.http_client, &resource_path("events", event_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<Event>, AppError> {
        debug!("Listing events");
        fetch_page::<EventResponse>(&self.http_client, "/events", params).await
    }
}
