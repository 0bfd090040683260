/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::pagination::{ListParams, Page};
use crate::presentation::api_key::ApiKey;
use crate::presentation::callback::{Callback, CallbackMethod};
use crate::presentation::event::Event;
use crate::presentation::marketplace::Marketplace;
use async_trait::async_trait;

/// Interface for the marketplace service
#[async_trait]
pub trait MarketplaceService: Send + Sync {
    /// Creates the marketplace owning the configured API key
    async fn create(&self) -> Result<Marketplace, AppError>;
}

/// Interface for the API key service
#[async_trait]
pub trait ApiKeyService: Send + Sync {
    /// Creates an API key
    ///
    /// Works without a secret, which is how the very first key is obtained.
    async fn create(&self) -> Result<ApiKey, AppError>;

    /// Fetches an API key by id
    async fn fetch(&self, api_key_id: &str) -> Result<ApiKey, AppError>;

    /// Lists API keys
    async fn list(&self, params: &ListParams) -> Result<Page<ApiKey>, AppError>;

    /// Deletes an API key
    async fn delete(&self, api_key_id: &str) -> Result<bool, AppError>;
}

/// Interface for the callback service
#[async_trait]
pub trait CallbackService: Send + Sync {
    /// Registers a callback url
    async fn create(&self, url: &str, method: CallbackMethod) -> Result<Callback, AppError>;

    /// Fetches a callback by id
    async fn fetch(&self, callback_id: &str) -> Result<Callback, AppError>;

    /// Lists callbacks
    async fn list(&self, params: &ListParams) -> Result<Page<Callback>, AppError>;

    /// Deletes a callback
    async fn delete(&self, callback_id: &str) -> Result<bool, AppError>;
}

/// Interface for the event service
#[async_trait]
pub trait EventService: Send + Sync {
    /// Fetches an event by id
    async fn fetch(&self, event_id: &str) -> Result<Event, AppError>;

    /// Lists events
    async fn list(&self, params: &ListParams) -> Result<Page<Event>, AppError>;
}
