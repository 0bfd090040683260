/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::transaction::RefundService;
use crate::application::services::common::{fetch_one, fetch_page, resource_path, update_one};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::responses::RefundResponse;
use crate::presentation::refund::Refund;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the refund service
///
/// Refunds are created through `DebitService::refund`.
pub struct RefundServiceImpl {
    http_client: Arc<HttpClient>,
}

impl RefundServiceImpl {
    /// Creates a new instance of the refund service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl RefundService for RefundServiceImpl {
    async fn fetch(&self, refund_id: &str) -> Result<Refund, AppError> {
        debug!("Fetching refund: {}", refund_id);
        fetch_one::<RefundResponse>(&self.http_client, &resource_path("refunds", refund_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<Refund>, AppError> {
        fetch_page::<RefundResponse>(&self.http_client, "/refunds", params).await
    }

    async fn update(&self, refund_id: &str, params: &Value) -> Result<Refund, AppError> {
        info!("Updating refund: {}", refund_id);
        update_one::<RefundResponse, _>(&self.http_client, &resource_path("refunds", refund_id)?, params).await
    }
}
