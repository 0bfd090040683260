/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::transaction::DebitService;
use crate::application::services::common::{
    create_one, fetch_one, fetch_page, nested_path, resource_path, update_one,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::responses::{DebitResponse, RefundResponse};
use crate::presentation::debit::Debit;
use crate::presentation::refund::Refund;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the debit service
pub struct DebitServiceImpl {
    http_client: Arc<HttpClient>,
}

impl DebitServiceImpl {
    /// Creates a new instance of the debit service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl DebitService for DebitServiceImpl {
    async fn fetch(&self, debit_id: &str) -> Result<Debit, AppError> {
        debug!("Fetching debit: {}", debit_id);
        fetch_one::<DebitResponse>(&self.http_client, &resource_path("debits", debit_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<Debit>, AppError> {
        debug!("Listing debits");
        fetch_page::<DebitResponse>(&self.http_client, "/debits", params).await
    }

    async fn update(&self, debit_id: &str, params: &Value) -> Result<Debit, AppError> {
        info!("Updating debit: {}", debit_id);
        update_one::<DebitResponse, _>(&self.http_client, &resource_path("debits", debit_id)?, params).await
    }

    async fn refund(&self, debit_id: &str, refund: &Refund) -> Result<Refund, AppError> {
        info!("Refunding debit {}: {:?} cents", debit_id, refund.amount);
        let path = nested_path("debits", debit_id, "refunds")?;
        let refund: Refund = create_one::<RefundResponse, _>(&self.http_client, &path, Some(refund)).await?;
        debug!("Refund created: {:?}", refund.id);
        Ok(refund)
    }
}
