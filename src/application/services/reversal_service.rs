/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::transaction::ReversalService;
use crate::application::services::common::{
    create_one, fetch_one, fetch_page, nested_path, resource_path, update_one,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::responses::ReversalResponse;
use crate::presentation::reversal::Reversal;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the reversal service
pub struct ReversalServiceImpl {
    http_client: Arc<HttpClient>,
}

impl ReversalServiceImpl {
    /// Creates a new instance of the reversal service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl ReversalService for ReversalServiceImpl {
    async fn create(&self, credit_id: &str, reversal: &Reversal) -> Result<Reversal, AppError> {
        info!("Reversing credit {}: {:?} cents", credit_id, reversal.amount);
        let path = nested_path("credits", credit_id, "reversals")?;
        create_one::<ReversalResponse, _>(&self.http_client, &path, Some(reversal)).await
    }

    async fn fetch(&self, reversal_id: &str) -> Result<Reversal, AppError> {
        debug!("Fetching reversal: {}", reversal_id);
        fetch_one::<ReversalResponse>(&self.http_client, &resource_path("reversals", reversal_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<Reversal>, AppError> {
        fetch_page::<ReversalResponse>(&self.http_client, "/reversals", params).await
    }

    async fn update(&self, reversal_id: &str, params: &Value) -> Result<Reversal, AppError> {
        info!("Updating reversal: {}", reversal_id);
        let path = resource_path("reversals", reversal_id)?;
        update_one::<ReversalResponse, _>(&self.http_client, &path, params).await
    }
}
