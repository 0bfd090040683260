/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::transaction::DisputeService;
use crate::application::services::common::{fetch_one, fetch_page, resource_path};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::responses::DisputeResponse;
use crate::presentation::dispute::Dispute;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the dispute service
pub struct DisputeServiceImpl {
    http_client: Arc<HttpClient>,
}

impl DisputeServiceImpl {
    /// Creates a new instance of the dispute service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl DisputeService for DisputeServiceImpl {
    async fn fetch(&self, dispute_id: &str) -> Result<Dispute, AppError> {
        debug!("Fetching dispute: {}", dispute_id);
        fetch_one::<DisputeResponse>(&self.http_client, &resource_path("disputes", dispute_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<Dispute>, AppError> {
        fetch_page::<DisputeResponse>(&self.http_client, "/disputes", params).await
    }
}
