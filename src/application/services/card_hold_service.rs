/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::transaction::CardHoldService;
use crate::application::services::common::{
    create_one, fetch_one, fetch_page, nested_path, resource_path, update_one,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::requests::VoidRequest;
use crate::model::responses::{CardHoldResponse, DebitResponse};
use crate::presentation::card_hold::CardHold;
use crate::presentation::debit::Debit;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the card hold service
pub struct CardHoldServiceImpl {
    http_client: Arc<HttpClient>,
}

impl CardHoldServiceImpl {
    /// Creates a new instance of the card hold service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl CardHoldService for CardHoldServiceImpl {
    async fn create(&self, card_id: &str, hold: &CardHold) -> Result<CardHold, AppError> {
        info!("Placing hold on card {}: {} cents", card_id, hold.amount);
        let path = nested_path("cards", card_id, "card_holds")?;
        create_one::<CardHoldResponse, _>(&self.http_client, &path, Some(hold)).await
    }

    async fn fetch(&self, hold_id: &str) -> Result<CardHold, AppError> {
        debug!("Fetching card hold: {}", hold_id);
        fetch_one::<CardHoldResponse>(&self.http_client, &resource_path("card_holds", hold_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<CardHold>, AppError> {
        debug!("Listing card holds");
        fetch_page::<CardHoldResponse>(&self.http_client, "/card_holds", params).await
    }

    async fn update(&self, hold_id: &str, params: &Value) -> Result<CardHold, AppError> {
        info!("Updating card hold: {}", hold_id);
        let path = resource_path("card_holds", hold_id)?;
        update_one::<CardHoldResponse, _>(&self.http_client, &path, params).await
    }

    async fn capture(&self, hold_id: &str, debit: &Debit) -> Result<Debit, AppError> {
        info!("Capturing card hold {}: {:?} cents", hold_id, debit.amount);
        let path = nested_path("card_holds", hold_id, "debits")?;
        create_one::<DebitResponse, _>(&self.http_client, &path, Some(debit)).await
    }

    async fn void(&self, hold_id: &str) -> Result<CardHold, AppError> {
        info!("Voiding card hold: {}", hold_id);
        let path = resource_path("card_holds", hold_id)?;
        let hold = update_one::<CardHoldResponse, _>(&self.http_client, &path, &VoidRequest::default()).await?;
        debug!("Card hold {} voided at {:?}", hold_id, hold.voided_at);
        Ok(hold)
    }
}
