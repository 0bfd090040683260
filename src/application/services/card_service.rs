/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::funding::CardService;
use crate::application::services::common::{
    create_one, delete_resource, fetch_one, fetch_page, link_update, nested_path, resource_path,
    update_one,
};
use crate::constants::MAX_CARD_CREDIT_AMOUNT;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::responses::{CardResponse, CreditResponse, DebitResponse};
use crate::presentation::card::Card;
use crate::presentation::credit::Credit;
use crate::presentation::debit::Debit;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Implementation of the card service
pub struct CardServiceImpl {
    http_client: Arc<HttpClient>,
}

impl CardServiceImpl {
    /// Creates a new instance of the card service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl CardService for CardServiceImpl {
    async fn create(&self, card: &Card) -> Result<Card, AppError> {
        info!("Creating card");
        let card: Card = create_one::<CardResponse, _>(&self.http_client, "/cards", Some(card)).await?;
        debug!("Card created: {:?}", card.id);
        Ok(card)
    }

    async fn fetch(&self, card_id: &str) -> Result<Card, AppError> {
        debug!("Fetching card: {}", card_id);
        fetch_one::<CardResponse>(&self.http_client, &resource_path("cards", card_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<Card>, AppError> {
        debug!("Listing cards");
        fetch_page::<CardResponse>(&self.http_client, "/cards", params).await
    }

    async fn update(&self, card_id: &str, params: &Value) -> Result<Card, AppError> {
        info!("Updating card: {}", card_id);
        update_one::<CardResponse, _>(&self.http_client, &resource_path("cards", card_id)?, params).await
    }

    async fn delete(&self, card_id: &str) -> Result<bool, AppError> {
        info!("Deleting card: {}", card_id);
        delete_resource(&self.http_client, &resource_path("cards", card_id)?).await
    }

    async fn associate_with_customer(&self, card_id: &str, customer_id: &str) -> Result<Card, AppError> {
        info!("Associating card {} with customer {}", card_id, customer_id);
        let params = link_update("customer", "customers", customer_id)?;
        self.update(card_id, &params).await
    }

    async fn charge(&self, card_id: &str, debit: &Debit) -> Result<Debit, AppError> {
        info!("Charging card {}: {:?} cents", card_id, debit.amount);
        let path = nested_path("cards", card_id, "debits")?;
        create_one::<DebitResponse, _>(&self.http_client, &path, Some(debit)).await
    }

    async fn credit(&self, card_id: &str, credit: &Credit) -> Result<Credit, AppError> {
        if credit.amount > MAX_CARD_CREDIT_AMOUNT {
            warn!("Refusing card credit of {} cents", credit.amount);
            return Err(AppError::InvalidInput(format!(
                "cannot credit more than $2,500 to a card, but tried crediting {:.2}",
                credit.amount as f64 / 100.0
            )));
        }
        info!("Crediting card {}: {} cents", card_id, credit.amount);
        let path = nested_path("cards", card_id, "credits")?;
        create_one::<CreditResponse, _>(&self.http_client, &path, Some(credit)).await
    }
}
