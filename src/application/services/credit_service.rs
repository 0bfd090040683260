/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::funding::{BankAccountService, CardService};
use crate::application::interfaces::transaction::CreditService;
use crate::application::services::bank_account_service::BankAccountServiceImpl;
use crate::application::services::card_service::CardServiceImpl;
use crate::application::services::common::{
    fetch_one, fetch_page, nested_path, resource_path, update_one,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::responses::CreditResponse;
use crate::presentation::credit::Credit;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the credit service
///
/// Creation is delegated to the bank account and card services, which own
/// the nested `/credits` paths.
pub struct CreditServiceImpl {
    http_client: Arc<HttpClient>,
}

impl CreditServiceImpl {
    /// Creates a new instance of the credit service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl CreditService for CreditServiceImpl {
    async fn create_to_bank_account(&self, bank_account_id: &str, credit: &Credit) -> Result<Credit, AppError> {
        BankAccountServiceImpl::new(self.http_client.clone())
            .credit(bank_account_id, credit)
            .await
    }

    async fn create_to_card(&self, card_id: &str, credit: &Credit) -> Result<Credit, AppError> {
        CardServiceImpl::new(self.http_client.clone())
            .credit(card_id, credit)
            .await
    }

    async fn create_for_order(
        &self,
        bank_account_id: &str,
        order_id: &str,
        credit: &Credit,
    ) -> Result<Credit, AppError> {
        info!("Paying out order {} to bank account {}", order_id, bank_account_id);
        let credit = Credit {
            order: Some(resource_path("orders", order_id)?),
            ..credit.clone()
        };
        self.create_to_bank_account(bank_account_id, &credit).await
    }

    async fn fetch(&self, credit_id: &str) -> Result<Credit, AppError> {
        debug!("Fetching credit: {}", credit_id);
        fetch_one::<CreditResponse>(&self.http_client, &resource_path("credits", credit_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<Credit>, AppError> {
        debug!("Listing credits");
        fetch_page::<CreditResponse>(&self.http_client, "/credits", params).await
    }

    async fn list_for_bank_account(
        &self,
        bank_account_id: &str,
        params: &ListParams,
    ) -> Result<Page<Credit>, AppError> {
        debug!("Listing credits of bank account: {}", bank_account_id);
        let path = nested_path("bank_accounts", bank_account_id, "credits")?;
        fetch_page::<CreditResponse>(&self.http_client, &path, params).await
    }

    async fn update(&self, credit_id: &str, params: &Value) -> Result<Credit, AppError> {
        info!("Updating credit: {}", credit_id);
        update_one::<CreditResponse, _>(&self.http_client, &resource_path("credits", credit_id)?, params).await
    }
}
