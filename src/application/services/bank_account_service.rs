/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::funding::BankAccountService;
use crate::application::services::common::{
    create_one, delete_resource, fetch_one, fetch_page, link_update, nested_path, resource_path,
    update_one,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::requests::{DebitRequest, MetaUpdateRequest};
use crate::model::responses::{BankAccountResponse, CreditResponse, DebitResponse};
use crate::presentation::bank_account::BankAccount;
use crate::presentation::common::Metadata;
use crate::presentation::credit::Credit;
use crate::presentation::debit::Debit;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the bank account service
pub struct BankAccountServiceImpl {
    http_client: Arc<HttpClient>,
}

impl BankAccountServiceImpl {
    /// Creates a new instance of the bank account service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl BankAccountService for BankAccountServiceImpl {
    async fn create(&self, bank_account: &BankAccount) -> Result<BankAccount, AppError> {
        info!("Creating bank account");
        create_one::<BankAccountResponse, _>(&self.http_client, "/bank_accounts", Some(bank_account)).await
    }

    async fn fetch(&self, bank_account_id: &str) -> Result<BankAccount, AppError> {
        debug!("Fetching bank account: {}", bank_account_id);
        let path = resource_path("bank_accounts", bank_account_id)?;
        fetch_one::<BankAccountResponse>(&self.http_client, &path).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<BankAccount>, AppError> {
        debug!("Listing bank accounts");
        fetch_page::<BankAccountResponse>(&self.http_client, "/bank_accounts", params).await
    }

    async fn update(&self, bank_account_id: &str, params: &Value) -> Result<BankAccount, AppError> {
        info!("Updating bank account: {}", bank_account_id);
        let path = resource_path("bank_accounts", bank_account_id)?;
        update_one::<BankAccountResponse, _>(&self.http_client, &path, params).await
    }

    async fn update_meta(&self, bank_account_id: &str, meta: &Metadata) -> Result<BankAccount, AppError> {
        info!("Updating metadata of bank account: {}", bank_account_id);
        let path = resource_path("bank_accounts", bank_account_id)?;
        let body = MetaUpdateRequest { meta };
        update_one::<BankAccountResponse, _>(&self.http_client, &path, &body).await
    }

    async fn delete(&self, bank_account_id: &str) -> Result<bool, AppError> {
        info!("Deleting bank account: {}", bank_account_id);
        delete_resource(&self.http_client, &resource_path("bank_accounts", bank_account_id)?).await
    }

    async fn associate_with_customer(
        &self,
        bank_account_id: &str,
        customer_id: &str,
    ) -> Result<BankAccount, AppError> {
        info!(
            "Associating bank account {} with customer {}",
            bank_account_id, customer_id
        );
        let params = link_update("customer", "customers", customer_id)?;
        self.update(bank_account_id, &params).await
    }

    async fn debit(&self, bank_account_id: &str, debit: &Debit) -> Result<Debit, AppError> {
        info!("Debiting bank account {}: {:?} cents", bank_account_id, debit.amount);
        let path = nested_path("bank_accounts", bank_account_id, "debits")?;
        let body = DebitRequest::from(debit);
        create_one::<DebitResponse, _>(&self.http_client, &path, Some(&body)).await
    }

    async fn credit(&self, bank_account_id: &str, credit: &Credit) -> Result<Credit, AppError> {
        info!("Crediting bank account {}: {} cents", bank_account_id, credit.amount);
        let path = nested_path("bank_accounts", bank_account_id, "credits")?;
        create_one::<CreditResponse, _>(&self.http_client, &path, Some(credit)).await
    }
}
