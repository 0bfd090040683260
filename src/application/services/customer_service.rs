/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::customer::CustomerService;
use crate::application::interfaces::funding::{BankAccountService, CardService};
use crate::application::services::bank_account_service::BankAccountServiceImpl;
use crate::application::services::card_service::CardServiceImpl;
use crate::application::services::common::{
    create_one, delete_resource, fetch_one, fetch_page, resource_path, update_one,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::responses::CustomerResponse;
use crate::presentation::bank_account::BankAccount;
use crate::presentation::card::Card;
use crate::presentation::customer::Customer;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the customer service
pub struct CustomerServiceImpl {
    http_client: Arc<HttpClient>,
}

impl CustomerServiceImpl {
    /// Creates a new instance of the customer service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl CustomerService for CustomerServiceImpl {
    async fn create(&self, customer: &Customer) -> Result<Customer, AppError> {
        info!("Creating customer");
        let customer: Customer =
            create_one::<CustomerResponse, _>(&self.http_client, "/customers", Some(customer)).await?;
        debug!("Customer created: {:?}", customer.id);
        Ok(customer)
    }

    async fn fetch(&self, customer_id: &str) -> Result<Customer, AppError> {
        debug!("Fetching customer: {}", customer_id);
        fetch_one::<CustomerResponse>(&self.http_client, &resource_path("customers", customer_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<Customer>, AppError> {
        debug!("Listing customers");
        fetch_page::<CustomerResponse>(&self.http_client, "/customers", params).await
    }

    async fn update(&self, customer_id: &str, params: &Value) -> Result<Customer, AppError> {
        info!("Updating customer: {}", customer_id);
        let path = resource_path("customers", customer_id)?;
        update_one::<CustomerResponse, _>(&self.http_client, &path, params).await
    }

    async fn delete(&self, customer_id: &str) -> Result<bool, AppError> {
        info!("Deleting customer: {}", customer_id);
        delete_resource(&self.http_client, &resource_path("customers", customer_id)?).await
    }

    async fn associate_with_card(&self, customer_id: &str, card_id: &str) -> Result<Card, AppError> {
        CardServiceImpl::new(self.http_client.clone())
            .associate_with_customer(card_id, customer_id)
            .await
    }

    async fn associate_with_bank_account(
        &self,
        customer_id: &str,
        bank_account_id: &str,
    ) -> Result<BankAccount, AppError> {
        BankAccountServiceImpl::new(self.http_client.clone())
            .associate_with_customer(bank_account_id, customer_id)
            .await
    }
}
