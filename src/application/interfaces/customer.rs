/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::pagination::{ListParams, Page};
use crate::presentation::bank_account::BankAccount;
use crate::presentation::card::Card;
use crate::presentation::customer::Customer;
use crate::presentation::order::Order;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the customer service
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Creates a customer
    async fn create(&self, customer: &Customer) -> Result<Customer, AppError>;

    /// Fetches a customer by id
    async fn fetch(&self, customer_id: &str) -> Result<Customer, AppError>;

    /// Lists customers
    async fn list(&self, params: &ListParams) -> Result<Page<Customer>, AppError>;

    /// Updates the given fields of a customer
    ///
    /// # Arguments
    /// * `customer_id` - Customer to update
    /// * `params` - JSON object with the fields to change, e.g. `{"email": "..."}`
    async fn update(&self, customer_id: &str, params: &Value) -> Result<Customer, AppError>;

    /// Deletes a customer
    ///
    /// # Returns
    /// * `Ok(true)` - The API answered with a 2xx status
    async fn delete(&self, customer_id: &str) -> Result<bool, AppError>;

    /// Attaches a card to a customer
    async fn associate_with_card(&self, customer_id: &str, card_id: &str) -> Result<Card, AppError>;

    /// Attaches a bank account to a customer
    async fn associate_with_bank_account(
        &self,
        customer_id: &str,
        bank_account_id: &str,
    ) -> Result<BankAccount, AppError>;
}

/// Interface for the order service
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Creates an order whose seller is the given customer
    async fn create(&self, customer_id: &str, order: &Order) -> Result<Order, AppError>;

    /// Fetches an order by id
    async fn fetch(&self, order_id: &str) -> Result<Order, AppError>;

    /// Lists orders
    async fn list(&self, params: &ListParams) -> Result<Page<Order>, AppError>;

    /// Updates the given fields of an order
    async fn update(&self, order_id: &str, params: &Value) -> Result<Order, AppError>;
}
