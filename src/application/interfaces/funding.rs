/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::pagination::{ListParams, Page};
use crate::presentation::bank_account::BankAccount;
use crate::presentation::card::Card;
use crate::presentation::common::Metadata;
use crate::presentation::credit::Credit;
use crate::presentation::debit::Debit;
use crate::presentation::verification::Verification;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the card service
#[async_trait]
pub trait CardService: Send + Sync {
    /// Tokenizes a card
    async fn create(&self, card: &Card) -> Result<Card, AppError>;

    /// Fetches a card by id
    async fn fetch(&self, card_id: &str) -> Result<Card, AppError>;

    /// Lists cards
    async fn list(&self, params: &ListParams) -> Result<Page<Card>, AppError>;

    /// Updates the given fields of a card
    async fn update(&self, card_id: &str, params: &Value) -> Result<Card, AppError>;

    /// Deletes a card
    async fn delete(&self, card_id: &str) -> Result<bool, AppError>;

    /// Links a card to a customer
    async fn associate_with_customer(&self, card_id: &str, customer_id: &str) -> Result<Card, AppError>;

    /// Charges a card
    async fn charge(&self, card_id: &str, debit: &Debit) -> Result<Debit, AppError>;

    /// Pushes funds to a card
    ///
    /// Amounts above $2,500 are rejected with `AppError::InvalidInput`
    /// before any request is sent.
    async fn credit(&self, card_id: &str, credit: &Credit) -> Result<Credit, AppError>;
}

/// Interface for the bank account service
#[async_trait]
pub trait BankAccountService: Send + Sync {
    /// Tokenizes a bank account
    async fn create(&self, bank_account: &BankAccount) -> Result<BankAccount, AppError>;

    /// Fetches a bank account by id
    async fn fetch(&self, bank_account_id: &str) -> Result<BankAccount, AppError>;

    /// Lists bank accounts
    async fn list(&self, params: &ListParams) -> Result<Page<BankAccount>, AppError>;

    /// Updates the given fields of a bank account
    async fn update(&self, bank_account_id: &str, params: &Value) -> Result<BankAccount, AppError>;

    /// Replaces the metadata of a bank account
    async fn update_meta(&self, bank_account_id: &str, meta: &Metadata) -> Result<BankAccount, AppError>;

    /// Deletes a bank account
    async fn delete(&self, bank_account_id: &str) -> Result<bool, AppError>;

    /// Links a bank account to a customer
    async fn associate_with_customer(
        &self,
        bank_account_id: &str,
        customer_id: &str,
    ) -> Result<BankAccount, AppError>;

    /// Debits a verified bank account
    async fn debit(&self, bank_account_id: &str, debit: &Debit) -> Result<Debit, AppError>;

    /// Pays out to a bank account
    async fn credit(&self, bank_account_id: &str, credit: &Credit) -> Result<Credit, AppError>;
}

/// Interface for the bank account verification service
#[async_trait]
pub trait VerificationService: Send + Sync {
    /// Starts a micro-deposit verification of a bank account
    async fn create(&self, bank_account_id: &str) -> Result<Verification, AppError>;

    /// Fetches a verification by id
    async fn fetch(&self, verification_id: &str) -> Result<Verification, AppError>;

    /// Confirms the two deposited amounts, in cents
    ///
    /// A wrong pair is not an error: the returned verification stays pending
    /// with one attempt fewer remaining.
    async fn confirm(&self, verification_id: &str, amount_1: i64, amount_2: i64)
    -> Result<Verification, AppError>;
}
