/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::pagination::{ListParams, Page};
use crate::presentation::card_hold::CardHold;
use crate::presentation::credit::Credit;
use crate::presentation::debit::Debit;
use crate::presentation::dispute::Dispute;
use crate::presentation::refund::Refund;
use crate::presentation::reversal::Reversal;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the debit service
#[async_trait]
pub trait DebitService: Send + Sync {
    /// Fetches a debit by id
    async fn fetch(&self, debit_id: &str) -> Result<Debit, AppError>;

    /// Lists debits
    async fn list(&self, params: &ListParams) -> Result<Page<Debit>, AppError>;

    /// Updates the given fields of a debit
    async fn update(&self, debit_id: &str, params: &Value) -> Result<Debit, AppError>;

    /// Refunds a debit, fully when `refund.amount` is unset
    async fn refund(&self, debit_id: &str, refund: &Refund) -> Result<Refund, AppError>;
}

/// Interface for the credit service
#[async_trait]
pub trait CreditService: Send + Sync {
    /// Pays out to a bank account
    async fn create_to_bank_account(&self, bank_account_id: &str, credit: &Credit) -> Result<Credit, AppError>;

    /// Pushes funds to a card
    async fn create_to_card(&self, card_id: &str, credit: &Credit) -> Result<Credit, AppError>;

    /// Pays the escrow of an order out to the seller's bank account
    async fn create_for_order(
        &self,
        bank_account_id: &str,
        order_id: &str,
        credit: &Credit,
    ) -> Result<Credit, AppError>;

    /// Fetches a credit by id
    async fn fetch(&self, credit_id: &str) -> Result<Credit, AppError>;

    /// Lists credits
    async fn list(&self, params: &ListParams) -> Result<Page<Credit>, AppError>;

    /// Lists the credits paid to one bank account
    async fn list_for_bank_account(
        &self,
        bank_account_id: &str,
        params: &ListParams,
    ) -> Result<Page<Credit>, AppError>;

    /// Updates the given fields of a credit
    async fn update(&self, credit_id: &str, params: &Value) -> Result<Credit, AppError>;
}

/// Interface for the refund service
#[async_trait]
pub trait RefundService: Send + Sync {
    /// Fetches a refund by id
    async fn fetch(&self, refund_id: &str) -> Result<Refund, AppError>;

    /// Lists refunds
    async fn list(&self, params: &ListParams) -> Result<Page<Refund>, AppError>;

    /// Updates the given fields of a refund
    async fn update(&self, refund_id: &str, params: &Value) -> Result<Refund, AppError>;
}

/// Interface for the reversal service
#[async_trait]
pub trait ReversalService: Send + Sync {
    /// Reverses a credit, fully when `reversal.amount` is unset
    async fn create(&self, credit_id: &str, reversal: &Reversal) -> Result<Reversal, AppError>;

    /// Fetches a reversal by id
    async fn fetch(&self, reversal_id: &str) -> Result<Reversal, AppError>;

    /// Lists reversals
    async fn list(&self, params: &ListParams) -> Result<Page<Reversal>, AppError>;

    /// Updates the given fields of a reversal
    async fn update(&self, reversal_id: &str, params: &Value) -> Result<Reversal, AppError>;
}

/// Interface for the card hold service
#[async_trait]
pub trait CardHoldService: Send + Sync {
    /// Places a hold on a card
    async fn create(&self, card_id: &str, hold: &CardHold) -> Result<CardHold, AppError>;

    /// Fetches a hold by id
    async fn fetch(&self, hold_id: &str) -> Result<CardHold, AppError>;

    /// Lists holds
    async fn list(&self, params: &ListParams) -> Result<Page<CardHold>, AppError>;

    /// Updates the given fields of a hold
    async fn update(&self, hold_id: &str, params: &Value) -> Result<CardHold, AppError>;

    /// Captures up to the held amount, producing a debit
    async fn capture(&self, hold_id: &str, debit: &Debit) -> Result<Debit, AppError>;

    /// Releases the hold; a voided hold can no longer be captured
    async fn void(&self, hold_id: &str) -> Result<CardHold, AppError>;
}

/// Interface for the dispute service
#[async_trait]
pub trait DisputeService: Send + Sync {
    /// Fetches a dispute by id
    async fn fetch(&self, dispute_id: &str) -> Result<Dispute, AppError>;

    /// Lists disputes
    async fn list(&self, params: &ListParams) -> Result<Page<Dispute>, AppError>;
}
