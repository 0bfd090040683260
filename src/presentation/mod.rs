//! Typed records of every Balanced resource.
//!
//! Records double as request payloads: unset optional fields are not
//! serialized, so `Card { number: Some(..), ..Default::default() }` is a
//! valid create body.

/// API key models
pub mod api_key;
/// Bank account models
pub mod bank_account;
/// Webhook models
pub mod callback;
/// Card models
pub mod card;
/// Card hold models
pub mod card_hold;
/// Shared address, status and metadata types
pub mod common;
/// Credit (payout) models
pub mod credit;
/// Customer models
pub mod customer;
/// Debit (charge) models
pub mod debit;
/// Dispute models
pub mod dispute;
/// Event models
pub mod event;
/// Marketplace models
pub mod marketplace;
/// Order models
pub mod order;
/// Refund models
pub mod refund;
/// Reversal models
pub mod reversal;
/// Serialization utilities for API responses
pub mod serialization;
/// Bank account verification models
pub mod verification;
