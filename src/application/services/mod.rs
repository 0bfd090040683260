/// Bank account service
pub mod bank_account_service;
/// Card hold service
pub mod card_hold_service;
/// Card service
pub mod card_service;
mod common;
/// Credit service
pub mod credit_service;
/// Customer service
pub mod customer_service;
/// Debit service
pub mod debit_service;
/// Dispute service
pub mod dispute_service;
/// Marketplace, API key, callback and event services
pub mod marketplace_service;
/// Order service
pub mod order_service;
/// Refund service
pub mod refund_service;
/// Reversal service
pub mod reversal_service;
/// Bank account verification service
pub mod verification_service;

pub use bank_account_service::*;
pub use card_hold_service::*;
pub use card_service::*;
pub use credit_service::*;
pub use customer_service::*;
pub use debit_service::*;
pub use dispute_service::*;
pub use marketplace_service::*;
pub use order_service::*;
pub use refund_service::*;
pub use reversal_service::*;
pub use verification_service::*;

pub use crate::application::interfaces::customer::*;
pub use crate::application::interfaces::funding::*;
pub use crate::application::interfaces::marketplace::*;
pub use crate::application::interfaces::transaction::*;
