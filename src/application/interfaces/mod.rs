/// Customer and order service interfaces
pub mod customer;
/// Card, bank account and verification service interfaces
pub mod funding;
/// Marketplace, API key, callback and event service interfaces
pub mod marketplace;
/// Debit, credit, refund, reversal, hold and dispute service interfaces
pub mod transaction;
