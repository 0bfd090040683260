/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Balanced Client
//!
//! A Rust client for the Balanced Payments REST API.
//!
//! Every REST resource family (cards, customers, bank accounts, debits,
//! credits, refunds, reversals, card holds, verifications, orders, events,
//! callbacks, API keys, marketplaces and disputes) is exposed as a service
//! trait with a thin implementation over a shared, authenticated HTTP
//! transport.
//!
//! ## Example
//!
//! ```ignore
//! use balanced_client::prelude::*;
//!
//! let client = Client::new(Config::new().with_secret("ak-test-..."))?;
//!
//! let card = client
//!     .cards()
//!     .create(&Card {
//!         number: Some("4111111111111111".to_string()),
//!         expiration_month: Some(12),
//!         expiration_year: Some(2030),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let page = client.cards().list(&ListParams::page(0, 25)).await?;
//! info!("{} cards in total", page.pagination.total);
//! ```

/// Service interfaces, implementations, client and configuration
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Transport, envelopes and pagination
pub mod model;
/// Prelude with the most commonly used types
pub mod prelude;
/// Resource records mirroring the remote JSON schema
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
