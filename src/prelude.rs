/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Balanced Client Prelude
//!
//! Imports the client, every service trait and every resource record in one
//! line.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use balanced_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::new())?;
//! let customers = client.customers().list(&ListParams::page(0, 10)).await?;
//! info!("{} customers", customers.pagination.total);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Balanced API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Entry point handing out every service
pub use crate::application::client::Client;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types and result alias
pub use crate::error::{ApiError, AppError, BalancedResult, ErrorResponse, ErrorResponseError};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Customer and order service traits
pub use crate::application::interfaces::customer::{CustomerService, OrderService};

/// Card, bank account and verification service traits
pub use crate::application::interfaces::funding::{
    BankAccountService, CardService, VerificationService,
};

/// Marketplace level service traits
pub use crate::application::interfaces::marketplace::{
    ApiKeyService, CallbackService, EventService, MarketplaceService,
};

/// Money movement service traits
pub use crate::application::interfaces::transaction::{
    CardHoldService, CreditService, DebitService, DisputeService, RefundService, ReversalService,
};

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Service implementations
pub use crate::application::services::{
    ApiKeyServiceImpl, BankAccountServiceImpl, CallbackServiceImpl, CardHoldServiceImpl,
    CardServiceImpl, CreditServiceImpl, CustomerServiceImpl, DebitServiceImpl,
    DisputeServiceImpl, EventServiceImpl, MarketplaceServiceImpl, OrderServiceImpl,
    RefundServiceImpl, ReversalServiceImpl, VerificationServiceImpl,
};

// ============================================================================
// TRANSPORT AND PAGINATION
// ============================================================================

/// HTTP transport shared by every service
pub use crate::model::http::HttpClient;

/// Pagination types
pub use crate::model::pagination::{ListParams, Page, PaginationParams};

/// Response envelopes
pub use crate::model::responses::Envelope;

// ============================================================================
// RESOURCE MODELS
// ============================================================================

pub use crate::presentation::api_key::ApiKey;
pub use crate::presentation::bank_account::{BankAccount, BankAccountLinks, BankAccountType};
pub use crate::presentation::callback::{Callback, CallbackMethod};
pub use crate::presentation::card::{Card, CardLinks};
pub use crate::presentation::card_hold::{CardHold, CardHoldLinks};
pub use crate::presentation::common::{Address, Links, Metadata, Status};
pub use crate::presentation::credit::{Credit, CreditLinks};
pub use crate::presentation::customer::{Customer, CustomerLinks};
pub use crate::presentation::debit::{Debit, DebitLinks};
pub use crate::presentation::dispute::{Dispute, DisputeLinks};
pub use crate::presentation::event::{CallbackStatuses, Event, EventEntity};
pub use crate::presentation::marketplace::Marketplace;
pub use crate::presentation::order::{Order, OrderLinks};
pub use crate::presentation::refund::{Refund, RefundLinks};
pub use crate::presentation::reversal::{Reversal, ReversalLinks};
pub use crate::presentation::verification::{Verification, VerificationLinks};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for custom requests through [`HttpClient`]
pub use reqwest::{Method, StatusCode};
