/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::services::{
    ApiKeyServiceImpl, BankAccountServiceImpl, CallbackServiceImpl, CardHoldServiceImpl,
    CardServiceImpl, CreditServiceImpl, CustomerServiceImpl, DebitServiceImpl,
    DisputeServiceImpl, EventServiceImpl, MarketplaceServiceImpl, OrderServiceImpl,
    RefundServiceImpl, ReversalServiceImpl, VerificationServiceImpl,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::sync::Arc;
use tracing::debug;

/// Balanced API client
///
/// Built once from a [`Config`]; every service shares the same
/// authenticated transport. Wrap it in an `Arc` to share it between tasks.
pub struct Client {
    http_client: Arc<HttpClient>,
    api_keys: ApiKeyServiceImpl,
    marketplaces: MarketplaceServiceImpl,
    customers: CustomerServiceImpl,
    cards: CardServiceImpl,
    bank_accounts: BankAccountServiceImpl,
    verifications: VerificationServiceImpl,
    card_holds: CardHoldServiceImpl,
    debits: DebitServiceImpl,
    credits: CreditServiceImpl,
    refunds: RefundServiceImpl,
    reversals: ReversalServiceImpl,
    orders: OrderServiceImpl,
    events: EventServiceImpl,
    callbacks: CallbackServiceImpl,
    disputes: DisputeServiceImpl,
}

impl Client {
    /// Creates a client with its own HTTP transport
    ///
    /// # Returns
    /// * `Err(AppError::InvalidUrl)` - If the configured base URL does not parse
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self::from_http_client(Arc::new(HttpClient::new(config)?)))
    }

    /// Creates a client around a caller supplied `reqwest` client
    pub fn with_http_client(config: Config, http_client: reqwest::Client) -> Result<Self, AppError> {
        Ok(Self::from_http_client(Arc::new(HttpClient::with_http_client(
            config,
            http_client,
        )?)))
    }

    /// Creates a client sharing an existing transport
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        debug!("Creating client for {}", http_client.base_url());
        Self {
            api_keys: ApiKeyServiceImpl::new(http_client.clone()),
            marketplaces: MarketplaceServiceImpl::new(http_client.clone()),
            customers: CustomerServiceImpl::new(http_client.clone()),
            cards: CardServiceImpl::new(http_client.clone()),
            bank_accounts: BankAccountServiceImpl::new(http_client.clone()),
            verifications: VerificationServiceImpl::new(http_client.clone()),
            card_holds: CardHoldServiceImpl::new(http_client.clone()),
            debits: DebitServiceImpl::new(http_client.clone()),
            credits: CreditServiceImpl::new(http_client.clone()),
            refunds: RefundServiceImpl::new(http_client.clone()),
            reversals: ReversalServiceImpl::new(http_client.clone()),
            orders: OrderServiceImpl::new(http_client.clone()),
            events: EventServiceImpl::new(http_client.clone()),
            callbacks: CallbackServiceImpl::new(http_client.clone()),
            disputes: DisputeServiceImpl::new(http_client.clone()),
            http_client,
        }
    }

    /// Shared transport, for requests no service covers
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Configuration the client was built from
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// API key service
    pub fn api_keys(&self) -> &ApiKeyServiceImpl {
        &self.api_keys
    }

    /// Marketplace service
    pub fn marketplaces(&self) -> &MarketplaceServiceImpl {
        &self.marketplaces
    }

    /// Customer service
    pub fn customers(&self) -> &CustomerServiceImpl {
        &self.customers
    }

    /// Card service
    pub fn cards(&self) -> &CardServiceImpl {
        &self.cards
    }

    /// Bank account service
    pub fn bank_accounts(&self) -> &BankAccountServiceImpl {
        &self.bank_accounts
    }

    /// Bank account verification service
    pub fn verifications(&self) -> &VerificationServiceImpl {
        &self.verifications
    }

    /// Card hold service
    pub fn card_holds(&self) -> &CardHoldServiceImpl {
        &self.card_holds
    }

    /// Debit service
    pub fn debits(&self) -> &DebitServiceImpl {
        &self.debits
    }

    /// Credit service
    pub fn credits(&self) -> &CreditServiceImpl {
        &self.credits
    }

    /// Refund service
    pub fn refunds(&self) -> &RefundServiceImpl {
        &self.refunds
    }

    /// Reversal service
    pub fn reversals(&self) -> &ReversalServiceImpl {
        &self.reversals
    }

    /// Order service
    pub fn orders(&self) -> &OrderServiceImpl {
        &self.orders
    }

    /// Event service
    pub fn events(&self) -> &EventServiceImpl {
        &self.events
    }

    /// Callback service
    pub fn callbacks(&self) -> &CallbackServiceImpl {
        &self.callbacks
    }

    /// Dispute service
    pub fn disputes(&self) -> &DisputeServiceImpl {
        &self.disputes
    }
}
