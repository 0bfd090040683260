/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Response envelopes.
//!
//! Every fetch, create, update and list call answers with the same shape:
//!
//! ```text
//! {"cards": [...], "links": {...}, "meta": {...}}
//! ```
//!
//! where the array key names the resource. [`Envelope`] abstracts over that
//! key so services can unwrap single items or build pages generically.

use crate::error::AppError;
use crate::model::pagination::{Page, PaginationParams};
use crate::presentation::api_key::ApiKey;
use crate::presentation::bank_account::BankAccount;
use crate::presentation::callback::Callback;
use crate::presentation::card::Card;
use crate::presentation::card_hold::CardHold;
use crate::presentation::common::Links;
use crate::presentation::credit::Credit;
use crate::presentation::customer::Customer;
use crate::presentation::debit::Debit;
use crate::presentation::dispute::Dispute;
use crate::presentation::event::Event;
use crate::presentation::marketplace::Marketplace;
use crate::presentation::order::Order;
use crate::presentation::refund::Refund;
use crate::presentation::reversal::Reversal;
use crate::presentation::serialization::null_as_default;
use crate::presentation::verification::Verification;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A decoded response envelope holding items of one resource type
pub trait Envelope: DeserializeOwned + Send {
    /// Resource carried by the envelope
    type Item: Send;

    /// JSON key of the item array
    const KEY: &'static str;

    /// Consumes the envelope and returns its items
    fn into_items(self) -> Vec<Self::Item>;

    /// Pagination summary, if the response carried one
    fn meta(&self) -> Option<&PaginationParams>;

    /// Returns the first item, or a `Deserialization` error when the array is empty
    fn into_first(self) -> Result<Self::Item, AppError>
    where
        Self: Sized,
    {
        self.into_items()
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Deserialization(format!("response contained no {}", Self::KEY)))
    }

    /// Converts the envelope into a page; a missing `meta` yields default pagination
    fn into_page(self) -> Page<Self::Item>
    where
        Self: Sized,
    {
        let pagination = self.meta().cloned().unwrap_or_default();
        Page {
            items: self.into_items(),
            pagination,
        }
    }
}

macro_rules! resource_envelope {
    ($(#[$doc:meta])* $name:ident, $item:ty, $key:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            /// Items of the response
            #[serde(rename = $key, default)]
            pub items: Vec<$item>,
            /// Templated links to related collections
            #[serde(default, deserialize_with = "null_as_default")]
            pub links: Links,
            /// Pagination summary, present on list responses
            #[serde(default)]
            pub meta: Option<PaginationParams>,
        }

        impl Envelope for $name {
            type Item = $item;
            const KEY: &'static str = $key;

            fn into_items(self) -> Vec<$item> {
                self.items
            }

            fn meta(&self) -> Option<&PaginationParams> {
                self.meta.as_ref()
            }
        }
    };
}

resource_envelope!(
    /// Envelope of `/api_keys` responses
    ApiKeyResponse, ApiKey, "api_keys"
);
resource_envelope!(
    /// Envelope of `/marketplaces` responses
    MarketplaceResponse, Marketplace, "marketplaces"
);
resource_envelope!(
    /// Envelope of `/customers` responses
    CustomerResponse, Customer, "customers"
);
resource_envelope!(
    /// Envelope of `/cards` responses
    CardResponse, Card, "cards"
);
resource_envelope!(
    /// Envelope of `/bank_accounts` responses
    BankAccountResponse, BankAccount, "bank_accounts"
);
resource_envelope!(
    /// Envelope of `/verifications` responses
    VerificationResponse, Verification, "bank_account_verifications"
);
resource_envelope!(
    /// Envelope of `/card_holds` responses
    CardHoldResponse, CardHold, "card_holds"
);
resource_envelope!(
    /// Envelope of `/debits` responses
    DebitResponse, Debit, "debits"
);
resource_envelope!(
    /// Envelope of `/credits` responses
    CreditResponse, Credit, "credits"
);
resource_envelope!(
    /// Envelope of `/refunds` responses
    RefundResponse, Refund, "refunds"
);
resource_envelope!(
    /// Envelope of `/reversals` responses
    ReversalResponse, Reversal, "reversals"
);
resource_envelope!(
    /// Envelope of `/orders` responses
    OrderResponse, Order, "orders"
);
resource_envelope!(
    /// Envelope of `/events` responses
    EventResponse, Event, "events"
);
resource_envelope!(
    /// Envelope of `/callbacks` responses
    CallbackResponse, Callback, "callbacks"
);
resource_envelope!(
    /// Envelope of `/disputes` responses
    DisputeResponse, Dispute, "disputes"
);
