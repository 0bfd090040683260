/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::presentation::common::{Address, Metadata};
use crate::presentation::serialization::metadata;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A tokenized credit or debit card
///
/// Used both as the create payload and as the decoded resource. Supplying the
/// name, cvv, postal code and country code on creation reduces declines.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier, e.g. "CC2t9628l4ecJics6T8RuLPf"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path, e.g. "/cards/CC2t9628l4ecJics6T8RuLPf"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Card number; required on creation, masked in responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Expiration month, 1 for January; required on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<u32>,
    /// Expiration year; required on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<u32>,
    /// The 3-4 digit security code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    /// Name on the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Billing address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Customer href to associate the card with, e.g. "/customers/CU..."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Card brand, e.g. "MasterCard"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Issuing bank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Whether the cvv matched, e.g. "yes"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv_match: Option<String>,
    /// Processor text for the cvv check, e.g. "Match"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv_result: Option<String>,
    /// Whether the postal code matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avs_postal_match: Option<String>,
    /// Processor text for the address check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avs_result: Option<String>,
    /// Whether the street address matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avs_street_match: Option<String>,
    /// Stable fingerprint of the card number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Whether the card passed verification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    /// Whether the card can receive credits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_credit: Option<bool>,
    /// Whether the card can be debited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_debit: Option<bool>,
    /// Free-form metadata
    #[serde(default, deserialize_with = "metadata", skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<CardLinks>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Related resources of a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLinks {
    /// Id of the owning customer
    #[serde(default)]
    pub customer: Option<String>,
}

impl Card {
    /// Id of the customer the card belongs to, if any
    pub fn customer_id(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.customer.as_deref())
    }
}
