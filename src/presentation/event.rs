/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::presentation::bank_account::BankAccount;
use crate::presentation::card::Card;
use crate::presentation::card_hold::CardHold;
use crate::presentation::common::Links;
use crate::presentation::credit::Credit;
use crate::presentation::customer::Customer;
use crate::presentation::debit::Debit;
use crate::presentation::dispute::Dispute;
use crate::presentation::order::Order;
use crate::presentation::refund::Refund;
use crate::presentation::reversal::Reversal;
use crate::presentation::serialization::null_as_default;
use crate::presentation::verification::Verification;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Something that happened to a resource of the marketplace
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Event type, e.g. "debit.created"
    #[serde(rename = "type", default)]
    pub event_type: String,
    /// When the event happened
    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,
    /// Related resources
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Links,
    /// Snapshot of the resource the event is about
    #[serde(default)]
    pub entity: Option<EventEntity>,
    /// Delivery counters of the callbacks notified about this event
    #[serde(default)]
    pub callback_statuses: Option<CallbackStatuses>,
}

/// Resource snapshot carried by an event, keyed like a response envelope
///
/// Usually exactly one of the collections holds one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventEntity {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customers: Vec<Customer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bank_accounts: Vec<BankAccount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub card_holds: Vec<CardHold>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub debits: Vec<Debit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credits: Vec<Credit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disputes: Vec<Dispute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<Order>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refunds: Vec<Refund>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reversals: Vec<Reversal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verifications: Vec<Verification>,
}

/// Callback delivery counters of an event
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackStatuses {
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub retrying: u32,
    #[serde(default)]
    pub succeeded: u32,
}
