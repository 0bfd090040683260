/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::presentation::common::{Metadata, Status};
use crate::presentation::serialization::metadata;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// An authorization reserving funds on a card without capturing them
///
/// A hold is later captured into a debit or voided.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardHold {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Amount held, in cents
    #[serde(default)]
    pub amount: i64,
    /// ISO 4217 currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Dashboard description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the hold lapses if not captured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Processor failure text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Processor failure code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason_code: Option<String>,
    /// Current status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Reference shown to the card holder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_number: Option<String>,
    /// When the hold was voided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voided_at: Option<DateTime<Utc>>,
    /// Free-form metadata
    #[serde(default, deserialize_with = "metadata", skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<CardHoldLinks>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Related resources of a card hold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardHoldLinks {
    /// Id of the held card
    #[serde(default)]
    pub card: Option<String>,
    /// Id of the debit that captured the hold
    #[serde(default)]
    pub debit: Option<String>,
}

impl CardHold {
    /// Whether the hold was voided
    pub fn is_voided(&self) -> bool {
        self.voided_at.is_some()
    }

    /// Whether the hold was captured into a debit
    pub fn is_captured(&self) -> bool {
        self.links.as_ref().is_some_and(|l| l.debit.is_some())
    }
}
