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

/// A charge taking money from a card or bank account
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Debit {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Amount in cents; omitted on a hold capture to capture the full hold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Text on the buyer's statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appears_on_statement_as: Option<String>,
    /// Dashboard description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Order href to attribute the debit to, e.g. "/orders/OR..."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// ISO 4217 currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Processor failure text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Processor failure code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason_code: Option<String>,
    /// Current status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Reference shown to the buyer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_number: Option<String>,
    /// Free-form metadata
    #[serde(default, deserialize_with = "metadata", skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<DebitLinks>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Related resources of a debit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebitLinks {
    /// Id of the charged customer
    #[serde(default)]
    pub customer: Option<String>,
    /// Id of a dispute raised against the debit
    #[serde(default)]
    pub dispute: Option<String>,
    /// Id of the order the debit belongs to
    #[serde(default)]
    pub order: Option<String>,
    /// Id of the charged card or bank account
    #[serde(default)]
    pub source: Option<String>,
}

impl Debit {
    /// A debit of `amount` cents with a dashboard description
    pub fn new(amount: i64, description: &str) -> Self {
        Self {
            amount: Some(amount),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }
}
