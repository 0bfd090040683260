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

/// A payout sending money to a bank account or card
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Amount in cents
    #[serde(default)]
    pub amount: i64,
    /// Text on the recipient's statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appears_on_statement_as: Option<String>,
    /// Href of the funding destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Href of the order whose escrow funds the credit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// ISO 4217 currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Dashboard description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Processor failure text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Processor failure code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason_code: Option<String>,
    /// Current status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Reference shown to the recipient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_number: Option<String>,
    /// Free-form metadata
    #[serde(default, deserialize_with = "metadata", skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<CreditLinks>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Related resources of a credit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLinks {
    /// Id of the credited customer
    #[serde(default)]
    pub customer: Option<String>,
    /// Id of the credited bank account or card
    #[serde(default)]
    pub destination: Option<String>,
    /// Id of the order the credit was paid from
    #[serde(default)]
    pub order: Option<String>,
}

impl Credit {
    /// A credit of `amount` cents with a dashboard description
    pub fn new(amount: i64, description: &str) -> Self {
        Self {
            amount,
            description: Some(description.to_string()),
            ..Default::default()
        }
    }
}
