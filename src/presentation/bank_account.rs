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

/// Kind of bank account
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BankAccountType {
    /// Checking account
    #[default]
    Checking,
    /// Savings account
    Savings,
    /// A value this client does not know about
    #[serde(other)]
    Unknown,
}

/// A bank account used as a funding source or destination
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Account number; required on creation, masked in responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Checking or savings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<BankAccountType>,
    /// Name of the account holder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Nine digit ABA routing number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    /// Address of the account holder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Name of the bank, resolved from the routing number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Whether the account can receive credits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_credit: Option<bool>,
    /// Whether the account can be debited; requires a verification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_debit: Option<bool>,
    /// Stable fingerprint of the account number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Free-form metadata
    #[serde(default, deserialize_with = "metadata", skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<BankAccountLinks>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Related resources of a bank account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountLinks {
    /// Id of the current verification
    #[serde(default)]
    pub bank_account_verification: Option<String>,
    /// Id of the owning customer
    #[serde(default)]
    pub customer: Option<String>,
}
