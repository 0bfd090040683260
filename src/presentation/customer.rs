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

/// A buyer or seller on the marketplace
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Business name, for business merchants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Employer identification number, for business merchants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ein: Option<String>,
    /// Month of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob_month: Option<u32>,
    /// Year of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob_year: Option<u32>,
    /// Last four digits of the social security number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn_last4: Option<String>,
    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Underwriting status, e.g. "underwritten"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_status: Option<String>,
    /// Free-form metadata
    #[serde(default, deserialize_with = "metadata", skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<CustomerLinks>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Related resources of a customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerLinks {
    /// Default funding destination for credits
    #[serde(default)]
    pub destination: Option<String>,
    /// Default funding source for debits
    #[serde(default)]
    pub source: Option<String>,
}
