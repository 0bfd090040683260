/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::presentation::common::{Links, Metadata};
use crate::presentation::serialization::{metadata, null_as_default};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// The tenant every other resource belongs to
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marketplace {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Support email shown to buyers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email_address: Option<String>,
    /// Support phone shown to buyers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phone_number: Option<String>,
    /// Marketplace website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_url: Option<String>,
    /// Funds held in escrow, in cents
    #[serde(default)]
    pub in_escrow: i64,
    /// Fees not yet settled, in cents
    #[serde(default)]
    pub unsettled_fees: i64,
    /// Whether this is a production marketplace
    #[serde(default)]
    pub production: bool,
    /// Related resources
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    /// Free-form metadata
    #[serde(default, deserialize_with = "metadata", skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
