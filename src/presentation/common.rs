/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Free-form metadata attached to a resource
pub type Metadata = HashMap<String, String>;

/// Relation name to related resource href, as returned in untyped `links` objects
pub type Links = HashMap<String, Option<String>>;

/// Postal address of a customer, card holder or account owner
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    /// Apartment, suite, unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// City or locality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-3 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Status of a transaction, hold, verification or dispute
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not settled yet
    #[default]
    Pending,
    /// Completed successfully
    Succeeded,
    /// Did not complete
    Failed,
    /// Dispute decided in favour of the marketplace
    Won,
    /// Dispute decided in favour of the card holder
    Lost,
    /// A status this client does not know about
    #[serde(other)]
    Unknown,
}

impl Status {
    /// Whether the status is final
    pub fn is_final(&self) -> bool {
        !matches!(self, Status::Pending)
    }
}
