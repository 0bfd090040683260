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

/// An API key of a marketplace
///
/// The secret is only returned once, when the key is created.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Secret used as the basic auth username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Related resources
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    /// Free-form metadata
    #[serde(default, deserialize_with = "metadata", skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
