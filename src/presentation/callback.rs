/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// HTTP method used to deliver events to a callback
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CallbackMethod {
    /// POST the event
    #[default]
    Post,
    /// PUT the event
    Put,
    /// GET the callback url
    Get,
    /// A value this client does not know about
    #[serde(other)]
    Unknown,
}

/// A webhook the API delivers events to
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Callback {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Url events are delivered to
    #[serde(default)]
    pub url: String,
    /// Delivery method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<CallbackMethod>,
    /// API revision of the delivered payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
