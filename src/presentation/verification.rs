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

/// A micro-deposit ownership check of a bank account
///
/// Creating one sends two deposits under $1 to the account. The owner
/// confirms the amounts; three attempts are allowed, after which a new
/// verification has to be created. Only one exists per bank account at a time.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    /// Unique identifier, e.g. "BZ25cVCn6wh6UZrfgFcF71RD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource path, e.g. "/verifications/BZ25cVCn6wh6UZrfgFcF71RD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Confirmation attempts made so far
    #[serde(default)]
    pub attempts: u32,
    /// Confirmation attempts left
    #[serde(default)]
    pub attempts_remaining: u32,
    /// Status of the micro-deposits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_status: Option<Status>,
    /// Status of the ownership check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<Status>,
    /// Free-form metadata
    #[serde(default, deserialize_with = "metadata", skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<VerificationLinks>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Related resources of a verification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationLinks {
    /// Id of the verified bank account
    #[serde(default)]
    pub bank_account: Option<String>,
}

impl Verification {
    /// Whether ownership has been confirmed
    pub fn is_verified(&self) -> bool {
        self.verification_status == Some(Status::Succeeded)
    }
}
