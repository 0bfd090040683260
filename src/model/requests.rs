/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::presentation::callback::CallbackMethod;
use crate::presentation::debit::Debit;
use serde::{Deserialize, Serialize};

/// Body confirming the two micro-deposit amounts of a verification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationAmounts {
    /// First deposited amount, in cents
    pub amount_1: i64,
    /// Second deposited amount, in cents
    pub amount_2: i64,
}

/// Body of a bank account debit, which wraps the debit in an array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebitRequest {
    /// Debits to create; the API expects exactly one
    pub debits: Vec<Debit>,
}

impl From<&Debit> for DebitRequest {
    fn from(debit: &Debit) -> Self {
        Self {
            debits: vec![debit.clone()],
        }
    }
}

/// Body voiding a card hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoidRequest {
    /// Always `true`
    pub is_void: bool,
}

impl Default for VoidRequest {
    fn default() -> Self {
        Self { is_void: true }
    }
}

/// Body registering a callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequest<'a> {
    /// Url events are delivered to
    pub url: &'a str,
    /// Delivery method
    pub method: CallbackMethod,
}

/// Body of a metadata-only update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaUpdateRequest<'a, M: Serialize> {
    /// Replacement metadata
    pub meta: &'a M,
}
