/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Pagination types for list endpoints.
//!
//! Requests carry a [`ListParams`] (offset, limit and named filters); list
//! responses carry a `meta` object decoded into [`PaginationParams`].

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Offset, limit and filters of a list request.
///
/// Unset values are not sent, leaving the server default page shape
/// (`offset=0`, `limit=10`) in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Index of the first item to return
    pub offset: Option<u32>,
    /// Maximum number of items to return
    pub limit: Option<u32>,
    /// Named filters, e.g. `status` or `amount[>]`
    pub filters: BTreeMap<String, String>,
}

impl ListParams {
    /// Empty parameters: server defaults, no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit page: first integer is the offset, second the limit
    pub fn page(offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            filters: BTreeMap::new(),
        }
    }

    /// Sets the offset
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the limit
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Adds a named filter; a later value for the same key replaces the earlier one
    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.insert(key.into(), value.to_string());
        self
    }

    /// Merges every filter of `filters` into these parameters
    #[must_use]
    pub fn with_filters<K, V, I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        for (k, v) in filters {
            self.filters.insert(k.into(), v.to_string());
        }
        self
    }

    /// Query pairs in wire order: offset, limit, then filters sorted by key
    ///
    /// A filter named `offset` or `limit` never overrides the explicit field.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::with_capacity(self.filters.len() + 2);
        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        for (k, v) in &self.filters {
            if (k == "offset" && self.offset.is_some()) || (k == "limit" && self.limit.is_some()) {
                continue;
            }
            query.push((k.clone(), v.clone()));
        }
        query
    }
}

impl From<u32> for ListParams {
    fn from(offset: u32) -> Self {
        Self::new().with_offset(offset)
    }
}

impl From<(u32, u32)> for ListParams {
    fn from((offset, limit): (u32, u32)) -> Self {
        Self::page(offset, limit)
    }
}

/// Pagination summary decoded from the `meta` object of a list response
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page size used by the server
    #[serde(default)]
    pub limit: u32,
    /// Offset of the first item on this page
    #[serde(default)]
    pub offset: u32,
    /// Total number of items in the collection
    #[serde(default)]
    pub total: u64,
    /// Link to the first page
    #[serde(default)]
    pub first: Option<String>,
    /// Link to this page
    #[serde(default)]
    pub href: Option<String>,
    /// Link to the last page
    #[serde(default)]
    pub last: Option<String>,
    /// Link to the next page, null on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the previous page, null on the first page
    #[serde(default)]
    pub previous: Option<String>,
}

impl PaginationParams {
    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.next.is_some() || (self.limit > 0 && u64::from(self.offset) + u64::from(self.limit) < self.total)
    }

    /// Parameters for the page after this one, if any
    pub fn next_params(&self) -> Option<ListParams> {
        if self.limit == 0 || !self.has_next() {
            return None;
        }
        Some(ListParams::page(self.offset.saturating_add(self.limit), self.limit))
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Pagination summary of the page
    pub pagination: PaginationParams,
}

impl<T> Page<T> {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
