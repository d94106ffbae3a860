/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A collection response, paginated or not
///
/// List endpoints answer either with a bare JSON array or with a DRF page
/// object. Both shapes deserialize into this envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListEnvelope<T = Value> {
    /// `{count, next, previous, results}`
    Paginated {
        /// Total number of items on the server
        count: u64,
        /// URL of the next page
        #[serde(default)]
        next: Option<String>,
        /// URL of the previous page
        #[serde(default)]
        previous: Option<String>,
        /// Items of this page
        results: Vec<T>,
    },
    /// Plain array
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// Items of the response
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            ListEnvelope::Paginated { results, .. } => results,
            ListEnvelope::Bare(items) => items,
        }
    }

    /// Consumes the envelope, returning the items
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Paginated { results, .. } => results,
            ListEnvelope::Bare(items) => items,
        }
    }

    /// Server-side count when paginated, otherwise the number of items
    #[must_use]
    pub fn count(&self) -> u64 {
        match self {
            ListEnvelope::Paginated { count, .. } => *count,
            ListEnvelope::Bare(items) => items.len() as u64,
        }
    }

    /// Whether the server reported a count
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        matches!(self, ListEnvelope::Paginated { .. })
    }
}

impl<T> Default for ListEnvelope<T> {
    fn default() -> Self {
        ListEnvelope::Bare(Vec::new())
    }
}
