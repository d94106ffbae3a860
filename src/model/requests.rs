/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::constants::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Filters accepted by the audit log list
///
/// Empty strings mean "no filter" and are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogFilters {
    /// Action type (`create`, `update`, ...)
    #[serde(default)]
    pub action_type: String,
    /// User id
    #[serde(default)]
    pub user: String,
    /// Company id
    #[serde(default)]
    pub company: String,
    /// Free-text search
    #[serde(default)]
    pub search: String,
    /// Lower date bound (`YYYY-MM-DD`)
    #[serde(default)]
    pub start_date: String,
    /// Upper date bound (`YYYY-MM-DD`)
    #[serde(default)]
    pub end_date: String,
}

impl AuditLogFilters {
    /// Applies the fields set in `update`; `Some("")` clears a filter
    pub fn apply(&mut self, update: &AuditFilterUpdate) {
        let pairs = [
            (&mut self.action_type, &update.action_type),
            (&mut self.user, &update.user),
            (&mut self.company, &update.company),
            (&mut self.search, &update.search),
            (&mut self.start_date, &update.start_date),
            (&mut self.end_date, &update.end_date),
        ];
        for (mine, theirs) in pairs {
            if let Some(value) = theirs {
                mine.clone_from(value);
            }
        }
    }
}

/// Partial change to [`AuditLogFilters`]
///
/// `None` leaves a filter as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFilterUpdate {
    /// Action type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    /// User id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Company id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Free-text search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Lower date bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Upper date bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Query of `GET /audit/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogQuery {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Filters
    pub filters: AuditLogFilters,
}

impl Default for AuditLogQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filters: AuditLogFilters::default(),
        }
    }
}

impl AuditLogQuery {
    /// Query string pairs; empty filters are skipped
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("page_size".to_string(), self.page_size.to_string()),
        ];
        let f = &self.filters;
        let filters = [
            ("action_type", &f.action_type),
            ("user", &f.user),
            ("company", &f.company),
            ("search", &f.search),
            ("start_date", &f.start_date),
            ("end_date", &f.end_date),
        ];
        pairs.extend(
            filters
                .into_iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| (k.to_string(), v.clone())),
        );
        pairs
    }
}

/// A selectable audit action, as shown in filter dropdowns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionType {
    /// Value sent to the API
    pub value: &'static str,
    /// Label
    pub text: &'static str,
}
