/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::application::interfaces::audit::AuditService;
use crate::application::services::audit_service::AuditServiceImpl;
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::AppError;
use crate::model::requests::{ActionType, AuditFilterUpdate, AuditLogFilters, AuditLogQuery};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Page position of the audit log list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// 1-based current page
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Total items reported by the server
    pub total_items: u64,
    /// `ceil(total_items / page_size)`
    pub total_pages: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
            total_pages: 0,
        }
    }
}

impl Pagination {
    fn set_total(&mut self, total_items: u64) {
        self.total_items = total_items;
        self.total_pages = total_items.div_ceil(u64::from(self.page_size.max(1)));
    }
}

/// State behind the audit log views
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditState {
    /// Current page of entries
    pub audit_logs: Vec<Value>,
    /// Entry opened in the detail view
    pub audit_log: Option<Value>,
    /// Options of the action filter
    pub action_types: Vec<ActionType>,
    /// A request is in flight
    pub loading: bool,
    /// Message of the last failed request
    pub error: Option<String>,
    /// Page position
    pub pagination: Pagination,
    /// Active filters
    pub filters: AuditLogFilters,
}

/// Filter and pagination state of the audit log list
pub struct AuditStore {
    service: Arc<dyn AuditService>,
    state: RwLock<AuditState>,
}

impl AuditStore {
    /// Creates a store backed by the REST audit service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self::with_service(Arc::new(AuditServiceImpl::new(client)))
    }

    /// Creates a store over any audit service
    pub fn with_service(service: Arc<dyn AuditService>) -> Self {
        Self {
            service,
            state: RwLock::new(AuditState::default()),
        }
    }

    /// Fetches the current page with the active filters
    pub async fn fetch_audit_logs(&self) -> Result<(), AppError> {
        let query = {
            let mut state = self.state.write().await;
            state.loading = true;
            AuditLogQuery {
                page: state.pagination.page,
                page_size: state.pagination.page_size,
                filters: state.filters.clone(),
            }
        };

        let result = self.service.get_audit_logs(&query).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(envelope) => {
                if envelope.is_paginated() {
                    state.pagination.set_total(envelope.count());
                }
                state.audit_logs = envelope.into_items();
                state.error = None;
                debug!(
                    "Loaded {} audit logs (page {} of {})",
                    state.audit_logs.len(),
                    state.pagination.page,
                    state.pagination.total_pages
                );
                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch audit logs: {}", e);
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetches one entry for the detail view
    pub async fn fetch_audit_log(&self, id: &str) -> Result<(), AppError> {
        self.state.write().await.loading = true;
        let result = self.service.get_audit_log(id).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(entry) => {
                state.audit_log = Some(entry);
                state.error = None;
                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch audit log {}: {}", id, e);
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Fills the action filter options
    pub async fn load_action_types(&self) {
        self.state.write().await.action_types = self.service.action_types().to_vec();
    }

    /// Applies `update` to the active filters, returns to page 1 and refetches
    pub async fn update_filters(&self, update: &AuditFilterUpdate) -> Result<(), AppError> {
        {
            let mut state = self.state.write().await;
            state.filters.apply(update);
            state.pagination.page = 1;
        }
        self.fetch_audit_logs().await
    }

    /// Moves to `page` and refetches
    pub async fn update_page(&self, page: u32) -> Result<(), AppError> {
        self.state.write().await.pagination.page = page.max(1);
        self.fetch_audit_logs().await
    }

    /// Clears every filter and returns to page 1 without refetching
    pub async fn reset_filters(&self) {
        let mut state = self.state.write().await;
        state.filters = AuditLogFilters::default();
        state.pagination.page = 1;
    }

    /// Copy of the whole state
    pub async fn snapshot(&self) -> AuditState {
        self.state.read().await.clone()
    }
}
