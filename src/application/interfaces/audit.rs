/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::{ActionType, AuditLogQuery};
use crate::model::responses::ListEnvelope;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the audit log service
#[async_trait]
pub trait AuditService: Send + Sync {
    /// Gets a page of audit logs
    ///
    /// # Arguments
    /// * `query` - Page, page size and filters; empty filters are not sent
    async fn get_audit_logs(&self, query: &AuditLogQuery) -> Result<ListEnvelope, AppError>;

    /// Gets a single audit log entry by id
    async fn get_audit_log(&self, id: &str) -> Result<Value, AppError>;

    /// Action types available for filtering
    fn action_types(&self) -> &'static [ActionType];
}
