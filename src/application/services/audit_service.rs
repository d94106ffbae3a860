/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::application::interfaces::audit::AuditService;
use crate::application::services::resource::item_path;
use crate::constants::AUDIT_PATH;
use crate::error::AppError;
use crate::model::requests::{ActionType, AuditLogQuery};
use crate::model::responses::ListEnvelope;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Actions recorded in the audit trail
pub const ACTION_TYPES: [ActionType; 9] = [
    ActionType { value: "create", text: "Create" },
    ActionType { value: "update", text: "Update" },
    ActionType { value: "delete", text: "Delete" },
    ActionType { value: "login", text: "Login" },
    ActionType { value: "logout", text: "Logout" },
    ActionType { value: "view", text: "View" },
    ActionType { value: "export", text: "Export" },
    ActionType { value: "import", text: "Import" },
    ActionType { value: "other", text: "Other" },
];

/// Implementation of the audit log service
pub struct AuditServiceImpl {
    client: Arc<HttpClient>,
}

impl AuditServiceImpl {
    /// Creates a new instance of the service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuditService for AuditServiceImpl {
    async fn get_audit_logs(&self, query: &AuditLogQuery) -> Result<ListEnvelope, AppError> {
        let pairs = query.to_pairs();
        debug!("Getting audit logs, page {}", query.page);
        self.client.get_with_query(AUDIT_PATH, &pairs).await
    }

    async fn get_audit_log(&self, id: &str) -> Result<Value, AppError> {
        self.client.get(&item_path(AUDIT_PATH, id)).await
    }

    fn action_types(&self) -> &'static [ActionType] {
        &ACTION_TYPES
    }
}
