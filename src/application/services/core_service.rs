/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::application::interfaces::core::CoreService;
use crate::application::services::resource::Resource;
use crate::constants::{COMPANIES_PATH, CHART_OF_ACCOUNTS_PATH, GENERAL_LEDGER_PATH};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the core service
pub struct CoreServiceImpl {
    client: Arc<HttpClient>,
}

impl CoreServiceImpl {
    /// Creates a new instance of the service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn companies(&self) -> Resource<'_> {
        Resource::new(&self.client, COMPANIES_PATH)
    }

    fn chart_of_accounts(&self) -> Resource<'_> {
        Resource::new(&self.client, CHART_OF_ACCOUNTS_PATH)
    }

    fn general_ledger(&self) -> Resource<'_> {
        Resource::new(&self.client, GENERAL_LEDGER_PATH)
    }
}

#[async_trait]
impl CoreService for CoreServiceImpl {
    async fn get_companies(&self) -> Result<Value, AppError> {
        self.companies().list().await
    }

    async fn get_company(&self, id: &str) -> Result<Value, AppError> {
        self.companies().retrieve(id).await
    }

    async fn create_company(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating company");
        self.companies().create(data).await
    }

    async fn update_company(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating company {}", id);
        self.companies().update(id, data).await
    }

    async fn delete_company(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting company {}", id);
        self.companies().destroy(id).await
    }

    async fn get_chart_of_accounts(&self) -> Result<Value, AppError> {
        self.chart_of_accounts().list().await
    }

    async fn get_account(&self, id: &str) -> Result<Value, AppError> {
        self.chart_of_accounts().retrieve(id).await
    }

    async fn create_account(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating account");
        self.chart_of_accounts().create(data).await
    }

    async fn update_account(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating account {}", id);
        self.chart_of_accounts().update(id, data).await
    }

    async fn delete_account(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting account {}", id);
        self.chart_of_accounts().destroy(id).await
    }

    async fn get_general_ledger_entries(&self) -> Result<Value, AppError> {
        self.general_ledger().list().await
    }

    async fn get_general_ledger_entry(&self, id: &str) -> Result<Value, AppError> {
        self.general_ledger().retrieve(id).await
    }

    async fn create_general_ledger_entry(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating general ledger entry");
        self.general_ledger().create(data).await
    }

    async fn update_general_ledger_entry(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating general ledger entry {}", id);
        self.general_ledger().update(id, data).await
    }

    async fn delete_general_ledger_entry(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting general ledger entry {}", id);
        self.general_ledger().destroy(id).await
    }
}
