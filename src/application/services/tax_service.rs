/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::application::interfaces::tax::TaxService;
use crate::application::services::resource::Resource;
use crate::constants::{TAX_RATES_PATH, TAX_TRANSACTIONS_PATH};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the tax service
pub struct TaxServiceImpl {
    client: Arc<HttpClient>,
}

impl TaxServiceImpl {
    /// Creates a new instance of the service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn tax_rates(&self) -> Resource<'_> {
        Resource::new(&self.client, TAX_RATES_PATH)
    }

    fn tax_transactions(&self) -> Resource<'_> {
        Resource::new(&self.client, TAX_TRANSACTIONS_PATH)
    }
}

#[async_trait]
impl TaxService for TaxServiceImpl {
    async fn get_tax_rates(&self) -> Result<Value, AppError> {
        self.tax_rates().list().await
    }

    async fn get_tax_rate(&self, id: &str) -> Result<Value, AppError> {
        self.tax_rates().retrieve(id).await
    }

    async fn create_tax_rate(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating tax rate");
        self.tax_rates().create(data).await
    }

    async fn update_tax_rate(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating tax rate {}", id);
        self.tax_rates().update(id, data).await
    }

    async fn delete_tax_rate(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting tax rate {}", id);
        self.tax_rates().destroy(id).await
    }

    async fn get_tax_transactions(&self) -> Result<Value, AppError> {
        self.tax_transactions().list().await
    }

    async fn get_tax_transaction(&self, id: &str) -> Result<Value, AppError> {
        self.tax_transactions().retrieve(id).await
    }

    async fn create_tax_transaction(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating tax transaction");
        self.tax_transactions().create(data).await
    }

    async fn update_tax_transaction(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating tax transaction {}", id);
        self.tax_transactions().update(id, data).await
    }

    async fn delete_tax_transaction(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting tax transaction {}", id);
        self.tax_transactions().destroy(id).await
    }
}
