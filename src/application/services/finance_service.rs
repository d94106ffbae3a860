/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::application::interfaces::finance::FinanceService;
use crate::application::services::resource::Resource;
use crate::constants::{BUDGETS_PATH, FIXED_ASSETS_PATH, EXCHANGE_RATES_PATH};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the finance service
pub struct FinanceServiceImpl {
    client: Arc<HttpClient>,
}

impl FinanceServiceImpl {
    /// Creates a new instance of the service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn budgets(&self) -> Resource<'_> {
        Resource::new(&self.client, BUDGETS_PATH)
    }

    fn fixed_assets(&self) -> Resource<'_> {
        Resource::new(&self.client, FIXED_ASSETS_PATH)
    }

    fn exchange_rates(&self) -> Resource<'_> {
        Resource::new(&self.client, EXCHANGE_RATES_PATH)
    }
}

#[async_trait]
impl FinanceService for FinanceServiceImpl {
    async fn get_budgets(&self) -> Result<Value, AppError> {
        self.budgets().list().await
    }

    async fn get_budget(&self, id: &str) -> Result<Value, AppError> {
        self.budgets().retrieve(id).await
    }

    async fn create_budget(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating budget");
        self.budgets().create(data).await
    }

    async fn update_budget(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating budget {}", id);
        self.budgets().update(id, data).await
    }

    async fn delete_budget(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting budget {}", id);
        self.budgets().destroy(id).await
    }

    async fn get_fixed_assets(&self) -> Result<Value, AppError> {
        self.fixed_assets().list().await
    }

    async fn get_fixed_asset(&self, id: &str) -> Result<Value, AppError> {
        self.fixed_assets().retrieve(id).await
    }

    async fn create_fixed_asset(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating fixed asset");
        self.fixed_assets().create(data).await
    }

    async fn update_fixed_asset(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating fixed asset {}", id);
        self.fixed_assets().update(id, data).await
    }

    async fn delete_fixed_asset(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting fixed asset {}", id);
        self.fixed_assets().destroy(id).await
    }

    async fn get_exchange_rates(&self) -> Result<Value, AppError> {
        self.exchange_rates().list().await
    }

    async fn get_exchange_rate(&self, id: &str) -> Result<Value, AppError> {
        self.exchange_rates().retrieve(id).await
    }

    async fn create_exchange_rate(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating exchange rate");
        self.exchange_rates().create(data).await
    }

    async fn update_exchange_rate(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating exchange rate {}", id);
        self.exchange_rates().update(id, data).await
    }

    async fn delete_exchange_rate(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting exchange rate {}", id);
        self.exchange_rates().destroy(id).await
    }
}
