/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the finance service
#[async_trait]
pub trait FinanceService: Send + Sync {
    // Budgets
    /// Gets all budgets
    async fn get_budgets(&self) -> Result<Value, AppError>;

    /// Gets a single budget by id
    async fn get_budget(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a budget
    async fn create_budget(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a budget
    async fn update_budget(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a budget
    async fn delete_budget(&self, id: &str) -> Result<Value, AppError>;

    // Fixed assets
    /// Gets all fixed assets
    async fn get_fixed_assets(&self) -> Result<Value, AppError>;

    /// Gets a single fixed asset by id
    async fn get_fixed_asset(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a fixed asset
    async fn create_fixed_asset(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a fixed asset
    async fn update_fixed_asset(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a fixed asset
    async fn delete_fixed_asset(&self, id: &str) -> Result<Value, AppError>;

    // Exchange rates
    /// Gets all exchange rates
    async fn get_exchange_rates(&self) -> Result<Value, AppError>;

    /// Gets a single exchange rate by id
    async fn get_exchange_rate(&self, id: &str) -> Result<Value, AppError>;

    /// Creates an exchange rate
    async fn create_exchange_rate(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces an exchange rate
    async fn update_exchange_rate(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes an exchange rate
    async fn delete_exchange_rate(&self, id: &str) -> Result<Value, AppError>;
}
