/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the tax service
#[async_trait]
pub trait TaxService: Send + Sync {
    // Tax rates
    /// Gets all tax rates
    async fn get_tax_rates(&self) -> Result<Value, AppError>;

    /// Gets a single tax rate by id
    async fn get_tax_rate(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a tax rate
    async fn create_tax_rate(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a tax rate
    async fn update_tax_rate(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a tax rate
    async fn delete_tax_rate(&self, id: &str) -> Result<Value, AppError>;

    // Tax transactions
    /// Gets all tax transactions
    async fn get_tax_transactions(&self) -> Result<Value, AppError>;

    /// Gets a single tax transaction by id
    async fn get_tax_transaction(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a tax transaction
    async fn create_tax_transaction(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a tax transaction
    async fn update_tax_transaction(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a tax transaction
    async fn delete_tax_transaction(&self, id: &str) -> Result<Value, AppError>;
}
