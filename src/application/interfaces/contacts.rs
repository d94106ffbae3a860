/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the contacts service
#[async_trait]
pub trait ContactsService: Send + Sync {
    // Customers
    /// Gets all customers
    async fn get_customers(&self) -> Result<Value, AppError>;

    /// Gets a single customer by id
    async fn get_customer(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a customer
    async fn create_customer(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a customer
    async fn update_customer(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a customer
    async fn delete_customer(&self, id: &str) -> Result<Value, AppError>;

    // Vendors
    /// Gets all vendors
    async fn get_vendors(&self) -> Result<Value, AppError>;

    /// Gets a single vendor by id
    async fn get_vendor(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a vendor
    async fn create_vendor(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a vendor
    async fn update_vendor(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a vendor
    async fn delete_vendor(&self, id: &str) -> Result<Value, AppError>;
}
