/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the core service
#[async_trait]
pub trait CoreService: Send + Sync {
    // Companies
    /// Gets all companies
    async fn get_companies(&self) -> Result<Value, AppError>;

    /// Gets a single company by id
    async fn get_company(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a company
    async fn create_company(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a company
    async fn update_company(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a company
    async fn delete_company(&self, id: &str) -> Result<Value, AppError>;

    // Chart of accounts
    /// Gets all accounts of the chart of accounts
    async fn get_chart_of_accounts(&self) -> Result<Value, AppError>;

    /// Gets a single account by id
    async fn get_account(&self, id: &str) -> Result<Value, AppError>;

    /// Creates an account
    async fn create_account(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces an account
    async fn update_account(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes an account
    async fn delete_account(&self, id: &str) -> Result<Value, AppError>;

    // General ledger
    /// Gets all general ledger entries
    async fn get_general_ledger_entries(&self) -> Result<Value, AppError>;

    /// Gets a single general ledger entry by id
    async fn get_general_ledger_entry(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a general ledger entry
    async fn create_general_ledger_entry(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a general ledger entry
    async fn update_general_ledger_entry(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a general ledger entry
    async fn delete_general_ledger_entry(&self, id: &str) -> Result<Value, AppError>;
}
