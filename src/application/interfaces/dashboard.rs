/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the dashboard service
///
/// Every call is scoped to the active company and fails with
/// `AppError::InvalidInput` when none is selected.
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Headline figures for a period (`month`, `quarter`, `year`)
    async fn get_overview(&self, period: &str) -> Result<Value, AppError>;

    /// Revenue series between two dates (`YYYY-MM-DD`)
    async fn get_revenue_data(&self, start_date: &str, end_date: &str) -> Result<Value, AppError>;

    /// Expense series between two dates, optionally restricted to categories
    async fn get_expenses_data(
        &self,
        start_date: &str,
        end_date: &str,
        categories: &[String],
    ) -> Result<Value, AppError>;

    /// Latest transactions of a type (`all`, `income`, `expense`)
    async fn get_recent_transactions(&self, limit: u32, kind: &str) -> Result<Value, AppError>;

    /// Cash flow for a period, with or without projection
    async fn get_cash_flow(&self, period: &str, projection: bool) -> Result<Value, AppError>;

    /// Balances of the given account types, all types when empty
    async fn get_account_balances(&self, account_types: &[String]) -> Result<Value, AppError>;

    /// Key performance metrics for a period
    async fn get_key_metrics(&self, period: &str) -> Result<Value, AppError>;

    /// Invoice counts by status
    async fn get_invoice_status(&self) -> Result<Value, AppError>;

    /// Budget versus actuals for a month
    async fn get_budget_comparison(&self, year: i32, month: u32) -> Result<Value, AppError>;

    /// Bookkeeping health indicators
    async fn get_accounting_health(&self) -> Result<Value, AppError>;
}
