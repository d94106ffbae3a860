/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the payments service
#[async_trait]
pub trait PaymentsService: Send + Sync {
    // Invoices
    /// Gets all invoices
    async fn get_invoices(&self) -> Result<Value, AppError>;

    /// Gets a single invoice by id
    async fn get_invoice(&self, id: &str) -> Result<Value, AppError>;

    /// Creates an invoice
    async fn create_invoice(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces an invoice
    async fn update_invoice(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes an invoice
    async fn delete_invoice(&self, id: &str) -> Result<Value, AppError>;

    // Bills
    /// Gets all bills
    async fn get_bills(&self) -> Result<Value, AppError>;

    /// Gets a single bill by id
    async fn get_bill(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a bill
    async fn create_bill(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a bill
    async fn update_bill(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a bill
    async fn delete_bill(&self, id: &str) -> Result<Value, AppError>;

    // Payments
    /// Gets all payments
    async fn get_payments(&self) -> Result<Value, AppError>;

    /// Gets a single payment by id
    async fn get_payment(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a payment
    async fn create_payment(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a payment
    async fn update_payment(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a payment
    async fn delete_payment(&self, id: &str) -> Result<Value, AppError>;
}
