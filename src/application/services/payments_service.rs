/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::application::interfaces::payments::PaymentsService;
use crate::application::services::resource::Resource;
use crate::constants::{INVOICES_PATH, BILLS_PATH, PAYMENTS_PATH};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the payments service
pub struct PaymentsServiceImpl {
    client: Arc<HttpClient>,
}

impl PaymentsServiceImpl {
    /// Creates a new instance of the service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn invoices(&self) -> Resource<'_> {
        Resource::new(&self.client, INVOICES_PATH)
    }

    fn bills(&self) -> Resource<'_> {
        Resource::new(&self.client, BILLS_PATH)
    }

    fn payments(&self) -> Resource<'_> {
        Resource::new(&self.client, PAYMENTS_PATH)
    }
}

#[async_trait]
impl PaymentsService for PaymentsServiceImpl {
    async fn get_invoices(&self) -> Result<Value, AppError> {
        self.invoices().list().await
    }

    async fn get_invoice(&self, id: &str) -> Result<Value, AppError> {
        self.invoices().retrieve(id).await
    }

    async fn create_invoice(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating invoice");
        self.invoices().create(data).await
    }

    async fn update_invoice(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating invoice {}", id);
        self.invoices().update(id, data).await
    }

    async fn delete_invoice(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting invoice {}", id);
        self.invoices().destroy(id).await
    }

    async fn get_bills(&self) -> Result<Value, AppError> {
        self.bills().list().await
    }

    async fn get_bill(&self, id: &str) -> Result<Value, AppError> {
        self.bills().retrieve(id).await
    }

    async fn create_bill(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating bill");
        self.bills().create(data).await
    }

    async fn update_bill(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating bill {}", id);
        self.bills().update(id, data).await
    }

    async fn delete_bill(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting bill {}", id);
        self.bills().destroy(id).await
    }

    async fn get_payments(&self) -> Result<Value, AppError> {
        self.payments().list().await
    }

    async fn get_payment(&self, id: &str) -> Result<Value, AppError> {
        self.payments().retrieve(id).await
    }

    async fn create_payment(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating payment");
        self.payments().create(data).await
    }

    async fn update_payment(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating payment {}", id);
        self.payments().update(id, data).await
    }

    async fn delete_payment(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting payment {}", id);
        self.payments().destroy(id).await
    }
}
