/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::application::interfaces::contacts::ContactsService;
use crate::application::services::resource::Resource;
use crate::constants::{CUSTOMERS_PATH, VENDORS_PATH};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the contacts service
pub struct ContactsServiceImpl {
    client: Arc<HttpClient>,
}

impl ContactsServiceImpl {
    /// Creates a new instance of the service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn customers(&self) -> Resource<'_> {
        Resource::new(&self.client, CUSTOMERS_PATH)
    }

    fn vendors(&self) -> Resource<'_> {
        Resource::new(&self.client, VENDORS_PATH)
    }
}

#[async_trait]
impl ContactsService for ContactsServiceImpl {
    async fn get_customers(&self) -> Result<Value, AppError> {
        self.customers().list().await
    }

    async fn get_customer(&self, id: &str) -> Result<Value, AppError> {
        self.customers().retrieve(id).await
    }

    async fn create_customer(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating customer");
        self.customers().create(data).await
    }

    async fn update_customer(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating customer {}", id);
        self.customers().update(id, data).await
    }

    async fn delete_customer(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting customer {}", id);
        self.customers().destroy(id).await
    }

    async fn get_vendors(&self) -> Result<Value, AppError> {
        self.vendors().list().await
    }

    async fn get_vendor(&self, id: &str) -> Result<Value, AppError> {
        self.vendors().retrieve(id).await
    }

    async fn create_vendor(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating vendor");
        self.vendors().create(data).await
    }

    async fn update_vendor(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating vendor {}", id);
        self.vendors().update(id, data).await
    }

    async fn delete_vendor(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting vendor {}", id);
        self.vendors().destroy(id).await
    }
}
