/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::error::AppError;
use serde_json::Value;
use tracing::debug;

/// Path of a single item inside a collection: `/resource/{id}/`
#[must_use]
pub fn item_path(collection: &str, id: &str) -> String {
    format!("{}/{}/", collection.trim_end_matches('/'), id.trim_matches('/'))
}

/// A REST collection following the uniform CRUD conventions
///
/// Collection `GET`/`POST` at `/resource/`, item `GET`/`PUT`/`DELETE` at
/// `/resource/{id}/`. Payloads are forwarded untouched.
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
    client: &'a HttpClient,
    collection: &'static str,
}

impl<'a> Resource<'a> {
    /// Binds a collection path to a client
    #[must_use]
    pub fn new(client: &'a HttpClient, collection: &'static str) -> Self {
        Self { client, collection }
    }

    /// Collection path
    #[must_use]
    pub fn collection(&self) -> &'static str {
        self.collection
    }

    /// `GET /resource/`
    pub async fn list(&self) -> Result<Value, AppError> {
        debug!("Listing {}", self.collection);
        self.client.get(self.collection).await
    }

    /// `GET /resource/?key=value...`
    pub async fn list_filtered(&self, filters: &[(&str, &str)]) -> Result<Value, AppError> {
        debug!("Listing {} with {} filters", self.collection, filters.len());
        self.client.get_with_query(self.collection, filters).await
    }

    /// `GET /resource/{id}/`
    pub async fn retrieve(&self, id: &str) -> Result<Value, AppError> {
        self.client.get(&item_path(self.collection, id)).await
    }

    /// `POST /resource/`
    pub async fn create(&self, data: &Value) -> Result<Value, AppError> {
        self.client.post(self.collection, data).await
    }

    /// `PUT /resource/{id}/`
    pub async fn update(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        self.client.put(&item_path(self.collection, id), data).await
    }

    /// `DELETE /resource/{id}/`
    pub async fn destroy(&self, id: &str) -> Result<Value, AppError> {
        self.client.delete(&item_path(self.collection, id)).await
    }
}
