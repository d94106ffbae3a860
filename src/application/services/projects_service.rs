/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::application::interfaces::projects::ProjectsService;
use crate::application::services::resource::Resource;
use crate::constants::{PROJECTS_PATH, TIME_ENTRIES_PATH};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the projects service
pub struct ProjectsServiceImpl {
    client: Arc<HttpClient>,
}

impl ProjectsServiceImpl {
    /// Creates a new instance of the service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn projects(&self) -> Resource<'_> {
        Resource::new(&self.client, PROJECTS_PATH)
    }

    fn time_entries(&self) -> Resource<'_> {
        Resource::new(&self.client, TIME_ENTRIES_PATH)
    }
}

#[async_trait]
impl ProjectsService for ProjectsServiceImpl {
    async fn get_projects(&self) -> Result<Value, AppError> {
        self.projects().list().await
    }

    async fn get_project(&self, id: &str) -> Result<Value, AppError> {
        self.projects().retrieve(id).await
    }

    async fn create_project(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating project");
        self.projects().create(data).await
    }

    async fn update_project(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating project {}", id);
        self.projects().update(id, data).await
    }

    async fn delete_project(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting project {}", id);
        self.projects().destroy(id).await
    }

    async fn get_time_entries(&self, project_id: Option<&str>) -> Result<Value, AppError> {
        match project_id {
            Some(project) => self.time_entries().list_filtered(&[("project", project)]).await,
            None => self.time_entries().list().await,
        }
    }

    async fn get_time_entry(&self, id: &str) -> Result<Value, AppError> {
        self.time_entries().retrieve(id).await
    }

    async fn create_time_entry(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating time entry");
        self.time_entries().create(data).await
    }

    async fn update_time_entry(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating time entry {}", id);
        self.time_entries().update(id, data).await
    }

    async fn delete_time_entry(&self, id: &str) -> Result<Value, AppError> {
        info!("Deleting time entry {}", id);
        self.time_entries().destroy(id).await
    }
}
