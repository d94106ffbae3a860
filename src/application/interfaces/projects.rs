/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the projects service
#[async_trait]
pub trait ProjectsService: Send + Sync {
    // Projects
    /// Gets all projects
    async fn get_projects(&self) -> Result<Value, AppError>;

    /// Gets a single project by id
    async fn get_project(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a project
    async fn create_project(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a project
    async fn update_project(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a project
    async fn delete_project(&self, id: &str) -> Result<Value, AppError>;

    // Time entries
    /// Gets time entries, optionally only those of one project
    async fn get_time_entries(&self, project_id: Option<&str>) -> Result<Value, AppError>;

    /// Gets a single time entry by id
    async fn get_time_entry(&self, id: &str) -> Result<Value, AppError>;

    /// Creates a time entry
    async fn create_time_entry(&self, data: &Value) -> Result<Value, AppError>;

    /// Replaces a time entry
    async fn update_time_entry(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a time entry
    async fn delete_time_entry(&self, id: &str) -> Result<Value, AppError>;
}
