/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::auth::{Credentials, LoginResponse, User};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the authentication service
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in, storing the tokens, the user and a default active company
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError>;

    /// Logs out server-side; local auth data is cleared whatever the outcome
    async fn logout(&self) -> Result<(), AppError>;

    /// Registers a new user, storing tokens when the server returns them
    async fn register(&self, user_data: &Value) -> Result<LoginResponse, AppError>;

    /// Renews the access token and returns it
    async fn refresh_token(&self) -> Result<String, AppError>;

    /// Gets the current user profile
    async fn get_user_profile(&self) -> Result<User, AppError>;

    /// Updates the current user profile
    async fn update_profile(&self, profile_data: &Value) -> Result<Value, AppError>;

    /// Changes the password of the current user
    async fn change_password(&self, password_data: &Value) -> Result<Value, AppError>;

    /// Uploads an avatar image
    async fn upload_avatar(&self, file_name: &str, bytes: Vec<u8>) -> Result<Value, AppError>;

    /// Whether an access token is stored
    fn is_authenticated(&self) -> bool;

    /// The stored user
    fn get_current_user(&self) -> Option<User>;

    /// Restores auth state on startup, selecting the user's first company if none is selected
    fn initialize_auth(&self);

    /// Marks one of the user's companies as active
    ///
    /// Returns  when there is no stored user or the user has no such company.
    fn set_active_company(&self, company_id: &str) -> bool;
}
