/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::{ApiRequest, HttpClient};
use crate::application::interfaces::auth::AuthService;
use crate::constants::{
    AUTH_CHANGE_PASSWORD_PATH, AUTH_LOGIN_PATH, AUTH_LOGOUT_PATH, AUTH_PROFILE_PATH,
    AUTH_REGISTER_PATH, AUTH_UPLOAD_AVATAR_PATH,
};
use crate::error::AppError;
use crate::model::auth::{Credentials, LoginResponse, RefreshRequest, User, company_id_of};
use crate::session::{Persistence, SessionEvent};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Implementation of the authentication service
pub struct AuthServiceImpl {
    client: Arc<HttpClient>,
}

impl AuthServiceImpl {
    /// Creates a new instance of the authentication service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Stores the tokens and user of a successful login or registration
    ///
    /// Responses without an access token are left untouched.
    fn store_session(&self, response: &mut LoginResponse) {
        let Some(access) = response.access.as_deref() else {
            return;
        };
        let storage = self.client.storage();
        storage.set_tokens(access, response.refresh.as_deref());

        if let Some(user) = response.user.as_mut() {
            if let Some(first) = user.companies.first().cloned() {
                if let Some(company_id) = company_id_of(&first) {
                    storage.set_selected_company_id(Some(&company_id));
                }
                user.active_company = Some(first);
            }
            storage.set_user(Some(user));
        }
        self.client.emit(SessionEvent::LoggedIn);
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError> {
        info!("Logging in as {}", credentials.username);
        let persistence = if credentials.remember_me {
            Persistence::Local
        } else {
            Persistence::Session
        };
        self.client.storage().set_preference(persistence);

        let request = ApiRequest::post(AUTH_LOGIN_PATH)
            .json(credentials)?
            .without_refresh();
        let mut response: LoginResponse = self.client.execute(request).await?;

        self.store_session(&mut response);
        if response.access.is_some() {
            info!("✓ Logged in as {}", credentials.username);
        } else {
            warn!("Login response carried no access token");
        }
        Ok(response)
    }

    async fn logout(&self) -> Result<(), AppError> {
        let storage = self.client.storage();
        let body = RefreshRequest {
            refresh: storage.refresh_token(),
        };

        let result: Result<Value, AppError> = self.client.post(AUTH_LOGOUT_PATH, &body).await;
        if let Err(e) = &result {
            warn!("Logout API call failed: {}", e);
        }

        storage.clear();
        self.client.emit(SessionEvent::LoggedOut);
        info!("Logged out");
        result.map(|_| ())
    }

    async fn register(&self, user_data: &Value) -> Result<LoginResponse, AppError> {
        let request = ApiRequest::post(AUTH_REGISTER_PATH)
            .json(user_data)?
            .without_refresh();
        let mut response: LoginResponse = self.client.execute(request).await?;
        self.store_session(&mut response);
        info!("Registration completed");
        Ok(response)
    }

    async fn refresh_token(&self) -> Result<String, AppError> {
        if self.client.storage().refresh_token().is_none() {
            return Err(AppError::InvalidInput(
                "No refresh token available".to_string(),
            ));
        }
        self.client.refresh_access_token().await
    }

    async fn get_user_profile(&self) -> Result<User, AppError> {
        self.client.get(AUTH_PROFILE_PATH).await
    }

    async fn update_profile(&self, profile_data: &Value) -> Result<Value, AppError> {
        info!("Updating user profile");
        self.client.put(AUTH_PROFILE_PATH, profile_data).await
    }

    async fn change_password(&self, password_data: &Value) -> Result<Value, AppError> {
        info!("Changing password");
        self.client
            .post(AUTH_CHANGE_PASSWORD_PATH, password_data)
            .await
    }

    async fn upload_avatar(&self, file_name: &str, bytes: Vec<u8>) -> Result<Value, AppError> {
        debug!("Uploading avatar {} ({} bytes)", file_name, bytes.len());
        self.client
            .post_multipart(AUTH_UPLOAD_AVATAR_PATH, "avatar", file_name, bytes)
            .await
    }

    fn is_authenticated(&self) -> bool {
        self.client.storage().access_token().is_some()
    }

    fn get_current_user(&self) -> Option<User> {
        self.client.storage().current_user()
    }

    fn initialize_auth(&self) {
        if self.client.storage().selected_company_id().is_some() {
            return;
        }
        if let Some(company_id) = self.get_current_user().and_then(|u| u.first_company_id()) {
            debug!("No active company, selecting {}", company_id);
            self.set_active_company(&company_id);
        }
    }

    fn set_active_company(&self, company_id: &str) -> bool {
        let Some(mut user) = self.get_current_user() else {
            return false;
        };
        let Some(company) = user.find_company(company_id).cloned() else {
            warn!("Company {} is not available to the current user", company_id);
            return false;
        };

        user.active_company = Some(company);
        let storage = self.client.storage();
        storage.set_user(Some(&user));
        storage.set_selected_company_id(Some(company_id));
        info!("Active company set to {}", company_id);
        true
    }
}
