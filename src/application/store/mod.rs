/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Application state shared by the views
//!
//! [`AppStore`] owns the logged-in user, the selected company and the
//! loading/error flags of the login flow. It is restored from
//! [`AuthStorage`](crate::session::AuthStorage) on construction so a persisted
//! session survives restarts.

/// Audit log view state
pub mod audit;

pub use audit::{AuditState, AuditStore, Pagination};

use crate::application::client::HttpClient;
use crate::application::interfaces::auth::AuthService;
use crate::application::services::auth_service::AuthServiceImpl;
use crate::constants::{AUTH_PROFILE_PATH, COMPANIES_PATH};
use crate::error::AppError;
use crate::model::auth::{Credentials, User, company_id_of};
use crate::model::responses::ListEnvelope;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Snapshot of the application state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreState {
    /// Logged-in user
    pub user: Option<User>,
    /// A login is in progress
    pub loading: bool,
    /// Message of the last failed login
    pub error: Option<String>,
    /// Company the requests are scoped to
    pub selected_company_id: Option<String>,
}

/// Global session store
pub struct AppStore {
    client: Arc<HttpClient>,
    auth: AuthServiceImpl,
    state: RwLock<StoreState>,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("client", &self.client)
            .finish()
    }
}

impl AppStore {
    /// Creates the store, restoring user and company from storage
    pub fn new(client: Arc<HttpClient>) -> Self {
        let storage = client.storage();
        let state = StoreState {
            user: storage.current_user(),
            loading: false,
            error: None,
            selected_company_id: storage.selected_company_id(),
        };
        Self {
            auth: AuthServiceImpl::new(client.clone()),
            client,
            state: RwLock::new(state),
        }
    }

    /// Client the store talks through
    #[must_use]
    pub fn client(&self) -> &Arc<HttpClient> {
        &self.client
    }

    /// Logs in, then loads the user and their companies
    ///
    /// On failure `error` holds the server's `detail` message, or
    /// `"Login failed"` when there is none.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AppError> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.login_sequence(credentials).await;

        let mut state = self.state.write().await;
        state.loading = false;
        if let Err(e) = &result {
            error!("Login error: {}", e);
            state.error = Some(e.detail().unwrap_or_else(|| "Login failed".to_string()));
        }
        result
    }

    async fn login_sequence(&self, credentials: &Credentials) -> Result<User, AppError> {
        self.auth.login(credentials).await?;
        let user = self.fetch_user().await?;
        self.set_user(Some(user.clone())).await;
        self.load_companies().await?;
        Ok(self.user().await.unwrap_or(user))
    }

    /// Logs out and clears the session
    ///
    /// Local state is cleared even when the server call fails; the failure
    /// is still returned.
    pub async fn logout(&self) -> Result<(), AppError> {
        let result = self.auth.logout().await;
        if let Err(e) = &result {
            error!("Logout failed: {}", e);
        }
        self.clear_auth_data().await;
        result
    }

    /// Reloads the current user and checks it is still the same account
    ///
    /// If the profile belongs to a different user than the one stored in
    /// `current_user_id`, the session is cleared and
    /// [`AppError::SecurityViolation`] is returned. Any failure clears the
    /// session.
    pub async fn me(&self) -> Result<User, AppError> {
        match self.verified_user().await {
            Ok(user) => Ok(user),
            Err(e) => {
                error!("Failed to load user: {}", e);
                self.clear_auth_data().await;
                Err(e)
            }
        }
    }

    async fn verified_user(&self) -> Result<User, AppError> {
        let user = self.fetch_user().await?;
        let storage = self.client.storage();
        let new_id = user.id_string();

        if let Some(current) = storage.current_user_id().filter(|c| new_id.as_ref() != Some(c)) {
            warn!("User identity changed from {}, logging out", current);
            return Err(AppError::SecurityViolation(
                "user identity changed".to_string(),
            ));
        }

        storage.set_current_user_id(new_id.as_deref());
        self.set_user(Some(user)).await;
        self.load_companies().await?;
        self.user()
            .await
            .ok_or_else(|| AppError::InvalidInput("user was cleared".to_string()))
    }

    /// Fetches the profile, unwrapping a `{ "user": {...} }` envelope
    async fn fetch_user(&self) -> Result<User, AppError> {
        let payload: Value = self.client.get(AUTH_PROFILE_PATH).await?;
        let payload = if payload.get("user").is_some_and(Value::is_object) {
            payload["user"].clone()
        } else {
            payload
        };
        Ok(serde_json::from_value(payload)?)
    }

    /// Loads the user's companies and selects the first one if none is selected
    pub async fn load_companies(&self) -> Result<Vec<Value>, AppError> {
        debug!("Loading companies");
        let envelope: ListEnvelope = self.client.get(COMPANIES_PATH).await?;
        let companies = envelope.into_items();

        let mut state = self.state.write().await;
        if let Some(user) = state.user.as_mut() {
            user.companies = companies.clone();
            self.client.storage().set_user(Some(user));
        }

        let selected = state
            .selected_company_id
            .clone()
            .or_else(|| self.client.storage().selected_company_id());
        let first = companies.first().and_then(company_id_of);
        if let (None, Some(first)) = (selected, first) {
            info!("Auto-selected company {}", first);
            self.client.storage().set_selected_company_id(Some(&first));
            state.selected_company_id = Some(first);
        }
        Ok(companies)
    }

    /// Scopes subsequent requests to `company_id`
    pub async fn select_company(&self, company_id: &str) {
        self.client
            .storage()
            .set_selected_company_id(Some(company_id));
        self.state.write().await.selected_company_id = Some(company_id.to_string());
        info!("Selected company {}", company_id);
    }

    /// Forgets the user, the company selection and all stored credentials
    pub async fn clear_auth_data(&self) {
        self.client.storage().clear();
        let mut state = self.state.write().await;
        state.user = None;
        state.selected_company_id = None;
        state.error = None;
    }

    async fn set_user(&self, user: Option<User>) {
        self.client.storage().set_user(user.as_ref());
        self.state.write().await.user = user;
    }

    /// Whether a user is logged in
    pub async fn is_logged_in(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    /// Selected company id
    pub async fn selected_company_id(&self) -> Option<String> {
        self.state.read().await.selected_company_id.clone()
    }

    /// Logged-in user
    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Last login error
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Whether a login is in progress
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Copy of the whole state
    pub async fn snapshot(&self) -> StoreState {
        self.state.read().await.clone()
    }
}
