/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login credentials sent to `/auth/login/`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
    /// Ask the server for a long-lived refresh token
    #[serde(default)]
    pub remember_me: bool,
}

impl Credentials {
    /// Creates credentials without `remember_me`
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    /// Sets the `remember_me` flag
    #[must_use]
    pub fn remember(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Body of `/auth/login/` and `/auth/register/` responses
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct LoginResponse {
    /// Short-lived access token
    #[serde(default)]
    pub access: Option<String>,
    /// Long-lived refresh token
    #[serde(default)]
    pub refresh: Option<String>,
    /// Authenticated user, when the server embeds it
    #[serde(default)]
    pub user: Option<User>,
}

/// Body sent to `/auth/refresh/` and `/auth/logout/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    /// Refresh token, `None` serializes as `null`
    pub refresh: Option<String>,
}

/// Body of a `/auth/refresh/` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    /// New access token
    pub access: String,
    /// Rotated refresh token, when rotation is enabled server-side
    #[serde(default)]
    pub refresh: Option<String>,
}

/// The authenticated user
///
/// Only the fields the client acts on are typed; everything else the server
/// sends is preserved in `extra` and written back verbatim.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct User {
    /// User id (number or string depending on the backend)
    #[serde(default)]
    pub id: Value,
    /// Login name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Django superuser flag
    #[serde(default)]
    pub is_superuser: bool,
    /// Django staff flag
    #[serde(default)]
    pub is_staff: bool,
    /// Application role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Companies the user belongs to
    #[serde(default)]
    pub companies: Vec<Value>,
    /// Company marked active by [`crate::application::interfaces::auth::AuthService::set_active_company`]
    #[serde(
        default,
        rename = "activeCompany",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_company: Option<Value>,
    /// Untyped remainder of the payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Whether the user may open admin-only views
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_superuser || self.is_staff || self.role.as_deref() == Some("admin")
    }

    /// User id rendered as a string, `None` when absent
    #[must_use]
    pub fn id_string(&self) -> Option<String> {
        value_as_id(&self.id)
    }

    /// Finds a company by id among the user's companies
    #[must_use]
    pub fn find_company(&self, company_id: &str) -> Option<&Value> {
        self.companies
            .iter()
            .find(|c| company_id_of(c).as_deref() == Some(company_id))
    }

    /// Id of the first company, if any
    #[must_use]
    pub fn first_company_id(&self) -> Option<String> {
        self.companies.first().and_then(company_id_of)
    }
}

/// Extracts the id of a company payload
///
/// Backends disagree on the field name; `CompanyID`, `company_id` and `id` are
/// tried in that order.
#[must_use]
pub fn company_id_of(company: &Value) -> Option<String> {
    ["CompanyID", "company_id", "id"]
        .iter()
        .filter_map(|key| company.get(*key))
        .find_map(value_as_id)
}

/// Renders a JSON id as a string; strings verbatim, numbers in decimal
#[must_use]
pub fn value_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
