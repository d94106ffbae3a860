/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! HTTP client for the Lifeline API
//!
//! Every request carries the stored bearer token and the selected company.
//! A `401` triggers one shared token refresh; the failed request, and every
//! request that failed while the refresh was in flight, is replayed once with
//! the new token. If the refresh fails the session is cleared and an
//! [`SessionEvent::Expired`] event is broadcast.
//!
//! # Example
//! ```ignore
//! let client = HttpClient::new(Config::new(), Arc::new(AuthStorage::in_memory()))?;
//! let companies: serde_json::Value = client.get("/core/companies/").await?;
//! ```

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::application::refresh::{RefreshQueue, Ticket};
use crate::constants::{AUTH_REFRESH_PATH, AUTHORIZATION_HEADER, COMPANY_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{RefreshRequest, RefreshResponse};
use crate::session::{AuthStorage, SessionEvent};
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpInternalClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Body of an [`ApiRequest`]
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// JSON document
    Json(Value),
    /// Single-file multipart upload
    File {
        /// Form field name
        field: String,
        /// File name reported to the server
        file_name: String,
        /// File contents
        bytes: Vec<u8>,
    },
}

/// A replayable API request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<RequestBody>,
    refreshable: bool,
}

impl ApiRequest {
    /// Creates a request without body or query
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            refreshable: true,
        }
    }

    /// `GET` request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST` request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PUT` request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// `DELETE` request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends query string pairs
    #[must_use]
    pub fn query<K: ToString, V: ToString>(mut self, pairs: &[(K, V)]) -> Self {
        self.query
            .extend(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self
    }

    /// Sets a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Sets a single-file multipart body
    #[must_use]
    pub fn file(mut self, field: &str, file_name: &str, bytes: Vec<u8>) -> Self {
        self.body = Some(RequestBody::File {
            field: field.to_string(),
            file_name: file_name.to_string(),
            bytes,
        });
        self
    }

    /// Disables the refresh-and-replay on `401`
    ///
    /// Used for the calls that establish a session (login, registration,
    /// refresh itself), where a `401` means bad credentials.
    #[must_use]
    pub fn without_refresh(mut self) -> Self {
        self.refreshable = false;
        self
    }

    /// HTTP method
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the API base
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Client for the Lifeline REST API with automatic token refresh
///
/// Cheap to share behind an `Arc`; all state is internally synchronised.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    storage: Arc<AuthStorage>,
    refresh_queue: RefreshQueue,
    rate_limiter: RateLimiter,
    events: broadcast::Sender<SessionEvent>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("storage", &self.storage)
            .finish()
    }
}

impl HttpClient {
    /// Creates a new client over the given session storage
    ///
    /// No request is made; an existing session in `storage` is used as-is.
    pub fn new(config: Config, storage: Arc<AuthStorage>) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            http_client,
            config: Arc::new(config),
            storage,
            refresh_queue: RefreshQueue::new(),
            rate_limiter,
            events,
        })
    }

    /// Client configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Session storage shared with the services and the store
    #[must_use]
    pub fn storage(&self) -> &Arc<AuthStorage> {
        &self.storage
    }

    /// Queue coordinating token refreshes for this client
    #[must_use]
    pub fn refresh_queue(&self) -> &RefreshQueue {
        &self.refresh_queue
    }

    /// Subscribes to session events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        // no subscribers is fine
        let _ = self.events.send(event);
    }

    /// Absolute URL for `path`; absolute URLs are passed through
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url,
                path.trim_start_matches('/')
            )
        }
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.execute(ApiRequest::get(path)).await
    }

    /// Makes a GET request with query string parameters
    pub async fn get_with_query<K: ToString, V: ToString, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(K, V)],
    ) -> Result<T, AppError> {
        self.execute(ApiRequest::get(path).query(query)).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(ApiRequest::post(path).json(body)?).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(ApiRequest::put(path).json(body)?).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.execute(ApiRequest::delete(path)).await
    }

    /// Uploads a single file as `multipart/form-data`
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T, AppError> {
        self.execute(ApiRequest::post(path).file(field, file_name, bytes))
            .await
    }

    /// Sends a request, refreshing the token and replaying once on `401`
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, AppError> {
        let token = self.storage.access_token();

        let err = match self.send(&request, token.as_deref()).await {
            Ok(response) => return self.parse_response(response).await,
            Err(e) => e,
        };

        if !request.refreshable || err.status() != Some(StatusCode::UNAUTHORIZED) {
            return Err(err);
        }

        let replay_token = match self.storage.access_token() {
            Some(current) if token.as_deref() != Some(current.as_str()) => {
                debug!("Token changed while request was in flight, replaying");
                current
            }
            _ => {
                warn!("Access token rejected, refreshing and retrying");
                self.refresh_access_token().await?
            }
        };

        match self.send(&request, Some(&replay_token)).await {
            Ok(response) => self.parse_response(response).await,
            Err(e) if e.status() == Some(StatusCode::UNAUTHORIZED) => {
                error!("Replayed request still unauthorized: {}", request.path);
                Err(AppError::Unauthorized)
            }
            Err(e) => Err(e),
        }
    }

    /// Renews the access token, joining a refresh already in flight
    ///
    /// Returns the new access token. If the refresh fails the session is
    /// cleared, [`SessionEvent::Expired`] is broadcast and every queued caller
    /// fails with [`AppError::RefreshFailed`].
    pub async fn refresh_access_token(&self) -> Result<String, AppError> {
        match self.refresh_queue.enter() {
            Ticket::Follower(rx) => match rx.await {
                Ok(Ok(token)) => Ok(token),
                Ok(Err(message)) => Err(AppError::RefreshFailed(message)),
                Err(_) => Err(AppError::RefreshFailed(
                    "token refresh was abandoned".to_string(),
                )),
            },
            Ticket::Leader(guard) => match self.perform_refresh().await {
                Ok(token) => {
                    guard.resolve(Ok(token.clone()));
                    Ok(token)
                }
                Err(e) => {
                    error!("Token refresh failed: {}", e);
                    self.expire_session();
                    guard.resolve(Err(e.to_string()));
                    Err(e)
                }
            },
        }
    }

    /// Clears the session and tells subscribers to go to the login view
    pub fn expire_session(&self) {
        self.storage.clear();
        self.emit(SessionEvent::expired());
        info!("Session expired, redirecting to login");
    }

    async fn perform_refresh(&self) -> Result<String, AppError> {
        let Some(refresh) = self.storage.refresh_token() else {
            warn!("No refresh token available");
            return Err(AppError::SessionExpired);
        };

        let request = ApiRequest::post(AUTH_REFRESH_PATH)
            .json(&RefreshRequest {
                refresh: Some(refresh),
            })?
            .without_refresh();

        let response = self.send(&request, None).await?;
        let tokens: RefreshResponse = self.parse_response(response).await?;

        self.storage
            .set_tokens(&tokens.access, tokens.refresh.as_deref());
        self.emit(SessionEvent::TokenRefreshed);
        info!("✓ Access token refreshed");
        Ok(tokens.access)
    }

    async fn send(&self, request: &ApiRequest, token: Option<&str>) -> Result<Response, AppError> {
        self.rate_limiter.wait().await;

        let url = self.url(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .http_client
            .request(request.method.clone(), &url)
            .header(ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION_HEADER, format!("Bearer {token}"));
        }
        if let Some(company_id) = self.storage.selected_company_id() {
            builder = builder.header(COMPANY_HEADER, company_id);
        }

        builder = match &request.body {
            Some(RequestBody::Json(body)) => builder.json(body),
            Some(RequestBody::File {
                field,
                file_name,
                bytes,
            }) => builder.multipart(
                Form::new().part(
                    field.clone(),
                    Part::bytes(bytes.clone()).file_name(file_name.clone()),
                ),
            ),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => {
                warn!("Not found: {}", url);
                Err(AppError::NotFound)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Rate limited by server: {}", url);
                Err(AppError::RateLimitExceeded)
            }
            _ => {
                error!("Request failed with status {}: {}", status, body);
                Err(AppError::Http { status, body })
            }
        }
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
