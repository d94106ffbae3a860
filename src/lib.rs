/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # Lifeline Client
//!
//! Async client for the Lifeline Accounting REST API.
//!
//! The crate is organised in layers:
//!
//! - [`session`]: token and company persistence behind a key/value storage
//!   abstraction, injected into everything that needs it.
//! - [`application`]: the HTTP client (bearer token attachment, company scoping,
//!   single-flight token refresh), the REST service wrappers and the state
//!   store that sequences login, user and company loading.
//! - [`presentation`]: route table and navigation guard, formatters, chart
//!   presets and payload key aliasing.
//!
//! ## Example
//!
//! ```ignore
//! use lifeline_client::prelude::*;
//!
//! let config = Config::new();
//! let storage = Arc::new(AuthStorage::from_config(&config));
//! let client = Arc::new(HttpClient::new(config, storage)?);
//!
//! let store = AppStore::new(client.clone());
//! store.login(&Credentials::new("alice", "secret")).await?;
//!
//! let invoices = PaymentsServiceImpl::new(client).get_invoices().await?;
//! ```

/// Application layer: HTTP client, services and state store
pub mod application;
/// Global constants: endpoint paths, storage keys and defaults
pub mod constants;
/// Library error type
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Route table, formatters and other view helpers
pub mod presentation;
/// Session persistence
pub mod session;
/// Configuration and logging helpers
pub mod utils;

/// Crate version, as declared in `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
