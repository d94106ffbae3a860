/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # Lifeline Client Prelude
//!
//! Brings the commonly used types and traits into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use lifeline_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000/api/");
//! assert_eq!(config.rest_api.base_url, "http://localhost:8000/api");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, RateLimiterConfig, RestApiConfig, SessionConfig};

/// Library version information
pub use crate::{VERSION, version};

/// Logging setup
pub use crate::utils::logger::setup_logger;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION MANAGEMENT
// ============================================================================

/// Token and company persistence
pub use crate::session::{
    AuthStorage, FileStore, KeyValueStore, MemoryStore, Persistence, SessionEvent, SessionState,
};

// ============================================================================
// HTTP CLIENT
// ============================================================================

/// HTTP client and replayable requests
pub use crate::application::client::{ApiRequest, HttpClient, RequestBody};

/// Client-side throttling
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::interfaces::{
    audit::AuditService, auth::AuthService, contacts::ContactsService, core::CoreService,
    dashboard::DashboardService, finance::FinanceService, payments::PaymentsService,
    projects::ProjectsService, tax::TaxService,
};

/// Service implementations
pub use crate::application::services::{
    AuditServiceImpl, AuthServiceImpl, ContactsServiceImpl, CoreServiceImpl,
    DashboardServiceImpl, FinanceServiceImpl, PaymentsServiceImpl, ProjectsServiceImpl,
    TaxServiceImpl,
};

// ============================================================================
// STATE
// ============================================================================

/// Stores and idle logout
pub use crate::application::inactivity::InactivityMonitor;
pub use crate::application::store::{AppStore, AuditState, AuditStore, Pagination, StoreState};

// ============================================================================
// DATA MODELS
// ============================================================================

/// Authentication models
pub use crate::model::auth::{Credentials, LoginResponse, User};

/// Requests and list envelopes
pub use crate::model::requests::{ActionType, AuditFilterUpdate, AuditLogFilters, AuditLogQuery};
pub use crate::model::responses::ListEnvelope;

// ============================================================================
// PRESENTATION
// ============================================================================

/// Routing
pub use crate::presentation::routes::{Navigation, Route, RouteMeta, Router, View};

/// Formatting
pub use crate::presentation::formatters::DateStyle;

/// Chart presets
pub use crate::presentation::chart::ChartKind;

// ============================================================================
// EXTERNAL DEPENDENCIES
// ============================================================================

/// Async trait support
pub use async_trait::async_trait;

/// JSON values
pub use serde_json::{Value, json};

/// Shared ownership
pub use std::sync::Arc;
