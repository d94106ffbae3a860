/// HTTP client with bearer authentication and refresh-and-replay
pub mod client;
/// Application configuration module
pub mod config;
/// Idle-session logout
pub mod inactivity;
/// Service interfaces and traits
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Single-flight token refresh coordination
pub mod refresh;
/// REST service implementations
pub mod services;
/// Session and view state stores
pub mod store;
