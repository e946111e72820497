//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Authenticate requests
//! - Log requests
//! - Short-circuit requests (reject unauthorized)

/// Static bearer token authentication middleware
pub mod auth;
/// Request logging middleware
pub mod logging;
