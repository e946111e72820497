//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Translates it into product store operations
//! 3. Returns HTTP response (JSON, status code)

/// Product CRUD endpoints
pub mod products;
/// Root welcome endpoint
pub mod root;
