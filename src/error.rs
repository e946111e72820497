//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::store::StoreError;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and a fixed message body.
///
/// # Error Categories
///
/// - **Authentication Errors**: Missing or incorrect bearer token
/// - **Resource Errors**: Requested product not found
/// - **Internal Errors**: Any unexpected fault inside the store
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bearer token is missing or does not match the shared secret.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Unauthorized")]
    Unauthorized,

    /// Requested product id has no matching entry in the store.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Product not found")]
    ProductNotFound,

    /// Product store operation failed (e.g., poisoned lock).
    ///
    /// This wraps any StoreError using the `#[from]` attribute, which
    /// automatically implements `From<StoreError> for AppError`.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses. It is
/// the single dispatch point for every failure in the service; nothing else
/// writes an error status.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "message": "Human-readable error message"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Unauthorized` → 401 Unauthorized
/// - `ProductNotFound` → 404 Not Found
/// - `Store` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, message)
        let (status, message) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::ProductNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Store(ref err) => {
                // Log the detail server-side; the client only sees the generic message
                tracing::error!("internal error while handling request: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        // Build JSON response body
        let body = Json(json!({ "message": message }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
