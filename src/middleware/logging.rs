//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};

/// Log the method and path of every incoming request.
///
/// Runs before the auth gate, so rejected requests are logged too. Pure
/// side effect: the request passes through unchanged.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!("{} request for '{}'", request.method(), request.uri().path());

    next.run(request).await
}
