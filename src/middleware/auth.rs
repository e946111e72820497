//! Bearer token authentication middleware.
//!
//! This middleware intercepts every request to:
//! 1. Extract the bearer token from the Authorization header
//! 2. Compare it against the static shared secret
//! 3. Reject requests that do not carry the exact token with HTTP 401
//!
//! There is one token for the whole service: no per-route exemptions (the
//! root route is gated too), no rotation, no rate limiting.

use crate::error::AppError;
use axum::{extract::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

/// The static shared secret every client must present.
const API_TOKEN: &str = "mysecrettoken";

/// Bearer token authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <token>` header from request
/// 2. Hash `<token>` and the expected secret with SHA-256
/// 3. If the digests match: call the next handler
/// 4. Otherwise: return 401 Unauthorized, never invoking the handler
///
/// # Headers
///
/// Expected header, byte for byte:
/// ```
/// Authorization: Bearer mysecrettoken
/// ```
///
/// # Arguments
///
/// * `request` - Incoming HTTP request
/// * `next` - Next middleware/handler in the chain
///
/// # Returns
///
/// - `Ok(Response)` if authenticated (calls next handler)
/// - `Err(AppError::Unauthorized)` if the header is missing, not a Bearer
///   scheme, or carries any other token (returns 401)
pub async fn auth_middleware(request: Request, next: Next) -> Result<Response, AppError> {
    // Step 1: Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    // Step 2: Extract Bearer token
    // Expected format: "Bearer <token>"
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    // Step 3: Compare SHA-256 digests of the presented and expected tokens
    if Sha256::digest(token.as_bytes()) != Sha256::digest(API_TOKEN.as_bytes()) {
        return Err(AppError::Unauthorized);
    }

    // Step 4: Call the next middleware/handler
    Ok(next.run(request).await)
}
