//! Root welcome endpoint.

/// Welcome handler for `GET /`.
///
/// Returns a plain-text greeting pointing at the product collection. Gated
/// by the bearer token like every other route.
pub async fn welcome() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}
