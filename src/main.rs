//! Product API - Main Application Entry Point
//!
//! This is a REST API server exposing CRUD operations over a single in-memory
//! collection of product records. Every route, including the root welcome
//! route, requires a static bearer token.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-memory product store, seeded at startup, reset on restart
//! - **Authentication**: Static bearer token with SHA-256 digest comparison
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the product store with its seed records
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod store;

use tracing_subscriber::EnvFilter;

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create the product store with its seed records
    let store = store::ProductStore::with_seed_data();
    tracing::info!("Product store seeded");

    let app = Router::new()
        // Root welcome route
        .route("/", get(handlers::root::welcome))
        // Product CRUD routes
        .route("/api/products", get(handlers::products::list_products))
        .route("/api/products", post(handlers::products::create_product))
        .route("/api/products/{id}", get(handlers::products::get_product))
        .route("/api/products/{id}", put(handlers::products::update_product))
        .route(
            "/api/products/{id}",
            delete(handlers::products::delete_product),
        )
        // Require the bearer token on every request, matched route or not
        .layer(axum_middleware::from_fn(middleware::auth::auth_middleware))
        // Log method and path before the auth gate runs
        .layer(axum_middleware::from_fn(middleware::logging::log_request))
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share the product store with all handlers via State extraction
        .with_state(store);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
