//! Product CRUD HTTP handlers.
//!
//! This module implements the product API endpoints:
//! - GET /api/products - List all products
//! - GET /api/products/:id - Get a specific product
//! - POST /api/products - Create a new product
//! - PUT /api/products/:id - Replace a product
//! - DELETE /api/products/:id - Delete a product

use crate::{
    error::AppError,
    models::product::{Product, ProductRequest},
    store::ProductStore,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

/// List all products.
///
/// # Endpoint
///
/// `GET /api/products`
///
/// # Response
///
/// - **Success (200 OK)**: JSON array of every product, in insertion order.
///   No pagination, no filtering.
/// - **Error (401)**: Missing or wrong bearer token
pub async fn list_products(
    State(store): State<ProductStore>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = store.list_all()?;

    Ok(Json(products))
}

/// Get a specific product by ID.
///
/// # Endpoint
///
/// `GET /api/products/:id`
///
/// # Response
///
/// - **Success (200 OK)**: The matching product
/// - **Error (404)**: No product with this id
/// - **Error (401)**: Missing or wrong bearer token
///
/// ```json
/// {
///   "id": "1",
///   "name": "Laptop",
///   "description": "High-performance laptop with 16GB RAM",
///   "price": 1200,
///   "category": "electronics",
///   "inStock": true
/// }
/// ```
pub async fn get_product(
    State(store): State<ProductStore>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = store
        .find_by_id(&product_id)?
        // Return 404 if not found
        .ok_or(AppError::ProductNotFound)?;

    Ok(Json(product))
}

/// Create a new product.
///
/// # Endpoint
///
/// `POST /api/products`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Kettle",
///   "description": "Fast boil",
///   "price": 30,
///   "category": "kitchen",
///   "inStock": true
/// }
/// ```
///
/// Every field is optional and stored as supplied; an `id` in the body is
/// ignored. No validation of any kind.
///
/// # Response
///
/// - **Success (201 Created)**: The created product, including its
///   store-assigned id
/// - **Error (401)**: Missing or wrong bearer token
pub async fn create_product(
    State(store): State<ProductStore>,
    Json(request): Json<ProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let product = store.insert(request)?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product.
///
/// # Endpoint
///
/// `PUT /api/products/:id`
///
/// # Semantics
///
/// Full replacement, not a merge: the stored product becomes the path id
/// plus exactly the supplied fields. Fields absent from the body are absent
/// afterwards. The path id always wins over anything in the body.
///
/// # Response
///
/// - **Success (200 OK)**: The replaced product
/// - **Error (404)**: No product with this id
/// - **Error (401)**: Missing or wrong bearer token
pub async fn update_product(
    State(store): State<ProductStore>,
    Path(product_id): Path<String>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<Product>, AppError> {
    let product = store
        .replace(&product_id, request)?
        .ok_or(AppError::ProductNotFound)?;

    Ok(Json(product))
}

/// Delete a product.
///
/// # Endpoint
///
/// `DELETE /api/products/:id`
///
/// # Response
///
/// - **Success (200 OK)**: `{"message": "Product deleted successfully"}`
/// - **Error (404)**: No product with this id; deleting the same id twice
///   yields 404 the second time
/// - **Error (401)**: Missing or wrong bearer token
pub async fn delete_product(
    State(store): State<ProductStore>,
    Path(product_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !store.remove(&product_id)? {
        return Err(AppError::ProductNotFound);
    }

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
