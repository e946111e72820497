//! Product data model and API request type.
//!
//! This module defines:
//! - `Product`: the stored entity, also serialized directly in responses
//! - `ProductRequest`: request body for creating and replacing products

use serde::{Deserialize, Serialize};

/// A product record in the store.
///
/// Every field except `id` is user-supplied and optional: the API stores
/// whatever the client sent, including nothing at all. Absent fields are
/// omitted from response JSON rather than rendered as `null`.
///
/// # JSON Example
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
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store on creation and immutable
    /// thereafter
    pub id: String,

    /// Human-readable product name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price as supplied; no currency, no non-negativity check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Free-form category label (not an enum)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Stock availability flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// Request body for creating or replacing a product.
///
/// Both operations accept the same shape, so one type serves POST and PUT.
/// All fields are optional and unvalidated. An `id` field in the body is
/// not declared here and therefore ignored; the store (on create) or the
/// URL path (on replace) decides the id.
///
/// # JSON Example
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
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl Product {
    /// Build a product from an id and the user-supplied fields.
    ///
    /// The caller owns id assignment; the request fields pass through
    /// untouched.
    pub fn from_request(id: String, request: ProductRequest) -> Self {
        Self {
            id,
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            in_stock: request.in_stock,
        }
    }
}
