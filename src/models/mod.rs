//! Data models for the product resource.

/// Product entity and request body types
pub mod product;
