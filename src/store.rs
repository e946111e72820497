//! In-memory product storage.
//!
//! This module owns the authoritative product collection. It replaces a
//! database layer: all state lives in a single `Vec` behind a mutex, seeded
//! with three example records at startup and reset on every restart.

use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::models::product::{Product, ProductRequest};

/// Error raised by store operations.
///
/// The store has no I/O, so the only failure mode is a poisoned lock left
/// behind by a panicking thread. Handlers surface this as a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("product collection lock poisoned")]
    LockPoisoned,
}

/// Handle to the in-memory product collection.
///
/// Cloning is cheap: every clone shares the same underlying collection, so
/// the store can be handed to Axum as application state and extracted in
/// every handler, the same way a database pool would be.
///
/// # Locking
///
/// Axum runs handlers on a multi-threaded runtime, so each operation takes
/// the mutex for its entire read-or-mutate step. No `.await` happens while
/// the guard is held, which keeps a `std::sync::Mutex` safe here and makes
/// every operation a single atomic step: a lookup and the mutation that
/// follows it can never interleave with another request.
#[derive(Clone)]
pub struct ProductStore {
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductStore {
    /// Create a store pre-populated with the three seed records.
    ///
    /// Seed ids are "1", "2", "3" in insertion order. There is no durability;
    /// a process restart always comes back to exactly this state.
    pub fn with_seed_data() -> Self {
        let seed = vec![
            Product {
                id: "1".to_string(),
                name: Some("Laptop".to_string()),
                description: Some("High-performance laptop with 16GB RAM".to_string()),
                price: Some(1200.0),
                category: Some("electronics".to_string()),
                in_stock: Some(true),
            },
            Product {
                id: "2".to_string(),
                name: Some("Smartphone".to_string()),
                description: Some("Latest model with 128GB storage".to_string()),
                price: Some(800.0),
                category: Some("electronics".to_string()),
                in_stock: Some(true),
            },
            Product {
                id: "3".to_string(),
                name: Some("Coffee Maker".to_string()),
                description: Some("Programmable coffee maker with timer".to_string()),
                price: Some(50.0),
                category: Some("kitchen".to_string()),
                in_stock: Some(false),
            },
        ];

        Self {
            products: Arc::new(Mutex::new(seed)),
        }
    }

    /// Acquire the collection lock.
    fn lock(&self) -> Result<MutexGuard<'_, Vec<Product>>, StoreError> {
        self.products.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Return a snapshot of all products in insertion order.
    pub fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.lock()?.clone())
    }

    /// Find a product by id. Linear scan with string equality.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.lock()?.iter().find(|p| p.id == id).cloned())
    }

    /// Insert a new product built from the supplied fields.
    ///
    /// The store assigns a fresh random id (UUIDv4 as a string) and appends
    /// the record at the end of the collection. The supplied fields are
    /// stored as-is; nothing is validated.
    pub fn insert(&self, request: ProductRequest) -> Result<Product, StoreError> {
        let product = Product::from_request(Uuid::new_v4().to_string(), request);
        self.lock()?.push(product.clone());
        Ok(product)
    }

    /// Replace the product with the given id in place.
    ///
    /// The replacement keeps the path-supplied `id` (any id in the request
    /// body is already discarded at deserialization) and occupies the same
    /// position in the collection. Returns `None` if no product matches.
    pub fn replace(&self, id: &str, request: ProductRequest) -> Result<Option<Product>, StoreError> {
        let mut products = self.lock()?;
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                let product = Product::from_request(id.to_string(), request);
                products[index] = product.clone();
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    /// Remove the product with the given id.
    ///
    /// Returns `false` if no product matches, so a repeated delete of the
    /// same id never succeeds twice.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut products = self.lock()?;
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, price: f64) -> ProductRequest {
        ProductRequest {
            name: Some(name.to_string()),
            description: None,
            price: Some(price),
            category: Some("test".to_string()),
            in_stock: Some(true),
        }
    }

    #[test]
    fn seed_data_is_three_products_in_order() {
        let store = ProductStore::with_seed_data();
        let products = store.list_all().unwrap();

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(products[0].name.as_deref(), Some("Laptop"));
        assert_eq!(products[2].category.as_deref(), Some("kitchen"));
    }

    #[test]
    fn insert_appends_with_fresh_id() {
        let store = ProductStore::with_seed_data();
        let created = store.insert(request("Kettle", 30.0)).unwrap();

        assert!(!created.id.is_empty());
        assert!(!["1", "2", "3"].contains(&created.id.as_str()));

        let products = store.list_all().unwrap();
        assert_eq!(products.len(), 4);
        assert_eq!(products[3].id, created.id);
    }

    #[test]
    fn generated_ids_are_unique() {
        let store = ProductStore::with_seed_data();
        let a = store.insert(request("A", 1.0)).unwrap();
        let b = store.insert(request("B", 2.0)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn find_by_id_returns_current_fields() {
        let store = ProductStore::with_seed_data();
        let product = store.find_by_id("2").unwrap().expect("seed product");
        assert_eq!(product.name.as_deref(), Some("Smartphone"));
        assert_eq!(product.price, Some(800.0));
    }

    #[test]
    fn find_by_id_misses_unknown_ids() {
        let store = ProductStore::with_seed_data();
        assert!(store.find_by_id("nope").unwrap().is_none());
    }

    #[test]
    fn replace_keeps_position_and_given_id() {
        let store = ProductStore::with_seed_data();
        let updated = store
            .replace("2", request("Tablet", 400.0))
            .unwrap()
            .expect("seed product");

        assert_eq!(updated.id, "2");
        assert_eq!(updated.name.as_deref(), Some("Tablet"));

        let products = store.list_all().unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[1].id, "2");
        assert_eq!(products[1].name.as_deref(), Some("Tablet"));
        // Fields not supplied in the replacement are gone, not merged
        assert!(products[1].description.is_none());
    }

    #[test]
    fn replace_misses_unknown_ids() {
        let store = ProductStore::with_seed_data();
        assert!(store.replace("42", request("Ghost", 0.0)).unwrap().is_none());
    }

    #[test]
    fn remove_succeeds_once_only() {
        let store = ProductStore::with_seed_data();
        assert!(store.remove("1").unwrap());
        assert!(!store.remove("1").unwrap());
        assert_eq!(store.list_all().unwrap().len(), 2);
    }
}
