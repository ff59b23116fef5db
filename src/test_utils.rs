//! Shared test utilities for the Product API.
//!
//! This module provides helpers for setting up an in-memory store and creating
//! test products with sensible defaults.

use crate::{
    config::database::{create_connection, create_tables},
    core::ProductStore,
    entities,
    errors::Result,
    models::NewProduct,
};

/// Creates an in-memory `SQLite` store with the products table initialized.
/// This is the standard setup for all store and handler tests.
pub async fn setup_test_store() -> Result<ProductStore> {
    let db = create_connection("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(ProductStore::new(db))
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `description`: "Test description"
/// * `price`: 10.0
pub async fn create_test_product(
    store: &ProductStore,
    name: &str,
) -> Result<entities::product::Model> {
    create_custom_product(store, name, "Test description", 10.0).await
}

/// Creates a test product with every field chosen by the caller.
pub async fn create_custom_product(
    store: &ProductStore,
    name: &str,
    description: &str,
    price: f64,
) -> Result<entities::product::Model> {
    store
        .insert(NewProduct {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            price: Some(price),
        })
        .await
}
