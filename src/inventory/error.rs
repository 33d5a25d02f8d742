//! Inventory-specific error types.

use super::ProductId;
use std::path::PathBuf;

/// Errors that can occur during inventory operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// No product with the given id lives in the store
    #[error("Product not found: {id}")]
    ProductNotFound { id: ProductId },

    /// Failed to read or parse a product import file
    #[error("Failed to import products from {path}: {message}")]
    ImportFailed { path: PathBuf, message: String },
}
