//! Commerce error types.

use arcade_cache::CacheError;
use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
///
/// Unknown ids and out-of-range positions are reported here so callers
/// can branch on them; the storefront itself treats them as no-ops.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Cart position out of range.
    #[error("Cart index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Buy requested with no product selected.
    #[error("No product selected")]
    NoSelection,

    /// Two catalog records share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Catalog record with a negative price.
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: ProductId, price: String },

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
