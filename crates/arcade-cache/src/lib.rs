//! Type-safe key-value storage for the Arcade storefront.
//!
//! Provides a small storage abstraction with automatic JSON
//! serialization, standing in for the browser's local storage.
//!
//! # Example
//!
//! ```rust,ignore
//! use arcade_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<CartItem>> = cache.get("cart")?;
//!
//! // Delete a value
//! cache.delete("cart")?;
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
