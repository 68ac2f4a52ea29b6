//! Product catalog module.
//!
//! The catalog is fixed at startup and never mutated afterwards.

mod item;
mod store;

pub use item::CatalogItem;
pub use store::Catalog;
