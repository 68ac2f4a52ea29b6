//! Storefront domain types and logic for the Arcade game store.
//!
//! - **Catalog**: the fixed, ordered list of games loaded at startup
//! - **Cart**: the persisted, duplicate-permitting cart and its manager
//! - **Search**: case-insensitive title/developer filter
//! - **Selection**: the product detail overlay and its buy action
//!
//! # Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use arcade_cache::{Cache, MemoryStore};
//! use arcade_commerce::prelude::*;
//!
//! let catalog = Rc::new(Catalog::from_json(GAMES_JSON)?);
//! let mut cart = CartManager::load(catalog.clone(), Cache::new(MemoryStore::new()), "cart");
//!
//! cart.add_item(ProductId::new(1))?;
//! println!("Total: {}", cart.total());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod search;
pub mod selection;

#[cfg(test)]
mod testing;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    pub use crate::catalog::{Catalog, CatalogItem};
    pub use crate::cart::{CartItem, CartManager, CartSnapshot};
    pub use crate::search::search;
    pub use crate::selection::{SelectionDetail, SelectionEvent, SelectionPresenter};
}
