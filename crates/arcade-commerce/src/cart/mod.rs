//! Shopping cart module.
//!
//! The cart is an ordered sequence of catalog copies. The same product
//! may appear several times; entries are told apart by position.

mod manager;

pub use manager::{CartItem, CartManager, CartSnapshot};
