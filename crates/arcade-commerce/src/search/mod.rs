//! Search module.
//!
//! Stateless text filtering over the catalog.

mod filter;

pub use filter::search;
