//! Core abstractions shared by the Arcade storefront crates.
//!
//! This crate provides:
//! - `StorefrontConfig` - Cart, carousel and logging configuration
//! - `Observer` / `ObserverSet` - Change notification for view collaborators

mod config;
mod observer;

pub use config::*;
pub use observer::*;
