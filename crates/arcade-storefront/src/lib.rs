//! Arcade storefront page logic.
//!
//! Wires the cart, carousel, detail overlay and search filter together
//! behind one event-driven facade. Rendering is left to the host, which
//! feeds [`UiEvent`]s in and subscribes to [`StorefrontEvent`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use arcade_storefront::prelude::*;
//!
//! let config = StorefrontConfig::load("storefront.toml")?;
//! arcade_observability::init(&config.logging)?;
//!
//! let (scheduler, ticks) = TokioScheduler::new();
//! let mut page = Storefront::new(Rc::new(games_catalog()?), StoreBackend::from_config(&config.cart)?, scheduler, &config)?;
//! page.subscribe(|event: &StorefrontEvent| render(event));
//! page.run(ui_events, ticks).await;
//! ```

mod data;
mod error;
mod events;
mod page;
mod panel;
mod storage;

pub use data::{games_catalog, GAMES_JSON};
pub use error::StorefrontError;
pub use events::{StorefrontEvent, UiEvent};
pub use page::Storefront;
pub use panel::CartPanel;
pub use storage::StoreBackend;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        games_catalog, CartPanel, StoreBackend, Storefront, StorefrontError, StorefrontEvent,
        UiEvent,
    };
    pub use arcade_carousel::{KeyPress, TimerId, TokioScheduler, VirtualClock};
    pub use arcade_commerce::prelude::*;
    pub use arcade_core::StorefrontConfig;
    pub use std::rc::Rc;
}
