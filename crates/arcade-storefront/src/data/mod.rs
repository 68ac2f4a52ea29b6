//! Built-in catalog data.

mod games;

pub use games::{games_catalog, GAMES_JSON};
