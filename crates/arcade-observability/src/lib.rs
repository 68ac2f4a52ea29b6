//! Logging infrastructure for the Arcade storefront.
//!
//! Library crates log through `tracing` macros. Hosts call [`init`] once
//! at startup to install a subscriber matching their `LoggingConfig`.

mod logging;

pub use logging::*;

// Re-export the config types so hosts need a single import.
pub use arcade_core::{LogFormat, LogLevel, LoggingConfig};
