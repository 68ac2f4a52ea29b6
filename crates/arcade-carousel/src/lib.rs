//! Rotating promotional carousel.
//!
//! This crate provides:
//! - `CarouselController` - Slide position plus the autoplay timer
//! - `Scheduler` - Injectable repeating-timer capability
//! - `VirtualClock` - Deterministic scheduler for tests and replays
//! - `TokioScheduler` - Wall-clock scheduler for a Tokio host
//! - `SwipeTracker` / `KeyPress` - Gesture and keyboard interpretation

mod controller;
mod error;
mod gesture;
mod schedule;

pub use controller::*;
pub use error::*;
pub use gesture::*;
pub use schedule::*;
