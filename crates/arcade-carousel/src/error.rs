//! Carousel error types.

use thiserror::Error;

/// Caller contract violations. None of these change carousel state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one slide.
    #[error("Carousel has no slides")]
    NoSlides,

    /// Autoplay interval must be positive.
    #[error("Autoplay interval must be greater than zero")]
    ZeroInterval,

    /// Slide index outside `[0, slide_count)`.
    #[error("Slide {index} out of range (slide count {slide_count})")]
    SlideOutOfRange { index: usize, slide_count: usize },
}
