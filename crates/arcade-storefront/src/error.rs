//! Storefront error types.

use arcade_cache::CacheError;
use arcade_carousel::CarouselError;
use arcade_commerce::CommerceError;
use thiserror::Error;

/// Errors raised while assembling the page. Event handling itself never
/// fails.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Catalog could not be built.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CommerceError),

    /// Carousel could not be built.
    #[error("Carousel error: {0}")]
    Carousel(#[from] CarouselError),

    /// Storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),
}
