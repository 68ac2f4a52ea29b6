//! Events in and out of the storefront.

use arcade_carousel::{KeyPress, TimerId};
use arcade_commerce::cart::CartSnapshot;
use arcade_commerce::catalog::CatalogItem;
use arcade_commerce::selection::SelectionDetail;
use arcade_commerce::ProductId;
use serde::Serialize;

/// Input from the page, plus autoplay ticks.
///
/// The storefront handles one event to completion before the next.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Carousel "previous" arrow.
    CarouselPrevClicked,
    /// Carousel "next" arrow.
    CarouselNextClicked,
    /// Carousel indicator dot.
    IndicatorClicked(usize),
    /// Document-level key press.
    KeyDown(KeyPress),
    /// Touch began on the carousel at this screen x.
    TouchStart { x: f64 },
    /// Touch ended on the carousel at this screen x.
    TouchEnd { x: f64 },
    /// Autoplay timer fired.
    TimerFired(TimerId),
    /// Game card clicked: open the detail overlay.
    GameCardClicked(ProductId),
    /// Overlay close button.
    ModalCloseClicked,
    /// Click on the overlay backdrop.
    ModalBackdropClicked,
    /// Overlay "buy" button.
    ModalBuyClicked,
    /// Header cart link: show the sidebar.
    CartLinkClicked,
    /// Sidebar close button.
    CartCloseClicked,
    /// "Remove" on the cart entry at this position.
    RemoveItemClicked(usize),
    /// Search button or Enter in the search box.
    SearchSubmitted(String),
}

/// Notifications for the view collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum StorefrontEvent {
    CartChanged(CartSnapshot),
    SlideChanged { index: usize },
    SelectionOpened(SelectionDetail),
    SelectionClosed,
    CartPanelOpened,
    CartPanelClosed,
    SearchResultsReady { query: String, results: Vec<CatalogItem> },
}

impl StorefrontEvent {
    /// Format as a JSON string for a script bridge.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}
