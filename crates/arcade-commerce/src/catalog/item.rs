//! Catalog record.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::money::Money;

/// An immutable product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Developer or studio credits.
    pub developer: String,
    /// Unit price.
    pub price: Money,
    /// Opaque image reference, passed through to the view.
    #[serde(alias = "imageRef")]
    pub image: String,
    /// Long-form description shown in the detail overlay.
    pub description: String,
}

impl CatalogItem {
    /// Case-insensitive substring match on title or developer.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.developer.to_lowercase().contains(needle)
    }
}
