//! Catalog store.

use std::collections::HashSet;

use crate::catalog::CatalogItem;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// The fixed, ordered list of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, preserving the given order.
    ///
    /// Fails on duplicate ids or prices outside `[0, MAX_PRICE]`.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CommerceError::DuplicateProduct(item.id));
            }
            if !item.price.is_valid_price() {
                return Err(CommerceError::InvalidPrice {
                    id: item.id,
                    price: item.price.display_amount(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of catalog records.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All products in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
