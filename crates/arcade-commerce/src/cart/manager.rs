//! Cart state and persistence.

use std::rc::Rc;

use arcade_cache::{Cache, CacheError, KeyValueStore};
use arcade_core::{Observer, ObserverSet, Subscription};
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{Catalog, CatalogItem};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// A cart entry.
///
/// Entries are full copies of the catalog record taken at add time, so a
/// stored cart stays readable even if catalog data changes later.
pub type CartItem = CatalogItem;

/// Cart state delivered to observers after every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    /// Number of entries.
    pub count: usize,
    /// Sum of entry prices.
    pub total: Money,
    /// Entries in cart order.
    pub items: Vec<CartItem>,
}

/// Owns the cart sequence and keeps storage in step with it.
///
/// Every successful mutation writes the full sequence under the storage
/// key and then notifies observers. Totals are recomputed on each read.
pub struct CartManager<S> {
    catalog: Rc<Catalog>,
    cache: Cache<S>,
    storage_key: String,
    items: Vec<CartItem>,
    observers: ObserverSet<CartSnapshot>,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Restore the cart from storage.
    ///
    /// A missing, unreadable or undecodable stored value yields an empty
    /// cart, as does one holding any price outside `[0, MAX_PRICE]`.
    ///
    /// [`MAX_PRICE`]: crate::money::MAX_PRICE
    pub fn load(catalog: Rc<Catalog>, cache: Cache<S>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let items = match cache.get::<Vec<CartItem>>(&storage_key) {
            Ok(Some(items)) => {
                let bad = items.iter().find(|item| !item.price.is_valid_price());
                if let Some(bad) = bad {
                    warn!(
                        key = %storage_key,
                        product = %bad.id,
                        price = bad.price.amount_cents,
                        "discarding stored cart with out-of-range price"
                    );
                    Vec::new()
                } else {
                    debug!(key = %storage_key, count = items.len(), "restored cart");
                    items
                }
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %storage_key, error = %e, "discarding unreadable stored cart");
                Vec::new()
            }
        };

        Self {
            catalog,
            cache,
            storage_key,
            items,
            observers: ObserverSet::new(),
        }
    }

    /// Append a copy of catalog product `id`.
    ///
    /// Returns the position of the new entry. An unknown id changes
    /// nothing and returns `CommerceError::ProductNotFound`.
    pub fn add_item(&mut self, id: ProductId) -> Result<usize, CommerceError> {
        let item = self
            .catalog
            .get(id)
            .ok_or(CommerceError::ProductNotFound(id))?
            .clone();

        self.items.push(item);
        self.commit();
        Ok(self.items.len() - 1)
    }

    /// Remove the entry at `index`.
    ///
    /// Removal is positional since duplicates differ only by position. An
    /// out-of-range index changes nothing and returns
    /// `CommerceError::IndexOutOfRange`.
    pub fn remove_item(&mut self, index: usize) -> Result<CartItem, CommerceError> {
        if index >= self.items.len() {
            return Err(CommerceError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(index);
        self.commit();
        Ok(removed)
    }

    /// Sum of the prices of all entries.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in cart order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Current count, total and entries.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            count: self.count(),
            total: self.total(),
            items: self.items.clone(),
        }
    }

    /// Register a cart-changed observer.
    pub fn subscribe(&mut self, observer: impl Observer<CartSnapshot> + 'static) -> Subscription {
        self.observers.subscribe(observer)
    }

    /// Remove a cart-changed observer.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }

    /// Key the cart is stored under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn commit(&self) {
        if let Err(e) = self.persist() {
            // Not retried; the in-memory cart stays authoritative.
            warn!(key = %self.storage_key, error = %e, "failed to persist cart");
        }
        if !self.observers.is_empty() {
            self.observers.emit(&self.snapshot());
        }
    }

    fn persist(&self) -> Result<(), CacheError> {
        self.cache.set(&self.storage_key, &self.items)
    }
}
