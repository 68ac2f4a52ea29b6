//! Selection state for the product detail overlay.

use std::rc::Rc;

use arcade_cache::KeyValueStore;
use arcade_core::{Observer, ObserverSet, Subscription};
use serde::Serialize;

use crate::cart::CartManager;
use crate::catalog::{Catalog, CatalogItem};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// What the overlay shows for the selected product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionDetail {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Price with symbol and two decimals, e.g. "$29.99".
    pub price_display: String,
    pub image: String,
}

impl From<&CatalogItem> for SelectionDetail {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            price_display: item.price.display(),
            image: item.image.clone(),
        }
    }
}

/// Overlay notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Opened(SelectionDetail),
    Closed,
}

/// Holds at most one selected product.
pub struct SelectionPresenter {
    catalog: Rc<Catalog>,
    selected: Option<ProductId>,
    observers: ObserverSet<SelectionEvent>,
}

impl SelectionPresenter {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            selected: None,
            observers: ObserverSet::new(),
        }
    }

    /// Select product `id` and return its detail.
    ///
    /// Returns `None` and leaves the selection unchanged when `id` is not
    /// in the catalog. Opening while another product is shown replaces it.
    pub fn open(&mut self, id: ProductId) -> Option<SelectionDetail> {
        let detail = SelectionDetail::from(self.catalog.get(id)?);
        self.selected = Some(id);
        self.observers.emit(&SelectionEvent::Opened(detail.clone()));
        Some(detail)
    }

    /// Clear the selection. Returns `true` if something was open.
    pub fn close(&mut self) -> bool {
        if self.selected.take().is_none() {
            return false;
        }
        self.observers.emit(&SelectionEvent::Closed);
        true
    }

    /// Currently selected product id.
    pub fn selected(&self) -> Option<ProductId> {
        self.selected
    }

    /// Detail of the current selection.
    pub fn detail(&self) -> Option<SelectionDetail> {
        self.selected
            .and_then(|id| self.catalog.get(id))
            .map(SelectionDetail::from)
    }

    /// Add the selected product to `cart`.
    pub fn buy<S: KeyValueStore>(&self, cart: &mut CartManager<S>) -> Result<usize, CommerceError> {
        let id = self.selected.ok_or(CommerceError::NoSelection)?;
        cart.add_item(id)
    }

    /// Register an overlay observer.
    pub fn subscribe(&mut self, observer: impl Observer<SelectionEvent> + 'static) -> Subscription {
        self.observers.subscribe(observer)
    }

    /// Remove an overlay observer.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::testing::six_game_catalog;
    use arcade_cache::{Cache, MemoryStore};
    use std::cell::RefCell;

    fn presenter() -> (SelectionPresenter, Rc<Catalog>) {
        let catalog = Rc::new(six_game_catalog());
        (SelectionPresenter::new(Rc::clone(&catalog)), catalog)
    }

    #[test]
    fn test_open_exposes_detail() {
        let (mut modal, _) = presenter();
        let detail = modal.open(ProductId::new(5)).unwrap();

        assert_eq!(detail.title, "Resident Evil 9: Requiem");
        assert_eq!(detail.price_display, "$9.99");
        assert_eq!(detail.image, "game5.jpg");
        assert_eq!(modal.selected(), Some(ProductId::new(5)));
        assert_eq!(modal.detail(), Some(detail));
    }

    #[test]
    fn test_open_unknown_keeps_selection() {
        let (mut modal, _) = presenter();
        modal.open(ProductId::new(2)).unwrap();

        assert!(modal.open(ProductId::new(0)).is_none());
        assert_eq!(modal.selected(), Some(ProductId::new(2)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let (mut modal, _) = presenter();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        modal.subscribe(move |e: &SelectionEvent| sink.borrow_mut().push(e.clone()));

        modal.open(ProductId::new(1)).unwrap();
        assert!(modal.close());
        assert!(!modal.close());

        assert_eq!(modal.selected(), None);
        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SelectionEvent::Opened(ref d) if d.id.get() == 1));
        assert_eq!(events[1], SelectionEvent::Closed);
    }

    #[test]
    fn test_buy_adds_selected_item() {
        let (mut modal, catalog) = presenter();
        let mut cart = CartManager::load(catalog, Cache::new(MemoryStore::new()), "cart");

        assert!(matches!(modal.buy(&mut cart), Err(CommerceError::NoSelection)));

        modal.open(ProductId::new(4)).unwrap();
        modal.buy(&mut cart).unwrap();
        modal.buy(&mut cart).unwrap();

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(), Money::new(9998));
    }
}
