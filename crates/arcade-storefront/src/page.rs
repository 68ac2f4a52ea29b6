//! The storefront page facade.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use arcade_cache::{Cache, KeyValueStore};
use arcade_carousel::{CarouselController, Scheduler, SlideChanged, SwipeTracker, TimerId, VirtualClock};
use arcade_commerce::cart::{CartManager, CartSnapshot};
use arcade_commerce::catalog::{Catalog, CatalogItem};
use arcade_commerce::search::search;
use arcade_commerce::selection::{SelectionEvent, SelectionPresenter};
use arcade_core::{Observer, ObserverSet, StorefrontConfig, Subscription};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{CartPanel, StorefrontError, StorefrontEvent, UiEvent};

type EventSink = Rc<RefCell<ObserverSet<StorefrontEvent>>>;

/// One storefront page: cart, carousel, detail overlay and search.
///
/// All input arrives through [`dispatch`](Storefront::dispatch).
/// Unknown product ids and stale cart positions are ignored, matching the
/// page's silent no-op policy; they are logged at debug level.
pub struct Storefront<St: KeyValueStore, Sch: Scheduler> {
    catalog: Rc<Catalog>,
    cart: CartManager<St>,
    carousel: CarouselController<Sch>,
    selection: SelectionPresenter,
    panel: CartPanel,
    swipe: SwipeTracker,
    events: EventSink,
}

impl<St: KeyValueStore, Sch: Scheduler> Storefront<St, Sch> {
    /// Assemble the page and restore the stored cart.
    ///
    /// The carousel has `config.carousel.slide_count` slides, or one per
    /// catalog item when unset. Nothing runs until [`start`](Self::start).
    pub fn new(
        catalog: Rc<Catalog>,
        store: St,
        scheduler: Sch,
        config: &StorefrontConfig,
    ) -> Result<Self, StorefrontError> {
        let events: EventSink = Rc::new(RefCell::new(ObserverSet::new()));

        let mut cart = CartManager::load(
            Rc::clone(&catalog),
            Cache::new(store),
            config.cart.storage_key.clone(),
        );
        let sink = Rc::clone(&events);
        cart.subscribe(move |snapshot: &CartSnapshot| {
            sink.borrow()
                .emit(&StorefrontEvent::CartChanged(snapshot.clone()));
        });

        let slide_count = config.carousel.slide_count.unwrap_or(catalog.len());
        let mut carousel = CarouselController::new(
            slide_count,
            scheduler,
            config.carousel.autoplay_interval(),
        )?;
        let sink = Rc::clone(&events);
        carousel.subscribe(move |change: &SlideChanged| {
            sink.borrow()
                .emit(&StorefrontEvent::SlideChanged { index: change.index });
        });

        let mut selection = SelectionPresenter::new(Rc::clone(&catalog));
        let sink = Rc::clone(&events);
        selection.subscribe(move |event: &SelectionEvent| {
            let event = match event {
                SelectionEvent::Opened(detail) => StorefrontEvent::SelectionOpened(detail.clone()),
                SelectionEvent::Closed => StorefrontEvent::SelectionClosed,
            };
            sink.borrow().emit(&event);
        });

        Ok(Self {
            catalog,
            cart,
            carousel,
            selection,
            panel: CartPanel::default(),
            swipe: SwipeTracker::new(config.carousel.swipe_threshold_px),
            events,
        })
    }

    /// Render the restored cart and start the carousel.
    pub fn start(&mut self) {
        self.emit(StorefrontEvent::CartChanged(self.cart.snapshot()));
        self.carousel.activate();
        info!(
            products = self.catalog.len(),
            cart_items = self.cart.count(),
            slides = self.carousel.slide_count(),
            "storefront started"
        );
    }

    /// Stop the carousel timer.
    pub fn shutdown(&mut self) {
        self.carousel.teardown();
        info!("storefront stopped");
    }

    /// Handle one input event to completion.
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::CarouselPrevClicked => self.carousel.manual_prev(),
            UiEvent::CarouselNextClicked => self.carousel.manual_next(),
            UiEvent::IndicatorClicked(index) => {
                if let Err(e) = self.carousel.manual_goto(index) {
                    debug!(error = %e, "indicator click ignored");
                }
            }
            UiEvent::KeyDown(key) => {
                self.carousel.handle_key(key);
            }
            UiEvent::TouchStart { x } => self.swipe.begin(x),
            UiEvent::TouchEnd { x } => {
                let swipe = self.swipe.end(x);
                self.carousel.handle_swipe(swipe);
            }
            UiEvent::TimerFired(timer) => {
                self.carousel.on_timer(timer);
            }
            UiEvent::GameCardClicked(id) => {
                if self.selection.open(id).is_none() {
                    debug!(product = %id, "no such product to show");
                }
            }
            UiEvent::ModalCloseClicked | UiEvent::ModalBackdropClicked => {
                self.selection.close();
            }
            UiEvent::ModalBuyClicked => match self.selection.buy(&mut self.cart) {
                Ok(index) => {
                    info!("{} added to cart", self.cart.items()[index].title);
                }
                Err(e) => debug!(error = %e, "buy ignored"),
            },
            UiEvent::CartLinkClicked => {
                if self.panel.open() {
                    self.emit(StorefrontEvent::CartPanelOpened);
                }
            }
            UiEvent::CartCloseClicked => {
                if self.panel.close() {
                    self.emit(StorefrontEvent::CartPanelClosed);
                }
            }
            UiEvent::RemoveItemClicked(index) => {
                if let Err(e) = self.cart.remove_item(index) {
                    debug!(error = %e, "remove ignored");
                }
            }
            UiEvent::SearchSubmitted(query) => {
                self.search(&query);
            }
        }
    }

    /// Filter the catalog and publish the results.
    pub fn search(&self, query: &str) -> Vec<CatalogItem> {
        let results: Vec<CatalogItem> = search(query, &self.catalog).into_iter().cloned().collect();
        info!(
            query,
            count = results.len(),
            titles = ?results.iter().map(|g| g.title.as_str()).collect::<Vec<_>>(),
            "search results"
        );
        self.emit(StorefrontEvent::SearchResultsReady {
            query: query.to_string(),
            results: results.clone(),
        });
        results
    }

    /// Process UI events and autoplay ticks until the UI channel closes.
    ///
    /// Events are handled one at a time; when a tick and a UI event are
    /// both ready, the UI event goes first, so a manual navigation makes
    /// the queued tick stale. Calls [`start`](Self::start) first and
    /// [`shutdown`](Self::shutdown) on exit.
    pub async fn run(
        &mut self,
        mut ui: mpsc::UnboundedReceiver<UiEvent>,
        mut ticks: mpsc::UnboundedReceiver<TimerId>,
    ) {
        self.start();
        loop {
            tokio::select! {
                biased;
                event = ui.recv() => match event {
                    Some(event) => self.dispatch(event),
                    None => break,
                },
                Some(timer) = ticks.recv() => self.dispatch(UiEvent::TimerFired(timer)),
            }
        }
        self.shutdown();
    }

    /// Register a view observer.
    pub fn subscribe(&mut self, observer: impl Observer<StorefrontEvent> + 'static) -> Subscription {
        self.events.borrow_mut().subscribe(observer)
    }

    /// Remove a view observer.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.events.borrow_mut().unsubscribe(subscription)
    }

    /// The products on sale.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart and its persisted contents.
    pub fn cart(&self) -> &CartManager<St> {
        &self.cart
    }

    /// The promotional carousel.
    pub fn carousel(&self) -> &CarouselController<Sch> {
        &self.carousel
    }

    /// The product detail overlay state.
    pub fn selection(&self) -> &SelectionPresenter {
        &self.selection
    }

    /// Whether the cart sidebar is open.
    pub fn panel(&self) -> CartPanel {
        self.panel
    }

    fn emit(&self, event: StorefrontEvent) {
        self.events.borrow().emit(&event);
    }
}

impl<St: KeyValueStore> Storefront<St, VirtualClock> {
    /// Move virtual time forward, delivering each autoplay tick as it
    /// falls due. Returns the number of ticks delivered.
    pub fn advance_time(&mut self, by: Duration) -> usize {
        let clock = self.carousel.scheduler().clone();
        let deadline = clock.now() + by;
        let mut delivered = 0;
        while let Some(timer) = clock.next_tick(deadline) {
            self.dispatch(UiEvent::TimerFired(timer));
            delivered += 1;
        }
        delivered
    }
}
