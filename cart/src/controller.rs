//! Event wiring between page controls and the cart store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts translate clicks, key presses and window lifecycle events into
//! [`CartEvent`]s. [`CartController::dispatch`] applies each one to the store
//! (which persists) and then pushes the recomputed [`CartView`] into the
//! host's [`ViewPorts`]. Dispatch is synchronous, so one event's
//! persist-then-render finishes before the next event is handled.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use tracing::{debug, warn};

use crate::checkout::checkout;
use crate::config::CartConfig;
use crate::id::IdGenerator;
use crate::item::{ItemId, ProductIntent};
use crate::storage::SessionStorage;
use crate::store::{CartStore, QuantityOutcome};
use crate::view::{CartView, ViewPorts, present};

/// Key that closes an open cart panel.
pub const CLOSE_KEY: &str = "Escape";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartEvent {
    /// An add-to-cart control was activated.
    Add(ProductIntent),
    Remove(ItemId),
    /// A `+`/`-` control, or any other quantity change.
    AdjustQuantity(ItemId, i64),
    Clear,
    Checkout,
    OpenPanel,
    ClosePanel,
    /// A click landed on the panel backdrop rather than its content.
    BackdropClicked,
    KeyPressed(String),
    /// The page finished loading; read the session cart.
    PageLoaded,
    /// The window regained focus; another page may have written the cart.
    FocusRegained,
    /// The page is about to be discarded.
    BeforeUnload,
}

pub struct CartController<S, G> {
    store: CartStore<S, G>,
    config: CartConfig,
    panel_open: bool,
}

impl<S: SessionStorage, G: IdGenerator> CartController<S, G> {
    pub fn new(store: CartStore<S, G>, config: CartConfig) -> Self {
        Self { store, config, panel_open: false }
    }

    #[must_use]
    pub fn store(&self) -> &CartStore<S, G> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CartStore<S, G> {
        &mut self.store
    }

    #[must_use]
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    #[must_use]
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::from_items(self.store.items(), &self.config)
    }

    /// Push the current view into `ports`.
    pub fn render<P: ViewPorts + ?Sized>(&self, ports: &mut P) {
        present(&self.view(), ports);
    }

    pub fn dispatch<P: ViewPorts + ?Sized>(&mut self, event: CartEvent, ports: &mut P) {
        debug!(?event, "cart event");
        match event {
            CartEvent::Add(intent) => {
                let name = intent.name.clone();
                match self.store.add(intent) {
                    Ok(_) => {
                        self.render(ports);
                        ports.notify_added(&name);
                    }
                    Err(e) => warn!(error = %e, "ignoring add-to-cart intent"),
                }
            }
            CartEvent::Remove(id) => {
                self.store.remove(&id);
                self.render(ports);
            }
            CartEvent::AdjustQuantity(id, delta) => {
                if self.store.set_quantity_delta(&id, delta) != QuantityOutcome::NotFound {
                    self.render(ports);
                }
            }
            CartEvent::Clear => {
                self.store.clear();
                self.render(ports);
            }
            CartEvent::Checkout => {
                let symbol = self.config.currency_symbol.clone();
                let receipt = checkout(&mut self.store, |receipt| {
                    ports.confirm_checkout(receipt, &receipt.confirmation_message(&symbol));
                });
                if receipt.is_some() {
                    self.render(ports);
                    self.set_panel(false, ports);
                }
            }
            CartEvent::OpenPanel => self.set_panel(true, ports),
            CartEvent::ClosePanel | CartEvent::BackdropClicked => self.set_panel(false, ports),
            CartEvent::KeyPressed(key) => {
                if key == CLOSE_KEY && self.panel_open {
                    self.set_panel(false, ports);
                }
            }
            CartEvent::PageLoaded | CartEvent::FocusRegained => {
                self.store.load();
                self.render(ports);
            }
            CartEvent::BeforeUnload => self.store.persist(),
        }
    }

    fn set_panel<P: ViewPorts + ?Sized>(&mut self, open: bool, ports: &mut P) {
        self.panel_open = open;
        ports.set_panel_open(open);
    }
}
