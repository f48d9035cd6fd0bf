//! Cart state shared through Leptos context.
//!
//! DESIGN
//! ======
//! The cart controller (store, persistence, panel flag) sits in a
//! non-reactive `StoredValue`; components never read it. Each dispatch
//! pushes the recomputed view through [`SignalPorts`] into one reactive
//! `RwSignal<CartUi>`, which is what the badge, panel and notification
//! render from. One [`CartHandle`] is provided per page.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use cart::{
    Badge, CartConfig, CartController, CartEvent, CartPersistence, CartStore, CartView, LineList, RandomIds,
    Receipt, Summary, ViewPorts,
};
use leptos::prelude::*;

use crate::util::session_storage::BrowserSessionStorage;

pub type BrowserCart = CartController<BrowserSessionStorage, RandomIds>;

/// Everything the cart chrome renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartUi {
    pub view: CartView,
    pub panel_open: bool,
    /// Name of the product in the visible "added" notification, if any.
    pub notification: Option<String>,
    pub notification_seq: u64,
}

impl CartUi {
    /// Show the notification for `product_name`; returns the token that
    /// [`Self::dismiss_notification`] needs.
    pub fn show_notification(&mut self, product_name: &str) -> u64 {
        self.notification_seq += 1;
        self.notification = Some(product_name.to_owned());
        self.notification_seq
    }

    /// Hide the notification unless a newer one replaced it.
    pub fn dismiss_notification(&mut self, seq: u64) {
        if self.notification_seq == seq {
            self.notification = None;
        }
    }
}

/// View ports backed by the `CartUi` signal.
#[derive(Clone, Copy)]
pub struct SignalPorts {
    ui: RwSignal<CartUi>,
    notification_ms: u32,
}

impl SignalPorts {
    #[must_use]
    pub fn new(ui: RwSignal<CartUi>, config: &CartConfig) -> Self {
        Self { ui, notification_ms: config.notification_ms }
    }
}

impl ViewPorts for SignalPorts {
    fn show_badge(&mut self, badge: &Badge) {
        self.ui.update(|ui| ui.view.badge = badge.clone());
    }

    fn show_lines(&mut self, lines: &LineList) {
        self.ui.update(|ui| ui.view.lines = lines.clone());
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.ui.update(|ui| ui.view.summary = summary.clone());
    }

    fn set_panel_open(&mut self, open: bool) {
        self.ui.update(|ui| ui.panel_open = open);
    }

    fn notify_added(&mut self, product_name: &str) {
        let mut seq = 0;
        self.ui.update(|ui| seq = ui.show_notification(product_name));
        schedule_dismiss(self.ui, seq, self.notification_ms);
    }

    fn confirm_checkout(&mut self, _receipt: &Receipt, message: &str) {
        crate::util::dom::alert(message);
    }
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(ui: RwSignal<CartUi>, seq: u64, delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        let _ = ui.try_update(|ui| ui.dismiss_notification(seq));
    })
    .forget();
}

#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(ui: RwSignal<CartUi>, seq: u64, delay_ms: u32) {
    let _ = (ui, seq, delay_ms);
}

/// Copyable handle to the page's cart, provided as context by `App`.
#[derive(Clone, Copy)]
pub struct CartHandle {
    controller: StoredValue<BrowserCart>,
    ui: RwSignal<CartUi>,
}

impl CartHandle {
    /// A handle whose cart is empty until the first `PageLoaded` dispatch.
    /// Loading waits for hydration so the server and client render the same
    /// initial markup.
    #[must_use]
    pub fn new(config: CartConfig) -> Self {
        let persistence = CartPersistence::new(BrowserSessionStorage, config.storage_key.clone());
        let store = CartStore::new(persistence, RandomIds);
        let ui = RwSignal::new(CartUi { view: CartView::from_items(&[], &config), ..CartUi::default() });
        Self { controller: StoredValue::new(CartController::new(store, config)), ui }
    }

    #[must_use]
    pub fn ui(&self) -> RwSignal<CartUi> {
        self.ui
    }

    #[must_use]
    pub fn config(&self) -> CartConfig {
        self.controller.with_value(|controller| controller.config().clone())
    }

    /// Apply `event` and push the resulting view into the UI signal.
    pub fn dispatch(&self, event: CartEvent) {
        let ui = self.ui;
        self.controller.update_value(|controller| {
            let mut ports = SignalPorts::new(ui, controller.config());
            controller.dispatch(event, &mut ports);
        });
    }
}
