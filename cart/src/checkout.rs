//! Demo checkout.
//!
//! There is no payment integration: checkout captures the cart as a
//! [`Receipt`], lets the host confirm it, then clears the cart.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use tracing::info;

use crate::id::IdGenerator;
use crate::item::LineItem;
use crate::storage::SessionStorage;
use crate::store::CartStore;

/// Snapshot of a cart at checkout time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub total: String,
    pub item_count: u64,
    pub lines: Vec<LineItem>,
}

impl Receipt {
    #[must_use]
    pub fn capture<S: SessionStorage, G: IdGenerator>(store: &CartStore<S, G>) -> Self {
        Self { total: store.total(), item_count: store.item_count(), lines: store.items().to_vec() }
    }

    /// Text for the blocking confirmation dialog.
    #[must_use]
    pub fn confirmation_message(&self, currency_symbol: &str) -> String {
        format!(
            "Checkout total: {currency_symbol}{}\n\nThis is a demo. A real storefront would hand off to a payment processor here.",
            self.total
        )
    }
}

/// Check out a non-empty cart: `confirm` sees the receipt first, then the
/// cart is cleared. Returns `None` and does nothing for an empty cart.
pub fn checkout<S, G, F>(store: &mut CartStore<S, G>, confirm: F) -> Option<Receipt>
where
    S: SessionStorage,
    G: IdGenerator,
    F: FnOnce(&Receipt),
{
    if store.is_empty() {
        return None;
    }

    let receipt = Receipt::capture(store);
    confirm(&receipt);
    store.clear();
    info!(total = %receipt.total, items = receipt.item_count, "checkout completed");
    Some(receipt)
}
