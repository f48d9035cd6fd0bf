//! The cart store: line items plus their session persistence.
//!
//! DESIGN
//! ======
//! One `CartStore` exists per page, owned by the host shell. Every mutation
//! writes through to [`CartPersistence`] before returning, so a caller that
//! re-renders afterwards always shows what storage holds.
//!
//! ERROR HANDLING
//! ==============
//! Storage write failures never reach the caller. The store logs the first
//! failure, flips into degraded (memory-only) mode, and leaves it again on
//! the next successful write.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use tracing::{debug, info, warn};

use crate::config::CartConfig;
use crate::error::CartError;
use crate::id::IdGenerator;
use crate::item::{ItemId, LineItem, ProductIntent};
use crate::storage::{CartPersistence, SessionStorage};

/// Externally visible cart phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartPhase {
    Empty,
    NonEmpty,
}

/// Result of [`CartStore::add`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was appended with quantity 1.
    Inserted(ItemId),
    /// A line item with the same name already existed; its quantity grew.
    Incremented { id: ItemId, quantity: u32 },
}

impl AddOutcome {
    #[must_use]
    pub fn id(&self) -> &ItemId {
        match self {
            Self::Inserted(id) | Self::Incremented { id, .. } => id,
        }
    }
}

/// Result of [`CartStore::set_quantity_delta`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityOutcome {
    Updated(u32),
    Removed,
    NotFound,
}

pub struct CartStore<S, G> {
    items: Vec<LineItem>,
    persistence: CartPersistence<S>,
    ids: G,
    degraded: bool,
}

impl<S: SessionStorage, G: IdGenerator> CartStore<S, G> {
    /// An empty store that has not read storage yet.
    pub fn new(persistence: CartPersistence<S>, ids: G) -> Self {
        Self { items: Vec::new(), persistence, ids, degraded: false }
    }

    /// Bind `backend` under the configured key and load what it holds.
    pub fn open(backend: S, config: &CartConfig, ids: G) -> Self {
        let mut store = Self::new(CartPersistence::new(backend, config.storage_key.clone()), ids);
        store.load();
        store
    }

    /// Replace the in-memory cart with the persisted one (empty when absent
    /// or malformed).
    pub fn load(&mut self) {
        let items = normalize(self.persistence.load());
        if let Some(checkpoint) = self.persistence.load_id_checkpoint() {
            self.ids.restore(&checkpoint);
        }
        for item in &items {
            self.ids.observe(&item.id);
        }
        debug!(lines = items.len(), "cart loaded");
        self.items = items;
    }

    /// Add one unit of a product. An existing line with the same name keeps
    /// its first-seen price and image.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MissingProductName`] for a blank name.
    pub fn add(&mut self, intent: ProductIntent) -> Result<AddOutcome, CartError> {
        if intent.name.trim().is_empty() {
            return Err(CartError::MissingProductName);
        }

        let outcome = if let Some(item) = self.items.iter_mut().find(|item| item.name == intent.name) {
            item.quantity = item.quantity.saturating_add(1);
            AddOutcome::Incremented { id: item.id.clone(), quantity: item.quantity }
        } else {
            let id = self.ids.next_id();
            self.items.push(LineItem {
                id: id.clone(),
                name: intent.name,
                price: intent.price,
                image: intent.image,
                quantity: 1,
            });
            AddOutcome::Inserted(id)
        };

        self.persist();
        Ok(outcome)
    }

    /// Delete the line with `id`. Returns whether a line was removed; an
    /// unknown id is not an error.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.persist();
        self.items.len() != before
    }

    /// Add `delta` to a line's quantity, removing the line when it drops to
    /// zero or below.
    pub fn set_quantity_delta(&mut self, id: &ItemId, delta: i64) -> QuantityOutcome {
        let Some(index) = self.items.iter().position(|item| &item.id == id) else {
            return QuantityOutcome::NotFound;
        };

        let next = i64::from(self.items[index].quantity).saturating_add(delta);
        if next <= 0 {
            self.items.remove(index);
            self.persist();
            return QuantityOutcome::Removed;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.items[index].quantity = quantity;
        self.persist();
        QuantityOutcome::Updated(quantity)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Write the current items, and the id checkpoint if the generator keeps
    /// one, to storage.
    pub fn persist(&mut self) {
        let written = self.persistence.save(&self.items).and_then(|()| match self.ids.checkpoint() {
            Some(checkpoint) => self.persistence.save_id_checkpoint(&checkpoint),
            None => Ok(()),
        });
        match written {
            Ok(()) => {
                if self.degraded {
                    info!("cart storage writes recovered");
                    self.degraded = false;
                }
            }
            Err(e) => {
                if !self.degraded {
                    warn!(error = %e, "cart storage write failed; continuing in memory");
                }
                self.degraded = true;
            }
        }
    }

    /// Sum of `price x quantity` over every line.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// [`Self::total_amount`] with exactly two decimals.
    #[must_use]
    pub fn total(&self) -> String {
        format_amount(self.total_amount())
    }

    /// Sum of quantities; the badge number.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    #[must_use]
    pub fn phase(&self) -> CartPhase {
        if self.items.is_empty() { CartPhase::Empty } else { CartPhase::NonEmpty }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// True while storage writes are failing.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    #[must_use]
    pub fn persistence(&self) -> &CartPersistence<S> {
        &self.persistence
    }

    pub fn persistence_mut(&mut self) -> &mut CartPersistence<S> {
        &mut self.persistence
    }
}

/// Format a money amount with two decimals, rounding exact halves away
/// from zero.
///
/// `{:.2}` alone breaks exact ties to even (`0.125` -> `0.12`). A value that
/// sits exactly on a tie at the third decimal is an odd multiple of 1/8, so
/// only those are rounded by hand; every other value already formats to the
/// nearest cent.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    let eighths = amount * 8.0;
    if (eighths.rem_euclid(2.0) - 1.0).abs() < f64::EPSILON {
        let rounded = (amount * 100.0).round() / 100.0;
        return format!("{rounded:.2}");
    }
    format!("{amount:.2}")
}

/// Restore the store invariants on data written by someone else: zero
/// quantities are dropped and repeated names merge into the first line.
fn normalize(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut out: Vec<LineItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            debug!(id = %item.id, "dropping stored line with zero quantity");
            continue;
        }
        match out.iter_mut().find(|existing| existing.name == item.name) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => out.push(item),
        }
    }
    out
}
