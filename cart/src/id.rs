//! Line-item id generation.
//!
//! The store asks an injected [`IdGenerator`] for every new line item. A
//! generator with state can hand the store a checkpoint, which is persisted
//! beside the cart and restored on load; together with the loaded ids this
//! keeps ids from earlier page views from being issued again, even after
//! their lines were removed.

#[cfg(test)]
#[path = "id_test.rs"]
mod id_test;

use uuid::Uuid;

use crate::item::ItemId;

const SEQUENTIAL_PREFIX: &str = "item-";

pub trait IdGenerator {
    /// Produce an id never returned before by this generator.
    fn next_id(&mut self) -> ItemId;

    /// Note an id that already exists in the cart.
    fn observe(&mut self, _id: &ItemId) {}

    /// State to persist so a later page view can continue the sequence.
    fn checkpoint(&self) -> Option<String> {
        None
    }

    /// Continue from a checkpoint written by an earlier page view.
    fn restore(&mut self, _checkpoint: &str) {}
}

/// Monotonic `item-N` ids. The counter is checkpointed with the cart, and
/// observing a loaded `item-N` also moves it past `N`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The numeric part of the most recently issued or observed id.
    #[must_use]
    pub fn last(&self) -> u64 {
        self.last
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        self.last += 1;
        ItemId::new(format!("{SEQUENTIAL_PREFIX}{}", self.last))
    }

    fn observe(&mut self, id: &ItemId) {
        if let Some(digits) = id.as_str().strip_prefix(SEQUENTIAL_PREFIX)
            && let Ok(n) = digits.parse::<u64>()
        {
            self.last = self.last.max(n);
        }
    }

    fn checkpoint(&self) -> Option<String> {
        Some(self.last.to_string())
    }

    fn restore(&mut self, checkpoint: &str) {
        if let Ok(n) = checkpoint.trim().parse::<u64>() {
            self.last = self.last.max(n);
        }
    }
}

/// Random v4 UUID ids (122 bits of entropy). Used in the browser where ids
/// from other tabs sharing the session can appear at any focus reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> ItemId {
        ItemId::new(Uuid::new_v4().to_string())
    }
}
