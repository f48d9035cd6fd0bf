//! Session-scoped persistence for the cart.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart lives in one storage key as a JSON array of line items. The
//! [`SessionStorage`] trait abstracts the key/value area: the browser build
//! backs it with `window.sessionStorage`, tests and headless hosts use
//! [`MemoryStorage`].
//!
//! TRADE-OFFS
//! ==========
//! Loading is fail-soft: a missing key, unreadable storage or malformed JSON
//! all yield an empty cart. Saving reports its error so the store can decide
//! how loudly to degrade.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{CartError, StorageError};
use crate::item::LineItem;

/// Appended to the cart key for the id generator checkpoint.
pub const IDS_KEY_SUFFIX: &str = ".ids";

/// Key/value storage scoped to one browsing session.
pub trait SessionStorage {
    /// Read the value for `key`, `None` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the storage area cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the write is refused.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-process storage. Can be told to refuse writes to exercise the
/// degraded path.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    refuse_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one raw value.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }

    /// Raw stored text for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Overwrite a raw value, bypassing the refusal switch. Simulates another
    /// tab writing to the same session.
    pub fn put_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn set_refuse_writes(&mut self, refuse: bool) {
        self.refuse_writes = refuse;
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.refuse_writes {
            return Err(StorageError::WriteFailed { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// CODEC
// =============================================================================

/// Serialize line items into the stored JSON text.
///
/// # Errors
///
/// Returns [`CartError::MalformedState`] if serialization fails.
pub fn encode_items(items: &[LineItem]) -> Result<String, CartError> {
    Ok(serde_json::to_string(items)?)
}

/// Parse stored JSON text into line items.
///
/// # Errors
///
/// Returns [`CartError::MalformedState`] for anything that is not a JSON
/// array of line items.
pub fn decode_items(raw: &str) -> Result<Vec<LineItem>, CartError> {
    Ok(serde_json::from_str(raw)?)
}

// =============================================================================
// CART PERSISTENCE
// =============================================================================

/// A storage backend bound to the cart's key.
#[derive(Clone, Debug)]
pub struct CartPersistence<S> {
    backend: S,
    key: String,
}

impl<S: SessionStorage> CartPersistence<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Overwrite the stored cart with `items`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] when the backend refuses the write.
    pub fn save(&mut self, items: &[LineItem]) -> Result<(), CartError> {
        let raw = encode_items(items)?;
        self.backend.set_item(&self.key, &raw)?;
        Ok(())
    }

    /// Key holding the id generator checkpoint, next to the cart key.
    #[must_use]
    pub fn ids_key(&self) -> String {
        format!("{}{IDS_KEY_SUFFIX}", self.key)
    }

    /// Store the id generator checkpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] when the backend refuses the write.
    pub fn save_id_checkpoint(&mut self, checkpoint: &str) -> Result<(), CartError> {
        let key = self.ids_key();
        self.backend.set_item(&key, checkpoint)?;
        Ok(())
    }

    /// The stored id generator checkpoint, if one is readable.
    #[must_use]
    pub fn load_id_checkpoint(&self) -> Option<String> {
        let key = self.ids_key();
        match self.backend.get_item(&key) {
            Ok(checkpoint) => checkpoint,
            Err(e) => {
                debug!(key = %key, error = %e, "id checkpoint unreadable");
                None
            }
        }
    }

    /// The stored cart, or an empty one if nothing usable is stored.
    #[must_use]
    pub fn load(&self) -> Vec<LineItem> {
        match self.try_load() {
            Ok(items) => items,
            Err(CartError::Storage(e)) => {
                warn!(key = %self.key, error = %e, "cart storage unreadable; starting empty");
                Vec::new()
            }
            Err(e) => {
                debug!(key = %self.key, error = %e, "discarding malformed cart state");
                Vec::new()
            }
        }
    }

    /// Like [`Self::load`] but reports why nothing was loaded.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] for read failures and
    /// [`CartError::MalformedState`] for unparsable text.
    pub fn try_load(&self) -> Result<Vec<LineItem>, CartError> {
        match self.backend.get_item(&self.key)? {
            Some(raw) => decode_items(&raw),
            None => Ok(Vec::new()),
        }
    }
}
