//! Browser `sessionStorage` backend for the cart.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `window.sessionStorage` behind the cart engine's `SessionStorage`
//! trait so the store never touches web-sys itself. Hydrate-only: during
//! server rendering reads find nothing and writes report the storage as
//! unavailable, which the store treats as memory-only operation.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use cart::{SessionStorage, StorageError};

/// Zero-sized handle; the storage area is looked up on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserSessionStorage;

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = session_storage()?;
            storage
                .get_item(key)
                .map_err(|e| StorageError::ReadFailed { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = session_storage()?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::WriteFailed { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable("no browser window during server render".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    match window.session_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable("sessionStorage is disabled".to_owned())),
        Err(e) => Err(StorageError::Unavailable(js_reason(&e))),
    }
}

#[cfg(feature = "hydrate")]
fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
