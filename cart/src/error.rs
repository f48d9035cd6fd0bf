//! Error types for cart operations and storage backends.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Malformed persisted state and storage failures are
//! recovered inside [`crate::CartStore`]; callers only see [`CartError`] from
//! operations that reject their input.

/// Failure inside a cart operation.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// The persisted text is not a JSON array of line items.
    #[error("persisted cart is malformed: {0}")]
    MalformedState(#[from] serde_json::Error),
    /// An add-to-cart intent arrived without a usable product name.
    #[error("product name is missing")]
    MissingProductName,
    /// The session storage backend refused a read or write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failure reported by a [`crate::SessionStorage`] backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area exists (server render, disabled storage, sandboxed frame).
    #[error("session storage is unavailable: {0}")]
    Unavailable(String),
    /// Reading the key failed.
    #[error("failed to read `{key}`: {reason}")]
    ReadFailed { key: String, reason: String },
    /// Writing the key failed, typically a quota error.
    #[error("failed to write `{key}`: {reason}")]
    WriteFailed { key: String, reason: String },
}
