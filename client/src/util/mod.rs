//! Browser glue for the cart: storage backend, DOM effects, window wiring.
//!
//! Everything here no-ops or reports "unavailable" outside the `hydrate`
//! feature so SSR and unit tests run without a window.

pub mod add_intents;
pub mod dom;
pub mod session_storage;
pub mod window_events;
