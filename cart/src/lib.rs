//! Session cart engine for the storefront.
//!
//! This crate is UI-framework agnostic: it owns the line-item list, its
//! session-scoped persistence, and the derived view model that a rendering
//! layer pushes into badge, list and summary surfaces. The `client` crate
//! wires browser storage and Leptos components onto these types.
//!
//! FLOW
//! ====
//! UI event -> [`CartController::dispatch`] -> [`CartStore`] mutation ->
//! persistence write -> [`CartView`] pushed through [`ViewPorts`].

pub mod checkout;
pub mod config;
pub mod controller;
pub mod error;
pub mod id;
pub mod item;
pub mod storage;
pub mod store;
pub mod view;

pub use checkout::{Receipt, checkout};
pub use config::CartConfig;
pub use controller::{CartController, CartEvent};
pub use error::{CartError, StorageError};
pub use id::{IdGenerator, RandomIds, SequentialIds};
pub use item::{ItemId, LineItem, Price, ProductIntent};
pub use storage::{CartPersistence, MemoryStorage, SessionStorage};
pub use store::{AddOutcome, CartPhase, CartStore, QuantityOutcome};
pub use view::{Badge, CartView, EmptyPlaceholder, LineList, LineRow, Summary, ViewPorts};
