//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The page has one piece of shared state, the cart. It is provided as a
//! single context value so components depend on a small focused handle.

pub mod cart;
