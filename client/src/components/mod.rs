//! Cart UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from the `CartUi` signal and send every interaction
//! through `CartHandle::dispatch`; none of them touch the store directly.

pub mod cart_notification;
pub mod cart_panel;
pub mod cart_toggle;
pub mod product_card;
