//! Add-to-cart intents from host-page markup.
//!
//! Pages outside the Leptos tree can still feed the cart: any element with
//! the [`ADD_TO_CART_MARKER`] class and `data-name` / `data-price` /
//! `data-image` attributes becomes an add intent when clicked. A single
//! delegated window listener picks these up.

#[cfg(test)]
#[path = "add_intents_test.rs"]
mod add_intents_test;

use cart::{CartError, ProductIntent};

#[cfg(feature = "hydrate")]
use crate::state::cart::CartHandle;

/// Class that marks an element as an add-to-cart control.
pub const ADD_TO_CART_MARKER: &str = "add-to-cart-btn";
/// Temporary label shown on a control after it added a product.
pub const ADDED_LABEL: &str = "Added!";

/// Build an intent from an attribute lookup.
///
/// # Errors
///
/// Returns [`CartError::MissingProductName`] when `data-name` is absent or blank.
pub fn intent_from_attributes(attr: impl Fn(&str) -> Option<String>) -> Result<ProductIntent, CartError> {
    let name = attr("data-name");
    let price = attr("data-price");
    let image = attr("data-image");
    ProductIntent::from_data_attributes(name.as_deref(), price.as_deref(), image.as_deref())
}

/// Delegated click handler for marked controls.
#[cfg(feature = "hydrate")]
pub fn handle_click(handle: CartHandle, ev: &web_sys::MouseEvent) {
    use wasm_bindgen::JsCast;

    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return;
    };
    let Ok(Some(control)) = target.closest(&format!(".{ADD_TO_CART_MARKER}")) else {
        return;
    };

    match intent_from_attributes(|name| control.get_attribute(name)) {
        Ok(intent) => {
            handle.dispatch(cart::CartEvent::Add(intent));
            show_feedback(&control, handle.config().button_feedback_ms);
        }
        Err(e) => log::warn!("ignoring add-to-cart click: {e}"),
    }
}

#[cfg(feature = "hydrate")]
fn show_feedback(control: &web_sys::Element, duration_ms: u32) {
    // A second click during feedback would capture "Added!" as the label.
    if control.has_attribute("data-added") {
        return;
    }
    let original = control.text_content().unwrap_or_default();
    control.set_text_content(Some(ADDED_LABEL));
    let _ = control.set_attribute("data-added", "true");

    let control = control.clone();
    gloo_timers::callback::Timeout::new(duration_ms, move || {
        control.set_text_content(Some(&original));
        let _ = control.remove_attribute("data-added");
    })
    .forget();
}
