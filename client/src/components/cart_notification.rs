//! Transient "added to cart" notification.

use leptos::prelude::*;

use crate::state::cart::CartHandle;

/// Slides in while `CartUi::notification` is set; the dismiss timer lives in
/// the cart state ports, not here.
#[component]
pub fn CartNotification() -> impl IntoView {
    let ui = expect_context::<CartHandle>().ui();

    let message = move || ui.with(|u| u.notification.as_ref().map(|name| format!("{name} added to cart")));

    view! {
        <div
            class="cart-notification"
            class:cart-notification--show=move || ui.with(|u| u.notification.is_some())
            role="status"
            aria-live="polite"
        >
            {message}
        </div>
    }
}
