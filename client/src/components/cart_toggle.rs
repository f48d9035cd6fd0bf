//! Cart toggle button with the item-count badge.

use cart::CartEvent;
use leptos::prelude::*;

use crate::state::cart::CartHandle;

/// Header button that opens the cart panel. The badge is hidden while the
/// cart is empty.
#[component]
pub fn CartToggle() -> impl IntoView {
    let cart = expect_context::<CartHandle>();
    let ui = cart.ui();

    let badge_text = move || ui.with(|u| u.view.badge.text.clone());
    let badge_display = move || if ui.with(|u| u.view.badge.visible) { "flex" } else { "none" };

    view! {
        <button class="cart-toggle" aria-label="Open cart" on:click=move |_| cart.dispatch(CartEvent::OpenPanel)>
            <span class="cart-toggle__icon" aria-hidden="true">"\u{1F6D2}"</span>
            <span class="cart-toggle__badge" style:display=badge_display>
                {badge_text}
            </span>
        </button>
    }
}
