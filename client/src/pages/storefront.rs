//! Storefront page: product grid plus the cart chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session cart is read after hydration, not during SSR, so the first
//! client render matches the server markup. The same effect installs the
//! window listeners exactly once for the page.

use cart::CartEvent;
use leptos::prelude::*;

use crate::catalog::PRODUCTS;
use crate::components::cart_notification::CartNotification;
use crate::components::cart_panel::CartPanel;
use crate::components::cart_toggle::CartToggle;
use crate::components::product_card::ProductCard;
use crate::state::cart::CartHandle;
use crate::util::window_events;

#[component]
pub fn StorefrontPage() -> impl IntoView {
    let cart = expect_context::<CartHandle>();

    Effect::new(move || {
        untrack(|| {
            cart.dispatch(CartEvent::PageLoaded);
            window_events::install(cart);
        });
    });

    view! {
        <div class="storefront">
            <header class="storefront__header">
                <h1 class="storefront__title">"Storefront"</h1>
                <CartToggle/>
            </header>

            <main class="storefront__grid">
                {PRODUCTS.iter().map(|product| view! { <ProductCard product=*product/> }).collect::<Vec<_>>()}
            </main>

            <CartPanel/>
            <CartNotification/>
        </div>
    }
}
