//! Product card with its add-to-cart button.

use cart::CartEvent;
use leptos::prelude::*;

use crate::catalog::Product;
use crate::state::cart::CartHandle;
use crate::util::add_intents::ADDED_LABEL;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let price = expect_context::<CartHandle>().config().money(product.price);

    view! {
        <article class="product-card">
            <img class="product-card__image" src=product.image alt=product.name/>
            <h3 class="product-card__name">{product.name}</h3>
            <p class="product-card__blurb">{product.blurb}</p>
            <p class="product-card__price">{price}</p>
            <AddToCartButton product/>
        </article>
    }
}

/// Adds one unit and briefly shows "Added!".
#[component]
pub fn AddToCartButton(product: Product) -> impl IntoView {
    let cart = expect_context::<CartHandle>();
    let feedback = RwSignal::new(false);

    let on_click = move |_| {
        cart.dispatch(CartEvent::Add(product.intent()));
        feedback.set(true);

        #[cfg(feature = "hydrate")]
        {
            let duration_ms = cart.config().button_feedback_ms;
            gloo_timers::callback::Timeout::new(duration_ms, move || {
                let _ = feedback.try_set(false);
            })
            .forget();
        }
    };

    view! {
        <button
            class="product-card__add"
            class:product-card__add--added=move || feedback.get()
            data-name=product.data_attribute("data-name")
            data-price=product.data_attribute("data-price")
            data-image=product.data_attribute("data-image")
            on:click=on_click
        >
            {move || if feedback.get() { ADDED_LABEL } else { "Add to Cart" }}
        </button>
    }
}
