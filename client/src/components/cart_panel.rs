//! Cart panel: line rows with quantity controls, total, clear and checkout.

use cart::{CartEvent, EmptyPlaceholder, LineList, LineRow};
use leptos::prelude::*;

use crate::state::cart::CartHandle;

/// Modal cart panel. Clicking the backdrop or pressing Escape closes it.
#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = expect_context::<CartHandle>();
    let ui = cart.ui();

    let open = move || ui.with(|u| u.panel_open);

    Effect::new(move || {
        crate::util::dom::lock_body_scroll(open());
    });

    let summary_display = move || if ui.with(|u| u.view.summary.visible) { "block" } else { "none" };
    let total_label = move || ui.with(|u| u.view.summary.total_label.clone());

    view! {
        <Show when=open>
            <div class="cart-modal" on:click=move |_| cart.dispatch(CartEvent::BackdropClicked)>
                <div class="cart-modal__content" on:click=|ev| ev.stop_propagation()>
                    <header class="cart-modal__header">
                        <h2>"Your Cart"</h2>
                        <button
                            class="cart-modal__close"
                            aria-label="Close cart"
                            on:click=move |_| cart.dispatch(CartEvent::ClosePanel)
                        >
                            "\u{00D7}"
                        </button>
                    </header>

                    <div class="cart-modal__items">
                        {move || match ui.with(|u| u.view.lines.clone()) {
                            LineList::Empty(placeholder) => view! { <EmptyCart placeholder/> }.into_any(),
                            LineList::Rows(rows) => {
                                rows.into_iter()
                                    .map(|row| view! { <CartRow row/> })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </div>

                    <div class="cart-modal__summary" style:display=summary_display>
                        <div class="cart-modal__total">
                            <span>"Total:"</span>
                            <span class="cart-modal__total-value">{total_label}</span>
                        </div>
                        <div class="cart-modal__actions">
                            <button class="btn" on:click=move |_| cart.dispatch(CartEvent::Clear)>
                                "Clear Cart"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| cart.dispatch(CartEvent::Checkout)>
                                "Checkout"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// One line with decrement, increment and remove controls.
#[component]
fn CartRow(row: LineRow) -> impl IntoView {
    let cart = expect_context::<CartHandle>();
    let LineRow { id, name, price_label, quantity, image } = row;

    let data_id = id.to_string();
    let dec_id = id.clone();
    let inc_id = id.clone();

    view! {
        <div class="cart-item" data-id=data_id>
            {image.map(|src| view! { <img class="cart-item__image" src=src alt=""/> })}
            <div class="cart-item__info">
                <h4>{name}</h4>
                <p class="cart-item__price">{price_label}</p>
            </div>
            <div class="cart-item__controls">
                <button
                    class="quantity-btn"
                    aria-label="Decrease quantity"
                    on:click=move |_| cart.dispatch(CartEvent::AdjustQuantity(dec_id.clone(), -1))
                >
                    "\u{2212}"
                </button>
                <span class="quantity">{quantity}</span>
                <button
                    class="quantity-btn"
                    aria-label="Increase quantity"
                    on:click=move |_| cart.dispatch(CartEvent::AdjustQuantity(inc_id.clone(), 1))
                >
                    "+"
                </button>
                <button
                    class="remove-btn"
                    aria-label="Remove item"
                    on:click=move |_| cart.dispatch(CartEvent::Remove(id.clone()))
                >
                    "\u{1F5D1}"
                </button>
            </div>
        </div>
    }
}

#[component]
fn EmptyCart(placeholder: EmptyPlaceholder) -> impl IntoView {
    view! {
        <div class="empty-cart">
            <div class="empty-cart__icon">{placeholder.icon}</div>
            <h3>{placeholder.title}</h3>
            <p>{placeholder.hint}</p>
        </div>
    }
}
