//! Window-level listeners that feed page lifecycle events into the cart.
//!
//! Focus reloads the cart (another page of the session may have written
//! it), `beforeunload` persists it, `keydown` lets Escape close the panel,
//! and a delegated `click` turns marked host-page controls into add intents.

use crate::state::cart::CartHandle;

/// Attach all listeners for the lifetime of the page.
pub fn install(handle: CartHandle) {
    #[cfg(feature = "hydrate")]
    {
        use cart::CartEvent;
        use leptos::ev;
        use leptos::prelude::window_event_listener;

        let _ = window_event_listener(ev::focus, move |_| handle.dispatch(CartEvent::FocusRegained));
        let _ = window_event_listener(ev::beforeunload, move |_| handle.dispatch(CartEvent::BeforeUnload));
        let _ = window_event_listener(ev::keydown, move |ev| handle.dispatch(CartEvent::KeyPressed(ev.key())));
        let _ = window_event_listener(ev::click, move |ev| crate::util::add_intents::handle_click(handle, &ev));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = handle;
    }
}
