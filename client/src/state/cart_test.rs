use cart::{ItemId, ProductIntent};

use super::*;

// =============================================================
// CartUi notification
// =============================================================

#[test]
fn cart_ui_default_is_closed_and_quiet() {
    let ui = CartUi::default();
    assert!(!ui.panel_open);
    assert!(ui.notification.is_none());
    assert!(!ui.view.badge.visible);
    assert!(!ui.view.summary.visible);
}

#[test]
fn show_notification_sets_name_and_bumps_seq() {
    let mut ui = CartUi::default();
    let seq = ui.show_notification("Mask");
    assert_eq!(seq, 1);
    assert_eq!(ui.notification.as_deref(), Some("Mask"));
}

#[test]
fn dismiss_with_current_seq_hides_notification() {
    let mut ui = CartUi::default();
    let seq = ui.show_notification("Mask");
    ui.dismiss_notification(seq);
    assert!(ui.notification.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_notification() {
    let mut ui = CartUi::default();
    let first = ui.show_notification("Mask");
    ui.show_notification("Gloves");

    ui.dismiss_notification(first);

    assert_eq!(ui.notification.as_deref(), Some("Gloves"));
}

// =============================================================
// CartHandle dispatch (server-side, memory-only storage)
// =============================================================

#[test]
fn dispatch_add_updates_ui_signal() {
    let handle = CartHandle::new(CartConfig::default());

    handle.dispatch(CartEvent::Add(ProductIntent::new("Mask", "9.99")));
    handle.dispatch(CartEvent::Add(ProductIntent::new("Mask", "9.99")));

    let ui = handle.ui().get_untracked();
    assert_eq!(ui.view.badge.text, "2");
    assert!(ui.view.badge.visible);
    assert_eq!(ui.view.summary.total, "19.98");
    assert_eq!(ui.notification.as_deref(), Some("Mask"));
}

#[test]
fn dispatch_open_and_escape_toggle_panel() {
    let handle = CartHandle::new(CartConfig::default());

    handle.dispatch(CartEvent::OpenPanel);
    assert!(handle.ui().get_untracked().panel_open);

    handle.dispatch(CartEvent::KeyPressed("Escape".into()));
    assert!(!handle.ui().get_untracked().panel_open);
}

#[test]
fn dispatch_checkout_clears_cart_and_closes_panel() {
    let handle = CartHandle::new(CartConfig::default());
    handle.dispatch(CartEvent::Add(ProductIntent::new("Mask", "9.99")));
    handle.dispatch(CartEvent::OpenPanel);

    handle.dispatch(CartEvent::Checkout);

    let ui = handle.ui().get_untracked();
    assert!(!ui.panel_open);
    assert_eq!(ui.view.badge.text, "0");
    assert!(ui.view.lines.is_empty());
}

#[test]
fn dispatch_remove_of_unknown_id_keeps_items() {
    let handle = CartHandle::new(CartConfig::default());
    handle.dispatch(CartEvent::Add(ProductIntent::new("Mask", "9.99")));

    handle.dispatch(CartEvent::Remove(ItemId::new("missing")));

    assert_eq!(handle.ui().get_untracked().view.lines.rows().len(), 1);
}

#[test]
fn config_is_readable_from_handle() {
    let handle = CartHandle::new(CartConfig::default().with_storage_key("other-cart"));
    assert_eq!(handle.config().storage_key, "other-cart");
}
