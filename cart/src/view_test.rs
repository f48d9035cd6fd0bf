use super::*;
use crate::item::Price;

fn line(id: &str, name: &str, price: &str, quantity: u32) -> LineItem {
    LineItem { id: ItemId::new(id), name: name.into(), price: Price::from(price), image: String::new(), quantity }
}

#[derive(Default)]
struct RecordingPorts {
    badge: Option<Badge>,
    lines: Option<LineList>,
    summary: Option<Summary>,
}

impl ViewPorts for RecordingPorts {
    fn show_badge(&mut self, badge: &Badge) {
        self.badge = Some(badge.clone());
    }

    fn show_lines(&mut self, lines: &LineList) {
        self.lines = Some(lines.clone());
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.summary = Some(summary.clone());
    }
}

// =============================================================
// Empty cart
// =============================================================

#[test]
fn empty_cart_hides_badge_and_summary() {
    let view = CartView::default();

    assert_eq!(view.badge, Badge { text: "0".into(), visible: false });
    assert!(!view.summary.visible);
    assert_eq!(view.summary.total, "0.00");
    assert!(view.lines.is_empty());
    assert!(view.lines.rows().is_empty());
}

#[test]
fn empty_cart_shows_placeholder() {
    let view = CartView::from_items(&[], &CartConfig::default());
    let LineList::Empty(placeholder) = view.lines else {
        panic!("expected placeholder");
    };
    assert_eq!(placeholder.title, "Your cart is empty");
}

// =============================================================
// Non-empty cart
// =============================================================

#[test]
fn badge_counts_quantities_not_lines() {
    let view = CartView::from_items(&[line("a", "Mask", "9.99", 2), line("b", "Gloves", "4.50", 3)], &CartConfig::default());
    assert_eq!(view.badge, Badge { text: "5".into(), visible: true });
}

#[test]
fn rows_follow_item_order_with_price_labels() {
    let view = CartView::from_items(&[line("a", "Mask", "9.99", 2), line("b", "Gloves", "4.50", 1)], &CartConfig::default());

    let rows = view.lines.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, ItemId::new("a"));
    assert_eq!(rows[0].price_label, "$9.99");
    assert_eq!(rows[0].quantity, 2);
    assert_eq!(rows[1].name, "Gloves");
}

#[test]
fn row_price_label_keeps_raw_text_for_bad_prices() {
    let view = CartView::from_items(&[line("a", "Sample", "free", 1)], &CartConfig::default());
    assert_eq!(view.lines.rows()[0].price_label, "$free");
    assert_eq!(view.summary.total, "0.00");
}

#[test]
fn row_image_is_none_when_blank() {
    let mut with_image = line("a", "Mask", "9.99", 1);
    with_image.image = "/mask.png".into();
    let view = CartView::from_items(&[with_image, line("b", "Gloves", "1", 1)], &CartConfig::default());

    assert_eq!(view.lines.rows()[0].image.as_deref(), Some("/mask.png"));
    assert_eq!(view.lines.rows()[1].image, None);
}

#[test]
fn summary_is_visible_with_labelled_total() {
    let config = CartConfig { currency_symbol: "\u{20AC}".into(), ..CartConfig::default() };
    let view = CartView::from_items(&[line("a", "Mask", "9.99", 2)], &config);

    assert!(view.summary.visible);
    assert_eq!(view.summary.total, "19.98");
    assert_eq!(view.summary.total_label, "\u{20AC}19.98");
}

// =============================================================
// present
// =============================================================

#[test]
fn present_pushes_every_surface() {
    let view = CartView::from_items(&[line("a", "Mask", "9.99", 1)], &CartConfig::default());
    let mut ports = RecordingPorts::default();

    present(&view, &mut ports);

    assert_eq!(ports.badge, Some(view.badge.clone()));
    assert_eq!(ports.lines, Some(view.lines.clone()));
    assert_eq!(ports.summary, Some(view.summary.clone()));
}
