//! Derived cart views and the surfaces they are pushed into.
//!
//! [`CartView`] is a pure function of the line items. It is recomputed in
//! full after every mutation; rendering layers turn the row descriptors into
//! markup and never read the store directly.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::checkout::Receipt;
use crate::config::CartConfig;
use crate::item::{ItemId, LineItem};
use crate::store::format_amount;

/// Item-count indicator on the cart toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub visible: bool,
}

/// One rendered cart line with its quantity controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRow {
    pub id: ItemId,
    pub name: String,
    /// Currency symbol followed by the price as stored.
    pub price_label: String,
    pub quantity: u32,
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyPlaceholder {
    pub icon: &'static str,
    pub title: &'static str,
    pub hint: &'static str,
}

impl Default for EmptyPlaceholder {
    fn default() -> Self {
        Self { icon: "\u{1F6D2}", title: "Your cart is empty", hint: "Add some products to get started!" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineList {
    Empty(EmptyPlaceholder),
    Rows(Vec<LineRow>),
}

impl LineList {
    #[must_use]
    pub fn rows(&self) -> &[LineRow] {
        match self {
            Self::Empty(_) => &[],
            Self::Rows(rows) => rows,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

/// Total line under the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Two-decimal total without currency symbol.
    pub total: String,
    /// `total` with the currency symbol.
    pub total_label: String,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartView {
    pub badge: Badge,
    pub lines: LineList,
    pub summary: Summary,
}

impl CartView {
    #[must_use]
    pub fn from_items(items: &[LineItem], config: &CartConfig) -> Self {
        let count: u64 = items.iter().map(|item| u64::from(item.quantity)).sum();
        let total = format_amount(items.iter().map(LineItem::subtotal).sum());

        let lines = if items.is_empty() {
            LineList::Empty(EmptyPlaceholder::default())
        } else {
            LineList::Rows(items.iter().map(|item| row(item, config)).collect())
        };

        Self {
            badge: Badge { text: count.to_string(), visible: count > 0 },
            lines,
            summary: Summary { total_label: config.money(&total), total, visible: !items.is_empty() },
        }
    }
}

impl Default for CartView {
    fn default() -> Self {
        Self::from_items(&[], &CartConfig::default())
    }
}

fn row(item: &LineItem, config: &CartConfig) -> LineRow {
    LineRow {
        id: item.id.clone(),
        name: item.name.clone(),
        price_label: config.money(&item.price.to_string()),
        quantity: item.quantity,
        image: Some(item.image.clone()).filter(|image| !image.is_empty()),
    }
}

/// Rendering surfaces supplied by the host page.
///
/// The three `show_*` methods receive the full derived view after every
/// change. The remaining hooks default to no-ops for headless hosts.
pub trait ViewPorts {
    fn show_badge(&mut self, badge: &Badge);
    fn show_lines(&mut self, lines: &LineList);
    fn show_summary(&mut self, summary: &Summary);

    fn set_panel_open(&mut self, _open: bool) {}

    /// Transient "added to cart" cue; the host dismisses it on its own timer.
    fn notify_added(&mut self, _product_name: &str) {}

    /// Blocking confirmation shown before a checkout clears the cart.
    fn confirm_checkout(&mut self, _receipt: &Receipt, _message: &str) {}
}

/// Push every part of `view` into `ports`.
pub fn present<P: ViewPorts + ?Sized>(view: &CartView, ports: &mut P) {
    ports.show_badge(&view.badge);
    ports.show_lines(&view.lines);
    ports.show_summary(&view.summary);
}
