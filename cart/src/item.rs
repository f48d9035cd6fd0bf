//! Line items and the add-to-cart intent that creates them.
//!
//! Stored carts may predate this crate: ids were once written as JSON numbers
//! and prices arrive as either strings or numbers. Both are accepted and kept
//! verbatim so a load/save cycle never rewrites what the page stored.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use crate::error::CartError;

// =============================================================================
// ITEM ID
// =============================================================================

/// Opaque line-item identifier, unique for the lifetime of a cart.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}

// =============================================================================
// PRICE
// =============================================================================

/// A price exactly as the product markup supplied it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Text(String),
    Number(Number),
}

impl Price {
    /// Numeric value used for totals. Unparsable or non-finite prices count as 0.
    ///
    /// Text is read the way browsers read `parseFloat`: leading whitespace is
    /// skipped and the longest decimal prefix wins, so `"12.50 USD"` is 12.5.
    #[must_use]
    pub fn amount(&self) -> f64 {
        let value = match self {
            Self::Text(raw) => parse_leading_decimal(raw),
            Self::Number(number) => number.as_f64().unwrap_or(0.0),
        };
        if value.is_finite() { value } else { 0.0 }
    }
}

impl Default for Price {
    /// The price of a control that carried no `data-price`; counts as 0.
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(raw) => f.write_str(raw),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for Price {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_owned())
    }
}

impl From<String> for Price {
    fn from(raw: String) -> Self {
        Self::Text(raw)
    }
}

impl From<u32> for Price {
    fn from(value: u32) -> Self {
        Self::Number(Number::from(value))
    }
}

fn parse_leading_decimal(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = count_digits(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    text[..end].parse::<f64>().unwrap_or(0.0)
}

/// Treat JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// LINE ITEM
// =============================================================================

/// One distinct product in the cart with its quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    /// Absent or `null` when the page never supplied a price.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Price,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    /// Always at least 1 while the item is in a cart.
    pub quantity: u32,
}

impl LineItem {
    /// `price x quantity`, fail-soft on bad prices.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.price.amount() * f64::from(self.quantity)
    }
}

// =============================================================================
// PRODUCT INTENT
// =============================================================================

/// A request to put one unit of a product into the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIntent {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Price,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

impl ProductIntent {
    #[must_use]
    pub fn new(name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self { name: name.into(), price: price.into(), image: String::new() }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Build an intent from the `data-name`, `data-price` and `data-image`
    /// attributes of an add-to-cart control.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MissingProductName`] when the name attribute is
    /// absent or blank. A missing price becomes an empty string (totals as 0).
    pub fn from_data_attributes(
        name: Option<&str>,
        price: Option<&str>,
        image: Option<&str>,
    ) -> Result<Self, CartError> {
        let name = name.filter(|n| !n.trim().is_empty()).ok_or(CartError::MissingProductName)?;
        Ok(Self {
            name: name.to_owned(),
            price: Price::from(price.unwrap_or_default()),
            image: image.unwrap_or_default().to_owned(),
        })
    }
}
