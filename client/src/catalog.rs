//! Demo product catalog shown on the storefront page.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use cart::ProductIntent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub blurb: &'static str,
}

impl Product {
    #[must_use]
    pub fn intent(&self) -> ProductIntent {
        ProductIntent::new(self.name, self.price).with_image(self.image)
    }

    /// Value of a `data-*` attribute carried by this product's add-to-cart
    /// control, matching what `util::add_intents` reads back.
    #[must_use]
    pub fn data_attribute(&self, name: &str) -> Option<&'static str> {
        match name {
            "data-name" => Some(self.name),
            "data-price" => Some(self.price),
            "data-image" => Some(self.image),
            _ => None,
        }
    }
}

pub const PRODUCTS: [Product; 4] = [
    Product {
        name: "Respirator Mask",
        price: "9.99",
        image: "/images/mask.png",
        blurb: "Reusable mask with replaceable filters.",
    },
    Product {
        name: "Nitrile Gloves",
        price: "4.50",
        image: "/images/gloves.png",
        blurb: "Box of 100 powder-free gloves.",
    },
    Product {
        name: "Safety Goggles",
        price: "12.00",
        image: "/images/goggles.png",
        blurb: "Anti-fog, splash-rated lenses.",
    },
    Product {
        name: "Hand Sanitizer",
        price: "3.25",
        image: "/images/sanitizer.png",
        blurb: "250 ml, 70% alcohol gel.",
    },
];
