use std::collections::HashSet;

use super::*;
use crate::util::add_intents::intent_from_attributes;

#[test]
fn product_names_are_unique() {
    let names: HashSet<_> = PRODUCTS.iter().map(|p| p.name).collect();
    assert_eq!(names.len(), PRODUCTS.len());
}

#[test]
fn product_prices_parse_as_positive_amounts() {
    for product in PRODUCTS {
        assert!(product.intent().price.amount() > 0.0, "{} has no usable price", product.name);
    }
}

#[test]
fn intent_carries_name_price_and_image() {
    let intent = PRODUCTS[0].intent();
    assert_eq!(intent.name, "Respirator Mask");
    assert_eq!(intent.price.to_string(), "9.99");
    assert_eq!(intent.image, "/images/mask.png");
}

#[test]
fn data_attributes_read_back_as_the_same_intent() {
    for product in PRODUCTS {
        let read = intent_from_attributes(|name| product.data_attribute(name).map(str::to_owned)).unwrap();
        assert_eq!(read, product.intent());
    }
}

#[test]
fn data_attributes_include_image() {
    assert_eq!(PRODUCTS[0].data_attribute("data-image"), Some("/images/mask.png"));
    assert_eq!(PRODUCTS[0].data_attribute("data-id"), None);
}
