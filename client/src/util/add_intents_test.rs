use std::collections::HashMap;

use cart::Price;

use super::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn intent_reads_all_data_attributes() {
    let intent = intent_from_attributes(attrs(&[
        ("data-name", "Mask"),
        ("data-price", "9.99"),
        ("data-image", "/img/mask.png"),
    ]))
    .unwrap();

    assert_eq!(intent.name, "Mask");
    assert_eq!(intent.price, Price::from("9.99"));
    assert_eq!(intent.image, "/img/mask.png");
}

#[test]
fn intent_without_image_defaults_to_empty() {
    let intent = intent_from_attributes(attrs(&[("data-name", "Mask"), ("data-price", "9.99")])).unwrap();
    assert_eq!(intent.image, "");
}

#[test]
fn intent_without_name_is_rejected() {
    let result = intent_from_attributes(attrs(&[("data-price", "9.99")]));
    assert!(matches!(result, Err(CartError::MissingProductName)));
}

#[test]
fn marker_and_label_match_page_contract() {
    assert_eq!(ADD_TO_CART_MARKER, "add-to-cart-btn");
    assert_eq!(ADDED_LABEL, "Added!");
}
