use serde_json::json;

use super::*;
use crate::item::{ItemId, Price};

const KEY: &str = "test-cart";

fn item(id: &str, name: &str, price: &str, quantity: u32) -> LineItem {
    LineItem { id: ItemId::new(id), name: name.into(), price: Price::from(price), image: String::new(), quantity }
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn save_then_load_reconstructs_items_in_order() {
    let items = vec![item("item-1", "Mask", "9.99", 2), item("item-2", "Gloves", "4.50", 1)];
    let mut persistence = CartPersistence::new(MemoryStorage::new(), KEY);

    persistence.save(&items).unwrap();

    assert_eq!(persistence.load(), items);
}

#[test]
fn save_writes_json_array_with_all_fields() {
    let mut persistence = CartPersistence::new(MemoryStorage::new(), KEY);
    persistence.save(&[item("item-1", "Mask", "9.99", 1)]).unwrap();

    let raw = persistence.backend().raw(KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(
        value,
        json!([{"id": "item-1", "name": "Mask", "price": "9.99", "image": "", "quantity": 1}])
    );
}

#[test]
fn save_overwrites_previous_value() {
    let mut persistence = CartPersistence::new(MemoryStorage::new(), KEY);
    persistence.save(&[item("item-1", "Mask", "9.99", 1)]).unwrap();
    persistence.save(&[]).unwrap();

    assert_eq!(persistence.backend().raw(KEY), Some("[]"));
}

// =============================================================
// Fail-soft load
// =============================================================

#[test]
fn load_without_stored_value_is_empty() {
    let persistence = CartPersistence::new(MemoryStorage::new(), KEY);
    assert!(persistence.load().is_empty());
    assert!(persistence.try_load().unwrap().is_empty());
}

#[test]
fn load_of_truncated_json_is_empty() {
    let persistence = CartPersistence::new(MemoryStorage::with_entry(KEY, r#"[{"id":"a","name":"Ma"#), KEY);
    assert!(persistence.load().is_empty());
    assert!(matches!(persistence.try_load(), Err(CartError::MalformedState(_))));
}

#[test]
fn load_of_non_json_is_empty() {
    let persistence = CartPersistence::new(MemoryStorage::with_entry(KEY, "not json at all"), KEY);
    assert!(persistence.load().is_empty());
}

#[test]
fn load_of_json_null_is_empty() {
    let persistence = CartPersistence::new(MemoryStorage::with_entry(KEY, "null"), KEY);
    assert!(persistence.load().is_empty());
}

#[test]
fn load_accepts_legacy_numeric_ids_and_prices() {
    let raw = r#"[{"id":1700000000000.5,"name":"Mask","price":9.99,"image":"","quantity":3}]"#;
    let persistence = CartPersistence::new(MemoryStorage::with_entry(KEY, raw), KEY);

    let items = persistence.load();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id.as_str(), "1700000000000.5");
    assert_eq!(items[0].quantity, 3);
    assert!((items[0].price.amount() - 9.99).abs() < f64::EPSILON);
}

#[test]
fn load_keeps_line_without_price_at_zero() {
    let raw = r#"[
        {"id":"item-1","name":"Mask","price":"9.99","image":"","quantity":1},
        {"id":"item-2","name":"Mystery","image":"","quantity":2}
    ]"#;
    let persistence = CartPersistence::new(MemoryStorage::with_entry(KEY, raw), KEY);

    let items = persistence.load();

    assert_eq!(items.len(), 2);
    assert_eq!(items[1].price, Price::default());
    assert!((items[1].subtotal() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn load_accepts_null_image_and_price() {
    let raw = r#"[{"id":"item-1","name":"Mask","price":null,"image":null,"quantity":1}]"#;
    let persistence = CartPersistence::new(MemoryStorage::with_entry(KEY, raw), KEY);

    let items = persistence.load();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].image, "");
    assert_eq!(items[0].price, Price::default());
}

#[test]
fn load_ignores_other_keys() {
    let persistence = CartPersistence::new(MemoryStorage::with_entry("other", "[]"), KEY);
    assert!(persistence.load().is_empty());
}

// =============================================================
// Write failures
// =============================================================

#[test]
fn save_reports_refused_write() {
    let mut storage = MemoryStorage::new();
    storage.set_refuse_writes(true);
    let mut persistence = CartPersistence::new(storage, KEY);

    let err = persistence.save(&[item("item-1", "Mask", "9.99", 1)]).unwrap_err();

    assert!(matches!(err, CartError::Storage(StorageError::WriteFailed { .. })));
    assert_eq!(persistence.backend().raw(KEY), None);
}

#[test]
fn put_raw_bypasses_refusal() {
    let mut storage = MemoryStorage::new();
    storage.set_refuse_writes(true);
    storage.put_raw(KEY, "[]");
    assert_eq!(storage.raw(KEY), Some("[]"));
}

// =============================================================
// Codec
// =============================================================

#[test]
fn encode_empty_cart_is_empty_array() {
    assert_eq!(encode_items(&[]).unwrap(), "[]");
}

#[test]
fn decode_rejects_object_root() {
    assert!(decode_items(r#"{"items":[]}"#).is_err());
}
