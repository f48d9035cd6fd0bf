use std::collections::HashSet;

use super::*;

#[test]
fn sequential_ids_start_at_one() {
    let mut ids = SequentialIds::new();
    assert_eq!(ids.next_id().as_str(), "item-1");
    assert_eq!(ids.next_id().as_str(), "item-2");
}

#[test]
fn sequential_ids_skip_past_observed_ids() {
    let mut ids = SequentialIds::new();
    ids.observe(&ItemId::new("item-41"));
    ids.observe(&ItemId::new("item-3"));
    assert_eq!(ids.last(), 41);
    assert_eq!(ids.next_id().as_str(), "item-42");
}

#[test]
fn sequential_ids_ignore_foreign_ids() {
    let mut ids = SequentialIds::new();
    ids.observe(&ItemId::new("1700000000000.42"));
    ids.observe(&ItemId::new("item-abc"));
    assert_eq!(ids.last(), 0);
}

#[test]
fn sequential_checkpoint_restores_counter() {
    let mut first = SequentialIds::new();
    first.next_id();
    first.next_id();
    let checkpoint = first.checkpoint().unwrap();

    let mut next_page = SequentialIds::new();
    next_page.restore(&checkpoint);

    assert_eq!(next_page.next_id().as_str(), "item-3");
}

#[test]
fn sequential_restore_never_moves_counter_back() {
    let mut ids = SequentialIds::new();
    ids.observe(&ItemId::new("item-7"));
    ids.restore("2");
    ids.restore("garbage");
    assert_eq!(ids.last(), 7);
}

#[test]
fn random_ids_have_no_checkpoint() {
    assert!(RandomIds.checkpoint().is_none());
}

#[test]
fn random_ids_do_not_repeat() {
    let mut ids = RandomIds;
    let issued: HashSet<_> = (0..256).map(|_| ids.next_id()).collect();
    assert_eq!(issued.len(), 256);
}

#[test]
fn random_ids_are_uuid_formatted() {
    let id = RandomIds.next_id();
    assert!(Uuid::parse_str(id.as_str()).is_ok());
}
