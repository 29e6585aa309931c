//! Store Integration Tests
//!
//! Persist/restore behaviour against in-memory storage.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use todo_store::{
    Command, Item, KeyValueStorage, MemoryStorage, Outcome, Settings, StoreConfig, TodoStore,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap()
}

fn setup_store(storage: MemoryStorage) -> TodoStore<MemoryStorage> {
    TodoStore::open(storage, StoreConfig::default()).with_clock(fixed_now)
}

#[test]
fn test_persist_restore_round_trip() {
    let mut store = setup_store(MemoryStorage::new());
    store.add("Buy milk");
    store.add("Walk <the> dog");
    store.add("Call \"mom\" & dad");
    let id = store.items()[1].id;
    store.edit(id, "Walk the dog twice");

    let original: Vec<Item> = store.items().to_vec();
    let reopened = setup_store(store.storage().clone());

    assert_eq!(reopened.items(), original.as_slice());
}

#[test]
fn test_restore_browser_payload() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            "todos",
            r#"[{"id":1704207840123,"text":"Buy milk","completed":false,"created":"2024-01-02T15:04:00.123Z"}]"#,
        )
        .unwrap();
    storage.set("todoSettings", r#"{"disableAlert":true}"#).unwrap();

    let store = setup_store(storage);
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].text, "Buy milk");
    assert!(store.settings().disable_confirmation);
}

#[test]
fn test_restore_non_array_payload() {
    for payload in [r#"{"id":1}"#, "42", "\"todos\"", "null"] {
        let mut storage = MemoryStorage::new();
        storage.set("todos", payload).unwrap();

        let store = setup_store(storage);
        assert!(store.is_empty(), "payload {payload} should restore empty");
        assert_eq!(store.storage().get("todos").unwrap(), None);
    }
}

#[test]
fn test_store_keeps_working_after_corrupt_restore() {
    let mut storage = MemoryStorage::new();
    storage.set("todos", r#"{"not":"a list"}"#).unwrap();

    let mut store = setup_store(storage);
    assert_eq!(store.add("Fresh start"), Outcome::Saved);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_custom_keys() {
    let config = StoreConfig {
        items_key: "work-todos".to_string(),
        settings_key: "work-settings".to_string(),
        ..StoreConfig::default()
    };
    let mut store = TodoStore::new(MemoryStorage::new(), config);
    store.add("Ship it");
    store.set_settings(Settings { disable_confirmation: true });

    assert!(store.storage().get("work-todos").unwrap().is_some());
    assert!(store.storage().get("work-settings").unwrap().is_some());
    assert_eq!(store.storage().get("todos").unwrap(), None);
}

#[test]
fn test_buy_milk_scenario() {
    let mut store = setup_store(MemoryStorage::new());

    store.dispatch(Command::Add("Buy milk".to_string()));
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].text, "Buy milk");
    assert!(!store.items()[0].completed);

    let id = store.items()[0].id;
    assert_eq!(store.dispatch(Command::Toggle(id)), Outcome::Saved);
    assert!(store.get(id).is_none());

    assert_eq!(store.dispatch(Command::Delete(id)), Outcome::Unchanged);
    assert!(store.is_empty());
    assert_eq!(store.storage().get("todos").unwrap().as_deref(), Some("[]"));
}

proptest! {
    #[test]
    fn add_grows_list_by_one(text in ".*[^\\s].*") {
        let mut store = setup_store(MemoryStorage::new());
        store.add("existing");
        let before = store.len();

        store.add(&text);

        prop_assert_eq!(store.len(), before + 1);
        let added = store.items().last().unwrap();
        prop_assert!(!added.completed);
        prop_assert!(!added.text.contains('<'));
    }

    #[test]
    fn blank_add_is_noop(text in "\\s*") {
        let mut store = setup_store(MemoryStorage::new());
        prop_assert_eq!(store.add(&text), Outcome::Unchanged);
        prop_assert!(store.is_empty());
    }
}
