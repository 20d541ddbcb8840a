//! Tests for [`CacheStore`] — identity-keyed ordered record storage.

use redial::{CacheRecord, CacheStore, Codec, InvocationDescriptor, RedialError};
use serde_json::json;

fn make_record(id: &str, name: &str) -> CacheRecord {
    let codec = Codec::new();
    let descriptor = InvocationDescriptor::new("com.acme.FooService", "bar")
        .with_parameters(vec!["java.lang.String".into()], vec![json!("hi")])
        .unwrap();
    CacheRecord::of(id, name, &descriptor, &codec).unwrap()
}

fn ids(store: &CacheStore) -> Vec<String> {
    store.snapshot().into_iter().map(|r| r.id).collect()
}

#[test]
fn lookup_miss_returns_none() {
    let store = CacheStore::new();
    assert!(store.get("nonexistent").is_none());
}

#[test]
fn add_then_get_returns_the_record_field_for_field() {
    let store = CacheStore::new();
    let record = make_record("r1", "My Call");
    store.add(record.clone()).unwrap();

    let got = store.get("r1").expect("record should be present");
    assert_eq!(got.id, record.id);
    assert_eq!(got.name, record.name);
    assert_eq!(got.interface_name, record.interface_name);
    assert_eq!(got.method_name, record.method_name);
    assert_eq!(got.parameter_types_json, record.parameter_types_json);
    assert_eq!(got.parameter_values_json, record.parameter_values_json);
    assert_eq!(got.created_at, record.created_at);
}

#[test]
fn duplicate_id_is_rejected_and_store_unchanged() {
    let store = CacheStore::new();
    store.add(make_record("r1", "original")).unwrap();

    let err = store.add(make_record("r1", "imposter")).unwrap_err();
    assert!(matches!(err, RedialError::DuplicateId(ref id) if id == "r1"));

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("r1").unwrap().name, "original");
}

#[test]
fn identical_fields_with_different_ids_are_distinct_entries() {
    let store = CacheStore::new();
    store.add(make_record("r1", "same name")).unwrap();
    store.add(make_record("r2", "same name")).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn default_record_on_empty_store_is_none() {
    let store = CacheStore::new();
    assert!(store.default_record().is_none());
}

#[test]
fn default_record_is_first_in_insertion_order() {
    let store = CacheStore::new();
    store.add(make_record("first", "a")).unwrap();
    store.add(make_record("second", "b")).unwrap();
    assert_eq!(store.default_record().unwrap().id, "first");
}

#[test]
fn update_replaces_in_place() {
    let store = CacheStore::new();
    store.add(make_record("r1", "a")).unwrap();
    store.add(make_record("r2", "b")).unwrap();
    store.add(make_record("r3", "c")).unwrap();

    store.update(make_record("r2", "b-edited")).unwrap();

    assert_eq!(ids(&store), vec!["r1", "r2", "r3"]);
    assert_eq!(store.get("r2").unwrap().name, "b-edited");
}

#[test]
fn update_of_unknown_id_fails() {
    let store = CacheStore::new();
    let err = store.update(make_record("ghost", "n")).unwrap_err();
    assert!(matches!(err, RedialError::NotFound(ref id) if id == "ghost"));
}

#[test]
fn remove_deletes_the_record() {
    let store = CacheStore::new();
    store.add(make_record("r1", "a")).unwrap();
    store.add(make_record("r2", "b")).unwrap();

    store.remove("r1");
    assert_eq!(ids(&store), vec!["r2"]);
}

#[test]
fn remove_of_unknown_id_is_a_noop() {
    let store = CacheStore::new();
    store.add(make_record("r1", "a")).unwrap();
    store.add(make_record("r2", "b")).unwrap();

    store.remove("ghost");
    assert_eq!(ids(&store), vec!["r1", "r2"]);
}

#[test]
fn clear_empties_the_store() {
    let store = CacheStore::new();
    store.add(make_record("r1", "a")).unwrap();
    store.clear();
    assert!(store.is_empty());
    assert!(store.default_record().is_none());
}

#[test]
fn persistence_roundtrip_preserves_order_and_records() {
    let store = CacheStore::new();
    store.add(make_record("r1", "a")).unwrap();
    store.add(make_record("r2", "b")).unwrap();
    store.add(make_record("r3", "c")).unwrap();

    let blob = serde_json::to_string(&store).unwrap();
    let loaded: CacheStore = serde_json::from_str(&blob).unwrap();

    assert_eq!(ids(&loaded), vec!["r1", "r2", "r3"]);
    assert_eq!(loaded.get("r2").unwrap().name, "b");
}

#[test]
fn rebuilding_from_a_loaded_list() {
    let records = vec![make_record("r1", "a"), make_record("r2", "b")];
    let store = CacheStore::from(records);
    assert_eq!(store.len(), 2);
    assert_eq!(store.default_record().unwrap().id, "r1");
}

#[test]
fn thread_safety() {
    use std::sync::Arc;
    use std::thread;

    let store = Arc::new(CacheStore::new());
    let mut handles = Vec::new();

    // Spawn writers
    for i in 0..10 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            store
                .add(make_record(&format!("r{i}"), "concurrent"))
                .expect("unique ids never collide");
        }));
    }

    // Spawn concurrent readers
    for i in 0..10 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            // May or may not see the entry yet — shouldn't panic
            let _ = store.get(&format!("r{i}"));
        }));
    }

    for h in handles {
        h.join().expect("thread panicked");
    }

    assert_eq!(store.len(), 10);
}
