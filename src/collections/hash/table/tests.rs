#![cfg(test)]

use std::fs;

use tempfile::tempdir;

use super::*;

fn table_of(pairs: &[(&str, &str)]) -> HashTable {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_insert_and_get() {
    let mut table = HashTable::new();

    assert_eq!(table.insert("a".to_string(), "1".to_string()), None);
    assert_eq!(table.insert("b".to_string(), "2".to_string()), None);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("a"), Some("1"));
    assert_eq!(table.get("b"), Some("2"));
    assert_eq!(table.get("c"), None, "An absent key should yield None.");
}

#[test]
fn test_insert_replaces_existing_key() {
    let mut table = table_of(&[("a", "1")]);

    assert_eq!(
        table.insert("a".to_string(), "2".to_string()),
        Some("1".to_string()),
        "Reinsertion should hand back the displaced value."
    );
    assert_eq!(table.get("a"), Some("2"));
    assert_eq!(table.len(), 1, "Replacing a value should not grow the table.");
}

#[test]
fn test_remove() {
    let mut table = table_of(&[("a", "1"), ("b", "2")]);

    assert_eq!(table.remove("a"), Some("1".to_string()));
    assert_eq!(table.len(), 1);
    assert!(!table.contains_key("a"));
    assert!(table.contains_key("b"));

    assert_eq!(table.remove("a"), None, "Removing an absent key should yield None.");
    assert_eq!(table.len(), 1);
}

#[test]
fn test_colliding_keys_chain() {
    // One slot forces every key into the same chain.
    let mut table = HashTable::with_slots(1);
    table.insert("a".to_string(), "1".to_string());
    table.insert("b".to_string(), "2".to_string());
    table.insert("c".to_string(), "3".to_string());

    assert_eq!(table.len(), 3);
    assert_eq!(table.get("b"), Some("2"), "Chained entries should all remain reachable.");

    assert_eq!(table.remove("b"), Some("2".to_string()));
    assert_eq!(table.get("a"), Some("1"));
    assert_eq!(table.get("c"), Some("3"));
}

#[test]
fn test_zero_slots_is_usable() {
    let mut table = HashTable::with_slots(0);
    table.insert("only".to_string(), "1".to_string());
    assert_eq!(table.get("only"), Some("1"));
    assert_eq!(table.slots(), 1);
}

#[test]
fn test_clear() {
    let mut table = table_of(&[("a", "1"), ("b", "2")]);
    let slots = table.slots();

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.get("a"), None);
    assert_eq!(table.slots(), slots, "Clearing should keep the slot count.");

    table.clear();
    assert!(table.is_empty(), "Clearing an empty table is a no-op.");
}

#[test]
fn test_iter_visits_every_entry() {
    let table = table_of(&[("a", "1"), ("b", "2"), ("c", "3")]);

    let mut pairs: Vec<_> = table.iter().collect();
    pairs.sort_unstable();
    assert_eq!(pairs, [("a", "1"), ("b", "2"), ("c", "3")]);
}

#[test]
fn test_text_persistence_round_trip() {
    let dir = tempdir().expect("temp dir should be creatable");
    let path = dir.path().join("table.txt");

    let original = table_of(&[("ada", "lovelace"), ("alan", "turing")]);
    original.save_text(&path).expect("save should succeed");

    let mut loaded = HashTable::new();
    loaded.load_text(&path).expect("load should succeed");
    assert_eq!(loaded, original);
    assert_eq!(loaded.get("ada"), Some("lovelace"));
}

#[test]
fn test_load_text_skips_malformed_lines() {
    let dir = tempdir().expect("temp dir should be creatable");
    let path = dir.path().join("table.txt");

    fs::write(&path, "3\nada lovelace\nno-value-here\nalan turing\n")
        .expect("file should be writable");

    let mut loaded = HashTable::new();
    loaded.load_text(&path).expect("load should succeed");
    assert_eq!(loaded.len(), 2, "A line without a value should be skipped.");
    assert_eq!(loaded.get("alan"), Some("turing"));
}

#[test]
fn test_load_failure_preserves_contents() {
    let dir = tempdir().expect("temp dir should be creatable");

    let mut table = table_of(&[("keep", "me")]);
    assert!(table.load_text(dir.path().join("missing.txt")).is_err());
    assert_eq!(table.get("keep"), Some("me"), "A failed load should not disturb the table.");

    fs::write(dir.path().join("bad.txt"), "not-a-count\n").expect("file should be writable");
    let result = table.load_text(dir.path().join("bad.txt"));
    assert!(result.is_err_and(|err| err.is_parse()));
    assert_eq!(table.get("keep"), Some("me"));
}
