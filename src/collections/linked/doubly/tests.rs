#![cfg(test)]

use tempfile::tempdir;

use super::*;

fn list_of(values: &[&str]) -> DoublyList {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_push_front_and_back() {
    let mut list = DoublyList::new();
    list.push_back("b".to_string());
    list.push_front("a".to_string());
    list.push_back("c".to_string());

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some("a"));
    assert_eq!(list.back(), Some("c"));
    assert_eq!(list.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    list.verify_links();
}

#[test]
fn test_pop_both_ends() {
    let mut list = list_of(&["a", "b", "c"]);

    assert_eq!(list.pop_front(), Some("a".to_string()));
    assert_eq!(list.pop_back(), Some("c".to_string()));
    list.verify_links();

    assert_eq!(list.pop_back(), Some("b".to_string()));
    assert_eq!(list.pop_front(), None, "Popping an empty list should yield None.");
    assert_eq!(list.pop_back(), None);
    assert!(list.is_empty());
}

#[test]
fn test_insert_after() {
    let mut list = list_of(&["a", "c"]);

    assert!(list.insert_after("a", "b".to_string()));
    assert!(list.insert_after("c", "d".to_string()), "Insertion after the tail should work.");
    assert_eq!(list.iter().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
    assert_eq!(list.back(), Some("d"), "The tail handle should follow the insertion.");
    list.verify_links();

    assert!(!list.insert_after("z", "x".to_string()));
    assert_eq!(list.len(), 4, "A failed insertion should add nothing.");
}

#[test]
fn test_insert_before() {
    let mut list = list_of(&["b", "d"]);

    assert!(list.insert_before("b", "a".to_string()), "Insertion before the head should work.");
    assert!(list.insert_before("d", "c".to_string()));
    assert_eq!(list.iter().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
    assert_eq!(list.front(), Some("a"));
    list.verify_links();

    assert!(!list.insert_before("z", "x".to_string()));
    assert_eq!(list.len(), 4);
}

#[test]
fn test_remove() {
    let mut list = list_of(&["a", "b", "c"]);

    assert!(list.remove("b"));
    list.verify_links();
    assert_eq!(list.iter().collect::<Vec<_>>(), ["a", "c"]);

    assert!(list.remove("a"), "Removing the head should relink it.");
    assert!(list.remove("c"), "Removing the tail should clear both handles.");
    assert!(list.is_empty());
    assert!(!list.remove("c"), "Removing from an empty list should fail.");
}

#[test]
fn test_remove_first_occurrence() {
    let mut list = list_of(&["a", "b", "a"]);

    assert!(list.remove("a"));
    assert_eq!(list.iter().collect::<Vec<_>>(), ["b", "a"]);
    list.verify_links();
}

#[test]
fn test_contains() {
    let list = list_of(&["a", "b"]);

    assert!(list.contains("a"));
    assert!(!list.contains("c"));
}

#[test]
fn test_clear() {
    let mut list = list_of(&["a", "b"]);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    list.clear();
    assert!(list.is_empty(), "Clearing an empty list is a no-op.");
}

#[test]
fn test_reverse_iteration() {
    let list = list_of(&["a", "b", "c"]);

    assert_eq!(list.iter().rev().collect::<Vec<_>>(), ["c", "b", "a"]);

    // Meeting in the middle must not yield any element twice.
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some("a"));
    assert_eq!(iter.next_back(), Some("c"));
    assert_eq!(iter.next(), Some("b"));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_interleaved_operations_keep_links_consistent() {
    // Exercises the arena relocation path from both directions.
    let mut list = list_of(&["a", "b", "c", "d", "e"]);

    assert!(list.remove("c"));
    list.verify_links();
    assert!(list.remove("e"));
    list.verify_links();
    list.push_back("f".to_string());
    assert!(list.remove("a"));
    list.verify_links();
    list.push_front("x".to_string());
    list.verify_links();

    assert_eq!(list.iter().collect::<Vec<_>>(), ["x", "b", "d", "f"]);
    assert_eq!(list.iter().rev().collect::<Vec<_>>(), ["f", "d", "b", "x"]);
}

#[test]
fn test_persistence_round_trips() {
    let dir = tempdir().expect("temp dir should be creatable");

    let original = list_of(&["one", "two", "three"]);

    let text = dir.path().join("list.txt");
    original.save_text(&text).expect("save should succeed");
    let mut loaded = DoublyList::new();
    loaded.load_text(&text).expect("load should succeed");
    assert_eq!(loaded, original, "Text persistence should preserve order.");
    loaded.verify_links();

    let binary = dir.path().join("list.bin");
    original.save_binary(&binary).expect("save should succeed");
    let mut loaded = DoublyList::new();
    loaded.load_binary(&binary).expect("load should succeed");
    assert_eq!(loaded, original, "Binary persistence should preserve order.");
    assert_eq!(loaded.back(), Some("three"));
}

#[test]
fn test_load_failure_preserves_contents() {
    let dir = tempdir().expect("temp dir should be creatable");

    let mut list = list_of(&["keep"]);
    assert!(list.load_text(dir.path().join("missing.txt")).is_err());
    assert_eq!(list.front(), Some("keep"), "A failed load should not disturb the list.");
}

#[test]
fn test_display() {
    let list = list_of(&["a", "b"]);
    assert_eq!(list.to_string(), "() <-> (a) <-> (b) <-> ()");
    assert_eq!(DoublyList::new().to_string(), "() <-> ()");
}
