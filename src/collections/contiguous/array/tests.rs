#![cfg(test)]

use tempfile::tempdir;

use super::*;

fn array_of(values: &[&str]) -> Array {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_push_and_pop_both_ends() {
    let mut arr = Array::new();
    arr.push_back("middle".to_string());
    arr.push_back("last".to_string());
    arr.push_front("first".to_string());

    assert_eq!(&*arr, ["first", "middle", "last"]);
    assert_eq!(arr.pop_front(), Some("first".to_string()));
    assert_eq!(arr.pop_back(), Some("last".to_string()));
    assert_eq!(arr.pop_back(), Some("middle".to_string()));
    assert_eq!(arr.pop_back(), None, "Popping an empty Array should yield None.");
    assert_eq!(arr.pop_front(), None, "Popping an empty Array should yield None.");
}

#[test]
fn test_insert_at() {
    let mut arr = array_of(&["a", "c"]);

    arr.insert_at(1, "b".to_string());
    assert_eq!(&*arr, ["a", "b", "c"], "Insertion should shift later elements right.");

    arr.insert_at(3, "d".to_string());
    assert_eq!(&*arr, ["a", "b", "c", "d"], "Inserting at len should append.");

    assert!(
        arr.try_insert_at(9, "x".to_string()).is_err(),
        "Inserting past len should be rejected."
    );
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_insert_at_out_of_bounds_panics() {
    let mut arr = array_of(&["a"]);
    arr.insert_at(5, "x".to_string());
}

#[test]
fn test_remove_at() {
    let mut arr = array_of(&["a", "b", "c"]);

    assert_eq!(arr.remove_at(1), "b");
    assert_eq!(&*arr, ["a", "c"], "Removal should shift later elements left.");

    assert!(arr.try_remove_at(2).is_err(), "Removing past the end should be rejected.");
}

#[test]
fn test_find() {
    let arr = array_of(&["x", "y", "x"]);

    assert_eq!(arr.find("x"), Some(0), "Find should report the first occurrence.");
    assert_eq!(arr.find("y"), Some(1));
    assert_eq!(arr.find("z"), None, "An absent value should yield None.");
}

#[test]
fn test_get_and_set() {
    let mut arr = array_of(&["old"]);

    assert_eq!(arr.get(0), "old");
    assert_eq!(&arr[0], "old", "Indexing should match get.");

    assert_eq!(arr.set(0, "new".to_string()), "old", "Set should return the old element.");
    assert_eq!(arr.get(0), "new");

    assert!(arr.try_get(1).is_err());
    assert!(arr.try_set(1, "x".to_string()).is_err());
}

#[test]
fn test_text_round_trip() {
    let dir = tempdir().expect("temp dir should be creatable");
    let path = dir.path().join("arr.txt");

    let original = array_of(&["alpha", "beta", "gamma"]);
    original.save_text(&path).expect("save should succeed");

    let mut loaded = Array::new();
    loaded.load_text(&path).expect("load should succeed");
    assert_eq!(loaded, original, "Text persistence should round-trip the elements in order.");
}

#[test]
fn test_binary_round_trip() {
    let dir = tempdir().expect("temp dir should be creatable");
    let path = dir.path().join("arr.bin");

    let original = array_of(&["alpha", "", "däta"]);
    original.save_binary(&path).expect("save should succeed");

    let mut loaded = Array::new();
    loaded.load_binary(&path).expect("load should succeed");
    assert_eq!(loaded, original, "Binary persistence should round-trip empty and UTF-8 values.");
}

#[test]
fn test_load_failure_preserves_contents() {
    let dir = tempdir().expect("temp dir should be creatable");

    let mut arr = array_of(&["keep", "me"]);
    assert!(arr.load_text(dir.path().join("missing.txt")).is_err());
    assert!(arr.load_binary(dir.path().join("missing.bin")).is_err());
    assert_eq!(&*arr, ["keep", "me"], "A failed load should not disturb the Array.");
}
