use std::fmt::{self, Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::Iter;
use crate::persist::{self, PersistError};

pub(crate) const DEFAULT_SLOTS: usize = 10;

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub key: String,
    pub value: String,
}

/// A string-to-string hash table using separate chaining over a fixed number of slots.
///
/// Keys hash with a polynomial rolling function (factor 31) over their bytes. Colliding keys
/// share a slot and are chained in insertion order. The slot count is fixed at construction;
/// long chains degrade lookups but never trigger a rehash.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of entries in the table and `s` the
/// number of slots.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` / `get` / `remove` / `contains_key` | `O(n / s)` expected, `O(n)` worst case |
/// | `len` | `O(1)` |
///
/// # Examples
/// ```
/// # use textbook_collections::collections::hash::HashTable;
/// let mut table = HashTable::new();
/// table.insert("ada".to_string(), "lovelace".to_string());
/// table.insert("alan".to_string(), "turing".to_string());
///
/// assert_eq!(table.get("ada"), Some("lovelace"));
/// assert_eq!(
///     table.insert("ada".to_string(), "byron".to_string()),
///     Some("lovelace".to_string()),
///     "Inserting an existing key replaces its value."
/// );
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone)]
pub struct HashTable {
    pub(crate) buckets: Box<[Vec<Entry>]>,
    pub(crate) len: usize,
}

impl HashTable {
    /// Creates a table with the default number of slots.
    pub fn new() -> HashTable {
        HashTable::with_slots(DEFAULT_SLOTS)
    }

    /// Creates a table with `slots` slots, or one slot if `slots` is zero.
    pub fn with_slots(slots: usize) -> HashTable {
        HashTable {
            buckets: vec![Vec::new(); slots.max(1)].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the number of entries in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots the table was built with.
    pub fn slots(&self) -> usize {
        self.buckets.len()
    }

    /// Maps `key` to `value`. Returns the previous value if the key was already present.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        let index = self.slot_index(&key);
        let bucket = &mut self.buckets[index];
        match bucket.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.value, value)),
            None => {
                bucket.push(Entry { key, value });
                self.len += 1;
                None
            },
        }
    }

    /// Returns the value mapped to `key`, if there is one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.buckets[self.slot_index(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Removes the entry for `key`, returning its value if the key was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.slot_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|entry| entry.key == key)?;
        self.len -= 1;
        Some(bucket.remove(position).value)
    }

    /// Returns true if the table has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes every entry, keeping the slot count. Idempotent.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Iterates over `(key, value)` pairs, slot by slot and chain order within each slot.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl HashTable {
    fn slot_index(&self, key: &str) -> usize {
        let mut hash = 0usize;
        for byte in key.bytes() {
            hash = hash.wrapping_mul(31).wrapping_add(byte as usize) % self.buckets.len();
        }
        hash
    }
}

impl HashTable {
    /// Writes the table to `path` as text: a count line, then one `key value` pair per line.
    pub fn save_text<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path)?);
        persist::write_count_line(&mut writer, self.len)?;
        for (key, value) in self.iter() {
            persist::write_line(&mut writer, &format!("{key} {value}"))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the table's contents with the text file at `path`. Lines without both a key and
    /// a value are skipped. On failure the previous contents stay in place.
    pub fn load_text<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let mut reader = BufReader::new(File::open(path)?);

        let count = persist::read_count_line(&mut reader)?;
        let mut loaded = HashTable::with_slots(self.buckets.len());
        for line in reader.lines().take(count) {
            let line = line?;
            let mut parts = line.split_whitespace();
            if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
                loaded.insert(key.to_string(), value.to_string());
            }
        }

        *self = loaded;
        Ok(())
    }
}

impl Default for HashTable {
    fn default() -> Self {
        HashTable::new()
    }
}

impl FromIterator<(String, String)> for HashTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = HashTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

impl Extend<(String, String)> for HashTable {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl PartialEq for HashTable {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for HashTable {}

impl Debug for HashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .field("slots", &self.buckets.len())
            .finish()
    }
}

impl Display for HashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
