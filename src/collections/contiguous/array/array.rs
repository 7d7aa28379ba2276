use std::fmt::{self, Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::{Deref, Index, IndexMut};
use std::path::Path;

use crate::persist::{self, PersistError};
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A dynamic array of strings with positional insertion and removal.
///
/// Dereferences to `&[String]`, so all of the usual slice machinery (iteration, searching,
/// slicing) comes for free. Mutation goes through the methods below, which keep the element
/// count authoritative.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of elements and `i` the index in
/// question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` / `set` | `O(1)` |
/// | `push_back` / `pop_back` | `O(1)`* |
/// | `push_front` / `pop_front` | `O(n)` |
/// | `insert_at` / `remove_at` | `O(n-i)` |
/// | `find` | `O(n)` |
///
/// \* Amortized; a push that exhausts the capacity reallocates.
///
/// # Examples
/// ```
/// # use textbook_collections::collections::contiguous::Array;
/// let mut arr = Array::new();
/// arr.push_back("b".to_string());
/// arr.push_front("a".to_string());
/// arr.insert_at(2, "c".to_string());
/// assert_eq!(&*arr, ["a", "b", "c"]);
/// assert_eq!(arr.find("b"), Some(1));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Array {
    pub(crate) data: Vec<String>,
}

impl Array {
    /// Creates a new, empty Array.
    pub const fn new() -> Array {
        Array { data: Vec::new() }
    }

    /// Creates a new Array with room for `cap` elements before reallocating.
    pub fn with_cap(cap: usize) -> Array {
        Array {
            data: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the Array contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends `value` after the last element.
    pub fn push_back(&mut self, value: String) {
        self.data.push(value);
    }

    /// Inserts `value` before the first element, shifting everything else one slot right.
    pub fn push_front(&mut self, value: String) {
        self.data.insert(0, value);
    }

    /// Inserts `value` at `index`, shifting later elements right. `index` may equal
    /// [`len`](Array::len), in which case this appends.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert_at(&mut self, index: usize, value: String) {
        self.try_insert_at(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] instead of panicking when `index > len`.
    pub fn try_insert_at(&mut self, index: usize, value: String) -> Result<(), IndexOutOfBounds> {
        if index > self.len() {
            return Err(IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        self.data.insert(index, value);
        Ok(())
    }

    /// Removes and returns the last element, if there is one.
    pub fn pop_back(&mut self) -> Option<String> {
        self.data.pop()
    }

    /// Removes and returns the first element, shifting the rest left, if there is one.
    pub fn pop_front(&mut self) -> Option<String> {
        if self.data.is_empty() {
            None
        } else {
            Some(self.data.remove(0))
        }
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> String {
        self.try_remove_at(index).throw()
    }

    /// Removes the element at `index`, returning an [`Err`] instead of panicking when out of
    /// bounds.
    pub fn try_remove_at(&mut self, index: usize) -> Result<String, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.data.remove(index))
    }

    /// Returns the index of the first element equal to `value`, or [`None`] if no element
    /// matches.
    pub fn find(&self, value: &str) -> Option<usize> {
        self.data.iter().position(|element| element == value)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &str {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or an [`Err`] when out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&str, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self.data[index])
    }

    /// Replaces the element at `index` with `value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: String) -> String {
        self.try_set(index, value).throw()
    }

    /// Replaces the element at `index`, returning an [`Err`] instead of panicking when out of
    /// bounds.
    pub fn try_set(&mut self, index: usize, value: String) -> Result<String, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.data[index], value))
    }

    /// Removes every element. Idempotent.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len() {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }
}

impl Array {
    /// Writes the Array to `path` as text: a count line, then one element per line.
    pub fn save_text<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path)?);
        persist::write_count_line(&mut writer, self.len())?;
        for value in &self.data {
            persist::write_line(&mut writer, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the Array's contents with the text file at `path`. A file holding fewer lines
    /// than its count line promises simply yields fewer elements. On failure the previous
    /// contents stay in place.
    pub fn load_text<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let mut reader = BufReader::new(File::open(path)?);

        let count = persist::read_count_line(&mut reader)?;
        let mut loaded = Array::with_cap(count.min(persist::PREALLOC_LIMIT));
        for line in reader.lines().take(count) {
            loaded.push_back(line?);
        }

        *self = loaded;
        Ok(())
    }

    /// Writes the Array to `path` as binary: an `i32` count, then each element as a
    /// length-prefixed record.
    pub fn save_binary<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path)?);
        persist::write_count(&mut writer, self.len())?;
        for value in &self.data {
            persist::write_record(&mut writer, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the Array's contents with the binary file at `path`. On failure the previous
    /// contents stay in place.
    pub fn load_binary<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let mut reader = BufReader::new(File::open(path)?);

        let count = persist::read_count(&mut reader)?;
        let mut loaded = Array::with_cap(count.min(persist::PREALLOC_LIMIT));
        for _ in 0..count {
            loaded.push_back(persist::read_record(&mut reader)?);
        }

        *self = loaded;
        Ok(())
    }
}

impl Deref for Array {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl Index<usize> for Array {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.check_index(index).throw();
        &mut self.data[index]
    }
}

impl FromIterator<String> for Array {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Array {
            data: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for Array {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl Debug for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &self.data)
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
