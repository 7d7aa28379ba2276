use std::fmt::{self, Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::slice;

use crate::persist::{self, PersistError};

/// A resizable LIFO stack of strings.
///
/// All operations are `O(1)` (pushes amortized). Iteration and persistence run bottom-to-top, so
/// loading a saved stack re-pushes elements in their original order.
///
/// # Examples
/// ```
/// # use textbook_collections::collections::contiguous::Stack;
/// let mut stack = Stack::new();
/// stack.push("first".to_string());
/// stack.push("second".to_string());
/// assert_eq!(stack.peek(), Some("second"));
/// assert_eq!(stack.pop(), Some("second".to_string()));
/// assert_eq!(stack.pop(), Some("first".to_string()));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stack {
    pub(crate) data: Vec<String>,
}

impl Stack {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack {
        Stack { data: Vec::new() }
    }

    /// Creates a new Stack with room for `cap` elements before reallocating.
    pub fn with_cap(cap: usize) -> Stack {
        Stack {
            data: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the Stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: String) {
        self.data.push(value);
    }

    /// Removes and returns the top element, or [`None`] if the Stack is empty.
    pub fn pop(&mut self) -> Option<String> {
        self.data.pop()
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&str> {
        self.data.last().map(String::as_str)
    }

    /// Removes every element. Idempotent.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates bottom-to-top.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.data.iter()
    }

    /// Writes the Stack to `path` as text: a count line, then one element per line,
    /// bottom-to-top.
    pub fn save_text<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path)?);
        persist::write_count_line(&mut writer, self.len())?;
        for value in &self.data {
            persist::write_line(&mut writer, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the Stack's contents with the text file at `path`. On failure the previous
    /// contents stay in place.
    pub fn load_text<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let mut reader = BufReader::new(File::open(path)?);

        let count = persist::read_count_line(&mut reader)?;
        let mut loaded = Stack::with_cap(count.min(persist::PREALLOC_LIMIT));
        for line in reader.lines().take(count) {
            loaded.push(line?);
        }

        *self = loaded;
        Ok(())
    }

    /// Writes the Stack to `path` as binary: an `i32` count, then each element as a
    /// length-prefixed record, bottom-to-top.
    pub fn save_binary<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path)?);
        persist::write_count(&mut writer, self.len())?;
        for value in &self.data {
            persist::write_record(&mut writer, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the Stack's contents with the binary file at `path`. On failure the previous
    /// contents stay in place.
    pub fn load_binary<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let mut reader = BufReader::new(File::open(path)?);

        let count = persist::read_count(&mut reader)?;
        let mut loaded = Stack::with_cap(count.min(persist::PREALLOC_LIMIT));
        for _ in 0..count {
            loaded.push(persist::read_record(&mut reader)?);
        }

        *self = loaded;
        Ok(())
    }
}

impl FromIterator<String> for Stack {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Stack {
            data: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for Stack {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a String;

    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for Stack {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &self.data)
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Stack {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
