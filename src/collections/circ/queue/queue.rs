use std::fmt::{self, Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::Iter;
use crate::persist::{self, PersistError};

pub(crate) const DEFAULT_CAP: usize = 10;

pub(crate) const GROWTH_FACTOR: usize = 2;

/// A FIFO queue of strings over a circular buffer.
///
/// Elements occupy a contiguous run of slots that wraps around the end of the buffer; `front`
/// marks the oldest element and pushes land behind the newest. When every slot is taken, the
/// buffer doubles and the run is compacted back to slot zero.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of elements in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `len` | `O(1)` |
///
/// \* A push into a full buffer reallocates and moves all `n` elements.
///
/// # Examples
/// ```
/// # use textbook_collections::collections::circ::Queue;
/// let mut queue = Queue::new();
/// queue.push("first".to_string());
/// queue.push("second".to_string());
/// assert_eq!(queue.peek(), Some("first"));
/// assert_eq!(queue.pop(), Some("first".to_string()));
/// assert_eq!(queue.pop(), Some("second".to_string()));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone)]
pub struct Queue {
    pub(crate) buf: Box<[Option<String>]>,
    pub(crate) front: usize,
    pub(crate) len: usize,
}

impl Queue {
    /// Creates a new Queue with the default slot count.
    pub fn new() -> Queue {
        Queue::with_cap(DEFAULT_CAP)
    }

    /// Creates a new Queue with `cap` slots. At least one slot is always allocated.
    pub fn with_cap(cap: usize) -> Queue {
        Queue {
            buf: vec![None; cap.max(1)].into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current slot count.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Adds `value` behind the newest element, growing the buffer if every slot is taken.
    pub fn push(&mut self, value: String) {
        if self.len == self.cap() {
            self.grow();
        }

        let rear = (self.front + self.len) % self.cap();
        self.buf[rear] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the oldest element, or [`None`] if the Queue is empty.
    pub fn pop(&mut self) -> Option<String> {
        if self.len == 0 {
            return None;
        }

        let value = self.buf[self.front].take();
        self.front = (self.front + 1) % self.cap();
        self.len -= 1;
        value
    }

    /// Returns the oldest element without removing it.
    pub fn peek(&self) -> Option<&str> {
        if self.len == 0 {
            None
        } else {
            self.buf[self.front].as_deref()
        }
    }

    /// Removes every element, keeping the current slot count. Idempotent.
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.len = 0;
    }

    /// Iterates front-to-back.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Doubles the slot count, compacting the wrapped run back to slot zero.
    fn grow(&mut self) {
        let mut grown = vec![None; self.cap() * GROWTH_FACTOR].into_boxed_slice();

        for offset in 0..self.len {
            let index = (self.front + offset) % self.cap();
            grown[offset] = self.buf[index].take();
        }

        self.buf = grown;
        self.front = 0;
    }
}

impl Queue {
    /// Writes the Queue to `path` as text: a count line, then one element per line, oldest
    /// first.
    pub fn save_text<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path)?);
        persist::write_count_line(&mut writer, self.len())?;
        for value in self.iter() {
            persist::write_line(&mut writer, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the Queue's contents with the text file at `path`. On failure the previous
    /// contents stay in place.
    pub fn load_text<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let mut reader = BufReader::new(File::open(path)?);

        let count = persist::read_count_line(&mut reader)?;
        let mut loaded = Queue::with_cap(count.min(persist::PREALLOC_LIMIT));
        for line in reader.lines().take(count) {
            loaded.push(line?);
        }

        *self = loaded;
        Ok(())
    }

    /// Writes the Queue to `path` as binary: an `i32` count, then each element as a
    /// length-prefixed record, oldest first.
    pub fn save_binary<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path)?);
        persist::write_count(&mut writer, self.len())?;
        for value in self.iter() {
            persist::write_record(&mut writer, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the Queue's contents with the binary file at `path`. On failure the previous
    /// contents stay in place.
    pub fn load_binary<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let mut reader = BufReader::new(File::open(path)?);

        let count = persist::read_count(&mut reader)?;
        let mut loaded = Queue::with_cap(count.min(persist::PREALLOC_LIMIT));
        for _ in 0..count {
            loaded.push(persist::read_record(&mut reader)?);
        }

        *self = loaded;
        Ok(())
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<String> for Queue {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut queue = Queue::new();
        for value in iter {
            queue.push(value);
        }
        queue
    }
}

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Queue {}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
