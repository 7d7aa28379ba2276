use std::fmt::{self, Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::Iter;
use crate::persist::{self, PersistError};

pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub value: String,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

/// A doubly linked list of strings, traversable in both directions.
///
/// The backward links make every removal `O(1)` once the target node is known, including the
/// arena relocation that follows it.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of elements in the list.
///
/// | Method | Complexity |
/// |-|-|
/// | `front` / `back` / `len` | `O(1)` |
/// | `push_front` / `push_back` | `O(1)` |
/// | `pop_front` / `pop_back` | `O(1)` |
/// | `insert_after` / `insert_before` | `O(n)` |
/// | `remove` / `contains` | `O(n)` |
///
/// # Examples
/// ```
/// # use textbook_collections::collections::linked::DoublyList;
/// let mut list = DoublyList::new();
/// list.push_back("a".to_string());
/// list.push_back("b".to_string());
/// list.push_back("c".to_string());
///
/// assert_eq!(list.iter().rev().collect::<Vec<_>>(), ["c", "b", "a"]);
/// assert_eq!(list.pop_back(), Some("c".to_string()));
/// assert_eq!(list.back(), Some("b"));
/// ```
#[derive(Clone, Default)]
pub struct DoublyList {
    pub(crate) nodes: Vec<Node>,
    pub(crate) head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
}

impl DoublyList {
    /// Creates a new, empty list.
    pub const fn new() -> DoublyList {
        DoublyList {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first element, if there is one.
    pub fn front(&self) -> Option<&str> {
        self.head.map(|id| self.nodes[id].value.as_str())
    }

    /// Returns a reference to the last element, if there is one.
    pub fn back(&self) -> Option<&str> {
        self.tail.map(|id| self.nodes[id].value.as_str())
    }

    /// Adds `value` at the front of the list.
    pub fn push_front(&mut self, value: String) {
        let id = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Adds `value` at the back of the list.
    pub fn push_back(&mut self, value: String) {
        let id = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Inserts `value` directly after the first element equal to `target`. Returns false, adding
    /// nothing, if no element matches.
    pub fn insert_after(&mut self, target: &str, value: String) -> bool {
        match self.find(target) {
            Some(id) => {
                let next = self.nodes[id].next;
                let new = self.alloc(Node {
                    value,
                    prev: Some(id),
                    next,
                });
                self.nodes[id].next = Some(new);
                match next {
                    Some(next) => self.nodes[next].prev = Some(new),
                    None => self.tail = Some(new),
                }
                true
            },
            None => false,
        }
    }

    /// Inserts `value` directly before the first element equal to `target`. Returns false,
    /// adding nothing, if no element matches.
    pub fn insert_before(&mut self, target: &str, value: String) -> bool {
        match self.find(target) {
            Some(id) => {
                let prev = self.nodes[id].prev;
                let new = self.alloc(Node {
                    value,
                    prev,
                    next: Some(id),
                });
                self.nodes[id].prev = Some(new);
                match prev {
                    Some(prev) => self.nodes[prev].next = Some(new),
                    None => self.head = Some(new),
                }
                true
            },
            None => false,
        }
    }

    /// Removes and returns the first element, if there is one.
    pub fn pop_front(&mut self) -> Option<String> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    /// Removes and returns the last element, if there is one.
    pub fn pop_back(&mut self) -> Option<String> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Removes the first element equal to `value`. Returns false, removing nothing, if no
    /// element matches.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.find(value) {
            Some(id) => {
                self.unlink(id);
                true
            },
            None => false,
        }
    }

    /// Returns true if any element equals `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Removes every element. Idempotent.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates front-to-back. The iterator is double-ended, so `rev` walks back-to-front.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl DoublyList {
    fn find(&self, value: &str) -> Option<NodeId> {
        let mut current = self.head;
        while let Some(id) = current {
            if self.nodes[id].value == value {
                return Some(id);
            }
            current = self.nodes[id].next;
        }
        None
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Detaches the node at `id` from its neighbours and releases it, returning its value.
    fn unlink(&mut self, id: NodeId) -> String {
        let prev = self.nodes[id].prev;
        let next = self.nodes[id].next;

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }

        self.free(id)
    }

    /// Releases the node at `id`, which the caller has already unlinked. The arena fills the
    /// hole with its last entry; the relocated node's own links identify both referrers, so the
    /// patch is constant time.
    fn free(&mut self, id: NodeId) -> String {
        let moved = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(id);

        if id != moved {
            match self.nodes[id].prev {
                Some(prev) => self.nodes[prev].next = Some(id),
                None => self.head = Some(id),
            }
            match self.nodes[id].next {
                Some(next) => self.nodes[next].prev = Some(id),
                None => self.tail = Some(id),
            }
        }

        node.value
    }

    /// Asserts that forward and backward links mirror each other and that the head and tail
    /// handles agree with them.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut visited = 0;
        let mut prev: Option<NodeId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            assert_eq!(
                self.nodes[id].prev, prev,
                "Backward link should mirror the forward walk."
            );
            visited += 1;
            prev = current;
            current = self.nodes[id].next;
        }
        assert_eq!(self.tail, prev, "The tail handle should name the last node.");
        assert_eq!(visited, self.nodes.len(), "Every arena entry should be reachable.");
    }
}

impl DoublyList {
    /// Writes the list to `path` as text: one element per line, front-to-back, with no count
    /// line.
    pub fn save_text<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path)?);
        for value in self.iter() {
            persist::write_line(&mut writer, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the list's contents with the text file at `path`, reading one element per line
    /// until end of file. On failure the previous contents stay in place.
    pub fn load_text<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let reader = BufReader::new(File::open(path)?);

        let mut loaded = DoublyList::new();
        for line in reader.lines() {
            loaded.push_back(line?);
        }

        *self = loaded;
        Ok(())
    }

    /// Writes the list to `path` as binary: an `i32` count, then each element as a
    /// length-prefixed record, front-to-back.
    pub fn save_binary<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path)?);
        persist::write_count(&mut writer, self.len())?;
        for value in self.iter() {
            persist::write_record(&mut writer, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the list's contents with the binary file at `path`. On failure the previous
    /// contents stay in place.
    pub fn load_binary<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let mut reader = BufReader::new(File::open(path)?);

        let count = persist::read_count(&mut reader)?;
        let mut loaded = DoublyList::new();
        for _ in 0..count {
            loaded.push_back(persist::read_record(&mut reader)?);
        }

        *self = loaded;
        Ok(())
    }
}

impl FromIterator<String> for DoublyList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = DoublyList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl PartialEq for DoublyList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for DoublyList {}

impl Debug for DoublyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for DoublyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "()")?;
        for value in self.iter() {
            write!(f, " <-> ({value})")?;
        }
        write!(f, " <-> ()")
    }
}
