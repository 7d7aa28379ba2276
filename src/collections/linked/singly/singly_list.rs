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
    pub next: Option<NodeId>,
}

/// A singly linked list of strings with head and tail handles.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of elements in the list.
///
/// | Method | Complexity |
/// |-|-|
/// | `front` / `len` | `O(1)` |
/// | `push_front` / `push_back` | `O(1)` |
/// | `pop_front` | `O(1)`* |
/// | `pop_back` | `O(n)` |
/// | `insert_after` / `insert_before` | `O(n)` |
/// | `remove` / `contains` | `O(n)` |
///
/// \* Releasing a node may relocate one arena entry, which is `O(n)` in the worst case only
/// because the entry's single referrer has to be found.
///
/// # Examples
/// ```
/// # use textbook_collections::collections::linked::SinglyList;
/// let mut list = SinglyList::new();
/// list.push_back("b".to_string());
/// list.push_front("a".to_string());
/// list.insert_after("b", "c".to_string());
/// assert_eq!(list.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
///
/// assert!(list.remove("b"));
/// assert!(!list.contains("b"));
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct SinglyList {
    pub(crate) nodes: Vec<Node>,
    pub(crate) head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
}

impl SinglyList {
    /// Creates a new, empty list.
    pub const fn new() -> SinglyList {
        SinglyList {
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

    /// Adds `value` at the front of the list.
    pub fn push_front(&mut self, value: String) {
        let id = self.alloc(Node {
            value,
            next: self.head,
        });
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
    }

    /// Adds `value` at the back of the list.
    pub fn push_back(&mut self, value: String) {
        let id = self.alloc(Node { value, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Inserts `value` directly after the first element equal to `target`. Returns false, adding
    /// nothing, if no element matches.
    pub fn insert_after(&mut self, target: &str, value: String) -> bool {
        let mut current = self.head;
        while let Some(id) = current {
            if self.nodes[id].value == target {
                let next = self.nodes[id].next;
                let new = self.alloc(Node { value, next });
                self.nodes[id].next = Some(new);
                if self.tail == Some(id) {
                    self.tail = Some(new);
                }
                return true;
            }
            current = self.nodes[id].next;
        }
        false
    }

    /// Inserts `value` directly before the first element equal to `target`. Returns false,
    /// adding nothing, if no element matches.
    pub fn insert_before(&mut self, target: &str, value: String) -> bool {
        let mut prev: Option<NodeId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            if self.nodes[id].value == target {
                let new = self.alloc(Node {
                    value,
                    next: Some(id),
                });
                match prev {
                    Some(prev) => self.nodes[prev].next = Some(new),
                    None => self.head = Some(new),
                }
                return true;
            }
            prev = current;
            current = self.nodes[id].next;
        }
        false
    }

    /// Removes and returns the first element, if there is one.
    pub fn pop_front(&mut self) -> Option<String> {
        let head = self.head?;
        self.head = self.nodes[head].next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(self.free(head))
    }

    /// Removes and returns the last element, if there is one. Walks the list to find the
    /// next-to-last node, since nodes carry no backward link.
    pub fn pop_back(&mut self) -> Option<String> {
        let tail = self.tail?;

        let mut prev: Option<NodeId> = None;
        let mut current = self.head?;
        while current != tail {
            prev = Some(current);
            current = self.nodes[current].next?;
        }

        match prev {
            Some(prev) => {
                self.nodes[prev].next = None;
                self.tail = Some(prev);
            },
            None => {
                self.head = None;
                self.tail = None;
            },
        }
        Some(self.free(tail))
    }

    /// Removes the first element equal to `value`. Returns false, removing nothing, if no
    /// element matches.
    pub fn remove(&mut self, value: &str) -> bool {
        let mut prev: Option<NodeId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            if self.nodes[id].value == value {
                let next = self.nodes[id].next;
                match prev {
                    Some(prev) => self.nodes[prev].next = next,
                    None => self.head = next,
                }
                if self.tail == Some(id) {
                    self.tail = prev;
                }
                self.free(id);
                return true;
            }
            prev = current;
            current = self.nodes[id].next;
        }
        false
    }

    /// Returns true if any element equals `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|element| element == value)
    }

    /// Removes every element. Idempotent.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates front-to-back.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl SinglyList {
    fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Releases the node at `id`, which the caller has already unlinked. The arena fills the
    /// hole with its last entry, so the single link referencing the relocated node is patched to
    /// its new index.
    fn free(&mut self, id: NodeId) -> String {
        let moved = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(id);

        if id != moved {
            if self.head == Some(moved) {
                self.head = Some(id);
            }
            if self.tail == Some(moved) {
                self.tail = Some(id);
            }
            for entry in &mut self.nodes {
                if entry.next == Some(moved) {
                    entry.next = Some(id);
                    break;
                }
            }
        }

        node.value
    }
}

impl SinglyList {
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

        let mut loaded = SinglyList::new();
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
        let mut loaded = SinglyList::new();
        for _ in 0..count {
            loaded.push_back(persist::read_record(&mut reader)?);
        }

        *self = loaded;
        Ok(())
    }
}

impl FromIterator<String> for SinglyList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = SinglyList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl PartialEq for SinglyList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for SinglyList {}

impl Debug for SinglyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for SinglyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "({value}) -> ")?;
        }
        write!(f, "()")
    }
}
