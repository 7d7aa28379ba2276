use std::collections::VecDeque;
use std::fmt::{self, Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::{Keys, Node, NodeId};
use crate::persist::{self, PersistError};

/// A binary tree that always keeps the *complete tree* shape: every level full except possibly
/// the last, which fills left-to-right with no gaps. Reading the nodes in breadth-first order
/// therefore never skips a position, the same shape as a binary heap's backing array.
///
/// This is not a search tree. Keys are plain `i32` payloads with no ordering significance,
/// duplicates are permitted, and lookup is a linear search. What the tree maintains instead is
/// its shape: insertion fills the first free child slot in level order, and removal relocates the
/// key of the last level-order node into the vacated position so that no gap ever appears.
///
/// Nodes are stored in an arena table and reference their children by index, so the breadth-first
/// rewiring done by [`remove`](CompleteBinaryTree::remove) is plain index bookkeeping.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of nodes in the tree.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `get` | `O(n)` |
/// | traversals | `O(n)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// # Examples
/// ```
/// # use textbook_collections::collections::tree::CompleteBinaryTree;
/// let mut tree = CompleteBinaryTree::new();
/// for key in 1..=7 {
///     tree.insert(key);
/// }
/// assert_eq!(tree.level_order().to_string(), "1 2 3 4 5 6 7");
/// assert_eq!(tree.in_order().to_string(), "4 2 5 1 6 3 7");
///
/// tree.remove(2);
/// assert_eq!(tree.len(), 6);
/// assert!(!tree.contains(2));
/// ```
#[derive(Clone, Default)]
pub struct CompleteBinaryTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: Option<NodeId>,
}

impl CompleteBinaryTree {
    /// Creates a new, empty tree. No memory is allocated until the first insertion.
    pub const fn new() -> CompleteBinaryTree {
        CompleteBinaryTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no nodes.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds a new leaf holding `key` at the first free position in level order: the first node
    /// found by a breadth-first scan that lacks a left child gets a new left child, failing that
    /// the first node lacking a right child gets a new right child. An empty tree gains `key` as
    /// its root.
    ///
    /// Duplicate keys are permitted and stored as distinct nodes. Insertion always succeeds.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::tree::CompleteBinaryTree;
    /// let mut tree = CompleteBinaryTree::new();
    /// tree.insert(10);
    /// tree.insert(20);
    /// tree.insert(10);
    /// assert_eq!(*tree.level_order(), [10, 20, 10]);
    /// ```
    pub fn insert(&mut self, key: i32) {
        let Some(root) = self.root else {
            let id = self.alloc(Node::leaf(key));
            self.root = Some(id);
            return;
        };

        // The walk is queue-based rather than recursive so that the new leaf lands in strict
        // level order regardless of depth.
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            if self.nodes[current].left.is_none() {
                let id = self.alloc(Node::leaf(key));
                self.nodes[current].left = Some(id);
                return;
            } else if self.nodes[current].right.is_none() {
                let id = self.alloc(Node::leaf(key));
                self.nodes[current].right = Some(id);
                return;
            } else {
                queue.extend(self.nodes[current].left);
                queue.extend(self.nodes[current].right);
            }
        }
    }

    /// Removes the first node in level order whose key equals `key`, preserving the complete-tree
    /// shape. Does nothing if no node matches.
    ///
    /// A single breadth-first pass records the matching node along with the last node visited and
    /// that node's parent. The last level-order node is by construction the deepest, rightmost
    /// node, so its key can overwrite the matched node's key and its own slot can be detached
    /// without ever opening a gap in the layout. When the matched node *is* the last node, the
    /// overwrite is a self-copy and the detach removes that same node.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::tree::CompleteBinaryTree;
    /// let mut tree: CompleteBinaryTree = [10, 20, 30, 40].into_iter().collect();
    /// tree.remove(20);
    /// assert_eq!(*tree.level_order(), [10, 40, 30]);
    ///
    /// tree.remove(99);
    /// assert_eq!(tree.len(), 3, "Removing an absent key changes nothing.");
    /// ```
    pub fn remove(&mut self, key: i32) {
        let Some(root) = self.root else { return };

        if self.nodes[root].key == key && self.nodes[root].is_leaf() {
            self.clear();
            return;
        }

        let mut matched: Option<NodeId> = None;
        let mut last = root;
        let mut parent_of_last: Option<NodeId> = None;

        let mut queue = VecDeque::from([(root, None)]);
        while let Some((current, parent)) = queue.pop_front() {
            if matched.is_none() && self.nodes[current].key == key {
                matched = Some(current);
            }

            last = current;
            parent_of_last = parent;

            if let Some(left) = self.nodes[current].left {
                queue.push_back((left, Some(current)));
            }
            if let Some(right) = self.nodes[current].right {
                queue.push_back((right, Some(current)));
            }
        }

        let Some(matched) = matched else { return };

        let last_key = self.nodes[last].key;
        self.nodes[matched].key = last_key;

        if let Some(parent) = parent_of_last {
            if self.nodes[parent].right == Some(last) {
                self.nodes[parent].right = None;
            } else {
                self.nodes[parent].left = None;
            }
        }

        self.free(last);
    }

    /// Returns true if any node's key equals `key`, searching depth-first with a pre-order
    /// short-circuit: the current node is checked before either subtree.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::tree::CompleteBinaryTree;
    /// let tree: CompleteBinaryTree = (1..=5).collect();
    /// assert!(tree.contains(4));
    /// assert!(!tree.contains(9));
    /// ```
    pub fn contains(&self, key: i32) -> bool {
        self.search(self.root, key)
    }

    /// Returns the key restated in its textual form if it is present, or [`None`] if it isn't.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::tree::CompleteBinaryTree;
    /// let tree: CompleteBinaryTree = (1..=5).collect();
    /// assert_eq!(tree.get(4), Some("4".to_string()));
    /// assert_eq!(tree.get(9), None);
    /// ```
    pub fn get(&self, key: i32) -> Option<String> {
        self.contains(key).then(|| key.to_string())
    }

    /// Collects keys in pre-order: each node before its left subtree, then its right subtree.
    pub fn pre_order(&self) -> Keys {
        let mut result = Vec::with_capacity(self.len());
        self.collect_pre(self.root, &mut result);
        Keys(result)
    }

    /// Collects keys in in-order: each node's left subtree, then the node, then its right
    /// subtree.
    pub fn in_order(&self) -> Keys {
        let mut result = Vec::with_capacity(self.len());
        self.collect_in(self.root, &mut result);
        Keys(result)
    }

    /// Collects keys in post-order: each node's subtrees before the node itself.
    pub fn post_order(&self) -> Keys {
        let mut result = Vec::with_capacity(self.len());
        self.collect_post(self.root, &mut result);
        Keys(result)
    }

    /// Collects keys in breadth-first order: level by level, left to right. For a complete tree
    /// this is also the serialization order.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::tree::CompleteBinaryTree;
    /// let tree: CompleteBinaryTree = (1..=15).collect();
    /// assert_eq!(tree.level_order().to_string(), "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15");
    /// ```
    pub fn level_order(&self) -> Keys {
        let mut result = Vec::with_capacity(self.len());

        let mut queue = VecDeque::new();
        queue.extend(self.root);
        while let Some(current) = queue.pop_front() {
            result.push(self.nodes[current].key);
            queue.extend(self.nodes[current].left);
            queue.extend(self.nodes[current].right);
        }

        Keys(result)
    }

    /// Drops every node, leaving the tree empty. Idempotent.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Serializes the tree to `path` as a little-endian `i32` node count followed by that many
    /// little-endian `i32` keys in level order. An empty tree writes a valid 4-byte file.
    ///
    /// Fails with [`PersistError::Io`] if the file cannot be created or a write comes up short.
    pub fn save_binary<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let keys = self.level_order();

        let mut writer = BufWriter::new(File::create(path)?);
        persist::write_count(&mut writer, keys.len())?;
        for &key in &*keys {
            persist::write_i32(&mut writer, key)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replaces the tree's contents with the file at `path`, written by
    /// [`save_binary`](CompleteBinaryTree::save_binary).
    ///
    /// The key sequence is interpreted as an implicit array-backed complete tree: the node at
    /// position `i` has children at `2i + 1` and `2i + 2`. Because a breadth-first walk of a
    /// complete tree visits nodes in exactly that order, this inverts the serialization.
    ///
    /// Fails with [`PersistError`] if the file cannot be opened, the count is negative, or the
    /// data is truncated. On failure the tree keeps its previous contents; the replacement is
    /// built aside and swapped in only once the whole file has been read.
    pub fn load_binary<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let mut reader = BufReader::new(File::open(path)?);

        let count = persist::read_count(&mut reader)?;
        let mut keys = Vec::with_capacity(count.min(persist::PREALLOC_LIMIT));
        for _ in 0..count {
            keys.push(persist::read_i32(&mut reader)?);
        }

        *self = CompleteBinaryTree::from_level_order(keys);
        Ok(())
    }

    /// Builds a tree whose level-order key sequence is exactly `keys`, linking position `i` to
    /// children at `2i + 1` and `2i + 2`. Equivalent to inserting the keys one by one, in `O(n)`.
    pub fn from_level_order<I: IntoIterator<Item = i32>>(keys: I) -> CompleteBinaryTree {
        let keys: Vec<i32> = keys.into_iter().collect();
        let len = keys.len();

        let nodes = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| Node {
                key,
                left: (2 * index + 1 < len).then_some(2 * index + 1),
                right: (2 * index + 2 < len).then_some(2 * index + 2),
            })
            .collect();

        CompleteBinaryTree {
            nodes,
            root: (len > 0).then_some(0),
        }
    }
}

impl CompleteBinaryTree {
    fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Releases the node at `id`, which the caller has already detached from its parent. The
    /// arena fills the hole with its last entry, so whichever link referenced the relocated node
    /// is patched to its new index.
    fn free(&mut self, id: NodeId) {
        let moved = self.nodes.len() - 1;
        self.nodes.swap_remove(id);

        if id == moved {
            return;
        }

        if self.root == Some(moved) {
            self.root = Some(id);
            return;
        }
        for node in &mut self.nodes {
            if node.left == Some(moved) {
                node.left = Some(id);
                return;
            }
            if node.right == Some(moved) {
                node.right = Some(id);
                return;
            }
        }
    }

    fn search(&self, node: Option<NodeId>, key: i32) -> bool {
        match node {
            None => false,
            Some(id) => {
                self.nodes[id].key == key
                    || self.search(self.nodes[id].left, key)
                    || self.search(self.nodes[id].right, key)
            },
        }
    }

    fn collect_pre(&self, node: Option<NodeId>, result: &mut Vec<i32>) {
        let Some(id) = node else { return };
        result.push(self.nodes[id].key);
        self.collect_pre(self.nodes[id].left, result);
        self.collect_pre(self.nodes[id].right, result);
    }

    fn collect_in(&self, node: Option<NodeId>, result: &mut Vec<i32>) {
        let Some(id) = node else { return };
        self.collect_in(self.nodes[id].left, result);
        result.push(self.nodes[id].key);
        self.collect_in(self.nodes[id].right, result);
    }

    fn collect_post(&self, node: Option<NodeId>, result: &mut Vec<i32>) {
        let Some(id) = node else { return };
        self.collect_post(self.nodes[id].left, result);
        self.collect_post(self.nodes[id].right, result);
        result.push(self.nodes[id].key);
    }

    /// Asserts that the populated nodes form a complete binary tree: a breadth-first walk visits
    /// every arena entry, and the walk order matches the implicit-array layout.
    #[cfg(test)]
    pub(crate) fn verify_complete(&self) {
        let mut visited = Vec::new();

        let mut queue = VecDeque::new();
        queue.extend(self.root);
        while let Some(current) = queue.pop_front() {
            visited.push(current);
            queue.extend(self.nodes[current].left);
            queue.extend(self.nodes[current].right);
        }

        assert_eq!(visited.len(), self.nodes.len());

        for (position, &id) in visited.iter().enumerate() {
            let left = 2 * position + 1;
            let right = 2 * position + 2;
            assert_eq!(self.nodes[id].left, visited.get(left).copied());
            assert_eq!(self.nodes[id].right, visited.get(right).copied());
        }
    }
}

impl FromIterator<i32> for CompleteBinaryTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        CompleteBinaryTree::from_level_order(iter)
    }
}

impl Extend<i32> for CompleteBinaryTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl PartialEq for CompleteBinaryTree {
    fn eq(&self, other: &Self) -> bool {
        self.level_order() == other.level_order()
    }
}

impl Eq for CompleteBinaryTree {}

impl Debug for CompleteBinaryTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompleteBinaryTree")
            .field("level_order", &&*self.level_order())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for CompleteBinaryTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.level_order(), f)
    }
}
