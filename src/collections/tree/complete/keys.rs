use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::vec;

/// The keys collected by one traversal of a [`CompleteBinaryTree`], in visitation order.
///
/// Dereferences to a key slice for inspection and [`Display`]s as space-separated decimal
/// integers, with an empty traversal rendering as the empty string.
///
/// [`CompleteBinaryTree`]: super::CompleteBinaryTree
///
/// # Examples
/// ```
/// # use textbook_collections::collections::tree::CompleteBinaryTree;
/// let tree: CompleteBinaryTree = (1..=3).collect();
/// let keys = tree.level_order();
/// assert_eq!(*keys, [1, 2, 3]);
/// assert_eq!(keys.to_string(), "1 2 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keys(pub(crate) Vec<i32>);

impl Keys {
    /// Unwraps the traversal into its backing [`Vec`].
    pub fn into_vec(self) -> Vec<i32> {
        self.0
    }
}

impl Deref for Keys {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Keys {
    type Item = i32;

    type IntoIter = vec::IntoIter<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Keys {
    type Item = &'a i32;

    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Keys {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, key) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
