use super::{NodeId, SinglyList};

/// A front-to-back iterator over a borrowed [`SinglyList`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a SinglyList,
    current: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = &self.list.nodes[id];
        self.current = node.next;
        Some(node.value.as_str())
    }
}

impl<'a> IntoIterator for &'a SinglyList {
    type Item = &'a str;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            list: self,
            current: self.head,
        }
    }
}
