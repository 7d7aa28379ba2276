use super::HashTable;

/// An iterator over the `(key, value)` pairs of a borrowed [`HashTable`], walking slots in
/// order and each chain front-to-back.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    table: &'a HashTable,
    slot: usize,
    entry: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot < self.table.buckets.len() {
            match self.table.buckets[self.slot].get(self.entry) {
                Some(entry) => {
                    self.entry += 1;
                    return Some((entry.key.as_str(), entry.value.as_str()));
                },
                None => {
                    self.slot += 1;
                    self.entry = 0;
                },
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.table.len))
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = (&'a str, &'a str);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            table: self,
            slot: 0,
            entry: 0,
        }
    }
}
