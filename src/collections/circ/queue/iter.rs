use super::Queue;

/// A front-to-back iterator over a borrowed [`Queue`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    queue: &'a Queue,
    offset: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len() {
            return None;
        }

        let index = (self.queue.front + self.offset) % self.queue.cap();
        self.offset += 1;
        self.queue.buf[index].as_deref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len() - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            queue: self,
            offset: 0,
        }
    }
}
