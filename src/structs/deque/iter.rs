use std::iter::FusedIterator;

use super::*;

/// Borrowed front-to-back traversal of a [`Deque`].
///
/// The deque stays borrowed for the iterator's lifetime, so it cannot be
/// mutated mid-traversal. A fresh call to [`Deque::iter`] starts over.
#[derive(Debug)]
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(deque: &'a Deque<T>) -> Self {
        Self {
            deque,
            front: deque.first,
            back: deque.last,
            remaining: deque.len,
        }
    }

    /// Advances the iterator, failing with
    /// [`CollectionError::EndOfSequence`] once it is exhausted.
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(CollectionError::EndOfSequence)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let deque: &'a Deque<T> = self.deque;
        let node = deque.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let deque: &'a Deque<T> = self.deque;
        let node = deque.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning traversal that drains a [`Deque`] from the front.
#[derive(Debug)]
pub struct IntoIter<T> {
    cache: Deque<T>,
}

impl<T> IntoIter<T> {
    pub fn try_next(&mut self) -> Result<T> {
        self.cache
            .remove_first()
            .map_err(|_| CollectionError::EndOfSequence)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cache.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cache.len(), Some(self.cache.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cache.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { cache: self }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_iterator_fails() {
        let deque: Deque<_> = (0..2).collect();
        let mut iter = deque.iter();

        assert_eq!(iter.try_next(), Ok(&0));
        assert_eq!(iter.try_next(), Ok(&1));
        assert_eq!(iter.try_next(), Err(CollectionError::EndOfSequence));
        assert_eq!(iter.try_next(), Err(CollectionError::EndOfSequence));
    }

    #[test]
    fn fresh_iterators_restart() {
        let deque: Deque<_> = (0..5).collect();
        let first = deque.iter().collect::<Vec<_>>();
        let second = deque.iter().collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(deque.iter().len(), 5);
    }

    #[test]
    fn meets_in_the_middle() {
        let deque: Deque<_> = (0..5).collect();
        let mut iter = deque.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn owning_iterator_drains() {
        let mut deque = Deque::new();
        deque.add_last("b");
        deque.add_first("a");
        deque.add_last("c");

        let mut iter = deque.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some("c"));
        assert_eq!(iter.try_next(), Ok("a"));
        assert_eq!(iter.try_next(), Ok("b"));
        assert_eq!(iter.try_next(), Err(CollectionError::EndOfSequence));
    }

    #[test]
    fn empty_iterator() {
        let deque: Deque<i32> = Deque::default();
        assert_eq!(deque.iter().try_next(), Err(CollectionError::EndOfSequence));
        assert_eq!((&deque).into_iter().count(), 0);
    }
}
