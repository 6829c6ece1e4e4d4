use std::iter::FusedIterator;

use rand::seq::SliceRandom;

use super::*;

/// Borrowed traversal of a [`RandomizedQueue`] in a random order.
///
/// The order is fixed when the iterator is built: the occupied index range
/// is shuffled once and then walked. Every iterator draws its own shuffle.
#[derive(Debug)]
pub struct Iter<'a, T> {
    queue: &'a RandomizedQueue<T>,
    order: std::vec::IntoIter<usize>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new<R: Rng + ?Sized>(queue: &'a RandomizedQueue<T>, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..queue.len).collect();
        order.shuffle(rng);

        Self {
            queue,
            order: order.into_iter(),
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
        let queue: &'a RandomizedQueue<T> = self.queue;
        self.order.next().map(|index| queue.slot(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning traversal that hands out every element in a random order.
#[derive(Debug)]
pub struct IntoIter<T> {
    cache: Vec<T>,
}

impl<T> IntoIter<T> {
    fn new<R: Rng + ?Sized>(mut cache: Vec<T>, rng: &mut R) -> Self {
        cache.shuffle(rng);
        Self { cache }
    }

    pub fn try_next(&mut self) -> Result<T> {
        self.next().ok_or(CollectionError::EndOfSequence)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cache.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cache.len(), Some(self.cache.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> RandomizedQueue<T> {
    /// Consumes the queue, yielding its elements in an order drawn from `rng`.
    pub fn into_iter_with<R: Rng + ?Sized>(mut self, rng: &mut R) -> IntoIter<T> {
        IntoIter::new(self.take_items(), rng)
    }
}

impl<T> IntoIterator for RandomizedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_iter_with(&mut rand::thread_rng())
    }
}

impl<'a, T> IntoIterator for &'a RandomizedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = RandomizedQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for RandomizedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}
