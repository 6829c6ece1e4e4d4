use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::utils::*;

pub mod iter;

pub use iter::{IntoIter, Iter};

pub const INIT_CAPACITY: usize = 1;
pub const GROW_FACTOR: usize = 2;
/// Shrink once occupancy falls to `capacity / SHRINK_THRESHOLD` or below.
pub const SHRINK_THRESHOLD: usize = 4;
pub const SHRINK_FACTOR: usize = 2;

/// A queue whose removals pick a uniformly random element.
///
/// Elements occupy slots `[0, len)` of a resizing buffer in no meaningful
/// order; slots past `len` are always empty. The buffer doubles when full
/// and halves when occupancy drops to a quarter, so utilization stays
/// between 25% and 100% once the queue is non-empty.
pub struct RandomizedQueue<T> {
    buffer: Vec<Option<T>>,
    len: usize,
}

impl<T> RandomizedQueue<T> {
    pub fn new() -> Self {
        Self {
            buffer: empty_slots(INIT_CAPACITY),
            len: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Length of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn enqueue(&mut self, item: T) {
        if self.len + 1 > self.capacity() {
            self.resize(self.capacity() * GROW_FACTOR);
        }

        self.buffer[self.len] = Some(item);
        self.len += 1;
    }

    /// Like [`RandomizedQueue::enqueue`] for a value that may be absent.
    ///
    /// Fails with [`CollectionError::InvalidArgument`] on `None` and leaves
    /// the queue untouched.
    pub fn try_enqueue(&mut self, item: Option<T>) -> Result<()> {
        let item = require_present!(item);
        self.enqueue(item);
        Ok(())
    }

    /// Removes and returns a uniformly random element.
    pub fn dequeue(&mut self) -> Result<T> {
        self.dequeue_with(&mut rand::thread_rng())
    }

    pub fn dequeue_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<T> {
        if self.is_empty() {
            return Err(CollectionError::EmptyContainer);
        }

        let index = rng.gen_range(0..self.len);
        let last = self.len - 1;

        // swap-remove keeps the occupied range contiguous
        self.buffer.swap(index, last);
        let item = self.buffer[last].take();
        self.len = last;

        if self.len > 0 && self.len <= self.capacity() / SHRINK_THRESHOLD {
            self.resize(self.capacity() / SHRINK_FACTOR);
        }

        match item {
            Some(item) => Ok(item),
            None => unreachable!("occupied slot {index} was empty"),
        }
    }

    /// Returns a uniformly random element without removing it.
    pub fn sample(&self) -> Result<&T> {
        self.sample_with(&mut rand::thread_rng())
    }

    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T> {
        if self.is_empty() {
            return Err(CollectionError::EmptyContainer);
        }

        Ok(self.slot(rng.gen_range(0..self.len)))
    }

    /// Iterates every element in a freshly shuffled order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_with(&mut rand::thread_rng())
    }

    /// Like [`RandomizedQueue::iter`], drawing the shuffle from `rng`.
    pub fn iter_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Iter<'_, T> {
        Iter::new(self, rng)
    }

    fn slot(&self, index: usize) -> &T {
        match &self.buffer[index] {
            Some(item) => item,
            None => unreachable!("occupied slot {index} was empty"),
        }
    }

    fn resize(&mut self, capacity: usize) {
        let capacity = capacity.max(INIT_CAPACITY);
        trace!(
            "Resize randomized queue: {} -> {} (len {})",
            self.capacity(),
            capacity,
            self.len
        );

        let mut buffer = Vec::with_capacity(capacity);
        buffer.extend(self.buffer.drain(..self.len));
        buffer.resize_with(capacity, || None);
        self.buffer = buffer;
    }

    /// Moves the live elements out, leaving an empty queue behind.
    fn take_items(&mut self) -> Vec<T> {
        let items: Vec<T> = self.buffer.drain(..self.len).flatten().collect();
        self.buffer = empty_slots(INIT_CAPACITY);
        self.len = 0;
        items
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for RandomizedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomizedQueue")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn assert_band<T>(queue: &RandomizedQueue<T>) {
        if !queue.is_empty() {
            assert!(queue.len() <= queue.capacity());
            assert!(
                queue.len() * SHRINK_THRESHOLD > queue.capacity(),
                "len {} capacity {}",
                queue.len(),
                queue.capacity()
            );
        }
        assert!(queue.buffer[queue.len()..].iter().all(Option::is_none));
    }

    #[test]
    fn starts_with_single_slot() {
        let queue: RandomizedQueue<u8> = RandomizedQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 1);
    }

    #[test]
    fn grows_by_doubling() {
        let mut queue = RandomizedQueue::new();
        let mut capacities = Vec::new();
        for i in 0..9 {
            queue.enqueue(i);
            capacities.push(queue.capacity());
        }
        assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn stays_in_utilization_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut queue = RandomizedQueue::new();

        for i in 0..1000 {
            queue.enqueue(i);
            assert_band(&queue);
        }
        assert_eq!(queue.capacity(), 1024);

        while !queue.is_empty() {
            queue.dequeue_with(&mut rng).unwrap();
            assert_band(&queue);
        }
        assert!(queue.capacity() <= 2);
    }

    #[test]
    fn shrink_boundaries() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut queue: RandomizedQueue<_> = (0..5).collect();
        assert_eq!(queue.capacity(), 8);

        // 3 of 8 is above a quarter
        queue.dequeue_with(&mut rng).unwrap();
        queue.dequeue_with(&mut rng).unwrap();
        assert_eq!((queue.len(), queue.capacity()), (3, 8));

        // 2 of 8 hits a quarter
        queue.dequeue_with(&mut rng).unwrap();
        assert_eq!((queue.len(), queue.capacity()), (2, 4));

        queue.dequeue_with(&mut rng).unwrap();
        assert_eq!((queue.len(), queue.capacity()), (1, 2));

        // empty never shrinks further
        queue.dequeue_with(&mut rng).unwrap();
        assert_eq!((queue.len(), queue.capacity()), (0, 2));
    }

    #[test]
    fn shrink_halves_capacity() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut queue: RandomizedQueue<_> = (0..17).collect();
        assert_eq!(queue.capacity(), 32);

        while queue.len() > 8 {
            queue.dequeue_with(&mut rng).unwrap();
        }
        assert_eq!(queue.capacity(), 32 / SHRINK_FACTOR);
    }

    #[test]
    fn capacity_one_is_stable() {
        let mut queue = RandomizedQueue::new();
        for _ in 0..10 {
            queue.enqueue('x');
            assert_eq!(queue.capacity(), 1);
            assert_eq!(queue.dequeue(), Ok('x'));
            assert_eq!(queue.capacity(), 1);
        }
    }

    #[test]
    fn repeated_cycles_do_not_accumulate() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut queue = RandomizedQueue::new();
        for round in 0..50 {
            for i in 0..(round % 7 + 1) * 100 {
                queue.enqueue(i);
            }
            while queue.dequeue_with(&mut rng).is_ok() {}
            assert!(queue.capacity() <= 2);
        }
    }

    #[test]
    fn empty_operations_fail() {
        let mut queue: RandomizedQueue<String> = RandomizedQueue::new();
        assert_eq!(queue.dequeue(), Err(CollectionError::EmptyContainer));
        assert_eq!(queue.sample(), Err(CollectionError::EmptyContainer));
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 1);
    }

    #[test]
    fn absent_item_is_rejected() {
        let mut queue = RandomizedQueue::new();
        assert_eq!(
            queue.try_enqueue(None::<u32>),
            Err(CollectionError::InvalidArgument)
        );
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 1);

        queue.try_enqueue(Some(3)).unwrap();
        assert_eq!(queue.sample(), Ok(&3));
    }

    #[test]
    fn sample_does_not_remove() {
        let mut rng = StdRng::seed_from_u64(3);
        let queue: RandomizedQueue<_> = (0..10).collect();
        for _ in 0..100 {
            let item = queue.sample_with(&mut rng).unwrap();
            assert!((0..10).contains(item));
        }
        assert_eq!(queue.len(), 10);
    }

    #[test]
    fn dequeue_returns_every_element_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut queue: RandomizedQueue<_> = (0..200).collect();

        let mut out = Vec::new();
        while let Ok(item) = queue.dequeue_with(&mut rng) {
            out.push(item);
        }

        assert_ne!(out, (0..200).collect::<Vec<_>>());
        out.sort_unstable();
        assert_eq!(out, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn debug_shows_shape() {
        let queue: RandomizedQueue<_> = (0..3).collect();
        assert_eq!(
            format!("{:?}", queue),
            "RandomizedQueue { len: 3, capacity: 4 }"
        );
    }
}
