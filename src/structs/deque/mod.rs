use std::fmt::{Debug, Formatter};

use crate::utils::*;

pub mod iter;

pub use iter::{IntoIter, Iter};

/// Slot index of a node inside the deque's arena.
type Link = Option<usize>;

#[derive(Clone)]
struct Node<T> {
    item: T,
    prev: Link,
    next: Link,
}

/// A double-ended queue backed by a doubly-linked list.
///
/// Nodes live in an arena owned by the deque and refer to each other by
/// slot index, so there are no reference cycles to break on removal.
/// Freed slots are recycled before the arena grows, and the arena is
/// compacted once vacant slots outnumber live nodes, so it never holds
/// more than about twice `len` slots.
///
/// Invariant: `first` has no `prev`, `last` has no `next`, and exactly
/// `len` nodes are reachable from `first`.
#[derive(Clone)]
pub struct Deque<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    first: Link,
    last: Link,
    len: usize,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            first: None,
            last: None,
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

    /// Inserts `item` at the front.
    pub fn add_first(&mut self, item: T) {
        let idx = self.alloc(Node {
            item,
            prev: None,
            next: self.first,
        });

        match self.first {
            Some(first) => self.node_mut(first).prev = Some(idx),
            None => self.last = Some(idx),
        }

        self.first = Some(idx);
        self.len += 1;
    }

    /// Appends `item` at the back.
    pub fn add_last(&mut self, item: T) {
        let idx = self.alloc(Node {
            item,
            prev: self.last,
            next: None,
        });

        match self.last {
            Some(last) => self.node_mut(last).next = Some(idx),
            None => self.first = Some(idx),
        }

        self.last = Some(idx);
        self.len += 1;
    }

    /// Like [`Deque::add_first`] for a value that may be absent.
    ///
    /// Fails with [`CollectionError::InvalidArgument`] on `None` and leaves
    /// the deque untouched.
    pub fn try_add_first(&mut self, item: Option<T>) -> Result<()> {
        let item = require_present!(item);
        self.add_first(item);
        Ok(())
    }

    /// Like [`Deque::add_last`] for a value that may be absent.
    pub fn try_add_last(&mut self, item: Option<T>) -> Result<()> {
        let item = require_present!(item);
        self.add_last(item);
        Ok(())
    }

    pub fn remove_first(&mut self) -> Result<T> {
        let idx = self.first.ok_or(CollectionError::EmptyContainer)?;
        let node = self.release(idx);

        self.first = node.next;
        match node.next {
            Some(next) => self.node_mut(next).prev = None,
            None => self.last = None,
        }

        self.compact_if_sparse();
        Ok(node.item)
    }

    pub fn remove_last(&mut self) -> Result<T> {
        let idx = self.last.ok_or(CollectionError::EmptyContainer)?;
        let node = self.release(idx);

        self.last = node.prev;
        match node.prev {
            Some(prev) => self.node_mut(prev).next = None,
            None => self.first = None,
        }

        self.compact_if_sparse();
        Ok(node.item)
    }

    pub fn peek_first(&self) -> Option<&T> {
        self.first.map(|idx| &self.node(idx).item)
    }

    pub fn peek_last(&self) -> Option<&T> {
        self.last.map(|idx| &self.node(idx).item)
    }

    /// Forward traversal from first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node<T> {
        match self.nodes[idx].take() {
            Some(node) => {
                self.free.push(idx);
                self.len -= 1;
                node
            }
            None => unreachable!("deque link to vacant slot {idx}"),
        }
    }

    /// Relinks the live nodes into a dense prefix once vacant slots
    /// outnumber them, so the arena tracks `len` rather than its peak.
    fn compact_if_sparse(&mut self) {
        if self.free.len() <= self.len {
            return;
        }

        trace!(
            "Compact deque arena: {} slots -> {} (len {})",
            self.nodes.len(),
            self.len,
            self.len
        );

        let mut nodes = Vec::with_capacity(self.len);
        let mut cursor = self.first;
        while let Some(idx) = cursor {
            let mut node = match self.nodes[idx].take() {
                Some(node) => node,
                None => unreachable!("deque link to vacant slot {idx}"),
            };
            cursor = node.next;

            let new_idx = nodes.len();
            node.prev = new_idx.checked_sub(1);
            node.next = cursor.map(|_| new_idx + 1);
            nodes.push(Some(node));
        }

        self.first = if nodes.is_empty() { None } else { Some(0) };
        self.last = nodes.len().checked_sub(1);
        self.nodes = nodes;
        self.free.clear();
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match &self.nodes[idx] {
            Some(node) => node,
            None => unreachable!("deque link to vacant slot {idx}"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.nodes[idx] {
            Some(node) => node,
            None => unreachable!("deque link to vacant slot {idx}"),
        }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
