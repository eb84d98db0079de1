use alloc::boxed::Box;
use core::fmt;

use log::debug;

use super::iter::Iter;
use super::node::{Link, Node};
use crate::{Container, InsertError, LookupError, LookupResult, Value};

/// A singly linked list of integers addressed by position.
///
/// There is no tail pointer. Every positional operation walks from the head,
/// so `append`, `remove_last` and `get(len - 1)` all cost O(len).
pub struct LinkedList {
    head: Link,
    len: usize,
}

impl LinkedList {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub(crate) fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// Get the number of values in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Get an iterator over the values, head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Walk `index` links from the head and return the link found there.
    ///
    /// `link_at_mut(0)` is the head itself and `link_at_mut(len)` is the empty
    /// `next` of the last node.
    fn link_at_mut(&mut self, index: usize) -> Option<&mut Link> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = match cursor {
                Some(node) => &mut node.next,
                None => return None,
            };
        }
        Some(cursor)
    }

    /// Link an allocated node in at `index`. The node is fully built before
    /// this is called, so the list is either untouched or consistent.
    fn splice(&mut self, index: usize, mut node: Box<Node>) -> Result<(), InsertError> {
        let len = self.len;
        let slot = self
            .link_at_mut(index)
            .ok_or(InsertError::IndexOutOfBounds { index, len })?;
        node.next = slot.take();
        *slot = Some(node);
        self.len += 1;
        Ok(())
    }

    fn allocate(value: Value) -> Result<Box<Node>, InsertError> {
        Node::try_boxed(value).inspect_err(|_| debug!("could not allocate node for {value}"))
    }

    /// Append a value after the current last node.
    ///
    /// Walks the whole chain to find the tail.
    pub fn append(&mut self, value: Value) -> Result<(), InsertError> {
        let node = Self::allocate(value)?;
        self.splice(self.len, node)
    }

    /// Insert a value in front of the current head.
    pub fn insert_at_head(&mut self, value: Value) -> Result<(), InsertError> {
        let mut node = Self::allocate(value)?;
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Insert a value so that it ends up at position `index`.
    ///
    /// Accepts `0..=len`; inserting at `len` appends.
    pub fn insert_at(&mut self, value: Value, index: usize) -> Result<(), InsertError> {
        if index == 0 {
            return self.insert_at_head(value);
        }

        if index > self.len {
            debug!("cannot insert at index {index}, list length is {}", self.len);
            return Err(InsertError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let node = Self::allocate(value)?;
        self.splice(index, node)
    }

    /// Remove the value at `index` and return it.
    pub fn remove_at(&mut self, index: usize) -> LookupResult {
        let len = self.len;
        if index >= len {
            debug!("cannot remove index {index}, list length is {len}");
            return Err(LookupError::IndexOutOfBounds { index, len });
        }

        let slot = self
            .link_at_mut(index)
            .ok_or(LookupError::IndexOutOfBounds { index, len })?;
        let mut node = slot
            .take()
            .ok_or(LookupError::IndexOutOfBounds { index, len })?;
        *slot = node.next.take();
        self.len -= 1;
        Ok(node.value)
    }

    /// Remove the last value and return it.
    ///
    /// Same as `remove_at(len - 1)`. On an empty list this is a removal at
    /// index 0, which reports [`LookupError::IndexOutOfBounds`].
    pub fn remove_last(&mut self) -> LookupResult {
        self.remove_at(self.len.saturating_sub(1))
    }

    /// Read the value at `index` without modifying the list.
    ///
    /// An empty list reports [`LookupError::EmptyContainer`] whatever the index.
    pub fn get(&self, index: usize) -> LookupResult {
        if self.is_empty() {
            debug!("cannot read index {index} of an empty list");
            return Err(LookupError::EmptyContainer);
        }

        let len = self.len;
        if index >= len {
            debug!("cannot read index {index}, list length is {len}");
            return Err(LookupError::IndexOutOfBounds { index, len });
        }

        self.iter()
            .nth(index)
            .ok_or(LookupError::IndexOutOfBounds { index, len })
    }

    /// Build a new list holding the same values in reverse order.
    ///
    /// Reads back to front with [`get`](Self::get) and appends each value, so
    /// this is O(n^2). The receiver is left as is.
    pub fn reverse(&self) -> Result<Self, InsertError> {
        let mut reversed = Self::new();
        for index in (0..self.len).rev() {
            if let Ok(value) = self.get(index) {
                reversed.append(value)?;
            }
        }
        Ok(reversed)
    }

    /// Build a new list with `transform` applied to every value, in order.
    pub fn map<F>(&self, mut transform: F) -> Result<Self, InsertError>
    where
        F: FnMut(Value) -> Value,
    {
        let mut mapped = Self::new();
        for value in self {
            mapped.append(transform(value))?;
        }
        Ok(mapped)
    }

    /// Build a new list with the values for which `predicate` holds, in order.
    pub fn filter<P>(&self, mut predicate: P) -> Result<Self, InsertError>
    where
        P: FnMut(Value) -> bool,
    {
        let mut filtered = Self::new();
        for value in self.iter().filter(|value| predicate(*value)) {
            filtered.append(value)?;
        }
        Ok(filtered)
    }
}

impl Container for LinkedList {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        // Unlink one node at a time; the default drop would recurse down the chain.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `[ 1, 2, 3 ]`, or `[ ]` when empty.
impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[ ]");
        }

        f.write_str("[ ")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(" ]")
    }
}
