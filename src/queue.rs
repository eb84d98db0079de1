use core::fmt;

use crate::linked_list::LinkedList;
use crate::{Container, InsertError, LookupResult, Value};

/// A FIFO queue over a [`LinkedList`].
///
/// Values enter at the tail and leave from the head, so `enqueue` walks the
/// list while `dequeue` is O(1).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Queue {
    list: LinkedList,
}

impl Queue {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Add a value at the back of the queue.
    pub fn enqueue(&mut self, value: Value) -> Result<(), InsertError> {
        self.list.append(value)
    }

    /// Take the value at the front of the queue.
    pub fn dequeue(&mut self) -> LookupResult {
        self.list.remove_at(0)
    }

    /// Get the number of values in the queue
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Container for Queue {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}
