use core::fmt;

use crate::linked_list::LinkedList;
use crate::{Container, InsertError, LookupError, LookupResult, Value};

/// A LIFO stack over a [`LinkedList`].
///
/// The tail of the list is the top of the stack. The list has no tail
/// pointer, so `push`, `pop` and `peek` are all O(len).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stack {
    list: LinkedList,
}

impl Stack {
    /// Creates a new, empty stack.
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Put a value on top of the stack.
    pub fn push(&mut self, value: Value) -> Result<(), InsertError> {
        self.list.append(value)
    }

    /// Take the top value off the stack.
    pub fn pop(&mut self) -> LookupResult {
        self.list.remove_last()
    }

    /// Read the top value without removing it.
    pub fn peek(&self) -> LookupResult {
        let top = self
            .list
            .len()
            .checked_sub(1)
            .ok_or(LookupError::EmptyContainer)?;
        self.list.get(top)
    }

    /// Get the number of values in the stack
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Container for Stack {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}
