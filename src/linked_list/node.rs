use alloc::boxed::Box;
use core::alloc::Layout;
use core::ptr::NonNull;

use crate::{InsertError, Value};

/// An owning link to the next node, `None` at the end of the chain.
pub(crate) type Link = Option<Box<Node>>;

/// A node in a singly linked list.
/// Each node is owned by exactly one link: the list head or its predecessor.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: Value,
    pub(crate) next: Link,
}

impl Node {
    /// Allocate a detached node holding `value`.
    ///
    /// Unlike `Box::new`, which aborts when the allocator is exhausted, this
    /// reports the failure so callers can bail out before touching any link.
    pub(crate) fn try_boxed(value: Value) -> Result<Box<Self>, InsertError> {
        let layout = Layout::new::<Self>();
        unsafe {
            let ptr = NonNull::new(alloc::alloc::alloc(layout).cast::<Self>())
                .ok_or(InsertError::AllocationFailed)?;
            ptr.as_ptr().write(Node { value, next: None });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }
}
