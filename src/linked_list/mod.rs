//! An owned singly linked list of integers.
//!
//! Every node is owned by exactly one link: the list head for the first node,
//! the `next` field of its predecessor for every other. There is no tail
//! pointer and no shared ownership, so positional operations walk from the
//! head and cost O(index).
//!
//! # Examples
//!
//! ```
//! use mola_containers::{LookupError, linked_list::LinkedList};
//!
//! let mut list = LinkedList::new();
//! list.append(2).unwrap();
//! list.append(3).unwrap();
//! list.insert_at_head(1).unwrap();
//!
//! assert_eq!(list.to_string(), "[ 1, 2, 3 ]");
//! assert_eq!(list.get(1), Ok(2));
//! assert_eq!(list.remove_at(0), Ok(1));
//! assert_eq!(
//!     list.get(5),
//!     Err(LookupError::IndexOutOfBounds { index: 5, len: 2 })
//! );
//!
//! let reversed = list.reverse().unwrap();
//! assert_eq!(reversed.iter().collect::<Vec<_>>(), vec![3, 2]);
//! ```

mod iter;
mod list;
mod node;

pub use iter::Iter;
pub use list::LinkedList;
