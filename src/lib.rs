//! Integer containers built on an owned singly linked list.
//!
//! - [`linked_list::LinkedList`]: index-addressed singly linked list.
//! - [`queue::Queue`]: FIFO adapter, enqueues at the tail and dequeues at the head.
//! - [`stack::Stack`]: LIFO adapter that uses the tail as its active end.
//!
//! Fallible reads and removals return a [`LookupResult`], insertions return
//! `Result<(), InsertError>`. Nothing in this crate panics on a bad index or
//! an empty container.
//!
//! # Examples
//!
//! ```
//! use mola_containers::linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! for i in 0..10 {
//!     list.append(i).unwrap();
//! }
//!
//! let squared = list.map(|n| n * n).unwrap();
//! let evens = list.filter(|n| n % 2 == 0).unwrap();
//!
//! assert_eq!(squared.to_string(), "[ 0, 1, 4, 9, 16, 25, 36, 49, 64, 81 ]");
//! assert_eq!(evens.to_string(), "[ 0, 2, 4, 6, 8 ]");
//! ```
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod traits;

pub use error::{InsertError, LookupError, LookupResult};
pub use traits::Container;

/// The element type stored by every container in this crate.
pub type Value = i32;
