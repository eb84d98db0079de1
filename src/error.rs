use thiserror::Error;

use crate::Value;

/// Outcome of a read or a removal: the value, or why there is none.
pub type LookupResult<T = Value> = Result<T, LookupError>;

/// Failure of a read or removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("index {index} is out of bounds for a container of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("container is empty")]
    EmptyContainer,
}

/// Failure of an insertion. The container is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    #[error("cannot insert at index {index} into a container of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("could not allocate a new node")]
    AllocationFailed,
}
