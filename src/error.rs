//! Error types for `SqrtDeque` operations.

use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while accessing or mutating a `SqrtDeque`.
///
/// Every fallible operation checks its preconditions before touching the
/// chunk directory, so an error never leaves the deque half-mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// An index or cursor position lies outside the range valid for the operation.
    #[error("index out of bounds")]
    OutOfBounds,

    /// The operation requires at least one element.
    #[error("container is empty")]
    EmptyContainer,

    /// A cursor or position was used against a deque it does not belong to.
    #[error("cursor does not belong to this deque")]
    InvalidCursor,
}
