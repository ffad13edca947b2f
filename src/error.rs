use thiserror::Error;

/// Errors surfaced by the containers in this crate.
///
/// Every error is local and synchronous, and validation precedes mutation:
/// a call that fails leaves the container exactly as it was.
///
/// Note the asymmetry between the lists and the sequential containers:
/// popping or removing from an *empty list* is a safe no-op, while
/// `dequeue`/`pop`/`peek` on an empty queue or stack fail with
/// [`Error::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The index does not resolve to a position inside the container.
    ///
    /// Negative indices count from the end and are clamped to the front
    /// before this check runs, so an index can only be rejected after
    /// normalization.
    #[error("index {index} out of bounds, valid indices are 0..{len}")]
    IndexOutOfBounds { index: isize, len: usize },

    /// The value passed to a removal operation is not in the list.
    #[error("value does not exist in the list")]
    ValueNotFound,

    /// A bounded container needs a capacity greater than zero.
    #[error("capacity must be greater than zero")]
    InvalidCapacity,

    /// The container is full, either on insertion or when seeding more
    /// initial values than the requested capacity allows.
    #[error("maximum capacity of {capacity} reached, unable to store more elements")]
    CapacityExceeded { capacity: usize },

    /// `dequeue`, `pop` or `peek` on an empty queue or stack.
    #[error("container is empty")]
    Empty,
}
