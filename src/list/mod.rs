//! Linked lists with owned nodes and an optional closed ring.
//!
//! Two variants share one contract:
//!
//! - [`SinglyList`], which keeps forward links only. Head and tail
//!   operations are *O*(1), everything index-shaped pays a forward walk.
//! - [`DoublyList`], which also maintains backward links, buying *O*(1)
//!   removal at the tail and walks that start from the nearer end.
//!
//! Both variants can be constructed *circular*. A circular list keeps
//! `tail.next == head` (and `head.prev == tail` for the doubly variant)
//! re-asserted after every mutation; a non-circular list keeps its end
//! links forced to `None` instead. The flag is fixed at construction and
//! cannot be toggled afterwards.
//!
//! The shared contract is captured by the [`LinkedList`] trait so that
//! consumers like [`ListQueue`](crate::queue::ListQueue) can stay generic
//! over the variant without dynamic dispatch.

use crate::error::Error;

pub mod doubly;
pub mod singly;

#[doc(inline)]
pub use doubly::DoublyList;
#[doc(inline)]
pub use singly::SinglyList;

/// The capability set every linked-list variant provides: the mutation
/// contract (`insert`, `pop`, `remove`) plus the shared read operations.
///
/// All methods come with the same complexity promises as the inherent
/// implementations on [`SinglyList`] and [`DoublyList`]; the trait exists
/// so storage-consuming containers can be written once:
///
/// ```
/// use listkit::{DoublyList, LinkedList, SinglyList};
///
/// fn sum<L: LinkedList<i32> + Default>(values: &[i32]) -> i32 {
///     let mut list = L::default();
///     for &value in values {
///         list.insert(value);
///     }
///     let mut total = 0;
///     while let Some(value) = list.pop_front() {
///         total += value;
///     }
///     total
/// }
///
/// assert_eq!(sum::<SinglyList<i32>>(&[1, 2, 3]), 6);
/// assert_eq!(sum::<DoublyList<i32>>(&[1, 2, 3]), 6);
/// ```
pub trait LinkedList<T> {
    /// The number of elements in the list.
    fn len(&self) -> usize;

    /// Whether the list keeps its ring closed (`tail.next == head`).
    fn is_circular(&self) -> bool;

    /// Append an element at the end, *O*(1). Chainable.
    fn insert(&mut self, element: T) -> &mut Self;

    /// Insert an element at `index`, shifting later elements towards the
    /// tail. The valid window is `0..=len`.
    fn insert_at(&mut self, element: T, index: usize) -> Result<&mut Self, Error>;

    /// Remove and return the last element, or `None` if the list is empty.
    fn pop(&mut self) -> Option<T>;

    /// Remove and return the first element, or `None` if the list is empty.
    fn pop_front(&mut self) -> Option<T>;

    /// Remove and return the element at `index`.
    ///
    /// An empty list is a safe no-op (`Ok(None)`); on a non-empty list an
    /// index outside `0..len` is an [`Error::IndexOutOfBounds`].
    fn pop_at(&mut self, index: usize) -> Result<Option<T>, Error>;

    /// Remove the first element equal to `target` and return it.
    ///
    /// An empty list is a safe no-op (`Ok(None)`); on a non-empty list an
    /// absent value is an [`Error::ValueNotFound`].
    fn remove(&mut self, target: &T) -> Result<Option<T>, Error>
    where
        T: PartialEq;

    /// Unlink and free every node.
    fn clear(&mut self);

    /// Whether some element equals `target`, *O*(*n*).
    fn contains(&self, target: &T) -> bool
    where
        T: PartialEq;

    /// The element at `index`, or `None` if the index does not resolve.
    /// Negative indices count from the end.
    fn get(&self, index: isize) -> Option<&T>;

    /// Whether the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve a possibly negative index against `len`.
///
/// Negative indices count from the end and clamp to the front, so the
/// resolved position is `max(0, len + index)`. The clamp runs *before*
/// bounds validation: `-7` on a three-element list resolves to `0` and
/// succeeds rather than being rejected for overshooting the front. Empty
/// lists and resolved positions at or past `len` fail.
pub(crate) fn normalize_index(index: isize, len: usize) -> Result<usize, Error> {
    let resolved = if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index as usize
    };
    if resolved < len {
        Ok(resolved)
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}
