//! This crate provides educational linked lists with owned nodes, plus
//! the queue and stack containers layered on top of them.
//!
//! Two list variants share one contract, captured by the [`LinkedList`]
//! trait:
//!
//! - [`SinglyList`] keeps forward links only: *O*(1) at the head and
//!   (through a cached tail) at the end, *O*(*n*) in the middle.
//! - [`DoublyList`] also maintains backward links, buying *O*(1) removal
//!   at the tail and indexed walks from the nearer end.
//!
//! Either variant can be constructed *circular*, closing the tail's
//! forward link (and, for the doubly variant, the head's backward link)
//! onto the other end after every mutation. Iteration stays finite by
//! counting nodes rather than looking for an end link.
//!
//! Here is a quick example showing how the lists work.
//!
//! ```
//! use listkit::SinglyList;
//!
//! let mut list = SinglyList::new();
//! list.insert("b").insert("c");
//! list.insert_at("a", 0).unwrap();
//!
//! assert_eq!(list.to_string(), "a->b->c");
//! assert_eq!(list.pop(), Some("c"));
//! assert!(list.contains(&"a"));
//! assert_eq!(list.node_at(-1).unwrap().value(), &"b");
//! ```
//!
//! # Memory layout
//!
//! Each node is heap-allocated and owned by the list through the forward
//! chain; backward links and the circular closure are non-owning
//! shortcuts. The layout of a circular [`DoublyList`] looks like this:
//!
//! ```text
//!      ┌──────────────────────────────────────────────┐ next
//!      │  ╔═══════════╗      next       ╔═══════════╗ │
//!      └→ ║  elem 0   ║ ─────────────→ ┄║ elem n-1  ║ ┘
//!    ┌─── ║  (head)   ║ ←───────────── ┄║  (tail)   ║ ←──┐
//!    │    ╚═══════════╝      prev       ╚═══════════╝    │
//!    │ prev     ↑                             ↑          │
//!    └──────────┼─────────────────────────────┘          │
//!          ╔════╧═══╗                                    │
//!          ║  head  ║────────────────────────────────────┘
//!          ║  tail  ║           (cached, non-owning)
//!          ╚════════╝
//!             List
//! ```
//!
//! A non-circular list has `None` at both chain ends instead.
//!
//! # Queues and stacks
//!
//! The sequential containers follow one construction contract: an
//! optional positive capacity and optional seed values that must fit
//! under it.
//!
//! ```
//! use listkit::{CircularQueue, ListQueue, Queue, Stack};
//!
//! let mut waiting: ListQueue<&str> = ListQueue::new();
//! waiting.enqueue("first").unwrap();
//! waiting.enqueue("second").unwrap();
//! assert_eq!(waiting.dequeue(), Ok("first"));
//!
//! let mut ring = CircularQueue::new(3).unwrap();
//! ring.enqueue(1).unwrap();
//! assert_eq!(ring.peek(), Ok(&1));
//!
//! let mut plates: Stack<i32> = (1..=3).collect();
//! assert_eq!(plates.pop(), Ok(3));
//! # let _: Queue<i32> = Queue::new();
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`Error`]; validation always precedes
//! mutation, so a failed call leaves the container untouched. Popping or
//! removing from an *empty list* is deliberately a safe no-op, while the
//! queues and stacks treat an empty `dequeue`/`pop`/`peek` as an error.

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use list::{DoublyList, LinkedList, SinglyList};
#[doc(inline)]
pub use queue::{CircularQueue, ListQueue, Queue};
#[doc(inline)]
pub use stack::Stack;

pub mod error;
pub mod list;
pub mod queue;
pub mod stack;

mod experiments;
