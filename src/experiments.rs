//! A fully safe doubly-ended list, kept as an in-tree exploration of how
//! far the borrow checker goes without raw pointers.
//!
//! Every node is shared between exactly two [`StaticRc`] halves: one held
//! by the neighbour on each side, or by the list itself at the ends.
//! Interior mutability goes through [`GhostCell`], so aliasing is checked
//! at compile time against a single [`GhostToken`].
//!
//! The production lists keep the raw-pointer representation instead:
//! threading a token through every public call is a poor fit for the
//! crate's API, and the token serializes all access to one list anyway.

#![cfg_attr(not(test), allow(dead_code))]

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<'id, T> = StaticRc<GhostCell<'id, TokenNode<'id, T>>, 1, 2>;
type Full<'id, T> = StaticRc<GhostCell<'id, TokenNode<'id, T>>, 2, 2>;

struct TokenNode<'id, T> {
    /// Indexed by [`End`]: the neighbour towards the front, and the
    /// neighbour towards the back.
    neighbours: [Option<Half<'id, T>>; 2],
    element: T,
}

#[derive(Clone, Copy)]
enum End {
    Front = 0,
    Back = 1,
}

impl End {
    fn opposite(self) -> Self {
        match self {
            End::Front => End::Back,
            End::Back => End::Front,
        }
    }
}

pub(crate) struct TokenList<'id, T> {
    /// Indexed by [`End`]: a half of the front node and a half of the
    /// back node.
    ends: [Option<Half<'id, T>>; 2],
    len: usize,
}

impl<'id, T> TokenList<'id, T> {
    pub(crate) fn new() -> Self {
        Self {
            ends: [None, None],
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, end: End, element: T, token: &mut GhostToken<'id>) {
        let node = TokenNode {
            neighbours: [None, None],
            element,
        };
        let (inner, outer) = Full::split(Full::new(GhostCell::new(node)));
        match self.ends[end as usize].take() {
            Some(old_end) => {
                // The old end node gains the new node as its neighbour on
                // this side, and the new node points back at it.
                old_end.deref().borrow_mut(token).neighbours[end as usize] = Some(inner);
                outer.deref().borrow_mut(token).neighbours[end.opposite() as usize] =
                    Some(old_end);
            }
            // First node: its other half becomes the opposite end.
            None => self.ends[end.opposite() as usize] = Some(inner),
        }
        self.ends[end as usize] = Some(outer);
        self.len += 1;
    }

    fn pop(&mut self, end: End, token: &mut GhostToken<'id>) -> Option<T> {
        let outer = self.ends[end as usize].take()?;
        let inner = match outer.deref().borrow_mut(token).neighbours[end.opposite() as usize]
            .take()
        {
            Some(neighbour) => {
                // The departing node's second half sits in the slot of
                // the neighbour that pointed back at it.
                let inner = neighbour.deref().borrow_mut(token).neighbours[end as usize]
                    .take()
                    .expect("neighbour lost its link");
                self.ends[end as usize] = Some(neighbour);
                inner
            }
            // Last node: its second half is held by the opposite end.
            None => self.ends[end.opposite() as usize]
                .take()
                .expect("single node held by one end only"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(inner, outer)).into_inner().element)
    }

    pub(crate) fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        self.push(End::Front, element, token);
    }

    pub(crate) fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        self.push(End::Back, element, token);
    }

    pub(crate) fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop(End::Front, token)
    }

    pub(crate) fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop(End::Back, token)
    }

    pub(crate) fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }

    /// Drain front to back; the tests use this to check ordering.
    pub(crate) fn drain_to_vec(&mut self, token: &mut GhostToken<'id>) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.len);
        while let Some(element) = self.pop_front(token) {
            elements.push(element);
        }
        elements
    }
}

impl<'id, T> Default for TokenList<'id, T> {
    fn default() -> Self {
        Self::new()
    }
}
