//! This crate provides a circular doubly-linked list: the elements form a
//! closed ring in which the last node links forward to the first and the
//! first links backward to the last.
//!
//! The [`List`] allows inserting, removing and splicing elements at any
//! given position in constant time (splicing is linear in the number of
//! copied elements). In compromise, reaching a position takes *O*(*n*)
//! time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ring_list::List;
//!
//! let mut list = List::from([3, 4, 5, 6, 7, 10]);
//!
//! // remove the element just before the tail
//! let before_tail = list.prev(list.cursor_tail());
//! let (removed, _) = list.remove(before_tail);
//! assert_eq!(removed, 7);
//! assert_eq!(list.to_string(), "3 4 5 6 10");
//!
//! // insert before the head; in a ring this is also the position
//! // after the tail, so the new element becomes the tail
//! let head = list.cursor_head();
//! list.insert(head, 3954);
//! assert_eq!(list.to_string(), "3 4 5 6 10 3954");
//! ```
//!
//! # Memory Layout
//!
//! Nodes are not individually heap-allocated. They live in an internal
//! arena (a vector of slots) owned by the list, and link to each other by
//! slot id:
//!
//! ```text
//!        ┌─────────────────────────────────────────────┐
//!        ↓                                             │
//!  ╔═══════════╗       ╔═══════════╗       ╔═══════════╗
//!  ║   next    ║ ────→ ║   next    ║ ────→ ║   next    ║
//!  ╟───────────╢       ╟───────────╢       ╟───────────╢
//!  ║   prev    ║ ←──── ║   prev    ║ ←──── ║   prev    ║
//!  ╟───────────╢   ┌── ╟───────────╢       ╟───────────╢
//!  ║ payload T ║ ←─│─┐ ║ payload T ║       ║ payload T ║ ←┐
//!  ╚═══════════╝   │ │ ╚═══════════╝       ╚═══════════╝  │
//!     head node    │ │                        tail node   │
//!                  ↓ │                                    │
//!            ╔══════════╗                                 │
//!            ║   head   ║ (the prev of the head node) ────┘
//!            ╟──────────╢
//!            ║   tail   ║
//!            ╚══════════╝
//!                List
//! ```
//!
//! There is no sentinel node: an empty list has no nodes at all, and a
//! one-element list is a single node linked to itself on both sides. The
//! list records a logical *head* and, from two elements on, a logical
//! *tail*; see [`List`] for the exact bookkeeping.
//!
//! Removing a node vacates its arena slot and bumps the slot's
//! generation. The slot is reused by later insertions, but a [`Cursor`]
//! issued for the removed node keeps the old generation and is reported
//! as dead instead of aliasing the new occupant.
//!
//! # Cursors
//!
//! Positions in the list are named by [`Cursor`]s. A cursor is a small
//! `Copy` handle that does not borrow the list; navigation and access go
//! through the list itself:
//!
//! ```
//! use ring_list::List;
//!
//! let list = List::from(['A', 'B', 'C']);
//!
//! let mut cursor = list.cursor_head();
//! assert_eq!(list.get(cursor), Some(&'A'));
//!
//! cursor = list.next(cursor);
//! assert_eq!(list.get(cursor), Some(&'B'));
//!
//! // navigation is cyclic and never falls off the ring
//! cursor = list.prev(list.prev(cursor));
//! assert_eq!(list.get(cursor), Some(&'C'));
//! ```
//!
//! Cursors compare by position, survive unrelated mutations, and are
//! checked at every use; see [`Cursor`] for the null/stale states.
//!
//! # Iteration
//!
//! Iterating over the whole ring is by [`iter`], a double-ended, fused,
//! exact-size iterator that starts at the head and visits every element
//! once:
//!
//! ```
//! use ring_list::List;
//!
//! let list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // fused and non-cyclic
//! ```
//!
//! [`range`] instead walks the half-open cursor window `from..to`. Note
//! that [`cursor_tail`] names the last *element*, not a past-the-end
//! position, so the window from head to tail stops before the last
//! element:
//!
//! ```
//! use ring_list::List;
//!
//! let list = List::from([3, 4, 5, 6, 7, 10]);
//! let window: Vec<i32> = list
//!     .range(list.cursor_head(), list.cursor_tail())
//!     .copied()
//!     .collect();
//! assert_eq!(window, vec![3, 4, 5, 6, 7]);
//! ```
//!
//! # Splicing
//!
//! [`splice_from`] copies a *closed* range `[from, to]` out of another
//! list and inserts the copies before a position, leaving the source
//! untouched:
//!
//! ```
//! use ring_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let other = List::from([8, 9]);
//!
//! let at = list.next(list.cursor_head());
//! list.splice_from(at, &other, other.cursor_head(), other.cursor_tail());
//!
//! assert_eq!(list.to_string(), "1 8 9 2 3");
//! assert_eq!(other.to_string(), "8 9");
//! ```
//!
//! [`List`]: crate::List
//! [`Cursor`]: crate::Cursor
//! [`iter`]: crate::List::iter
//! [`range`]: crate::List::range
//! [`cursor_tail`]: crate::List::cursor_tail
//! [`splice_from`]: crate::List::splice_from

#[doc(inline)]
pub use list::cursor::Cursor;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, Range};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;
