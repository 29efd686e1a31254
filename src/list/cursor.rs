use crate::list::arena::NodeId;
use std::fmt;

/// A position in a [`List`].
///
/// A `Cursor` is a copyable handle, not a borrow: it can be stored, passed
/// around and kept across mutations of the list. Every use goes back
/// through the list (`list.get(cursor)`, `list.next(cursor)`, ...), where
/// the cursor is checked against the node store.
///
/// A cursor is in one of three states:
/// - it refers to a live node of the list;
/// - it is the *null* cursor (the default), referring to nothing;
/// - it is *stale*: the node it referred to has been removed. A stale
///   cursor behaves like the null cursor on the read side and is rejected
///   by the mutating operations, even after the node's storage has been
///   reused for a newer element.
///
/// # Examples
///
/// ```
/// use ring_list::{Cursor, List};
///
/// let mut list = List::new();
/// let first = list.push_back(1);
/// assert_eq!(list.get(first), Some(&1));
///
/// list.remove(first);
/// assert_eq!(list.get(first), None); // stale now
///
/// let null = Cursor::null();
/// assert!(null.is_null());
/// assert_eq!(list.get(null), None);
/// ```
///
/// [`List`]: crate::List
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) node: Option<NodeId>,
}

/// Cursors compare by the node they name, never by element values. Two
/// cursors at distinct nodes holding equal elements are not equal.
///
/// ```
/// use ring_list::List;
///
/// let mut list = List::new();
/// let a = list.push_back(7);
/// let b = list.push_back(7);
/// assert_ne!(a, b);
/// assert_eq!(a, list.cursor_head());
/// ```
impl Cursor {
    /// The cursor that refers to nothing. Also the `Default`.
    #[inline]
    pub fn null() -> Self {
        Self { node: None }
    }

    /// Returns `true` if this is the null cursor. A stale cursor is not
    /// null; only the list it came from can tell it is dead.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.node.is_none()
    }

    #[inline]
    pub(crate) fn at(node: NodeId) -> Self {
        Self { node: Some(node) }
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(id) => f.debug_tuple("Cursor").field(&id).finish(),
            None => f.write_str("Cursor(null)"),
        }
    }
}
