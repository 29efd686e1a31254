use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::list::arena::{Arena, Node, NodeId};
use crate::list::cursor::Cursor;
use crate::{Iter, Range};

pub mod cursor;
pub mod iterator;

mod algorithms;
mod arena;

/// The `List` is a circular doubly-linked list: the last node links back
/// to the first, and the first links back to the last, so the elements
/// form a closed ring. Inserting and removing at any known position take
/// constant time; reaching a position takes *O*(*n*) steps.
///
/// Nodes are owned by an internal arena and addressed by [`Cursor`]s,
/// which are copyable handles rather than borrows. A cursor survives
/// arbitrary mutation of the list and is generation-checked at every use,
/// so a cursor to a removed node is detected instead of resurrecting the
/// node's reused storage.
///
/// # Head and tail bookkeeping
///
/// Besides the ring itself the list tracks a logical *head* (the first
/// element) and *tail* (the last element). The tail is only recorded for
/// lists of two or more elements:
///
/// - empty list: no head, no tail, [`cursor_head`] and [`cursor_tail`]
///   are both null;
/// - one element: a head but no tail; the sole node links to itself on
///   both sides and [`cursor_tail`] is null;
/// - two or more: head and tail are distinct, `tail.next` is the head
///   and `head.prev` is the tail.
///
/// Every mutation re-normalizes to this shape.
///
/// Note that [`cursor_tail`] refers to the *last element*, not to a
/// position past the end. A bounded walk with [`range`] from
/// [`cursor_head`] to [`cursor_tail`] therefore stops *before* the last
/// element; use [`iter`] to visit the whole ring.
///
/// [`cursor_head`]: List::cursor_head
/// [`cursor_tail`]: List::cursor_tail
/// [`iter`]: List::iter
/// [`range`]: List::range
pub struct List<T> {
    arena: Arena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

// private methods
impl<T> List<T> {
    fn node(&self, id: NodeId) -> &Node<T> {
        self.arena.get(id).expect("ring links always name live nodes")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.arena
            .get_mut(id)
            .expect("ring links always name live nodes")
    }

    /// Checks a cursor against the node store before a mutation.
    fn expect_node(&self, cursor: Cursor) -> NodeId {
        let id = match cursor.node {
            Some(id) => id,
            None => panic!("cursor is null"),
        };
        assert!(
            self.arena.contains(id),
            "cursor is stale: its node has been removed from this list"
        );
        id
    }

    /// Makes `next` follow `prev` in the ring.
    fn connect(&mut self, prev: NodeId, next: NodeId) {
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
    }

    /// A one-element list records no tail.
    fn normalize_tail(&mut self) {
        if self.tail == self.head {
            self.tail = None;
        }
    }

    /// The node holding the last element, regardless of whether the tail
    /// is recorded.
    pub(crate) fn last_id(&self) -> Option<NodeId> {
        self.tail.or(self.head)
    }

    pub(crate) fn value(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use ring_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(1);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Removes all elements from the `List`. Every outstanding cursor
    /// becomes stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// let head = list.cursor_head();
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.get(head), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Provides a reference to the first element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.value(id))
    }

    /// Provides a reference to the last element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.last_id().and_then(|id| self.value(id))
    }

    /// Appends an element at the logical tail and returns its cursor.
    /// The ring stays closed: the new node's `next` is the head and the
    /// head's `prev` is the new node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// let last = list.push_back(3);
    ///
    /// assert_eq!(list.to_string(), "1 2 3");
    /// assert_eq!(list.cursor_tail(), last);
    /// ```
    pub fn push_back(&mut self, value: T) -> Cursor {
        let new = self.arena.insert(value);
        match self.head {
            None => self.head = Some(new),
            Some(head) => {
                let last = self.tail.unwrap_or(head);
                self.connect(last, new);
                self.connect(new, head);
                self.tail = Some(new);
            }
        }
        Cursor::at(new)
    }

    /// Returns a cursor to the first element, or the null cursor if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.cursor_head().is_null());
    ///
    /// let first = list.push_back(1);
    /// assert_eq!(list.cursor_head(), first);
    /// ```
    #[inline]
    pub fn cursor_head(&self) -> Cursor {
        Cursor { node: self.head }
    }

    /// Returns a cursor to the recorded tail, or the null cursor if no
    /// tail is recorded.
    ///
    /// This refers to the *last element*, not to a position past the end,
    /// and a one-element list records no tail. Walking with [`range`]
    /// from [`cursor_head`] to `cursor_tail` visits everything *except*
    /// the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.cursor_tail().is_null());
    ///
    /// list.push_back(1);
    /// assert!(list.cursor_tail().is_null()); // a sole element is head only
    ///
    /// let second = list.push_back(2);
    /// assert_eq!(list.cursor_tail(), second);
    /// ```
    ///
    /// [`cursor_head`]: List::cursor_head
    /// [`range`]: List::range
    #[inline]
    pub fn cursor_tail(&self) -> Cursor {
        Cursor { node: self.tail }
    }

    /// Steps a cursor one node forward along the ring. The step wraps
    /// around: `next` of the last element is the first.
    ///
    /// Returns the null cursor if `cursor` is null or stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// let a = list.push_back(1);
    /// let b = list.push_back(2);
    ///
    /// assert_eq!(list.next(a), b);
    /// assert_eq!(list.next(b), a); // wraps around
    /// ```
    pub fn next(&self, cursor: Cursor) -> Cursor {
        match cursor.node.and_then(|id| self.arena.get(id)) {
            Some(node) => Cursor::at(node.next),
            None => Cursor::null(),
        }
    }

    /// Steps a cursor one node backward along the ring. The step wraps
    /// around: `prev` of the first element is the last.
    ///
    /// Returns the null cursor if `cursor` is null or stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// let a = list.push_back(1);
    /// let b = list.push_back(2);
    ///
    /// assert_eq!(list.prev(b), a);
    /// assert_eq!(list.prev(a), b); // wraps around
    /// ```
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        match cursor.node.and_then(|id| self.arena.get(id)) {
            Some(node) => Cursor::at(node.prev),
            None => Cursor::null(),
        }
    }

    /// Provides a reference to the element at `cursor`, or `None` if the
    /// cursor is null or stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// let first = list.push_back(1);
    /// assert_eq!(list.get(first), Some(&1));
    ///
    /// list.remove(first);
    /// assert_eq!(list.get(first), None);
    /// ```
    #[inline]
    pub fn get(&self, cursor: Cursor) -> Option<&T> {
        cursor.node.and_then(|id| self.value(id))
    }

    /// Provides a mutable reference to the element at `cursor`, or `None`
    /// if the cursor is null or stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// let first = list.push_back(1);
    ///
    /// if let Some(x) = list.get_mut(first) {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        cursor
            .node
            .and_then(move |id| self.arena.get_mut(id))
            .map(|node| &mut node.value)
    }

    /// Inserts `value` immediately before `at` and returns a cursor to
    /// the new node.
    ///
    /// Because the list is a ring, the position before the head is the
    /// position after the tail: inserting before the head appends, and
    /// the new node becomes the tail.
    ///
    /// # Panics
    ///
    /// Panics if `at` is null (including on an empty list) or stale.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let second = list.next(list.cursor_head());
    /// list.insert(second, 9);
    /// assert_eq!(list.to_string(), "1 9 2 3");
    ///
    /// let head = list.cursor_head();
    /// let new = list.insert(head, 7); // before the head = after the tail
    /// assert_eq!(list.to_string(), "1 9 2 3 7");
    /// assert_eq!(list.cursor_tail(), new);
    /// ```
    pub fn insert(&mut self, at: Cursor, value: T) -> Cursor {
        let at_id = self.expect_node(at);
        let new = self.arena.insert(value);
        let before = self.node(at_id).prev;
        self.connect(before, new);
        self.connect(new, at_id);
        if self.head == Some(at_id) {
            self.tail = Some(new);
        }
        Cursor::at(new)
    }

    /// Removes the node at `at`, returning its value and a cursor to the
    /// node that followed it (captured before unlinking, so it is valid
    /// even though `at` itself becomes stale).
    ///
    /// Removing the head makes its successor the new head; removing the
    /// tail makes its predecessor the new tail. Removing the sole
    /// remaining element empties the list and returns the null cursor.
    ///
    /// # Panics
    ///
    /// Panics if `at` is null or stale.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([3, 4, 5]);
    ///
    /// let second = list.next(list.cursor_head());
    /// let (value, after) = list.remove(second);
    /// assert_eq!(value, 4);
    /// assert_eq!(list.get(after), Some(&5));
    /// assert_eq!(list.to_string(), "3 5");
    /// ```
    ///
    /// Removing the last element:
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1]);
    /// let head = list.cursor_head();
    ///
    /// let (value, after) = list.remove(head);
    /// assert_eq!(value, 1);
    /// assert!(after.is_null());
    /// assert!(list.is_empty());
    /// ```
    pub fn remove(&mut self, at: Cursor) -> (T, Cursor) {
        let id = self.expect_node(at);
        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };
        let value = match self.arena.remove(id) {
            Some(value) => value,
            None => unreachable!(),
        };
        if next == id {
            // the sole element of the ring
            self.head = None;
            self.tail = None;
            return (value, Cursor::null());
        }
        self.connect(prev, next);
        if self.head == Some(id) {
            self.head = Some(next);
        } else if self.tail == Some(id) {
            self.tail = Some(prev);
        }
        self.normalize_tail();
        (value, Cursor::at(next))
    }

    /// Removes every node strictly between `from` and `to`, relinking
    /// `from` directly to `to`. Both endpoints survive. Returns `to`.
    ///
    /// If the walk from `from` to `to` passes the logical head or tail,
    /// the head moves to `to` and the tail moves to `from`.
    ///
    /// If `from` and `to` are adjacent (or equal, in which case the rest
    /// of the ring is the interior), only the nodes between them in ring
    /// order are removed.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is null or stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([3, 4, 5, 6, 7, 10]);
    ///
    /// let (from, to) = (list.cursor_head(), list.cursor_tail());
    /// let back = list.remove_between(from, to);
    /// assert_eq!(list.to_string(), "3 10"); // both endpoints survive
    /// assert_eq!(back, to);
    /// ```
    pub fn remove_between(&mut self, from: Cursor, to: Cursor) -> Cursor {
        let from_id = self.expect_node(from);
        let to_id = self.expect_node(to);
        let mut cur = self.node(from_id).next;
        self.connect(from_id, to_id);
        while cur != to_id {
            let next = self.node(cur).next;
            if self.head == Some(cur) {
                self.head = Some(to_id);
            }
            if self.tail == Some(cur) {
                self.tail = Some(from_id);
            }
            self.arena.remove(cur);
            cur = next;
        }
        self.normalize_tail();
        to
    }

    /// Copies the closed range `[from, to]` of `source` and inserts the
    /// copies immediately before `at`, leaving `source` untouched.
    ///
    /// If `at` is the recorded tail (or the destination has no recorded
    /// tail), the last copied node becomes the tail.
    ///
    /// # Panics
    ///
    /// Panics if `at` is null or stale in `self`, or if `from` or `to`
    /// is null or stale in `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut dest = List::from([1, 2, 3]);
    /// let src = List::from([8, 9]);
    ///
    /// let at = dest.next(dest.cursor_head());
    /// dest.splice_from(at, &src, src.cursor_head(), src.cursor_tail());
    ///
    /// assert_eq!(dest.to_string(), "1 8 9 2 3");
    /// assert_eq!(src.to_string(), "8 9"); // source is untouched
    /// ```
    pub fn splice_from(&mut self, at: Cursor, source: &List<T>, from: Cursor, to: Cursor)
    where
        T: Clone,
    {
        let at_id = self.expect_node(at);
        let from_id = source.expect_node(from);
        let to_id = source.expect_node(to);

        let mut values = Vec::new();
        let mut cur = from_id;
        loop {
            values.push(source.node(cur).value.clone());
            if cur == to_id {
                break;
            }
            cur = source.node(cur).next;
        }

        let mut last = self.node(at_id).prev;
        for value in values {
            let id = self.arena.insert(value);
            self.connect(last, id);
            last = id;
        }
        self.connect(last, at_id);
        if self.tail == Some(at_id) || self.tail.is_none() {
            self.tail = Some(last);
        }
    }

    /// Provides a forward iterator over the whole ring, starting at the
    /// head. Unlike a raw cursor walk it does not wrap: every element is
    /// visited exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides an iterator from `from` up to but *not* including `to`.
    ///
    /// With `from = cursor_head()` and `to = cursor_tail()` this is the
    /// bounded walk over the cursor window, which stops *before* the last
    /// element. The walk never yields more than [`len`] elements, even
    /// when `to` is unreachable (for instance the null cursor).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from([3, 4, 5, 6, 7, 10]);
    ///
    /// let window: Vec<i32> = list
    ///     .range(list.cursor_head(), list.cursor_tail())
    ///     .cloned()
    ///     .collect();
    /// assert_eq!(window, vec![3, 4, 5, 6, 7]); // the tail is excluded
    /// ```
    ///
    /// [`len`]: List::len
    #[inline]
    pub fn range(&self, from: Cursor, to: Cursor) -> Range<'_, T> {
        Range::new(self, from, to)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Prints every element of the ring once, starting at the head,
/// space-separated. The whole ring is printed even when the head/tail
/// cursor window is narrower.
///
/// # Examples
///
/// ```
/// use ring_list::List;
///
/// let list = List::from([3, 4, 5]);
/// assert_eq!(list.to_string(), "3 4 5");
/// assert_eq!(List::<i32>::new().to_string(), "");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        Ok(())
    }
}

#[allow(dead_code)]
fn assert_covariance() {
    fn list<'new>(x: List<&'static str>) -> List<&'new str> {
        x
    }
    fn iter<'a, 'new>(x: Iter<'a, &'static str>) -> Iter<'a, &'new str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cursor, List};
    use std::cell::RefCell;
    use std::iter::FromIterator;
    use std::mem;

    #[derive(Default)]
    struct DropChecker {
        dropped: RefCell<Vec<u32>>,
    }

    struct DropItem<'a> {
        id: u32,
        checker: &'a DropChecker,
    }

    impl DropChecker {
        fn item(&self, id: u32) -> DropItem<'_> {
            DropItem { id, checker: self }
        }
    }

    impl Drop for DropItem<'_> {
        fn drop(&mut self) {
            self.checker.dropped.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn push_back_builds_ring() {
        let mut list = List::new();
        for value in [3, 4, 5, 6, 7, 10].iter() {
            list.push_back(*value);
        }
        assert_eq!(list.len(), 6);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&10));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![3, 4, 5, 6, 7, 10]);
        // ring closure
        assert_eq!(list.next(list.cursor_tail()), list.cursor_head());
        assert_eq!(list.prev(list.cursor_head()), list.cursor_tail());
    }

    #[test]
    fn single_node_is_self_linked() {
        let mut list = List::new();
        let only = list.push_back(1);
        assert_eq!(list.next(only), only);
        assert_eq!(list.prev(only), only);
        assert_eq!(list.cursor_head(), only);
        assert!(list.cursor_tail().is_null());
    }

    #[test]
    fn tail_bookkeeping_across_transitions() {
        let mut list = List::new();
        let first = list.push_back(1);
        assert!(list.cursor_tail().is_null());

        let second = list.push_back(2);
        assert_eq!(list.cursor_tail(), second);

        list.remove(second);
        assert!(list.cursor_tail().is_null());
        assert_eq!(list.next(first), first);
        assert_eq!(list.prev(first), first);
    }

    #[test]
    fn insert_before_head_appends() {
        let mut list = List::from([3, 4, 5]);
        let head = list.cursor_head();
        let new = list.insert(head, 3954);
        assert_eq!(list.to_string(), "3 4 5 3954");
        assert_eq!(list.cursor_tail(), new);
        assert_eq!(list.back(), Some(&3954));
    }

    #[test]
    fn insert_in_the_middle() {
        let mut list = List::from([1, 3]);
        let second = list.next(list.cursor_head());
        let new = list.insert(second, 2);
        assert_eq!(list.to_string(), "1 2 3");
        assert_eq!(list.get(new), Some(&2));
        assert_eq!(list.next(new), second);
    }

    #[test]
    fn remove_head_advances_head() {
        let mut list = List::from([1, 2, 3]);
        let head = list.cursor_head();
        let (value, after) = list.remove(head);
        assert_eq!(value, 1);
        assert_eq!(list.cursor_head(), after);
        assert_eq!(list.to_string(), "2 3");
    }

    #[test]
    fn remove_tail_regresses_tail() {
        let mut list = List::from([1, 2, 3]);
        let tail = list.cursor_tail();
        let (value, after) = list.remove(tail);
        assert_eq!(value, 3);
        // the successor of the old tail is the head
        assert_eq!(after, list.cursor_head());
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn remove_before_tail() {
        let mut list = List::from([3, 4, 5, 6, 7, 10]);
        let before_tail = list.prev(list.cursor_tail());
        let (value, _) = list.remove(before_tail);
        assert_eq!(value, 7);
        assert_eq!(list.to_string(), "3 4 5 6 10");
    }

    #[test]
    fn remove_sole_element_empties() {
        let mut list = List::from([9]);
        let head = list.cursor_head();
        let (value, after) = list.remove(head);
        assert_eq!(value, 9);
        assert!(after.is_null());
        assert!(list.is_empty());
        assert!(list.cursor_head().is_null());
        assert!(list.cursor_tail().is_null());
    }

    #[test]
    fn remove_between_keeps_endpoints() {
        let mut list = List::from([3, 4, 5, 6, 7, 10]);
        let (from, to) = (list.cursor_head(), list.cursor_tail());
        let back = list.remove_between(from, to);
        assert_eq!(back, to);
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "3 10");
        // the survivors form a two-node ring
        assert_eq!(list.next(from), to);
        assert_eq!(list.next(to), from);
    }

    #[test]
    fn remove_between_adjacent_removes_nothing() {
        let mut list = List::from([1, 2]);
        let (from, to) = (list.cursor_head(), list.cursor_tail());
        list.remove_between(from, to);
        assert_eq!(list.to_string(), "1 2");
    }

    #[test]
    fn remove_between_moves_head_and_tail_out_of_the_interior() {
        let mut list = List::from([1, 2, 3, 4]);
        let third = list.next(list.next(list.cursor_head()));
        let second = list.next(list.cursor_head());
        // the interior of 3..2 in ring order is {4, 1}, head and tail
        list.remove_between(third, second);
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "2 3");
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn splice_copies_the_closed_range() {
        let mut dest = List::from([3, 4, 5, 6, 7, 10]);
        let src = List::from([14, 15, 16, 17, 18, 19]);
        let at = dest.next(dest.cursor_head());
        dest.splice_from(at, &src, src.cursor_head(), src.cursor_tail());
        assert_eq!(dest.to_string(), "3 14 15 16 17 18 19 4 5 6 7 10");
        assert_eq!(dest.len(), 12);
        // source untouched
        assert_eq!(src.len(), 6);
        assert_eq!(src.to_string(), "14 15 16 17 18 19");
    }

    #[test]
    fn splice_at_tail_moves_tail_to_last_copy() {
        let mut dest = List::from([1, 2]);
        let src = List::from([7]);
        let tail = dest.cursor_tail();
        dest.splice_from(tail, &src, src.cursor_head(), src.cursor_head());
        assert_eq!(dest.to_string(), "1 7 2");
        assert_eq!(dest.get(dest.cursor_tail()), Some(&7));
    }

    #[test]
    fn splice_into_single_node_records_a_tail() {
        let mut dest = List::from([1]);
        let src = List::from([8, 9]);
        let at = dest.cursor_head();
        dest.splice_from(at, &src, src.cursor_head(), src.cursor_tail());
        assert_eq!(dest.to_string(), "1 8 9");
        assert_eq!(dest.get(dest.cursor_tail()), Some(&9));
        assert_eq!(dest.prev(dest.cursor_head()), dest.cursor_tail());
    }

    #[test]
    fn take_leaves_the_source_empty() {
        let mut source = List::from([1, 2, 3]);
        let taken = mem::take(&mut source);
        assert!(source.is_empty());
        assert_eq!(taken.to_string(), "1 2 3");
    }

    #[test]
    fn replace_drops_the_overwritten_list_exactly_once() {
        let checker = DropChecker::default();
        let mut list = List::new();
        list.push_back(checker.item(1));
        list.push_back(checker.item(2));
        let replacement = List::from_iter(vec![checker.item(3)]);
        let old = mem::replace(&mut list, replacement);
        drop(old);
        assert_eq!(*checker.dropped.borrow(), vec![1, 2]);
        drop(list);
        assert_eq!(*checker.dropped.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn every_node_is_dropped_exactly_once() {
        let checker = DropChecker::default();
        {
            let mut list = List::new();
            let first = list.push_back(checker.item(1));
            list.push_back(checker.item(2));
            list.push_back(checker.item(3));
            let (item, _) = list.remove(first);
            drop(item);
            assert_eq!(*checker.dropped.borrow(), vec![1]);
        }
        assert_eq!(*checker.dropped.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn slot_reuse_does_not_resurrect_old_cursors() {
        let mut list = List::new();
        let old = list.push_back(1);
        list.push_back(2);
        list.remove(old);
        let new = list.push_back(3); // reuses the vacated slot
        assert_eq!(list.get(old), None);
        assert_ne!(old, new);
        assert_eq!(list.get(new), Some(&3));
    }

    #[test]
    fn clear_invalidates_cursors_even_after_slot_reuse() {
        let mut list = List::from([1, 2]);
        let head = list.cursor_head();
        list.clear();
        list.push_back(99); // reuses the vacated slots
        assert_eq!(list.get(head), None);
        assert!(list.next(head).is_null());
        assert_eq!(list.front(), Some(&99));
    }

    #[test]
    #[should_panic(expected = "cursor is null")]
    fn insert_at_null_cursor_panics() {
        let mut list: List<i32> = List::new();
        list.insert(Cursor::null(), 1);
    }

    #[test]
    #[should_panic(expected = "cursor is stale")]
    fn remove_at_stale_cursor_panics() {
        let mut list = List::from([1, 2]);
        let head = list.cursor_head();
        list.remove(head);
        list.remove(head);
    }

    #[test]
    #[should_panic(expected = "cursor is stale")]
    fn splice_with_foreign_stale_cursor_panics() {
        let mut dest = List::from([1, 2]);
        let mut src = List::from([3, 4]);
        let from = src.cursor_head();
        src.remove(from);
        let at = dest.cursor_head();
        let to = src.cursor_head();
        dest.splice_from(at, &src, from, to);
    }

    #[test]
    fn debug_and_display() {
        let list = List::from([1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(format!("{}", list), "1 2 3");
        let empty: List<i32> = List::new();
        assert_eq!(format!("{:?}", empty), "[]");
        assert_eq!(format!("{}", empty), "");
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut list = List::from([1, 2, 3]);
        let second = list.next(list.cursor_head());
        *list.get_mut(second).unwrap() = 20;
        assert_eq!(list.to_string(), "1 20 3");
    }
}
