use crate::list::cursor::Cursor;
use crate::list::List;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a `List`.
///
/// It walks the ring forward from the head, visiting every element
/// exactly once; it does not wrap around. The iterator is double-ended,
/// fused, and knows its exact length.
///
/// # Examples
///
/// ```compile_fail
/// use ring_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    front: Cursor,
    back: Cursor,
    remaining: usize,
}

// not derived: a derive would demand `T: Clone`, but only the handles
// are copied, never the elements
impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        let front = list.cursor_head();
        let back = match list.last_id() {
            Some(id) => Cursor::at(id),
            None => Cursor::null(),
        };
        Self {
            list,
            front,
            back,
            remaining: list.len(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        for value in self.clone() {
            f.field(value);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Yields the element at the front of the remaining window and steps
    /// the front forward along the ring.
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.list.get(self.front)?;
        self.front = self.list.next(self.front);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Yields the element at the back of the remaining window and steps
    /// the back backward along the ring.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.list.get(self.back)?;
        self.back = self.list.prev(self.back);
        self.remaining -= 1;
        Some(value)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An iterator over the window `from..to` of a `List`, created by
/// [`List::range`].
///
/// The walk starts at `from` and stops when it reaches `to`, which is
/// *not* yielded. As a guard against an unreachable `to` (the null
/// cursor, or a cursor into another list), the walk never yields more
/// elements than the list holds.
///
/// [`List::range`]: crate::List::range
pub struct Range<'a, T: 'a> {
    list: &'a List<T>,
    cursor: Cursor,
    until: Cursor,
    remaining: usize,
}

impl<'a, T: 'a> Clone for Range<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            cursor: self.cursor,
            until: self.until,
            remaining: self.remaining,
        }
    }
}

impl<'a, T: 'a> Range<'a, T> {
    pub(crate) fn new(list: &'a List<T>, from: Cursor, to: Cursor) -> Self {
        Self {
            list,
            cursor: from,
            until: to,
            remaining: list.len(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Range<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Range");
        for value in self.clone() {
            f.field(value);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.cursor == self.until {
            return None;
        }
        let value = self.list.get(self.cursor)?;
        self.cursor = self.list.next(self.cursor);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<'a, T: 'a> FusedIterator for Range<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.list.cursor_head();
        if head.is_null() {
            return None;
        }
        Some(self.list.remove(head).0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let last = match self.list.last_id() {
            Some(id) => Cursor::at(id),
            None => return None,
        };
        Some(self.list.remove(last).0)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| {
            self.push_back(item);
        });
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        IntoIterator::into_iter(array).collect()
    }
}
