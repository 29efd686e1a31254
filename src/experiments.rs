//! An experimental ring without the arena: every node is owned by exactly
//! two `StaticRc` halves, one reachable from each neighbour side, and
//! element access is mediated by a `GhostToken` brand. Kept private; the
//! arena-backed `List` is the supported container.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct TokenRing<'id, T> {
    head: Option<NodePtr<'id, T>>,
    tail: Option<NodePtr<'id, T>>,
}

struct Node<'id, T> {
    next: Option<NodePtr<'id, T>>,
    prev: Option<NodePtr<'id, T>>,
    value: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    fn new(value: T) -> Self {
        Self {
            next: None,
            prev: None,
            value,
        }
    }
}

impl<'id, T> Default for TokenRing<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }
}

impl<'id, T> TokenRing<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_back(&mut self, value: T, token: &mut GhostToken<'id>) {
        let (left, right) = Full::split(Full::new(GhostCell::new(Node::new(value))));
        match self.tail.take() {
            Some(old) => {
                old.deref().borrow_mut(token).next = Some(left);
                right.deref().borrow_mut(token).prev = Some(old);
            }
            None => self.head = Some(left),
        }
        self.tail = Some(right);
    }

    pub fn push_front(&mut self, value: T, token: &mut GhostToken<'id>) {
        let (left, right) = Full::split(Full::new(GhostCell::new(Node::new(value))));
        match self.head.take() {
            Some(old) => {
                old.deref().borrow_mut(token).prev = Some(left);
                right.deref().borrow_mut(token).next = Some(old);
            }
            None => self.tail = Some(left),
        }
        self.head = Some(right);
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let back = self.tail.take()?;
        let other = match back.deref().borrow_mut(token).prev.take() {
            Some(second_last) => {
                let other = second_last.deref().borrow_mut(token).next.take().unwrap();
                self.tail = Some(second_last);
                other
            }
            None => self.head.take().unwrap(),
        };
        Some(Full::into_box(Full::join(other, back)).into_inner().value)
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let front = self.head.take()?;
        let other = match front.deref().borrow_mut(token).next.take() {
            Some(second) => {
                let other = second.deref().borrow_mut(token).prev.take().unwrap();
                self.head = Some(second);
                other
            }
            None => self.tail.take().unwrap(),
        };
        Some(Full::into_box(Full::join(front, other)).into_inner().value)
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::TokenRing;
    use ghost_cell::GhostToken;

    #[test]
    fn ring_push_pop() {
        GhostToken::new(|mut token| {
            let mut ring = TokenRing::new();
            assert!(ring.is_empty());
            ring.push_back(1, &mut token);
            ring.push_back(2, &mut token);
            ring.push_front(0, &mut token);
            assert!(!ring.is_empty());
            assert_eq!(ring.pop_front(&mut token), Some(0));
            assert_eq!(ring.pop_back(&mut token), Some(2));
            assert_eq!(ring.pop_back(&mut token), Some(1));
            assert!(ring.is_empty());
            assert_eq!(ring.pop_front(&mut token), None);
        })
    }

    #[test]
    fn single_element_from_either_end() {
        GhostToken::new(|mut token| {
            let mut ring = TokenRing::new();
            ring.push_front("only", &mut token);
            assert_eq!(ring.pop_back(&mut token), Some("only"));
            assert!(ring.is_empty());

            ring.push_back("again", &mut token);
            assert_eq!(ring.pop_front(&mut token), Some("again"));
            assert!(ring.is_empty());
        })
    }
}
