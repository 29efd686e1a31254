//! The node store backing a [`List`](crate::List).
//!
//! Nodes are kept in a vector of slots. Removing a node vacates its slot
//! and bumps the slot's generation; the slot is then reused by later
//! insertions. A [`NodeId`] records both the slot index and the generation
//! it was issued for, so a handle to a removed node can never be mistaken
//! for the slot's next occupant.

use std::fmt;

/// A generation-checked handle to a node slot.
///
/// `NodeId`s are plain `Copy` data and never borrow the arena. A handle
/// whose node has been removed is *stale*: every lookup checks the slot
/// generation and reports `None` instead of resurrecting the slot's new
/// occupant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    index: u32,
    generation: u32,
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

/// A ring node. The links always name live nodes of the same ring; a
/// solitary node names itself on both sides.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
}

struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `value` in a fresh node and returns its handle. The node
    /// starts out self-linked, forming a ring of one.
    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                debug_assert!(slot.node.is_none());
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    node: None,
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        };
        self.slots[id.index as usize].node = Some(Node {
            value,
            next: id,
            prev: id,
        });
        self.len += 1;
        id
    }

    /// Removes the node behind `id` and returns its value, or `None` if
    /// the handle is stale. The slot generation is bumped so `id` stays
    /// dead even after the slot is reused.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(node.value)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Drops every node, vacating each occupied slot with a generation
    /// bump exactly as [`remove`](Arena::remove) does. Handles issued
    /// before the call stay dead even after the slots are reused.
    pub(crate) fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
        self.len = 0;
    }
}
