//! Circular doubly-linked sibling rings over arena handles.
//!
//! In a circular ring:
//! - A single node points to itself (both `next` and `prev`)
//! - Any member can serve as the entry point
//! - Splicing two rings together is O(1)
//! - Iteration wraps around, so it stops when it returns to its start
//!
//! Roots of a heap form one ring, and the children of every node form
//! another. All operations here are O(1) except the iterators.

use crate::arena::Arena;
use crate::node::{Node, NodeHandle, NodeRef};
use slotmap::SlotMap;

impl<V> Arena<V> {
    /// Make `x` a ring of its own.
    #[inline]
    pub(crate) fn make_singleton(&mut self, x: NodeHandle) {
        let node = &mut self.nodes[x];
        node.next = x;
        node.prev = x;
    }

    /// Insert singleton `x` just before `anchor`, i.e. at the tail of the
    /// ring entered at `anchor`.
    pub(crate) fn insert_before(&mut self, anchor: NodeHandle, x: NodeHandle) {
        let tail = self.nodes[anchor].prev;
        self.nodes[x].prev = tail;
        self.nodes[x].next = anchor;
        self.nodes[tail].next = x;
        self.nodes[anchor].prev = x;
    }

    /// Take `x` out of its ring and leave it a singleton.
    ///
    /// Returns a remaining member of the old ring (`x`'s right neighbour), or
    /// `None` if `x` was alone.
    pub(crate) fn unlink(&mut self, x: NodeHandle) -> Option<NodeHandle> {
        let (next, prev) = (self.nodes[x].next, self.nodes[x].prev);
        if next == x {
            return None;
        }
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.make_singleton(x);
        Some(next)
    }

    /// Append the ring entered at `b` after the tail of the ring entered at `a`.
    pub(crate) fn splice(&mut self, a: NodeHandle, b: NodeHandle) {
        let a_tail = self.nodes[a].prev;
        let b_tail = self.nodes[b].prev;
        self.nodes[a_tail].next = b;
        self.nodes[b].prev = a_tail;
        self.nodes[b_tail].next = a;
        self.nodes[a].prev = b_tail;
    }

    /// Put the whole ring entered at `replacement` where `x` sits, leaving
    /// `x` a singleton.
    pub(crate) fn replace(&mut self, x: NodeHandle, replacement: NodeHandle) {
        if let Some(neighbour) = self.unlink(x) {
            // neighbour is x's old right side; the replacement goes before it
            self.splice(neighbour, replacement);
        }
    }

    /// Members of the ring entered at `start`, in `next` order.
    pub(crate) fn ring(&self, start: NodeHandle) -> RingHandles<'_, V> {
        RingHandles {
            nodes: &self.nodes,
            start,
            cursor: Some(start),
        }
    }
}

/// Iterator over the handles of one ring, visiting each member once.
pub(crate) struct RingHandles<'a, V> {
    nodes: &'a SlotMap<NodeHandle, Node<V>>,
    start: NodeHandle,
    cursor: Option<NodeHandle>,
}

impl<V> Iterator for RingHandles<'_, V> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<NodeHandle> {
        let current = self.cursor?;
        let next = self.nodes[current].next;
        self.cursor = (next != self.start).then_some(next);
        Some(current)
    }
}

/// Iterator over one sibling ring (a heap's roots, or one node's children),
/// starting at its entry point and visiting each member once.
pub struct Siblings<'a, V> {
    inner: Option<RingHandles<'a, V>>,
}

impl<'a, V> Siblings<'a, V> {
    pub(crate) fn new(arena: &'a Arena<V>, start: Option<NodeHandle>) -> Self {
        Siblings {
            inner: start.map(|s| arena.ring(s)),
        }
    }
}

impl<'a, V> Iterator for Siblings<'a, V> {
    type Item = NodeRef<'a, V>;

    fn next(&mut self) -> Option<NodeRef<'a, V>> {
        let inner = self.inner.as_mut()?;
        let nodes = inner.nodes;
        let handle = inner.next()?;
        Some(NodeRef::new(handle, &nodes[handle]))
    }
}
