//! Node arena shared by every heap of a forest.
//!
//! The heap algorithms are split across modules as `impl Arena` blocks:
//! [`ring`](crate::ring) for sibling rings, [`roots`](crate::roots) for root
//! list bookkeeping, [`consolidate`](crate::consolidate) for extract-min, and
//! [`cut`](crate::cut) for decrease-key and delete.
//!
//! Internal links always name live nodes, so the engine indexes the slotmap
//! directly. Handles coming from callers go through `get`/`contains_key`
//! first.

use crate::counters::Counters;
use crate::node::{Node, NodeHandle};
use slotmap::SlotMap;

pub(crate) struct Arena<V> {
    pub(crate) nodes: SlotMap<NodeHandle, Node<V>>,
    pub(crate) counters: Counters,
}

impl<V> Arena<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: SlotMap::with_capacity_and_key(capacity),
            counters: Counters::default(),
        }
    }

    /// Allocate a detached singleton node.
    pub(crate) fn alloc(&mut self, key: i64, value: V) -> NodeHandle {
        self.nodes
            .insert_with_key(|handle| Node::singleton(handle, key, value))
    }

    #[inline]
    pub(crate) fn key(&self, node: NodeHandle) -> i64 {
        self.nodes[node].key
    }

    /// Collect every node of the trees whose roots form the ring at `start`.
    pub(crate) fn collect_trees(&self, start: NodeHandle) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(ring_start) = stack.pop() {
            for node in self.ring(ring_start) {
                out.push(node);
                if let Some(child) = self.nodes[node].child {
                    stack.push(child);
                }
            }
        }
        out
    }
}
