//! Per-heap aggregate: root list endpoints, minimum pointer and counts.
//!
//! The root list is a ring; `head` is its entry point and the tail is
//! `head.prev`, so only `head` is stored.

use crate::arena::Arena;
use crate::node::NodeHandle;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Roots {
    pub(crate) head: Option<NodeHandle>,
    /// Root with the smallest key; `None` iff the heap is empty.
    pub(crate) min: Option<NodeHandle>,
    pub(crate) size: usize,
    pub(crate) tree_count: usize,
    pub(crate) marked_count: usize,
}

impl Roots {
    pub(crate) fn potential(&self) -> usize {
        self.tree_count + 2 * self.marked_count
    }
}

impl<V> Arena<V> {
    pub(crate) fn tail(&self, roots: &Roots) -> Option<NodeHandle> {
        roots.head.map(|head| self.nodes[head].prev)
    }

    /// Add singleton root `x` at the tail of the root list and update the
    /// minimum. Does not touch `size`.
    pub(crate) fn push_root(&mut self, roots: &mut Roots, x: NodeHandle) {
        match roots.head {
            Some(head) => self.insert_before(head, x),
            None => roots.head = Some(x),
        }
        roots.tree_count += 1;

        let key = self.nodes[x].key;
        match roots.min {
            Some(min) if self.nodes[min].key <= key => {}
            _ => roots.min = Some(x),
        }
    }

    /// New root holding `key`.
    pub(crate) fn insert(&mut self, roots: &mut Roots, key: i64, value: V) -> NodeHandle {
        let x = self.alloc(key, value);
        self.push_root(roots, x);
        roots.size += 1;
        x
    }

    /// Concatenate `other`'s root list after `roots`' tail and take over its
    /// counts. No trees are linked.
    pub(crate) fn meld(&mut self, roots: &mut Roots, other: Roots) {
        let Some(other_head) = other.head else {
            return;
        };
        let Some(head) = roots.head else {
            *roots = other;
            return;
        };

        self.splice(head, other_head);
        if let (Some(a), Some(b)) = (roots.min, other.min) {
            if self.nodes[b].key < self.nodes[a].key {
                roots.min = Some(b);
            }
        }
        roots.size += other.size;
        roots.tree_count += other.tree_count;
        roots.marked_count += other.marked_count;
        trace!(
            size = roots.size,
            trees = roots.tree_count,
            "melded root lists"
        );
    }
}
