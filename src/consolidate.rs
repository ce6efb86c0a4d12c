//! Extract-minimum and consolidation.
//!
//! Extracting the minimum promotes its children to roots, removes it, and
//! then consolidates: roots of equal rank are linked pairwise (larger key under
//! smaller key) until every root has a distinct rank. The rebuilt root list is
//! ordered by ascending rank, so `head` is the lowest-rank tree.
//!
//! Consolidation is the only place trees are linked. Each link lowers the
//! tree count by one, which pays for the walk over the root list.

use crate::arena::Arena;
use crate::node::{Node, NodeHandle};
use crate::rank::bucket_capacity;
use crate::roots::Roots;
use smallvec::{smallvec, SmallVec};
use tracing::debug;

/// Ranks stay below ~1.44·log₂(n); 64 buckets never spill for in-memory heaps.
type Buckets = SmallVec<[Option<NodeHandle>; 64]>;

impl<V> Arena<V> {
    /// Remove the minimum node and restore all heap invariants.
    ///
    /// Returns the removed node, or `None` on an empty heap.
    pub(crate) fn extract_min(&mut self, roots: &mut Roots) -> Option<Node<V>> {
        let min = roots.min?;

        let children = self.nodes[min].child.take();
        if let Some(first) = children {
            let promoted: SmallVec<[NodeHandle; 16]> = self.ring(first).collect();
            for child in promoted {
                let node = &mut self.nodes[child];
                node.parent = None;
                if node.marked {
                    node.marked = false;
                    roots.marked_count -= 1;
                }
            }
        }

        // Some member of the root list once `min` is gone.
        let survivor = match children {
            Some(first) => {
                self.replace(min, first);
                Some(first)
            }
            None => self.unlink(min),
        };
        if roots.head == Some(min) {
            roots.head = survivor;
        }

        let removed = self.nodes.remove(min);
        roots.size -= 1;
        roots.min = None;

        match survivor {
            Some(start) => self.consolidate(roots, start),
            None => {
                roots.head = None;
                roots.tree_count = 0;
            }
        }
        removed
    }

    /// Link equal-rank roots until ranks are unique, then rebuild the root
    /// list and recompute `tree_count` and `min`.
    fn consolidate(&mut self, roots: &mut Roots, start: NodeHandle) {
        let pending: Vec<NodeHandle> = self.ring(start).collect();
        let before = pending.len();

        let mut buckets: Buckets = smallvec![None; bucket_capacity(roots.size)];
        let mut links = 0usize;

        for root in pending {
            let mut tree = root;
            loop {
                let rank = self.nodes[tree].rank as usize;
                if rank >= buckets.len() {
                    buckets.resize(rank + 1, None);
                }
                match buckets[rank].take() {
                    None => {
                        buckets[rank] = Some(tree);
                        break;
                    }
                    Some(other) => {
                        // on equal keys the tree already in the bucket stays on top
                        let (parent, child) = if self.nodes[tree].key < self.nodes[other].key {
                            (tree, other)
                        } else {
                            (other, tree)
                        };
                        self.link(child, parent);
                        links += 1;
                        tree = parent;
                    }
                }
            }
        }

        roots.head = None;
        roots.min = None;
        roots.tree_count = 0;
        for tree in buckets.into_iter().flatten() {
            self.make_singleton(tree);
            let node = &mut self.nodes[tree];
            node.parent = None;
            node.marked = false;
            self.push_root(roots, tree);
        }

        debug!(
            before,
            after = roots.tree_count,
            links,
            size = roots.size,
            "consolidated root list"
        );
    }

    /// Hang root `child` under root `parent`. The old root ring of `child` is
    /// abandoned; consolidation rebuilds the root list afterwards.
    fn link(&mut self, child: NodeHandle, parent: NodeHandle) {
        self.make_singleton(child);
        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.marked = false;

        match self.nodes[parent].child {
            Some(first) => self.insert_before(first, child),
            None => self.nodes[parent].child = Some(child),
        }
        let parent_node = &mut self.nodes[parent];
        // at most rank_bound(size) <= 91, so u8 never overflows
        parent_node.rank += 1;
        self.counters.record_link();
    }
}
