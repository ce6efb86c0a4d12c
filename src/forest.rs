//! The forest: one node arena, any number of heaps, one set of counters.
//!
//! Heaps are addressed by [`HeapId`] and nodes by [`NodeHandle`]. All heaps
//! of a forest share the arena, which is what makes [`Forest::meld`] O(1)
//! and keeps handles valid when their heap is melded into another.
//!
//! # Example
//!
//! ```rust
//! use fibonacci_forest::Forest;
//!
//! let mut forest: Forest<&str> = Forest::new();
//! let heap = forest.create_heap();
//! let a = forest.insert_with(heap, 5, "five")?;
//! forest.insert_with(heap, 3, "three")?;
//!
//! forest.decrease_key(heap, a, 4)?;
//! assert_eq!(forest.heap(heap).and_then(|h| h.find_min()).map(|m| m.key()), Some(1));
//! assert_eq!(forest.delete_min(heap)?, Some((1, "five")));
//! # Ok::<(), fibonacci_forest::HeapError>(())
//! ```

use crate::arena::Arena;
use crate::counters::Counters;
use crate::error::HeapError;
use crate::node::{NodeHandle, NodeRef};
use crate::ring::Siblings;
use crate::roots::Roots;
use crate::view::HeapView;
use slotmap::{new_key_type, SlotMap};
use tracing::trace;

new_key_type! {
    /// Identifies one heap inside a [`Forest`].
    pub struct HeapId;
}

/// Owner of all nodes, heaps, and link/cut counters.
///
/// `V` is an optional payload carried alongside each key.
pub struct Forest<V = ()> {
    pub(crate) arena: Arena<V>,
    pub(crate) heaps: SlotMap<HeapId, Roots>,
}

impl<V> Default for Forest<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Forest<V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// A forest whose arena has room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        Forest {
            arena: Arena::with_capacity(nodes),
            heaps: SlotMap::with_key(),
        }
    }

    /// Create a new, empty heap.
    pub fn create_heap(&mut self) -> HeapId {
        self.heaps.insert(Roots::default())
    }

    pub fn contains_heap(&self, heap: HeapId) -> bool {
        self.heaps.contains_key(heap)
    }

    /// Number of live heaps.
    pub fn heap_count(&self) -> usize {
        self.heaps.len()
    }

    /// Number of live nodes across all heaps.
    pub fn node_count(&self) -> usize {
        self.arena.nodes.len()
    }

    /// Read-only accessors for one heap.
    pub fn heap(&self, heap: HeapId) -> Option<HeapView<'_, V>> {
        let roots = self.heaps.get(heap)?;
        Some(HeapView::new(heap, &self.arena, roots))
    }

    /// Smallest key of `heap`; `None` if it is empty or does not exist.
    pub fn find_min_key(&self, heap: HeapId) -> Option<i64> {
        let min = self.heaps.get(heap)?.min?;
        Some(self.arena.key(min))
    }

    /// Look up a live node.
    pub fn node(&self, node: NodeHandle) -> Option<NodeRef<'_, V>> {
        self.arena
            .nodes
            .get(node)
            .map(|n| NodeRef::new(node, n))
    }

    /// Children of a live node, starting at its designated child. Empty for
    /// leaves and for stale handles.
    pub fn children(&self, node: NodeHandle) -> Siblings<'_, V> {
        let first = self.arena.nodes.get(node).and_then(|n| n.child);
        Siblings::new(&self.arena, first)
    }

    /// Insert `key` with a default payload.
    pub fn insert(&mut self, heap: HeapId, key: i64) -> Result<NodeHandle, HeapError>
    where
        V: Default,
    {
        self.insert_with(heap, key, V::default())
    }

    /// Insert `key` carrying `value`. O(1); no links or cuts.
    ///
    /// Duplicate keys are allowed and are distinct nodes.
    pub fn insert_with(&mut self, heap: HeapId, key: i64, value: V) -> Result<NodeHandle, HeapError> {
        let roots = self.heaps.get_mut(heap).ok_or(HeapError::UnknownHeap)?;
        Ok(self.arena.insert(roots, key, value))
    }

    /// Remove and return the minimum key and its payload; `Ok(None)` on an
    /// empty heap.
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    pub fn delete_min(&mut self, heap: HeapId) -> Result<Option<(i64, V)>, HeapError> {
        let roots = self.heaps.get_mut(heap).ok_or(HeapError::UnknownHeap)?;
        Ok(self.arena.extract_min(roots).map(|n| (n.key, n.value)))
    }

    /// Lower the key of `node` by `delta >= 0`.
    ///
    /// `node` must belong to `heap`; passing a live node of another heap of
    /// the same forest corrupts both heaps' counts. Stale handles are detected.
    ///
    /// # Errors
    /// - [`HeapError::NegativeDelta`] if `delta < 0`
    /// - [`HeapError::KeyUnderflow`] if the new key would be below `i64::MIN`
    /// - [`HeapError::InvalidHandle`] if the node was already removed
    ///
    /// The heap is unchanged on error.
    ///
    /// # Time Complexity
    /// O(1) amortized.
    pub fn decrease_key(&mut self, heap: HeapId, node: NodeHandle, delta: i64) -> Result<(), HeapError> {
        let roots = self.heaps.get_mut(heap).ok_or(HeapError::UnknownHeap)?;
        self.arena.decrease_key(roots, node, delta)
    }

    /// Remove `node` from `heap`, returning its key and payload.
    ///
    /// Same ownership rule as [`decrease_key`](Self::decrease_key).
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    pub fn delete(&mut self, heap: HeapId, node: NodeHandle) -> Result<(i64, V), HeapError> {
        let roots = self.heaps.get_mut(heap).ok_or(HeapError::UnknownHeap)?;
        let removed = self.arena.delete(roots, node)?;
        Ok((removed.key, removed.value))
    }

    /// Move every tree of `from` into `into`. `from` no longer exists
    /// afterwards; handles to its nodes stay valid and now belong to `into`.
    ///
    /// # Time Complexity
    /// O(1). Trees are not linked.
    pub fn meld(&mut self, into: HeapId, from: HeapId) -> Result<(), HeapError> {
        if into == from {
            return Err(HeapError::SelfMeld);
        }
        if !self.heaps.contains_key(into) {
            return Err(HeapError::UnknownHeap);
        }
        let other = self.heaps.remove(from).ok_or(HeapError::UnknownHeap)?;
        let roots = self.heaps.get_mut(into).ok_or(HeapError::UnknownHeap)?;
        self.arena.meld(roots, other);
        Ok(())
    }

    /// Destroy a heap and free all of its nodes. Returns how many were freed.
    pub fn drop_heap(&mut self, heap: HeapId) -> Result<usize, HeapError> {
        let roots = self.heaps.remove(heap).ok_or(HeapError::UnknownHeap)?;
        let Some(head) = roots.head else {
            return Ok(0);
        };
        let doomed = self.arena.collect_trees(head);
        for node in &doomed {
            self.arena.nodes.remove(*node);
        }
        trace!(freed = doomed.len(), "dropped heap");
        Ok(doomed.len())
    }

    /// Link and cut totals for every heap in this forest.
    pub fn counters(&self) -> Counters {
        self.arena.counters
    }

    pub fn total_links(&self) -> u64 {
        self.arena.counters.links()
    }

    pub fn total_cuts(&self) -> u64 {
        self.arena.counters.cuts()
    }
}
