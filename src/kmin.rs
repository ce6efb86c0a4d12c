//! The k smallest keys of a single-tree heap, without touching it.
//!
//! A scratch heap holds the frontier: candidates whose parents have already
//! been reported. Each scratch node carries the [`NodeHandle`] of the node it
//! stands for. Popping the scratch minimum yields the next smallest key, and
//! that node's children join the frontier. Heap order guarantees no
//! unreported node is smaller than the frontier minimum.
//!
//! Each of the k rounds inserts at most deg(H) candidates, so the work is
//! O(k · deg(H)) plus the scratch extractions. The scratch heap lives in its
//! own forest, so the inspected forest's counters do not move.

use crate::error::HeapError;
use crate::forest::{Forest, HeapId};
use crate::node::NodeHandle;

impl<V> Forest<V> {
    /// The `k` smallest keys of `heap`, ascending.
    ///
    /// `heap` must hold a single tree. Returns fewer than `k` keys if the heap
    /// is smaller, and an empty vector for `k == 0` or an empty heap.
    ///
    /// # Errors
    /// - [`HeapError::UnknownHeap`] if `heap` is not live
    /// - [`HeapError::NotSingleTree`] if `heap` holds more than one tree
    ///
    /// ```rust
    /// use fibonacci_forest::Forest;
    ///
    /// let mut forest: Forest = Forest::new();
    /// let heap = forest.create_heap();
    /// for k in 0..=32 {
    ///     forest.insert(heap, k)?;
    /// }
    /// forest.delete_min(heap)?;
    /// assert_eq!(forest.k_min(heap, 4)?, vec![1, 2, 3, 4]);
    /// # Ok::<(), fibonacci_forest::HeapError>(())
    /// ```
    pub fn k_min(&self, heap: HeapId, k: usize) -> Result<Vec<i64>, HeapError> {
        let roots = self.heaps.get(heap).ok_or(HeapError::UnknownHeap)?;
        let Some(root) = roots.head else {
            return Ok(Vec::new());
        };
        if roots.tree_count != 1 {
            return Err(HeapError::NotSingleTree(roots.tree_count));
        }

        let wanted = k.min(roots.size);
        let mut scratch: Forest<NodeHandle> = Forest::with_capacity(wanted);
        let frontier = scratch.create_heap();
        scratch.insert_with(frontier, self.arena.key(root), root)?;

        let mut out = Vec::with_capacity(wanted);
        while out.len() < wanted {
            let Some((key, origin)) = scratch.delete_min(frontier)? else {
                break;
            };
            out.push(key);
            for child in self.children(origin) {
                scratch.insert_with(frontier, child.key(), child.handle())?;
            }
        }
        Ok(out)
    }
}
