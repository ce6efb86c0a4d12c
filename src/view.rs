//! Read-only view of a single heap.

use crate::arena::Arena;
use crate::forest::HeapId;
use crate::node::NodeRef;
use crate::ring::Siblings;
use crate::roots::Roots;

/// Borrowed, read-only accessors for one heap of a [`Forest`](crate::Forest).
///
/// All methods are O(1) except [`roots`](Self::roots),
/// [`counters_rep`](Self::counters_rep) and [`validate`](Self::validate).
pub struct HeapView<'a, V> {
    id: HeapId,
    pub(crate) arena: &'a Arena<V>,
    pub(crate) roots: &'a Roots,
}

impl<V> Clone for HeapView<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for HeapView<'_, V> {}

impl<'a, V> HeapView<'a, V> {
    pub(crate) fn new(id: HeapId, arena: &'a Arena<V>, roots: &'a Roots) -> Self {
        HeapView { id, arena, roots }
    }

    /// The heap this view reads.
    pub fn id(&self) -> HeapId {
        self.id
    }

    /// Number of nodes in the heap.
    pub fn size(&self) -> usize {
        self.roots.size
    }

    pub fn is_empty(&self) -> bool {
        self.roots.min.is_none()
    }

    /// Node with the smallest key, or `None` if the heap is empty.
    pub fn find_min(&self) -> Option<NodeRef<'a, V>> {
        self.roots.min.map(|min| NodeRef::new(min, &self.arena.nodes[min]))
    }

    /// Number of trees, i.e. length of the root list.
    pub fn tree_count(&self) -> usize {
        self.roots.tree_count
    }

    /// Number of marked nodes.
    pub fn marked_count(&self) -> usize {
        self.roots.marked_count
    }

    /// `tree_count + 2 * marked_count`.
    pub fn potential(&self) -> usize {
        self.roots.potential()
    }

    /// First root in root-list order.
    pub fn head(&self) -> Option<NodeRef<'a, V>> {
        self.roots.head.map(|h| NodeRef::new(h, &self.arena.nodes[h]))
    }

    /// Last root in root-list order.
    pub fn tail(&self) -> Option<NodeRef<'a, V>> {
        self.arena
            .tail(self.roots)
            .map(|t| NodeRef::new(t, &self.arena.nodes[t]))
    }

    /// The root list, from head to tail.
    pub fn roots(&self) -> Siblings<'a, V> {
        Siblings::new(self.arena, self.roots.head)
    }

    /// Entry `i` is the number of trees whose root has rank `i`.
    ///
    /// The vector ends at the largest root rank present; it is empty for an
    /// empty heap.
    pub fn counters_rep(&self) -> Vec<usize> {
        let mut counts = Vec::new();
        for root in self.roots() {
            let rank = root.rank();
            if rank >= counts.len() {
                counts.resize(rank + 1, 0);
            }
            counts[rank] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use crate::Forest;

    #[test]
    fn test_empty_view() {
        let mut forest: Forest = Forest::new();
        let heap = forest.create_heap();
        let view = forest.heap(heap).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.size(), 0);
        assert!(view.find_min().is_none());
        assert!(view.head().is_none());
        assert!(view.tail().is_none());
        assert_eq!(view.roots().count(), 0);
        assert!(view.counters_rep().is_empty());
        assert_eq!(view.potential(), 0);
    }

    #[test]
    fn test_counters_rep() {
        let mut forest: Forest = Forest::new();
        let heap = forest.create_heap();
        for k in 1..=13 {
            forest.insert(heap, k).unwrap();
        }
        assert_eq!(forest.heap(heap).unwrap().counters_rep(), vec![13]);

        forest.delete_min(heap).unwrap();
        let view = forest.heap(heap).unwrap();
        assert_eq!(view.counters_rep(), vec![0, 0, 1, 1]);
        assert_eq!(view.head().map(|h| h.rank()), Some(2));
        assert_eq!(view.tail().map(|t| t.rank()), Some(3));
    }

    #[test]
    fn test_roots_in_list_order() {
        let mut forest: Forest = Forest::new();
        let heap = forest.create_heap();
        for k in [4, 9, 1, 7] {
            forest.insert(heap, k).unwrap();
        }
        let view = forest.heap(heap).unwrap();
        let keys: Vec<i64> = view.roots().map(|r| r.key()).collect();
        assert_eq!(keys, vec![4, 9, 1, 7]);
        assert!(view.roots().all(|r| r.is_root() && !r.is_marked()));
    }
}
