//! Arena node record and its public read view.
//!
//! Nodes live in a [`slotmap::SlotMap`] owned by the forest. Every link
//! (`parent`, `child`, `next`, `prev`) is a [`NodeHandle`] into that map, so the
//! cyclic sibling rings are plain indices and a handle that outlives its node
//! is caught by the slot generation instead of dangling.
//!
//! A node is a root exactly when it has no parent; there is no separate flag.

use crate::rank::Rank;
use slotmap::new_key_type;

new_key_type! {
    /// Generation-checked handle to a node, returned by insert and accepted
    /// by `decrease_key`/`delete`.
    pub struct NodeHandle;
}

#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    pub(crate) key: i64,
    pub(crate) value: V,
    pub(crate) rank: Rank,
    /// Lost a child since it last became a child. Always false on roots.
    pub(crate) marked: bool,
    pub(crate) parent: Option<NodeHandle>,
    /// Entry point into the child ring.
    pub(crate) child: Option<NodeHandle>,
    pub(crate) next: NodeHandle,
    pub(crate) prev: NodeHandle,
}

impl<V> Node<V> {
    /// A detached node whose sibling ring is just itself.
    pub(crate) fn singleton(handle: NodeHandle, key: i64, value: V) -> Self {
        Node {
            key,
            value,
            rank: 0,
            marked: false,
            parent: None,
            child: None,
            next: handle,
            prev: handle,
        }
    }
}

/// Read-only view of one node, for traversal and inspection.
///
/// Obtained from [`Forest::node`](crate::Forest::node),
/// [`HeapView::find_min`](crate::HeapView::find_min) or the sibling iterators.
pub struct NodeRef<'a, V> {
    handle: NodeHandle,
    node: &'a Node<V>,
}

impl<V> Clone for NodeRef<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for NodeRef<'_, V> {}

impl<V> std::fmt::Debug for NodeRef<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("handle", &self.handle)
            .field("key", &self.node.key)
            .field("rank", &self.node.rank)
            .field("marked", &self.node.marked)
            .finish()
    }
}

impl<'a, V> NodeRef<'a, V> {
    pub(crate) fn new(handle: NodeHandle, node: &'a Node<V>) -> Self {
        NodeRef { handle, node }
    }

    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    pub fn key(&self) -> i64 {
        self.node.key
    }

    pub fn value(&self) -> &'a V {
        &self.node.value
    }

    /// Number of children.
    pub fn rank(&self) -> usize {
        self.node.rank as usize
    }

    pub fn is_marked(&self) -> bool {
        self.node.marked
    }

    pub fn is_root(&self) -> bool {
        self.node.parent.is_none()
    }

    pub fn parent(&self) -> Option<NodeHandle> {
        self.node.parent
    }

    pub fn child(&self) -> Option<NodeHandle> {
        self.node.child
    }

    /// Right sibling; the node itself when it is alone in its ring.
    pub fn next(&self) -> NodeHandle {
        self.node.next
    }

    /// Left sibling; the node itself when it is alone in its ring.
    pub fn prev(&self) -> NodeHandle {
        self.node.prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_singleton_points_to_itself() {
        let mut nodes: SlotMap<NodeHandle, Node<&str>> = SlotMap::with_key();
        let h = nodes.insert_with_key(|h| Node::singleton(h, 7, "seven"));

        let view = NodeRef::new(h, &nodes[h]);
        assert_eq!(view.key(), 7);
        assert_eq!(*view.value(), "seven");
        assert_eq!(view.next(), h);
        assert_eq!(view.prev(), h);
        assert_eq!(view.rank(), 0);
        assert!(view.is_root());
        assert!(!view.is_marked());
        assert_eq!(view.child(), None);
    }
}
