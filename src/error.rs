//! Error types for forest operations
//!
//! [`HeapError`] is returned by the public operations on a
//! [`Forest`](crate::Forest). [`InvariantViolation`] is only produced by the
//! structural checker ([`HeapView::validate`](crate::HeapView::validate)).

use crate::node::NodeHandle;
use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap id does not name a live heap in this forest (never created,
    /// dropped, or consumed by a meld)
    #[error("heap id does not name a live heap in this forest")]
    UnknownHeap,
    /// The handle is no longer valid (element was removed)
    #[error("handle is no longer valid (element was removed)")]
    InvalidHandle,
    /// `decrease_key` was called with a negative amount
    #[error("decrease amount {0} is negative")]
    NegativeDelta(i64),
    /// Decreasing the key would go below `i64::MIN`
    #[error("decreasing key {key} by {delta} overflows i64")]
    KeyUnderflow { key: i64, delta: i64 },
    /// k-min was asked of a heap holding more than one tree
    #[error("k-min requires a heap holding exactly one tree, found {0}")]
    NotSingleTree(usize),
    /// Both operands of a meld are the same heap
    #[error("a heap cannot be melded into itself")]
    SelfMeld,
}

/// A broken structural invariant, as reported by the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("link to {0:?} does not name a live node")]
    DanglingLink(NodeHandle),
    #[error("root {0:?} has a parent")]
    RootHasParent(NodeHandle),
    #[error("root {0:?} is marked")]
    MarkedRoot(NodeHandle),
    #[error("sibling ring through {0:?} is not doubly linked")]
    BrokenRing(NodeHandle),
    #[error("{child:?} sits in the child ring of {parent:?} but points elsewhere")]
    WrongParent {
        child: NodeHandle,
        parent: NodeHandle,
    },
    #[error("{child:?} has a smaller key than its parent {parent:?}")]
    HeapOrder {
        parent: NodeHandle,
        child: NodeHandle,
    },
    #[error("{node:?} has rank {rank} but {children} children")]
    Rank {
        node: NodeHandle,
        rank: usize,
        children: usize,
    },
    #[error("{node:?} has rank {rank}, above {bound} for a heap of {size} nodes")]
    RankBound {
        node: NodeHandle,
        rank: usize,
        bound: usize,
        size: usize,
    },
    #[error("minimum pointer is {found:?} but heap holds {size} nodes")]
    MinPresence {
        found: Option<NodeHandle>,
        size: usize,
    },
    #[error("minimum pointer {0:?} is not a root")]
    MinNotRoot(NodeHandle),
    #[error("minimum pointer {min:?} is larger than root {smaller:?}")]
    MinNotSmallest { min: NodeHandle, smaller: NodeHandle },
    #[error("recorded size {recorded} but {actual} nodes are reachable")]
    Size { recorded: usize, actual: usize },
    #[error("recorded tree count {recorded} but the root list has {actual} roots")]
    TreeCount { recorded: usize, actual: usize },
    #[error("recorded marked count {recorded} but {actual} nodes are marked")]
    MarkedCount { recorded: usize, actual: usize },
}
