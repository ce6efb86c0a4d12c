//! Structural invariant checker.
//!
//! Walks every tree of one heap and verifies:
//! - every root has no parent and is unmarked
//! - every sibling ring is consistently doubly linked
//! - every child points back at the node whose ring it sits in
//! - heap order: no child key is below its parent's
//! - rank equals the number of children and stays within the Fibonacci
//!   bound for the heap's size
//! - `min` is a root holding the smallest root key, absent iff empty
//! - recorded size, tree count and marked count match the structure
//!
//! O(n). Meant for tests and debugging, not for hot paths.

use crate::error::InvariantViolation;
use crate::node::{Node, NodeHandle};
use crate::rank::rank_bound;
use crate::view::HeapView;
use slotmap::SlotMap;

impl<V> HeapView<'_, V> {
    /// Check every structural invariant of this heap.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let nodes = &self.arena.nodes;
        let roots = self.roots;

        let mut seen = 0usize;
        let mut marked = 0usize;
        let mut trees = 0usize;
        let mut smallest: Option<NodeHandle> = None;
        let bound = rank_bound(roots.size);

        if let Some(head) = roots.head {
            let root_ring = walk_ring(nodes, head)?;
            let mut stack = Vec::new();
            for &root in &root_ring {
                let node = &nodes[root];
                if node.parent.is_some() {
                    return Err(InvariantViolation::RootHasParent(root));
                }
                if node.marked {
                    return Err(InvariantViolation::MarkedRoot(root));
                }
                trees += 1;
                if smallest.map_or(true, |s| node.key < nodes[s].key) {
                    smallest = Some(root);
                }
                stack.push(root);
            }

            while let Some(parent) = stack.pop() {
                seen += 1;
                let node = &nodes[parent];
                if node.marked {
                    marked += 1;
                }
                if node.rank as usize > bound {
                    return Err(InvariantViolation::RankBound {
                        node: parent,
                        rank: node.rank as usize,
                        bound,
                        size: roots.size,
                    });
                }
                let children = match node.child {
                    Some(first) => walk_ring(nodes, first)?,
                    None => Vec::new(),
                };
                if children.len() != node.rank as usize {
                    return Err(InvariantViolation::Rank {
                        node: parent,
                        rank: node.rank as usize,
                        children: children.len(),
                    });
                }
                for child in children {
                    let c = &nodes[child];
                    if c.parent != Some(parent) {
                        return Err(InvariantViolation::WrongParent { child, parent });
                    }
                    if c.key < node.key {
                        return Err(InvariantViolation::HeapOrder { parent, child });
                    }
                    stack.push(child);
                }
                if seen > nodes.len() {
                    // a cycle through child links
                    return Err(InvariantViolation::BrokenRing(parent));
                }
            }
        }

        match (roots.min, smallest) {
            (None, None) if roots.size == 0 => {}
            (Some(min), Some(best)) => {
                let node = nodes.get(min).ok_or(InvariantViolation::DanglingLink(min))?;
                if node.parent.is_some() {
                    return Err(InvariantViolation::MinNotRoot(min));
                }
                if nodes[best].key < node.key {
                    return Err(InvariantViolation::MinNotSmallest { min, smaller: best });
                }
            }
            (found, _) => {
                return Err(InvariantViolation::MinPresence {
                    found,
                    size: roots.size,
                })
            }
        }

        if seen != roots.size {
            return Err(InvariantViolation::Size {
                recorded: roots.size,
                actual: seen,
            });
        }
        if trees != roots.tree_count {
            return Err(InvariantViolation::TreeCount {
                recorded: roots.tree_count,
                actual: trees,
            });
        }
        if marked != roots.marked_count {
            return Err(InvariantViolation::MarkedCount {
                recorded: roots.marked_count,
                actual: marked,
            });
        }
        Ok(())
    }
}

/// Members of the ring at `start`, checking links and liveness as it goes.
fn walk_ring<V>(
    nodes: &SlotMap<NodeHandle, Node<V>>,
    start: NodeHandle,
) -> Result<Vec<NodeHandle>, InvariantViolation> {
    let mut members = Vec::new();
    let mut current = start;
    loop {
        let node = nodes
            .get(current)
            .ok_or(InvariantViolation::DanglingLink(current))?;
        let next = nodes
            .get(node.next)
            .ok_or(InvariantViolation::DanglingLink(node.next))?;
        if next.prev != current {
            return Err(InvariantViolation::BrokenRing(current));
        }
        members.push(current);
        if members.len() > nodes.len() {
            return Err(InvariantViolation::BrokenRing(start));
        }
        current = node.next;
        if current == start {
            return Ok(members);
        }
    }
}
