//! Decrease-key, delete, and cascading cuts.
//!
//! When a node's key drops below its parent's, the node is cut loose and
//! becomes a root. Its parent is then marked; a parent that was already
//! marked has now lost two children and is cut as well, and so on up the
//! ancestor chain. Each cut clears one mark (−2 potential) and adds one tree
//! (+1 potential), which pays for the chain.

use crate::arena::Arena;
use crate::error::HeapError;
use crate::node::{Node, NodeHandle};
use crate::roots::Roots;
use tracing::{debug, trace};

impl<V> Arena<V> {
    /// Lower the key of `x` by `delta` and restore heap order.
    ///
    /// `x` must belong to the heap described by `roots`.
    pub(crate) fn decrease_key(
        &mut self,
        roots: &mut Roots,
        x: NodeHandle,
        delta: i64,
    ) -> Result<(), HeapError> {
        if delta < 0 {
            return Err(HeapError::NegativeDelta(delta));
        }
        let node = self.nodes.get_mut(x).ok_or(HeapError::InvalidHandle)?;
        let key = node
            .key
            .checked_sub(delta)
            .ok_or(HeapError::KeyUnderflow {
                key: node.key,
                delta,
            })?;
        node.key = key;
        let parent = node.parent;

        match parent {
            None => {
                if roots.min.map_or(true, |min| key < self.nodes[min].key) {
                    roots.min = Some(x);
                }
            }
            Some(parent) => {
                if key < self.nodes[parent].key {
                    self.cascading_cut(roots, x, parent);
                }
            }
        }
        Ok(())
    }

    /// Remove `x` from the heap, whatever its key.
    ///
    /// `x` is treated as holding −∞: it is cut to the root list if needed,
    /// made the minimum, and extracted. No key arithmetic is done, so keys
    /// near `i64::MIN` are fine.
    pub(crate) fn delete(&mut self, roots: &mut Roots, x: NodeHandle) -> Result<Node<V>, HeapError> {
        let parent = self.nodes.get(x).ok_or(HeapError::InvalidHandle)?.parent;
        if let Some(parent) = parent {
            self.cascading_cut(roots, x, parent);
        }
        roots.min = Some(x);
        self.extract_min(roots).ok_or(HeapError::InvalidHandle)
    }

    /// Cut `x` from `parent`, then keep cutting marked ancestors.
    pub(crate) fn cascading_cut(&mut self, roots: &mut Roots, x: NodeHandle, parent: NodeHandle) {
        let (mut x, mut parent) = (x, parent);
        let mut chain = 1usize;
        loop {
            self.cut(roots, x, parent);

            let Some(grandparent) = self.nodes[parent].parent else {
                break;
            };
            let node = &mut self.nodes[parent];
            if !node.marked {
                node.marked = true;
                roots.marked_count += 1;
                break;
            }
            x = parent;
            parent = grandparent;
            chain += 1;
        }
        if chain > 1 {
            debug!(chain, marked = roots.marked_count, "cascading cut");
        }
    }

    /// Detach child `x` from `parent` and make it a root.
    fn cut(&mut self, roots: &mut Roots, x: NodeHandle, parent: NodeHandle) {
        self.counters.record_cut();

        let remaining = self.unlink(x);
        let p = &mut self.nodes[parent];
        // x is one of its children
        p.rank -= 1;
        if p.child == Some(x) {
            p.child = remaining;
        }

        let node = &mut self.nodes[x];
        node.parent = None;
        if node.marked {
            node.marked = false;
            roots.marked_count -= 1;
        }
        self.push_root(roots, x);
        trace!(key = self.nodes[x].key, trees = roots.tree_count, "cut");
    }
}
