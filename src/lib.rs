//! Fibonacci heaps over integer keys, stored in a shared node arena.
//!
//! A [`Forest`] owns the nodes of any number of heaps plus the link/cut
//! counters. Heaps are addressed by [`HeapId`] and elements by
//! generation-checked [`NodeHandle`]s, so a handle used after its element was
//! removed is reported as an error rather than dangling.
//!
//! # Complexity
//!
//! | Operation       | Complexity         |
//! |-----------------|--------------------|
//! | `insert`        | O(1)               |
//! | `find_min`      | O(1)               |
//! | `meld`          | O(1)               |
//! | `decrease_key`  | O(1) amortized     |
//! | `delete_min`    | O(log n) amortized |
//! | `delete`        | O(log n) amortized |
//! | `k_min`         | O(k · deg(H))      |
//!
//! The amortized bounds follow from the potential `trees + 2 · marked`, which
//! [`HeapView::potential`] exposes together with the link and cut totals in
//! [`Counters`].
//!
//! # Example
//!
//! ```rust
//! use fibonacci_forest::Forest;
//!
//! let mut forest: Forest = Forest::new();
//! let heap = forest.create_heap();
//! let handle1 = forest.insert(heap, 5)?;
//! forest.insert(heap, 3)?;
//! forest.decrease_key(heap, handle1, 4)?;
//!
//! let view = forest.heap(heap).unwrap();
//! assert_eq!(view.find_min().map(|n| n.key()), Some(1));
//! assert_eq!(view.size(), 2);
//! # Ok::<(), fibonacci_forest::HeapError>(())
//! ```

mod arena;
mod consolidate;
pub mod counters;
mod cut;
pub mod error;
pub mod forest;
mod kmin;
pub mod node;
pub mod rank;
pub mod ring;
mod roots;
mod validate;
pub mod view;

pub use counters::Counters;
pub use error::{HeapError, InvariantViolation};
pub use forest::{Forest, HeapId};
pub use node::{NodeHandle, NodeRef};
pub use ring::Siblings;
pub use view::HeapView;
