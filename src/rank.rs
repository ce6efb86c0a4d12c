//! Node ranks and the two bounds consolidation works with.
//!
//! A node's rank is its number of children. Because a non-root node loses at
//! most one child before it is cut itself, a node of rank `r` roots a subtree
//! of at least `F(r + 2)` nodes (Fibonacci numbers, `F(1) = F(2) = 1`).
//! [`rank_bound`] turns that around into the largest rank a heap of `n`
//! nodes can hold. It never exceeds 91 for a 64-bit `usize`, so ranks are
//! stored as `u8`.
//!
//! [`bucket_capacity`] is the smaller, binomial bound `⌈log₂(n + 1)⌉`.
//! Consolidation starts its bucket array at that length for the size *after*
//! the extracted node is gone. The bound is exact while every tree is
//! binomial (inserts and extractions only). Cuts can push ranks past it, up
//! to [`rank_bound`], so consolidation grows the array when a rank reaches
//! its end.

/// Number of children of a node.
pub type Rank = u8;

/// Initial bucket-array length for consolidating a heap of `len` nodes:
/// `⌈log₂(len + 1)⌉`.
///
/// ```rust
/// use fibonacci_forest::rank::bucket_capacity;
///
/// assert_eq!(bucket_capacity(0), 0);
/// assert_eq!(bucket_capacity(1), 1);
/// assert_eq!(bucket_capacity(13), 4);
/// ```
#[inline]
pub fn bucket_capacity(len: usize) -> usize {
    // floor(log2(len)) + 1 == ceil(log2(len + 1)) for len >= 1
    (usize::BITS - len.leading_zeros()) as usize
}

/// Largest rank any node of a `len`-node heap can have: the largest `r`
/// with `F(r + 2) <= len`.
///
/// ```rust
/// use fibonacci_forest::rank::rank_bound;
///
/// // F(6) = 8: eight nodes allow one node of rank 4
/// assert_eq!(rank_bound(8), 4);
/// assert_eq!(rank_bound(7), 3);
/// ```
pub fn rank_bound(len: usize) -> usize {
    // (low, high) = (F(r + 2), F(r + 3))
    let (mut low, mut high) = (1usize, 2usize);
    let mut rank = 0;
    while high <= len {
        rank += 1;
        match low.checked_add(high) {
            Some(next) => {
                low = high;
                high = next;
            }
            None => break,
        }
    }
    rank
}
