//! Link and cut accounting.
//!
//! Each [`Forest`](crate::Forest) owns one [`Counters`] value shared by all of
//! its heaps. The counts only ever grow and never feed back into any
//! algorithm; they exist to observe amortized cost.

/// Running totals of link and cut operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Counters {
    links: u64,
    cuts: u64,
}

impl Counters {
    /// Trees hung under an equal-rank root during consolidation.
    pub fn links(&self) -> u64 {
        self.links
    }

    /// Subtrees detached from their parent by decrease-key or delete.
    pub fn cuts(&self) -> u64 {
        self.cuts
    }

    #[inline]
    pub(crate) fn record_link(&mut self) {
        self.links += 1;
    }

    #[inline]
    pub(crate) fn record_cut(&mut self) {
        self.cuts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut c = Counters::default();
        c.record_link();
        c.record_link();
        c.record_cut();
        assert_eq!(c.links(), 2);
        assert_eq!(c.cuts(), 1);
    }
}
