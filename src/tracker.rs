//! Sorted-region tracking
//!
//! Indices land here once they are known to hold their final value. The set
//! only grows during a run; it is purely presentational (bars turn green).

use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default)]
pub struct SortedRegion {
    indices: FxHashSet<usize>,
}

impl SortedRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one index. Returns false if it was already marked.
    pub fn mark_sorted(&mut self, index: usize) -> bool {
        self.indices.insert(index)
    }

    /// Mark every index in `0..len`, returning the ones that were newly added
    pub fn mark_all_sorted(&mut self, len: usize) -> Vec<usize> {
        (0..len).filter(|&i| self.indices.insert(i)).collect()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// True once `0..len` is fully covered
    pub fn is_complete(&self, len: usize) -> bool {
        self.indices.len() == len && (0..len).all(|i| self.indices.contains(&i))
    }

    /// Marked indices in ascending order
    pub fn to_sorted_vec(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.indices.iter().copied().collect();
        out.sort_unstable();
        out
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}
