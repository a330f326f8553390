//! Top-down merge sort over one shared buffer
//!
//! Runs are merged in place: when the right run's front is smaller, it is
//! rotated down to the left front's position. Nothing is copied out of the
//! dataset, so every frame shows a permutation of the input and nested
//! merges write straight into the positions the viewer is watching.

use crate::frame::Emitter;

pub fn sort(em: &mut Emitter<'_>) {
    let n = em.len();
    sort_range(em, 0, n);
}

/// Sort `lo..hi`. Only the call covering the whole dataset knows that every
/// position is final.
fn sort_range(em: &mut Emitter<'_>, lo: usize, hi: usize) {
    if hi - lo <= 1 {
        if hi - lo == em.len() {
            em.mark_all_sorted();
        }
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(em, lo, mid);
    sort_range(em, mid, hi);
    merge(em, lo, mid, hi);

    if hi - lo == em.len() {
        em.mark_all_sorted();
    }
}

/// Merge sorted runs `lo..mid` and `mid..hi`
fn merge(em: &mut Emitter<'_>, lo: usize, mid: usize, hi: usize) {
    // left run occupies left..right, right run occupies right..hi
    let mut left = lo;
    let mut right = mid;
    while left < right && right < hi {
        if em.value(left) <= em.value(right) {
            em.emit(&[left, right]);
        } else {
            em.rotate_right(left, right);
            em.emit(&[left, right]);
            right += 1;
        }
        left += 1;
    }
}
