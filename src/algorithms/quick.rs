use crate::frame::Emitter;

/// Lomuto quick sort with the last element of each range as pivot.
///
/// Each pivot is marked sorted once it lands, and so is any range that
/// shrinks to one element, so the green region fills in as the recursion
/// unwinds. The full range is marked once, after the outermost call.
pub fn sort(em: &mut Emitter<'_>) {
    let n = em.len();
    sort_range(em, 0, n);
    em.mark_all_sorted();
}

/// Sort the half-open range `lo..hi`
fn sort_range(em: &mut Emitter<'_>, lo: usize, hi: usize) {
    match hi - lo {
        0 => return,
        1 => {
            em.mark_sorted(lo);
            return;
        }
        _ => {}
    }
    let pivot_idx = partition(em, lo, hi - 1);
    em.mark_sorted(pivot_idx);
    sort_range(em, lo, pivot_idx);
    sort_range(em, pivot_idx + 1, hi);
}

/// Partition `low..=high` around `values[high]`, returning the pivot's final index
fn partition(em: &mut Emitter<'_>, low: usize, high: usize) -> usize {
    let pivot = em.value(high);
    // everything in low..store is below the pivot
    let mut store = low;
    for j in low..high {
        em.emit(&[j, high]);
        if em.value(j) < pivot {
            // emitted even when store == j, where the swap moves nothing
            em.swap(store, j);
            em.emit(&[store, j]);
            store += 1;
        }
    }
    em.swap(store, high);
    em.emit(&[store, high]);
    store
}
