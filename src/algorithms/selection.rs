use crate::frame::Emitter;

/// Scan the unsorted suffix for its minimum and swap it into place.
///
/// One frame per comparison and none for the swap, so a run over `n`
/// elements always emits `n(n-1)/2` frames. A swap shows up with the next
/// pass's first comparison; the last one is settled.
pub fn sort(em: &mut Emitter<'_>) {
    let n = em.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            em.emit(&[min_idx, j]);
            if em.value(j) < em.value(min_idx) {
                min_idx = j;
            }
        }
        em.swap(i, min_idx);
        em.mark_sorted(i);
    }
    em.mark_all_sorted();
}
