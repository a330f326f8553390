use crate::frame::Emitter;

/// Compare every adjacent pair, swapping when out of order. After pass `i`
/// the largest remaining value has settled at `n - i - 1`.
pub fn sort(em: &mut Emitter<'_>) {
    let n = em.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if em.value(j) > em.value(j + 1) {
                em.swap(j, j + 1);
            }
            em.emit(&[j, j + 1]);
        }
        em.mark_sorted(n - i - 1);
    }
    em.mark_all_sorted();
}
