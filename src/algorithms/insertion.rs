use crate::frame::Emitter;

/// Walk each element left by adjacent swaps until its predecessor is not
/// greater. One frame per swap; sortedness is only known at the end.
pub fn sort(em: &mut Emitter<'_>) {
    let n = em.len();
    for i in 1..n {
        let mut j = i;
        while j > 0 && em.value(j - 1) > em.value(j) {
            em.swap(j - 1, j);
            em.emit(&[j - 1, j]);
            j -= 1;
        }
    }
    em.mark_all_sorted();
}
