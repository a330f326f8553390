use crate::frame::Emitter;

/// Build a max-heap, then repeatedly swap the root behind the heap and
/// restore the heap property on what is left.
pub fn sort(em: &mut Emitter<'_>) {
    let n = em.len();
    for i in (0..n / 2).rev() {
        sift_down(em, n, i);
    }
    for end in (1..n).rev() {
        em.swap(0, end);
        em.emit(&[0, end]);
        sift_down(em, end, 0);
        em.mark_sorted(end);
    }
    em.mark_all_sorted();
}

/// Sift `root` down within the heap occupying `0..size`
fn sift_down(em: &mut Emitter<'_>, size: usize, root: usize) {
    let mut i = root;
    loop {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut largest = i;
        if left < size && em.value(left) > em.value(largest) {
            largest = left;
        }
        if right < size && em.value(right) > em.value(largest) {
            largest = right;
        }
        if largest == i {
            return;
        }
        em.swap(i, largest);
        em.emit(&[i, largest]);
        i = largest;
    }
}
