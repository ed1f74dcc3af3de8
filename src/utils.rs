/// Index of the parent of heap slot `index`.  Slot 0 has no parent.
pub(crate) fn parent_index(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Indices of the left and right children of heap slot `index`.
pub(crate) fn child_indices(index: usize) -> (usize, usize) {
    (2 * index + 1, 2 * index + 2)
}
