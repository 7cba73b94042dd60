//! Utility functions for sorting operations
//!
//! Helpers for applying a computed permutation to a listing.

/// Reorder items in-place based on the given indices
///
/// Each index in `indices` tells us which element from the original slice
/// should be at that position. `indices` must be a permutation of
/// `0..items.len()`. Elements are moved by swapping along permutation
/// cycles, so `T` does not need to be `Clone`.
pub fn reorder_by_indices<T>(items: &mut [T], indices: &[usize]) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let mut placed = vec![false; items.len()];
    for start in 0..items.len() {
        if placed[start] {
            continue;
        }
        let mut current = start;
        loop {
            placed[current] = true;
            let source = indices[current];
            debug_assert!(source < items.len(), "Index out of bounds");
            if source == start {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}
