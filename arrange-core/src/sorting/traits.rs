//! Core traits for sort keys
//!
//! Every value extracted from a [`FileEntry`](arrange_model::FileEntry) for
//! ordering purposes implements [`SortKey`], which lets the comparator treat
//! text, sizes and timestamps uniformly.

use std::cmp::Ordering;

/// Keys that can be compared for sorting
pub trait SortKey: Ord + Clone + Send + Sync {
    /// Compare two keys in the requested direction.
    ///
    /// The default simply flips the comparison. Keys that can be missing
    /// override this so that missing values stay last in both directions.
    #[inline]
    fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        if reverse {
            other.cmp(self)
        } else {
            self.cmp(other)
        }
    }
}
