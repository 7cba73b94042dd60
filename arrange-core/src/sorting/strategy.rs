//! Strategy pattern for applying orderings to listings
//!
//! A strategy owns everything needed to reorder a slice and can report how
//! expensive that will be, which lets callers decide whether to run it
//! inline or hand it to a blocking worker.

use super::comparator::{Comparator, EntryKey};
use super::utils::reorder_by_indices;
use arrange_model::{FileEntry, SortSpecification};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Listing size at which key extraction is spread across the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4_096;

/// A sorting strategy over items of type `T`
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);

    /// Estimate the computational cost of sorting `len` items
    fn cost_estimate(&self, len: usize) -> SortCost;
}

/// Estimated cost of a sorting operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortCost {
    /// O(1) - nothing to reorder
    Trivial,
    /// Small enough to run inline on an async task
    Moderate,
    /// Large enough to deserve a blocking worker
    Expensive,
}

/// Stable sort driven by a [`SortSpecification`]
///
/// Keys are extracted once per entry (in parallel past
/// `parallel_threshold`), indices are stably sorted by key, then the
/// permutation is applied in place.
#[derive(Debug, Clone, Copy)]
pub struct SpecificationSort {
    comparator: Comparator,
    parallel_threshold: usize,
    expensive_threshold: usize,
}

impl SpecificationSort {
    pub fn new(spec: SortSpecification) -> Self {
        Self {
            comparator: Comparator::new(spec),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            expensive_threshold: DEFAULT_PARALLEL_THRESHOLD / 2,
        }
    }

    /// Listing size from which keys are extracted on the rayon pool.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// Listing size from which [`SortStrategy::cost_estimate`] reports
    /// [`SortCost::Expensive`].
    pub fn with_expensive_threshold(mut self, threshold: usize) -> Self {
        self.expensive_threshold = threshold.max(2);
        self
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    fn extract_keys(&self, items: &[FileEntry]) -> Vec<EntryKey> {
        if items.len() >= self.parallel_threshold {
            items
                .par_iter()
                .map(|entry| self.comparator.key_for(entry))
                .collect()
        } else {
            items
                .iter()
                .map(|entry| self.comparator.key_for(entry))
                .collect()
        }
    }
}

impl SortStrategy<FileEntry> for SpecificationSort {
    fn sort(&self, items: &mut [FileEntry]) {
        if items.len() < 2 {
            return;
        }

        let keys = self.extract_keys(items);
        if keys.is_sorted_by(|a, b| {
            self.comparator.compare_keys(a, b) != Ordering::Greater
        }) {
            return;
        }

        // `sort_by` is stable, so equal keys keep their input order.
        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices
            .sort_by(|&a, &b| self.comparator.compare_keys(&keys[a], &keys[b]));

        reorder_by_indices(items, &indices);
    }

    fn cost_estimate(&self, len: usize) -> SortCost {
        if len < 2 {
            SortCost::Trivial
        } else if len >= self.expensive_threshold {
            SortCost::Expensive
        } else {
            SortCost::Moderate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrange_model::SortColumn;

    #[test]
    fn cost_grows_with_listing_size() {
        let strategy = SpecificationSort::new(SortSpecification::default())
            .with_expensive_threshold(100);

        assert_eq!(strategy.cost_estimate(0), SortCost::Trivial);
        assert_eq!(strategy.cost_estimate(1), SortCost::Trivial);
        assert_eq!(strategy.cost_estimate(99), SortCost::Moderate);
        assert_eq!(strategy.cost_estimate(100), SortCost::Expensive);
    }

    #[test]
    fn ordered_listing_with_ties_is_left_as_is() {
        let mut entries = vec![
            FileEntry::file("b", 1),
            FileEntry::file("a", 1),
            FileEntry::file("c", 2),
        ];
        let expected = entries.clone();

        SpecificationSort::new(SortSpecification::new(SortColumn::Size))
            .sort(&mut entries);
        assert_eq!(entries, expected);

        SpecificationSort::new(SortSpecification::new(SortColumn::Name))
            .sort(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn parallel_and_sequential_extraction_agree() {
        let entries: Vec<FileEntry> = (0..64)
            .map(|i| FileEntry::file(format!("item{}", (i * 37) % 64), i))
            .collect();
        let spec = SortSpecification::new(SortColumn::Name);

        let mut sequential = entries.clone();
        SpecificationSort::new(spec)
            .with_parallel_threshold(usize::MAX)
            .sort(&mut sequential);

        let mut parallel = entries;
        SpecificationSort::new(spec)
            .with_parallel_threshold(1)
            .sort(&mut parallel);

        assert_eq!(sequential, parallel);
        assert_eq!(sequential[0].name, "item0");
        assert_eq!(sequential[63].name, "item63");
    }
}
