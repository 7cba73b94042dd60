//! Ordering function derived from a [`SortSpecification`]
//!
//! The comparator works on [`EntryKey`]s extracted once per entry. Keys are
//! compared in two tiers: the folders-first grouping (never reversed), then
//! the column key in the requested direction. Ties are left to the stable
//! sort, so equal entries keep their input order.

use super::keys::{ColumnKey, OptionalDateKey, SizeKey, TextKey};
use arrange_model::{FileEntry, SortColumn, SortSpecification};
use std::cmp::Ordering;

/// Everything the comparator needs to know about one entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryKey {
    pub is_dir: bool,
    pub column: ColumnKey,
}

/// Builds keys and compares them according to a specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparator {
    spec: SortSpecification,
}

impl Comparator {
    pub fn new(spec: SortSpecification) -> Self {
        Self { spec }
    }

    pub fn specification(&self) -> &SortSpecification {
        &self.spec
    }

    /// Extract the comparison key for `entry`.
    pub fn key_for(&self, entry: &FileEntry) -> EntryKey {
        let natural = self.spec.uses_natural_sort();
        let case_sensitive = self.spec.case_sensitive;
        let text = |value: &str| {
            ColumnKey::Text(TextKey::new(value, natural, case_sensitive))
        };

        let column = match self.spec.column {
            SortColumn::Name => text(&entry.name),
            SortColumn::Type => text(&entry.type_label()),
            SortColumn::Extension => text(entry.extension().unwrap_or("")),
            SortColumn::Size => ColumnKey::Size(SizeKey::new(entry.size)),
            SortColumn::DateModified => {
                ColumnKey::Date(OptionalDateKey::new(entry.modified))
            }
            SortColumn::DateCreated => {
                ColumnKey::Date(OptionalDateKey::new(entry.created))
            }
        };

        EntryKey {
            is_dir: entry.is_dir,
            column,
        }
    }

    /// Compare two previously extracted keys.
    pub fn compare_keys(&self, a: &EntryKey, b: &EntryKey) -> Ordering {
        if self.spec.folders_first {
            match (a.is_dir, b.is_dir) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }

        a.column.compare_with_order(&b.column, !self.spec.ascending)
    }

    /// Compare two entries directly. Convenient for one-off comparisons;
    /// bulk sorting should extract keys once instead.
    pub fn compare(&self, a: &FileEntry, b: &FileEntry) -> Ordering {
        self.compare_keys(&self.key_for(a), &self.key_for(b))
    }
}

impl From<SortSpecification> for Comparator {
    fn from(spec: SortSpecification) -> Self {
        Self::new(spec)
    }
}
