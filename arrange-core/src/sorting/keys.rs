//! Sort key types for comparing file entries
//!
//! These types wrap the values extracted from a listing entry and handle
//! missing data gracefully in their `Ord` implementations.

use super::natural::NaturalKey;
use super::traits::SortKey;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// String key for text columns (name, type, extension)
///
/// The text is folded to lowercase up front when the comparison is case
/// insensitive, and tokenized up front when natural sort is requested.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TextKey {
    Plain(String),
    Natural(NaturalKey),
}

impl TextKey {
    pub fn new(value: &str, natural: bool, case_sensitive: bool) -> Self {
        let folded;
        let value = if case_sensitive {
            value
        } else {
            folded = value.to_lowercase();
            folded.as_str()
        };

        if natural {
            TextKey::Natural(NaturalKey::new(value))
        } else {
            TextKey::Plain(value.to_string())
        }
    }
}

impl Ord for TextKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TextKey::Plain(a), TextKey::Plain(b)) => a.cmp(b),
            (TextKey::Natural(a), TextKey::Natural(b)) => a.cmp(b),
            // A single comparator never mixes modes; keep the order total.
            (TextKey::Plain(_), TextKey::Natural(_)) => Ordering::Less,
            (TextKey::Natural(_), TextKey::Plain(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for TextKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for TextKey {}

/// Byte count key
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct SizeKey(u64);

impl SizeKey {
    pub fn new(value: u64) -> Self {
        SizeKey(value)
    }
}

impl SortKey for SizeKey {}

/// Date/time key for temporal sorting
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionalDateKey(Option<DateTime<Utc>>);

impl OptionalDateKey {
    pub fn new(value: Option<DateTime<Utc>>) -> Self {
        OptionalDateKey(value)
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

impl Ord for OptionalDateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with dates come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for OptionalDateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for OptionalDateKey {
    fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                if reverse {
                    other.cmp(self)
                } else {
                    self.cmp(other)
                }
            }
        }
    }
}

/// Primary key for one entry under one column
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColumnKey {
    Text(TextKey),
    Size(SizeKey),
    Date(OptionalDateKey),
}

impl ColumnKey {
    /// Compare two keys of the same column in the requested direction.
    pub fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        match (self, other) {
            (ColumnKey::Text(a), ColumnKey::Text(b)) => {
                a.compare_with_order(b, reverse)
            }
            (ColumnKey::Size(a), ColumnKey::Size(b)) => {
                a.compare_with_order(b, reverse)
            }
            (ColumnKey::Date(a), ColumnKey::Date(b)) => {
                a.compare_with_order(b, reverse)
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            ColumnKey::Text(_) => 0,
            ColumnKey::Size(_) => 1,
            ColumnKey::Date(_) => 2,
        }
    }
}
