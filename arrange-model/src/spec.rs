use serde::{Deserialize, Serialize};

use crate::column::SortColumn;
use crate::preset::SortPreset;

/// Immutable description of a desired ordering.
///
/// `natural_sort` and `case_sensitive` only influence textual columns
/// (see [`SortColumn::is_textual`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpecification {
    pub column: SortColumn,
    pub ascending: bool,
    /// Directories sort before files regardless of column or direction.
    pub folders_first: bool,
    /// Numeric substrings compare by value ("file2" before "file10").
    pub natural_sort: bool,
    pub case_sensitive: bool,
}

impl Default for SortSpecification {
    fn default() -> Self {
        Self {
            column: SortColumn::Name,
            ascending: true,
            folders_first: true,
            natural_sort: true,
            case_sensitive: false,
        }
    }
}

impl SortSpecification {
    pub fn new(column: SortColumn) -> Self {
        Self {
            column,
            ..Self::default()
        }
    }

    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn with_folders_first(mut self, folders_first: bool) -> Self {
        self.folders_first = folders_first;
        self
    }

    pub fn with_natural_sort(mut self, natural_sort: bool) -> Self {
        self.natural_sort = natural_sort;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Build a specification from a preset, supplying the two flags that
    /// presets do not persist.
    pub fn from_preset(
        preset: &SortPreset,
        natural_sort: bool,
        case_sensitive: bool,
    ) -> Self {
        Self {
            column: preset.column,
            ascending: preset.ascending,
            folders_first: preset.folders_first,
            natural_sort,
            case_sensitive,
        }
    }

    /// Whether natural-sort tokenization applies to this specification.
    pub fn uses_natural_sort(&self) -> bool {
        self.natural_sort && self.column.is_textual()
    }
}

impl From<&SortPreset> for SortSpecification {
    fn from(preset: &SortPreset) -> Self {
        let defaults = Self::default();
        Self::from_preset(
            preset,
            defaults.natural_sort,
            defaults.case_sensitive,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_sort_only_for_textual_columns() {
        let by_name = SortSpecification::new(SortColumn::Name);
        assert!(by_name.uses_natural_sort());

        let by_size = SortSpecification::new(SortColumn::Size);
        assert!(!by_size.uses_natural_sort());

        let disabled = by_name.with_natural_sort(false);
        assert!(!disabled.uses_natural_sort());
    }

    #[test]
    fn from_preset_keeps_caller_flags() {
        let preset = SortPreset::new(
            "largest",
            &SortSpecification::new(SortColumn::Size)
                .with_ascending(false)
                .with_folders_first(false),
        )
        .unwrap();

        let spec = SortSpecification::from_preset(&preset, false, true);
        assert_eq!(spec.column, SortColumn::Size);
        assert!(!spec.ascending);
        assert!(!spec.folders_first);
        assert!(!spec.natural_sort);
        assert!(spec.case_sensitive);
    }

    #[test]
    fn deserializes_partial_documents_with_defaults() {
        let spec: SortSpecification =
            serde_json::from_str(r#"{"column":"size","ascending":false}"#)
                .unwrap();
        assert_eq!(spec.column, SortColumn::Size);
        assert!(!spec.ascending);
        assert!(spec.folders_first);
        assert!(spec.natural_sort);
        assert!(!spec.case_sensitive);
    }
}
