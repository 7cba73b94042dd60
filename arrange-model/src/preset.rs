use serde::{Deserialize, Serialize};

use crate::column::SortColumn;
use crate::error::{ModelError, Result};
use crate::spec::SortSpecification;

/// A named, reusable sort configuration.
///
/// Only the column, direction and grouping are persisted. Natural sort and
/// case sensitivity stay with whoever applies the preset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortPreset {
    pub name: String,
    pub column: SortColumn,
    pub ascending: bool,
    pub folders_first: bool,
}

impl SortPreset {
    /// Capture `spec` under `name`. The name is trimmed and must not be
    /// empty afterwards.
    pub fn new(
        name: impl AsRef<str>,
        spec: &SortSpecification,
    ) -> Result<Self> {
        let name = normalize_name(name.as_ref())?;
        Ok(Self {
            name,
            column: spec.column,
            ascending: spec.ascending,
            folders_first: spec.folders_first,
        })
    }

    /// Check the invariants a deserialized or hand-built preset must hold.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyPresetName);
        }
        Ok(())
    }

    pub fn to_specification(
        &self,
        natural_sort: bool,
        case_sensitive: bool,
    ) -> SortSpecification {
        SortSpecification::from_preset(self, natural_sort, case_sensitive)
    }
}

/// Trim a preset name, rejecting names that are blank.
pub fn normalize_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ModelError::EmptyPresetName);
    }
    Ok(trimmed.to_string())
}
