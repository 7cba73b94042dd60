//! Toolkit-agnostic state holder for a sort settings panel
//!
//! [`SortPanel`] keeps the fields a front end binds to and forwards its
//! actions to a [`SortingService`]. It has no notification machinery; a
//! front end re-reads the fields after each awaited action.

use std::{any::type_name_of_val, fmt, sync::Arc};

use arrange_model::{FileEntry, SortColumn, SortPreset, SortSpecification};
use tracing::debug;

use crate::error::{ArrangeError, Result};
use crate::service::SortingService;

pub struct SortPanel {
    service: Arc<dyn SortingService>,
    pub column: SortColumn,
    pub ascending: bool,
    pub folders_first: bool,
    pub natural_sort: bool,
    pub case_sensitive: bool,
    pub presets: Vec<SortPreset>,
    pub selected_preset: Option<String>,
}

impl fmt::Debug for SortPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortPanel")
            .field("service", &type_name_of_val(self.service.as_ref()))
            .field("column", &self.column)
            .field("ascending", &self.ascending)
            .field("folders_first", &self.folders_first)
            .field("natural_sort", &self.natural_sort)
            .field("case_sensitive", &self.case_sensitive)
            .field("presets", &self.presets.len())
            .field("selected_preset", &self.selected_preset)
            .finish()
    }
}

impl SortPanel {
    /// A panel showing the default specification with no presets loaded.
    pub fn new(service: Arc<dyn SortingService>) -> Self {
        Self::with_specification(service, SortSpecification::default())
    }

    pub fn with_specification(
        service: Arc<dyn SortingService>,
        spec: SortSpecification,
    ) -> Self {
        Self {
            service,
            column: spec.column,
            ascending: spec.ascending,
            folders_first: spec.folders_first,
            natural_sort: spec.natural_sort,
            case_sensitive: spec.case_sensitive,
            presets: Vec::new(),
            selected_preset: None,
        }
    }

    /// The specification described by the current field values.
    pub fn specification(&self) -> SortSpecification {
        SortSpecification {
            column: self.column,
            ascending: self.ascending,
            folders_first: self.folders_first,
            natural_sort: self.natural_sort,
            case_sensitive: self.case_sensitive,
        }
    }

    pub async fn refresh_presets(&mut self) -> Result<()> {
        self.presets = self.service.get_presets().await?;
        Ok(())
    }

    pub async fn apply(
        &self,
        entries: Vec<FileEntry>,
    ) -> Result<Vec<FileEntry>> {
        self.service.apply_sort(self.specification(), entries).await
    }

    /// Save the current fields as a preset. Blank names are ignored.
    pub async fn save_current_as(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring save with blank preset name");
            return Ok(());
        }

        let preset = SortPreset::new(name, &self.specification())?;
        self.service.save_preset(preset).await?;
        self.refresh_presets().await
    }

    /// Delete a preset, clearing the selection if it pointed at it. Blank
    /// names are ignored.
    pub async fn delete_preset(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring delete with blank preset name");
            return Ok(());
        }

        self.service.delete_preset(name).await?;
        if self.selected_preset.as_deref() == Some(name) {
            self.selected_preset = None;
        }
        self.refresh_presets().await
    }

    /// Copy a preset's column, direction and grouping into the fields.
    /// Natural sort and case sensitivity are left as they are. Unknown
    /// names are ignored.
    pub async fn select_preset(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }

        let preset = match self.service.load_preset(name).await {
            Ok(preset) => preset,
            Err(ArrangeError::NotFound(_)) => {
                debug!(preset = %name, "ignoring selection of unknown preset");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        self.column = preset.column;
        self.ascending = preset.ascending;
        self.folders_first = preset.folders_first;
        self.selected_preset = Some(preset.name);
        Ok(())
    }
}
