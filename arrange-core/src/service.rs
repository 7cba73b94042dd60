//! The sorting service: applies specifications and manages presets

use std::{any::type_name_of_val, fmt, sync::Arc};

use arrange_model::{
    FileEntry, SortPreset, SortSpecification, preset::normalize_name,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{ArrangeError, Result};
use crate::presets::PresetStore;
use crate::sorting::{
    DEFAULT_PARALLEL_THRESHOLD, SortCost, SortStrategy, SpecificationSort,
};

/// Listing size from which sorting moves to a blocking worker.
pub const DEFAULT_BLOCKING_THRESHOLD: usize = 2_048;

/// Sort and preset operations exposed to front ends.
#[async_trait]
pub trait SortingService: Send + Sync {
    /// Return `entries` ordered according to `spec`. Equal entries keep
    /// their relative input order.
    async fn apply_sort(
        &self,
        spec: SortSpecification,
        entries: Vec<FileEntry>,
    ) -> Result<Vec<FileEntry>>;

    /// All saved presets in creation order.
    async fn get_presets(&self) -> Result<Vec<SortPreset>>;

    async fn load_preset(&self, name: &str) -> Result<SortPreset>;

    async fn save_preset(&self, preset: SortPreset) -> Result<()>;

    /// Delete a preset. Deleting a name that does not exist succeeds.
    async fn delete_preset(&self, name: &str) -> Result<()>;
}

/// What `save_preset` does when a preset with the same name exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetConflictPolicy {
    /// Replace the stored preset, keeping its position.
    #[default]
    Overwrite,
    /// Fail with [`ArrangeError::DuplicateName`].
    Reject,
}

/// Tuning knobs for [`PresetSortingService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOptions {
    pub parallel_threshold: usize,
    pub blocking_threshold: usize,
    pub conflict_policy: PresetConflictPolicy,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            blocking_threshold: DEFAULT_BLOCKING_THRESHOLD,
            conflict_policy: PresetConflictPolicy::default(),
        }
    }
}

/// [`SortingService`] backed by a [`PresetStore`].
pub struct PresetSortingService<S>
where
    S: PresetStore + ?Sized,
{
    store: Arc<S>,
    options: ServiceOptions,
    // Single writer for preset mutations; reads and sorts never take it.
    mutation_lock: Mutex<()>,
}

impl<S> fmt::Debug for PresetSortingService<S>
where
    S: PresetStore + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresetSortingService")
            .field("store", &type_name_of_val(self.store.as_ref()))
            .field("options", &self.options)
            .finish()
    }
}

impl<S> PresetSortingService<S>
where
    S: PresetStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_options(store, ServiceOptions::default())
    }

    pub fn with_options(store: Arc<S>, options: ServiceOptions) -> Self {
        Self {
            store,
            options,
            mutation_lock: Mutex::new(()),
        }
    }

    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn strategy(&self, spec: SortSpecification) -> SpecificationSort {
        SpecificationSort::new(spec)
            .with_parallel_threshold(self.options.parallel_threshold)
            .with_expensive_threshold(self.options.blocking_threshold)
    }
}

#[async_trait]
impl<S> SortingService for PresetSortingService<S>
where
    S: PresetStore + ?Sized,
{
    async fn apply_sort(
        &self,
        spec: SortSpecification,
        mut entries: Vec<FileEntry>,
    ) -> Result<Vec<FileEntry>> {
        let strategy = self.strategy(spec);
        let cost = strategy.cost_estimate(entries.len());
        debug!(
            column = %spec.column,
            ascending = spec.ascending,
            entries = entries.len(),
            ?cost,
            "applying sort"
        );

        match cost {
            SortCost::Trivial => Ok(entries),
            SortCost::Moderate => {
                strategy.sort(&mut entries);
                Ok(entries)
            }
            SortCost::Expensive => tokio::task::spawn_blocking(move || {
                strategy.sort(&mut entries);
                entries
            })
            .await
            .map_err(|err| {
                ArrangeError::Internal(format!("sort task failed: {err}"))
            }),
        }
    }

    async fn get_presets(&self) -> Result<Vec<SortPreset>> {
        let presets = self.store.list().await?;
        debug!(count = presets.len(), "listed presets");
        Ok(presets)
    }

    async fn load_preset(&self, name: &str) -> Result<SortPreset> {
        let name = normalize_name(name)?;
        debug!(preset = %name, "loading preset");
        self.store.get(&name).await
    }

    async fn save_preset(&self, mut preset: SortPreset) -> Result<()> {
        preset.name = normalize_name(&preset.name)?;

        let _guard = self.mutation_lock.lock().await;

        if self.options.conflict_policy == PresetConflictPolicy::Reject {
            match self.store.get(&preset.name).await {
                Ok(_) => {
                    warn!(
                        preset = %preset.name,
                        "rejected save of duplicate preset"
                    );
                    return Err(ArrangeError::DuplicateName(preset.name));
                }
                Err(ArrangeError::NotFound(_)) => {}
                Err(err) => return Err(err),
            }
        }

        info!(
            preset = %preset.name,
            column = %preset.column,
            ascending = preset.ascending,
            folders_first = preset.folders_first,
            "saving preset"
        );
        self.store.put(preset).await
    }

    async fn delete_preset(&self, name: &str) -> Result<()> {
        let name = normalize_name(name)?;
        let _guard = self.mutation_lock.lock().await;
        info!(preset = %name, "deleting preset");
        self.store.remove(&name).await
    }
}
