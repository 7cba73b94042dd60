//! Preset persistence
//!
//! [`PresetStore`] is the repository port the sorting service talks to.
//! Two adapters ship with the crate: a process-local store for tests and
//! embedding, and a JSON document on disk for the CLI.

mod json_file;
mod memory;

pub use json_file::{JsonFilePresetStore, PRESET_DOCUMENT_VERSION};
pub use memory::InMemoryPresetStore;

use arrange_model::SortPreset;
use async_trait::async_trait;

use crate::error::Result;

/// Repository port for named sort presets.
///
/// Names are compared exactly; callers normalize them before they reach the
/// store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PresetStore: Send + Sync {
    /// All presets in insertion order.
    async fn list(&self) -> Result<Vec<SortPreset>>;

    /// Fetch one preset, failing with `NotFound` when it does not exist.
    async fn get(&self, name: &str) -> Result<SortPreset>;

    /// Insert a preset, or replace an existing one with the same name in
    /// place.
    async fn put(&self, preset: SortPreset) -> Result<()>;

    /// Remove a preset. Removing a missing name succeeds.
    async fn remove(&self, name: &str) -> Result<()>;
}

/// Insert or replace `preset` in `presets`, keeping the position of an
/// existing entry.
pub(crate) fn upsert(presets: &mut Vec<SortPreset>, preset: SortPreset) {
    match presets.iter_mut().find(|p| p.name == preset.name) {
        Some(existing) => *existing = preset,
        None => presets.push(preset),
    }
}

/// Remove `name` from `presets`, returning whether anything changed.
pub(crate) fn remove_named(presets: &mut Vec<SortPreset>, name: &str) -> bool {
    let before = presets.len();
    presets.retain(|p| p.name != name);
    presets.len() != before
}
