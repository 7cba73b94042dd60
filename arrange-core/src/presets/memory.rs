use arrange_model::SortPreset;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{PresetStore, remove_named, upsert};
use crate::error::{ArrangeError, Result};

/// Process-local preset store.
#[derive(Debug, Default)]
pub struct InMemoryPresetStore {
    presets: RwLock<Vec<SortPreset>>,
}

impl InMemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, applying the same replace-in-place rule as `put`.
    pub fn with_presets(presets: impl IntoIterator<Item = SortPreset>) -> Self {
        let mut seeded = Vec::new();
        for preset in presets {
            upsert(&mut seeded, preset);
        }
        Self {
            presets: RwLock::new(seeded),
        }
    }
}

#[async_trait]
impl PresetStore for InMemoryPresetStore {
    async fn list(&self) -> Result<Vec<SortPreset>> {
        Ok(self.presets.read().await.clone())
    }

    async fn get(&self, name: &str) -> Result<SortPreset> {
        self.presets
            .read()
            .await
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| ArrangeError::NotFound(name.to_string()))
    }

    async fn put(&self, preset: SortPreset) -> Result<()> {
        upsert(&mut *self.presets.write().await, preset);
        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<()> {
        remove_named(&mut *self.presets.write().await, name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrange_model::{SortColumn, SortSpecification};

    fn preset(name: &str, column: SortColumn) -> SortPreset {
        SortPreset::new(name, &SortSpecification::new(column)).unwrap()
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = InMemoryPresetStore::new();
        let err = store.get("nope").await.unwrap_err();
        assert!(matches!(err, ArrangeError::NotFound(name) if name == "nope"));
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = InMemoryPresetStore::new();
        store.put(preset("z", SortColumn::Name)).await.unwrap();
        store.put(preset("a", SortColumn::Size)).await.unwrap();
        store.put(preset("z", SortColumn::Type)).await.unwrap();

        let listed = store.list().await.unwrap();
        let names: Vec<_> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
        assert_eq!(listed[0].column, SortColumn::Type);
    }

    #[tokio::test]
    async fn remove_missing_leaves_store_unchanged() {
        let store = InMemoryPresetStore::with_presets([preset(
            "keep",
            SortColumn::Name,
        )]);
        store.remove("other").await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);

        store.remove("keep").await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
