use std::path::{Path, PathBuf};

use arrange_model::SortPreset;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{PresetStore, remove_named, upsert};
use crate::error::{ArrangeError, Result};

/// Version written to, and accepted from, preset documents.
pub const PRESET_DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct PresetDocument {
    version: u32,
    #[serde(default)]
    presets: Vec<SortPreset>,
}

/// Presets persisted as a single JSON document.
///
/// A missing file reads as an empty store. Every mutation rewrites the
/// whole document through a temp file in the same directory followed by a
/// rename, so readers never observe a partial write.
#[derive(Debug)]
pub struct JsonFilePresetStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFilePresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<SortPreset>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    path = %self.path.display(),
                    "preset file missing; starting empty"
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let document: PresetDocument = serde_json::from_slice(&bytes)?;
        if document.version != PRESET_DOCUMENT_VERSION {
            return Err(ArrangeError::Storage(format!(
                "unsupported preset document version {} in {:?} (expected {})",
                document.version, self.path, PRESET_DOCUMENT_VERSION
            )));
        }

        for preset in &document.presets {
            preset.validate().map_err(|err| {
                ArrangeError::Storage(format!(
                    "invalid preset in {:?}: {err}",
                    self.path
                ))
            })?;
        }

        Ok(document.presets)
    }

    async fn store(&self, presets: Vec<SortPreset>) -> Result<()> {
        let document = PresetDocument {
            version: PRESET_DOCUMENT_VERSION,
            presets,
        };
        let bytes = serde_json::to_vec_pretty(&document)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|err| {
                ArrangeError::Storage(format!(
                    "failed to create preset dir {:?}: {err}",
                    parent
                ))
            })?;
        }

        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ArrangeError::Storage(format!(
                    "preset path {:?} has no file name",
                    self.path
                ))
            })?;
        let tmp = self.path.with_file_name(format!(
            "{file_name}.tmp-{}",
            Uuid::new_v4().simple()
        ));

        tokio::fs::write(&tmp, &bytes).await.map_err(|err| {
            ArrangeError::Storage(format!(
                "failed to write temp preset file {:?}: {err}",
                tmp
            ))
        })?;

        if let Err(err) = tokio::fs::rename(&tmp, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                warn!(
                    path = %tmp.display(),
                    error = %cleanup,
                    "failed to remove temp preset file"
                );
            }
            return Err(ArrangeError::Storage(format!(
                "failed to move preset file {:?} -> {:?}: {err}",
                tmp, self.path
            )));
        }

        debug!(
            path = %self.path.display(),
            presets = document.presets.len(),
            "preset file written"
        );
        Ok(())
    }
}

#[async_trait]
impl PresetStore for JsonFilePresetStore {
    async fn list(&self) -> Result<Vec<SortPreset>> {
        self.load().await
    }

    async fn get(&self, name: &str) -> Result<SortPreset> {
        self.load()
            .await?
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ArrangeError::NotFound(name.to_string()))
    }

    async fn put(&self, preset: SortPreset) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut presets = self.load().await?;
        upsert(&mut presets, preset);
        self.store(presets).await
    }

    async fn remove(&self, name: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut presets = self.load().await?;
        if remove_named(&mut presets, name) {
            self.store(presets).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrange_model::{SortColumn, SortSpecification};
    use tempfile::tempdir;

    fn preset(name: &str, column: SortColumn) -> SortPreset {
        SortPreset::new(name, &SortSpecification::new(column)).unwrap()
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFilePresetStore::new(dir.path().join("presets.json"));
        assert!(store.list().await.unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn survives_reopen_and_keeps_position_on_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("presets.json");

        let store = JsonFilePresetStore::new(&path);
        store.put(preset("first", SortColumn::Name)).await.unwrap();
        store.put(preset("second", SortColumn::Size)).await.unwrap();
        store.put(preset("first", SortColumn::DateModified)).await.unwrap();
        drop(store);

        let reopened = JsonFilePresetStore::new(&path);
        let listed = reopened.list().await.unwrap();
        let names: Vec<_> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(listed[0].column, SortColumn::DateModified);

        // No temp files left behind next to the document.
        let leftovers = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp-"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn writes_versioned_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.json");
        let store = JsonFilePresetStore::new(&path);
        store.put(preset("by size", SortColumn::Size)).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["presets"][0]["name"], "by size");
        assert_eq!(raw["presets"][0]["column"], "size");
    }

    #[tokio::test]
    async fn unknown_version_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.json");
        std::fs::write(&path, r#"{"version": 7, "presets": []}"#).unwrap();

        let store = JsonFilePresetStore::new(&path);
        let err = store.list().await.unwrap_err();
        assert!(matches!(err, ArrangeError::Storage(_)), "{err:?}");
    }

    #[tokio::test]
    async fn corrupt_document_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFilePresetStore::new(&path);
        let err = store.get("anything").await.unwrap_err();
        assert!(matches!(err, ArrangeError::Serialization(_)), "{err:?}");
    }

    #[tokio::test]
    async fn remove_missing_does_not_create_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.json");
        let store = JsonFilePresetStore::new(&path);

        store.remove("ghost").await.unwrap();
        assert!(!path.exists());
    }
}
