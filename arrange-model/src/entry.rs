use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type label reported for directories when no explicit type is known.
pub const FOLDER_TYPE_LABEL: &str = "File folder";

/// A single row of a file listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub path: PathBuf,
    pub is_dir: bool,
    /// Size in bytes; zero for directories.
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Human readable type description, e.g. `"PDF File"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl FileEntry {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            is_dir: false,
            size,
            modified: None,
            created: None,
            file_type: None,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            is_dir: true,
            size: 0,
            modified: None,
            created: None,
            file_type: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn with_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    /// Text after the last `.` of the name, case preserved.
    ///
    /// Dotfiles without a further dot (`.bashrc`) and names ending in a dot
    /// have no extension.
    pub fn extension(&self) -> Option<&str> {
        let dot = self.name.rfind('.')?;
        if dot == 0 || dot + 1 == self.name.len() {
            return None;
        }
        Some(&self.name[dot + 1..])
    }

    /// The explicit type when one was recorded, otherwise a label derived
    /// from the entry kind and extension.
    pub fn type_label(&self) -> String {
        if let Some(file_type) = &self.file_type {
            return file_type.clone();
        }
        derive_type_label(self.is_dir, self.extension())
    }
}

/// Label used when a listing does not carry its own type description.
pub fn derive_type_label(is_dir: bool, extension: Option<&str>) -> String {
    if is_dir {
        return FOLDER_TYPE_LABEL.to_string();
    }
    match extension {
        Some(ext) => format!("{} File", ext.to_uppercase()),
        None => "File".to_string(),
    }
}
