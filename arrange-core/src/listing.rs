//! Reading one directory level into [`FileEntry`] rows

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use arrange_model::{FileEntry, entry::derive_type_label};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{ArrangeError, Result};

/// Knobs for [`list_directory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Include entries whose name starts with a dot.
    pub include_hidden: bool,
}

impl ListingOptions {
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}

/// List the immediate children of `path` in directory order.
///
/// Filesystem calls run on a blocking worker. Entries that disappear or
/// cannot be inspected mid-listing are skipped with a warning.
pub async fn list_directory(
    path: impl AsRef<Path>,
    options: &ListingOptions,
) -> Result<Vec<FileEntry>> {
    let path = path.as_ref().to_path_buf();
    let options = *options;

    tokio::task::spawn_blocking(move || read_entries(&path, options))
        .await
        .map_err(|err| {
            ArrangeError::Internal(format!("listing task failed: {err}"))
        })?
}

fn read_entries(
    path: &Path,
    options: ListingOptions,
) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(path)? {
        let dir_entry = match dir_entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    dir = %path.display(),
                    error = %err,
                    "skipping unreadable entry"
                );
                continue;
            }
        };

        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if !options.include_hidden && name.starts_with('.') {
            continue;
        }

        let entry_path = dir_entry.path();
        match inspect(&entry_path) {
            Ok(metadata) => entries.push(to_entry(name, entry_path, &metadata)),
            Err(err) => {
                warn!(
                    path = %entry_path.display(),
                    error = %err,
                    "skipping entry"
                );
            }
        }
    }

    debug!(dir = %path.display(), entries = entries.len(), "listed directory");
    Ok(entries)
}

// Follow symlinks, but still list dangling ones as plain files.
fn inspect(path: &Path) -> std::io::Result<Metadata> {
    fs::metadata(path).or_else(|_| fs::symlink_metadata(path))
}

fn to_entry(name: String, path: PathBuf, metadata: &Metadata) -> FileEntry {
    let is_dir = metadata.is_dir();
    let mut entry = if is_dir {
        FileEntry::directory(name)
    } else {
        FileEntry::file(name, metadata.len())
    }
    .with_path(path);

    entry.modified = metadata.modified().ok().map(DateTime::<Utc>::from);
    entry.created = metadata.created().ok().map(DateTime::<Utc>::from);
    entry.file_type = Some(derive_type_label(is_dir, entry.extension()));
    entry
}
