//! Core data model definitions shared across Arrange crates.
#![allow(missing_docs)]

pub mod column;
pub mod entry;
pub mod error;
pub mod preset;
pub mod spec;

// Intentionally curated re-exports for downstream consumers.
pub use column::SortColumn;
pub use entry::FileEntry;
pub use error::{ModelError, Result as ModelResult};
pub use preset::SortPreset;
pub use spec::SortSpecification;
