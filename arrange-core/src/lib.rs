//! Arrange core library
//!
//! Orders file listings by a
//! [`SortSpecification`](arrange_model::SortSpecification) and manages
//! named sort presets.
//!
//! - [`sorting`]: comparator, natural sort and sort strategy
//! - [`presets`]: the [`PresetStore`] port and its in-memory and JSON file
//!   adapters
//! - [`service`]: the [`SortingService`] contract and its store-backed
//!   implementation
//! - [`listing`]: reading a directory into
//!   [`FileEntry`](arrange_model::FileEntry) rows
//! - [`panel`]: a front-end facing state holder that forwards to a service
#![allow(missing_docs)]

pub mod error;
pub mod listing;
pub mod panel;
pub mod presets;
pub mod service;
pub mod sorting;

pub use error::{ArrangeError, Result};
pub use listing::{ListingOptions, list_directory};
pub use panel::SortPanel;
pub use presets::{InMemoryPresetStore, JsonFilePresetStore, PresetStore};
pub use service::{
    PresetConflictPolicy, PresetSortingService, ServiceOptions, SortingService,
};

pub use arrange_model;
