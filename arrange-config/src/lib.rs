//! Shared configuration library for Arrange.
//!
//! Loads [`ArrangeConfig`] from an explicit file, the environment, or a
//! default candidate file, and records which one won so front ends can
//! report it.
#![allow(missing_docs)]

pub mod loader;
pub mod models;

pub use loader::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigLoad, ConfigLoader,
    PRESETS_FILE_ENV,
};
pub use models::{ArrangeConfig, ConfigSource, default_presets_file};
