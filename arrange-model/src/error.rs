use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown sort column: {0:?}")]
    UnknownColumn(String),

    #[error("preset name must not be empty")]
    EmptyPresetName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
