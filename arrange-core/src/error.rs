use arrange_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArrangeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Preset not found: {0}")]
    NotFound(String),

    #[error("A preset named {0:?} already exists")]
    DuplicateName(String),

    #[error("Invalid sort specification: {0}")]
    InvalidSpecification(String),

    #[error("Invalid preset: {0}")]
    InvalidPreset(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ModelError> for ArrangeError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownColumn(_) => {
                ArrangeError::InvalidSpecification(err.to_string())
            }
            ModelError::EmptyPresetName => {
                ArrangeError::InvalidPreset(err.to_string())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ArrangeError>;
