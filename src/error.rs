//! Error types for landmark mapping and preset storage.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, PoseError>;

#[derive(Debug, Error)]
pub enum PoseError {
    /// Fewer landmarks than the pose schema defines.
    #[error("need at least {required} pose landmarks, got {provided}")]
    InsufficientLandmarks { required: usize, provided: usize },

    /// Flat coordinate buffer is not a whole number of `x, y, z` triples.
    #[error("flat landmark buffer length {len} is not a multiple of 3")]
    MisalignedBuffer { len: usize },

    #[error("invalid preset name {0:?}")]
    InvalidPresetName(String),

    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    #[error("preset not found: {0}")]
    PresetNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
