//! Error types for Runway Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// The node matches none of the four step shapes
    #[error("invalid step element: {found}")]
    UnrecognizedShape { found: String },

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
