//! Parser error types

use crate::step::ValidationError;
use crate::yaml_parser::YamlParser;
use runway_core::CoreError;
use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// The step text is not one of the recognized shapes
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The shape was recognized but its contents are invalid
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Error from the core step model
    #[error(transparent)]
    Core(#[from] CoreError),

    /// YAML serialization error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Invalid field value
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Error in one element of a step list
    #[error("step {index}: {source}")]
    Step {
        index: usize,
        source: Box<ParseError>,
    },
}

/// Structural decode failure with the YAML parser's position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}{}", excerpt_suffix(.excerpt))]
pub struct DecodeError {
    /// Message from the YAML parser, unchanged
    pub message: String,
    /// 1-based line, 0 when unknown
    pub line: usize,
    /// 1-based column, 0 when unknown
    pub column: usize,
    /// Source lines around the error with a caret under the column
    pub excerpt: String,
}

impl DecodeError {
    /// Build from a `serde_yaml` error raised while reading `source`
    pub fn from_yaml(error: &serde_yaml::Error, source: &str) -> Self {
        match error.location() {
            Some(location) => Self {
                message: error.to_string(),
                line: location.line(),
                column: location.column(),
                excerpt: YamlParser::excerpt(source, location.line(), location.column()),
            },
            None => Self::unpositioned(error.to_string()),
        }
    }

    pub fn unpositioned(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: 0,
            column: 0,
            excerpt: String::new(),
        }
    }

    pub fn has_position(&self) -> bool {
        self.line > 0
    }
}

fn excerpt_suffix(excerpt: &str) -> String {
    if excerpt.is_empty() {
        String::new()
    } else {
        format!("\n{}", excerpt)
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
