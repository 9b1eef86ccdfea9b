//! Runway Parser - YAML step parser for Runway workflows
//!
//! This crate reads a single workflow step element, in any of its four
//! YAML shapes, validates it and normalizes it into a
//! [`runway_core::CanonicalStep`].

pub mod error;
pub mod step;
pub mod yaml_parser;

// Re-export main parser types
pub use error::{DecodeError, ParseError, Result};
pub use step::{
    StepDecoder, StepEncoder, StepNormalizer, StepParser, StepValidator, ValidationError,
};
pub use yaml_parser::YamlParser;
