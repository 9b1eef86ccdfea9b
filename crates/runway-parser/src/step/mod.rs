//! Step parsing module
//!
//! Decodes, validates and normalizes workflow step elements.

mod codec;
mod normalizer;
mod parser;
mod validation;

// Re-export public types
pub use codec::{StepDecoder, StepEncoder};
pub use normalizer::StepNormalizer;
pub use parser::StepParser;
pub use validation::{StepValidator, ValidationError};
