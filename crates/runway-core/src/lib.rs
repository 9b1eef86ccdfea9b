//! Runway Core - step types for Runway workflow definitions
//!
//! This crate provides the fundamental step types shared by the parser
//! and the execution engine:
//! - [`RawStep`], the shape-preserving form of a step element
//! - [`CanonicalStep`], the normalized form the engine runs
//! - Shape recognition from `serde_yaml` nodes and serialization back
//! - Error types

pub mod ast;
pub mod error;
pub mod recognizer;

// Re-export commonly used types
pub use ast::{CanonicalStep, OptionValue, RawStep, StepShape};
pub use error::{CoreError, Result};
