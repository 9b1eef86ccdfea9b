//! Abstract Syntax Tree (AST) definitions for Runway steps
//!
//! This module contains:
//! - The raw, shape-preserving step ([`RawStep`])
//! - The canonical step consumed by the execution engine ([`CanonicalStep`])
//! - Step names and option keys

pub mod canonical;
pub mod names;
pub mod step;

pub use canonical::CanonicalStep;
pub use step::{ArgsMap, InlineMap, OptionValue, OptionsMap, RawStep, StepShape};
