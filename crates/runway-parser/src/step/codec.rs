//! Step decoding and encoding
//!
//! Decoding from text keeps the YAML parser's position so a malformed
//! step points at the offending line.

use crate::error::{DecodeError, Result};
use crate::yaml_parser::YamlParser;
use runway_core::ast::InlineMap;
use runway_core::RawStep;
use serde_yaml::Value as YamlValue;

/// Decodes step elements into [`RawStep`]
pub struct StepDecoder;

impl StepDecoder {
    /// Decode a step from YAML text
    pub fn decode_str(yaml_str: &str) -> std::result::Result<RawStep, DecodeError> {
        if YamlParser::is_blank(yaml_str) {
            return Ok(RawStep::Empty);
        }

        let value =
            YamlParser::parse(yaml_str).map_err(|e| DecodeError::from_yaml(&e, yaml_str))?;

        RawStep::from_value(&value).map_err(|mismatch| {
            // Re-read as the last shape tried to get a positioned error.
            match serde_yaml::from_str::<InlineMap>(yaml_str) {
                Err(e) if e.location().is_some() => DecodeError::from_yaml(&e, yaml_str),
                _ => DecodeError::unpositioned(mismatch.to_string()),
            }
        })
    }

    /// Decode a step from a YAML node
    pub fn decode_value(yaml: &YamlValue) -> runway_core::Result<RawStep> {
        RawStep::from_value(yaml)
    }
}

/// Encodes [`RawStep`] back into YAML of the same shape
pub struct StepEncoder;

impl StepEncoder {
    pub fn encode(step: &RawStep) -> Result<YamlValue> {
        Ok(step.to_value()?)
    }

    pub fn encode_str(step: &RawStep) -> Result<String> {
        Ok(serde_yaml::to_string(step)?)
    }
}
