//! Step parser implementation
//!
//! Chains decoding, validation and normalization.

use super::codec::StepDecoder;
use super::normalizer::StepNormalizer;
use super::validation::StepValidator;
use crate::error::{DecodeError, ParseError, Result};
use crate::yaml_parser::YamlParser;
use runway_core::{CanonicalStep, RawStep};
use serde_yaml::Value as YamlValue;

/// Step parser
pub struct StepParser;

impl StepParser {
    /// Parse a single step element from YAML text
    pub fn parse(yaml_str: &str) -> Result<CanonicalStep> {
        let raw = Self::parse_raw(yaml_str)?;
        Ok(StepNormalizer::to_canonical(&raw))
    }

    /// Decode and validate a step, keeping its original shape
    pub fn parse_raw(yaml_str: &str) -> Result<RawStep> {
        let raw = StepDecoder::decode_str(yaml_str)?;
        StepValidator::validate(&raw)?;
        Ok(raw)
    }

    /// Parse a single step element from a YAML node
    pub fn parse_from_yaml(yaml: &YamlValue) -> Result<CanonicalStep> {
        let raw = StepDecoder::decode_value(yaml)?;
        StepValidator::validate(&raw)?;
        Ok(StepNormalizer::to_canonical(&raw))
    }

    /// Parse a YAML list of step elements.
    ///
    /// Stops at the first invalid element and reports its index.
    pub fn parse_steps(yaml_str: &str) -> Result<Vec<CanonicalStep>> {
        if YamlParser::is_blank(yaml_str) {
            return Ok(Vec::new());
        }
        let yaml = YamlParser::parse(yaml_str).map_err(|e| DecodeError::from_yaml(&e, yaml_str))?;

        let items = match &yaml {
            YamlValue::Null => return Ok(Vec::new()),
            YamlValue::Sequence(items) => items,
            _ => {
                return Err(ParseError::InvalidValue {
                    field: "steps".to_string(),
                    message: "expected a list of step elements".to_string(),
                })
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Self::parse_from_yaml(item).map_err(|e| ParseError::Step {
                    index,
                    source: Box::new(e),
                })
            })
            .collect()
    }
}
