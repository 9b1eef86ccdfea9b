//! Step shape recognition
//!
//! Turns a generic YAML node into a [`RawStep`]. Shapes overlap at the
//! syntax level, so they are tried in a fixed order:
//!
//! 1. null                                   -> empty step
//! 2. scalar                                 -> bare name
//! 3. `{name: {key: [scalar, ...]}}`         -> extra_args map
//! 4. `{name: {key: <anything>}}`            -> options map
//! 5. `{name: scalar}`                       -> inline string
//!
//! Serialization is derived on [`RawStep`] and writes each variant back
//! in the shape it was read from.

use crate::ast::step::{ArgsMap, InlineMap, OptionValue, OptionsMap, RawStep};
use crate::error::{CoreError, Result};
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer};
use serde_yaml::{Mapping, Value as YamlValue};

impl RawStep {
    /// Recognize the step shape of a YAML node
    pub fn from_value(value: &YamlValue) -> Result<Self> {
        let step = recognize(value)?;
        match step.shape() {
            Some(shape) => log::debug!("Recognized {} step {:?}", shape, step.top_level_keys()),
            None => log::debug!("Recognized empty step"),
        }
        Ok(step)
    }

    /// Encode the step back into the YAML node it was read from
    pub fn to_value(&self) -> Result<YamlValue> {
        Ok(serde_yaml::to_value(self)?)
    }
}

impl<'de> Deserialize<'de> for RawStep {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = YamlValue::deserialize(deserializer)?;
        RawStep::from_value(&value).map_err(de::Error::custom)
    }
}

fn recognize(value: &YamlValue) -> Result<RawStep> {
    match untag(value) {
        YamlValue::Null => Ok(RawStep::Empty),
        YamlValue::Mapping(mapping) => recognize_mapping(mapping),
        scalar => match scalar_text(scalar) {
            Some(name) => Ok(RawStep::BareName(name)),
            None => Err(CoreError::UnrecognizedShape {
                found: format!("{} where a step name or mapping is expected", kind(scalar)),
            }),
        },
    }
}

fn recognize_mapping(mapping: &Mapping) -> Result<RawStep> {
    if let Some(args) = args_map(mapping) {
        return Ok(RawStep::ArgsMap(args));
    }
    if let Some(options) = options_map(mapping) {
        return Ok(RawStep::OptionsMap(options));
    }
    if let Some(inline) = inline_map(mapping) {
        return Ok(RawStep::InlineString(inline));
    }
    Err(CoreError::UnrecognizedShape {
        found: describe_mismatch(mapping),
    })
}

fn args_map(mapping: &Mapping) -> Option<ArgsMap> {
    let mut steps = ArgsMap::new();
    for (key, value) in mapping {
        let args = match untag(value) {
            YamlValue::Null => IndexMap::new(),
            YamlValue::Mapping(nested) => {
                let mut args = IndexMap::new();
                for (arg_key, arg_value) in nested {
                    args.insert(scalar_text(arg_key)?, scalar_sequence(arg_value)?);
                }
                args
            }
            _ => return None,
        };
        steps.insert(scalar_text(key)?, args);
    }
    Some(steps)
}

fn options_map(mapping: &Mapping) -> Option<OptionsMap> {
    let mut steps = OptionsMap::new();
    for (key, value) in mapping {
        let options = match untag(value) {
            YamlValue::Null => IndexMap::new(),
            YamlValue::Mapping(nested) => {
                let mut options = IndexMap::new();
                for (option_key, option_value) in nested {
                    options.insert(
                        scalar_text(option_key)?,
                        OptionValue::from(option_value.clone()),
                    );
                }
                options
            }
            _ => return None,
        };
        steps.insert(scalar_text(key)?, options);
    }
    Some(steps)
}

fn inline_map(mapping: &Mapping) -> Option<InlineMap> {
    let mut steps = InlineMap::new();
    for (key, value) in mapping {
        let command = match untag(value) {
            YamlValue::Null => String::new(),
            other => scalar_text(other)?,
        };
        steps.insert(scalar_text(key)?, command);
    }
    Some(steps)
}

/// Elements of an argument list; null stands for an empty list
fn scalar_sequence(value: &YamlValue) -> Option<Vec<String>> {
    match untag(value) {
        YamlValue::Null => Some(Vec::new()),
        YamlValue::Sequence(items) => items.iter().map(scalar_text).collect(),
        _ => None,
    }
}

/// Text of a string, number or bool
fn scalar_text(value: &YamlValue) -> Option<String> {
    match untag(value) {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn untag(value: &YamlValue) -> &YamlValue {
    match value {
        YamlValue::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn kind(value: &YamlValue) -> &'static str {
    match untag(value) {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "bool",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}

fn describe_mismatch(mapping: &Mapping) -> String {
    for (key, value) in mapping {
        let Some(name) = scalar_text(key) else {
            return format!("{} was used as a step key", kind(key));
        };
        if let YamlValue::Sequence(_) = untag(value) {
            return format!("sequence was used where mapping is expected under key {:?}", name);
        }
    }
    "step mapping mixes nested mappings and plain values".to_string()
}
