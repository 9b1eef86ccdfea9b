//! Raw step AST definitions
//!
//! A workflow step may be written in four YAML shapes:
//!
//! ```yaml
//! steps:
//!   - plan                      # bare name
//!   - init:                     # extra_args map
//!       extra_args: [-upgrade]
//!   - env:                      # options map
//!       name: TF_VAR_region
//!       command: ./region.sh
//!   - run: make lint            # inline string
//! ```
//!
//! [`RawStep`] keeps exactly the shape that was written so it can be
//! serialized back unchanged. Keys keep the order they were read in.

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value as YamlValue;
use std::fmt;

/// `step name -> nested key -> arguments`, e.g. `init: {extra_args: [a, b]}`
pub type ArgsMap = IndexMap<String, IndexMap<String, Vec<String>>>;

/// `step name -> option name -> value`, e.g. `env: {name: x, command: y}`
pub type OptionsMap = IndexMap<String, IndexMap<String, OptionValue>>;

/// `step name -> string`, e.g. `run: echo hi`
pub type InlineMap = IndexMap<String, String>;

/// A step element as written in the workflow file
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum RawStep {
    /// Blank element (`- ` or an empty document)
    #[default]
    Empty,

    /// A single scalar naming a built-in step
    BareName(String),

    /// Built-in step with nested argument lists
    ArgsMap(ArgsMap),

    /// Custom step configured through named options
    OptionsMap(OptionsMap),

    /// Custom step given as a single command string
    InlineString(InlineMap),
}

/// The syntactic shape a [`RawStep`] was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepShape {
    BareName,
    ArgsMap,
    OptionsMap,
    InlineString,
}

impl fmt::Display for StepShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepShape::BareName => "bare name",
            StepShape::ArgsMap => "extra_args map",
            StepShape::OptionsMap => "options map",
            StepShape::InlineString => "inline string",
        };
        f.write_str(name)
    }
}

impl RawStep {
    /// Create a bare-name step such as `plan`
    pub fn bare_name(name: impl Into<String>) -> Self {
        RawStep::BareName(name.into())
    }

    /// Create an inline step such as `run: echo hi`
    pub fn inline(name: impl Into<String>, command: impl Into<String>) -> Self {
        let mut map = InlineMap::new();
        map.insert(name.into(), command.into());
        RawStep::InlineString(map)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RawStep::Empty)
    }

    /// Shape of the populated variant, `None` for an empty step
    pub fn shape(&self) -> Option<StepShape> {
        match self {
            RawStep::Empty => None,
            RawStep::BareName(_) => Some(StepShape::BareName),
            RawStep::ArgsMap(_) => Some(StepShape::ArgsMap),
            RawStep::OptionsMap(_) => Some(StepShape::OptionsMap),
            RawStep::InlineString(_) => Some(StepShape::InlineString),
        }
    }

    /// Top-level keys in the order they were written.
    ///
    /// A bare name has no keys.
    pub fn top_level_keys(&self) -> Vec<&str> {
        match self {
            RawStep::Empty | RawStep::BareName(_) => Vec::new(),
            RawStep::ArgsMap(map) => map.keys().map(String::as_str).collect(),
            RawStep::OptionsMap(map) => map.keys().map(String::as_str).collect(),
            RawStep::InlineString(map) => map.keys().map(String::as_str).collect(),
        }
    }
}

/// Value of a single option in an options-map step
///
/// Strings and string lists are what steps actually use; anything else
/// is kept verbatim in [`OptionValue::Other`] so validation can report it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    String(String),
    Sequence(Vec<OptionValue>),
    /// Non-string scalar (number, bool, null) or a nested mapping
    Other(YamlValue),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Text of a scalar option; sequences, mappings and null have none
    pub fn as_text(&self) -> Option<String> {
        match self {
            OptionValue::String(s) => Some(s.clone()),
            OptionValue::Other(YamlValue::Bool(b)) => Some(b.to_string()),
            OptionValue::Other(YamlValue::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, OptionValue::String(_))
    }
}

impl From<YamlValue> for OptionValue {
    fn from(value: YamlValue) -> Self {
        match value {
            YamlValue::String(s) => OptionValue::String(s),
            YamlValue::Sequence(items) => {
                OptionValue::Sequence(items.into_iter().map(OptionValue::from).collect())
            }
            YamlValue::Tagged(tagged) => OptionValue::from(tagged.value),
            other => OptionValue::Other(other),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Other(YamlValue::Number(value.into()))
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::from(i64::from(value))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Other(YamlValue::Bool(value))
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(items: Vec<T>) -> Self {
        OptionValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Renders values for diagnostics: strings bare, lists as `[a b]`.
impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::String(s) => f.write_str(s),
            OptionValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            OptionValue::Other(value) => write_yaml(f, value),
        }
    }
}

fn write_yaml(f: &mut fmt::Formatter<'_>, value: &YamlValue) -> fmt::Result {
    match value {
        YamlValue::Null => f.write_str("null"),
        YamlValue::Bool(b) => write!(f, "{}", b),
        YamlValue::Number(n) => write!(f, "{}", n),
        YamlValue::String(s) => f.write_str(s),
        YamlValue::Sequence(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write_yaml(f, item)?;
            }
            f.write_str("]")
        }
        YamlValue::Mapping(mapping) => {
            f.write_str("{")?;
            for (i, (key, item)) in mapping.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_yaml(f, key)?;
                f.write_str(": ")?;
                write_yaml(f, item)?;
            }
            f.write_str("}")
        }
        YamlValue::Tagged(tagged) => {
            write!(f, "{} ", tagged.tag)?;
            write_yaml(f, &tagged.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_of_each_variant() {
        assert_eq!(RawStep::Empty.shape(), None);
        assert_eq!(RawStep::bare_name("plan").shape(), Some(StepShape::BareName));
        assert_eq!(
            RawStep::inline("run", "make").shape(),
            Some(StepShape::InlineString)
        );
        assert_eq!(
            RawStep::ArgsMap(ArgsMap::new()).shape(),
            Some(StepShape::ArgsMap)
        );
        assert!(RawStep::default().is_empty());
    }

    #[test]
    fn test_top_level_keys_keep_order() {
        let mut map = InlineMap::new();
        map.insert("zeta".to_string(), String::new());
        map.insert("alpha".to_string(), String::new());
        let step = RawStep::InlineString(map);
        assert_eq!(step.top_level_keys(), vec!["zeta", "alpha"]);
        assert!(RawStep::bare_name("plan").top_level_keys().is_empty());
    }

    #[test]
    fn test_option_value_display() {
        assert_eq!(OptionValue::from("-c").to_string(), "-c");
        assert_eq!(OptionValue::from(42).to_string(), "42");
        assert_eq!(OptionValue::from(vec![42, 42]).to_string(), "[42 42]");
        assert_eq!(
            OptionValue::Sequence(vec!["-c".into(), 42.into()]).to_string(),
            "[-c 42]"
        );
        assert_eq!(OptionValue::Other(YamlValue::Null).to_string(), "null");
    }

    #[test]
    fn test_option_value_from_yaml() {
        let value: YamlValue = serde_yaml::from_str("[-c, 42]").unwrap();
        assert_eq!(
            OptionValue::from(value),
            OptionValue::Sequence(vec!["-c".into(), 42.into()])
        );
    }

    #[test]
    fn test_option_value_text() {
        assert_eq!(OptionValue::from("hide").as_text(), Some("hide".to_string()));
        assert_eq!(OptionValue::from(true).as_text(), Some("true".to_string()));
        assert_eq!(OptionValue::from(vec!["a"]).as_text(), None);
        assert_eq!(OptionValue::from(7).as_str(), None);
    }
}
