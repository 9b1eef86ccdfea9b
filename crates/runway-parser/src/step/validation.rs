//! Step validation
//!
//! Defines the step vocabularies and checks a decoded [`RawStep`] against
//! them. Messages are user facing and kept stable.

use crate::yaml_parser::YamlParser;
use indexmap::IndexMap;
use runway_core::ast::names::{
    APPLY, COMMAND_KEY, ENV, EXTRA_ARGS_KEY, IMPORT, INIT, MULTIENV, NAME_KEY, PLAN,
    POLICY_CHECK, RUN, SHELL_ARGS_KEY, SHELL_KEY, VALUE_KEY,
};
use runway_core::ast::{ArgsMap, InlineMap, OptionValue, OptionsMap};
use runway_core::RawStep;
use thiserror::Error;

/// Built-in steps, usable bare or with `extra_args`
pub(super) const BUILTIN_STEP_NAMES: &[&str] = &[INIT, PLAN, APPLY, POLICY_CHECK, IMPORT];

/// Steps configured through an options map
pub(super) const OPTION_STEP_NAMES: &[&str] = &[ENV, RUN, MULTIENV];

/// Steps given as a single command string
pub(super) const INLINE_STEP_NAMES: &[&str] = &[RUN, MULTIENV];

/// Options accepted by `env` steps
pub(super) const ENV_OPTION_KEYS: &[&str] = &[NAME_KEY, VALUE_KEY, COMMAND_KEY, SHELL_KEY, SHELL_ARGS_KEY];

/// Step validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("step element is empty")]
    EmptyStep,

    #[error("\"{name}\" is not a valid step type, maybe you omitted the 'run' key")]
    InvalidStepName { name: String },

    #[error("\"{name}\" is not a valid step type")]
    InvalidStepType { name: String },

    #[error("step element can only contain a single key, found {count}: {keys}")]
    MultipleKeys { count: usize, keys: String },

    #[error("built-in steps only support a single extra_args key, found {count}: {keys}")]
    MultipleArgsKeys { count: usize, keys: String },

    #[error("built-in steps only support a single extra_args key, found \"{key}\" in step {step}")]
    UnknownArgsKey { key: String, step: String },

    #[error("env steps only support keys \"name\", \"value\", \"command\", \"shell\" and \"shellArgs\", found key \"{key}\"")]
    UnknownEnvKey { key: String },

    #[error("env steps must have a \"name\" key set")]
    MissingEnvName,

    #[error("env steps only support one of the \"value\" or \"command\" keys, found both")]
    EnvValueAndCommand,

    #[error("workflow steps only support \"shell\" key in combination with \"command\" key")]
    ShellWithoutCommand,

    #[error("workflow steps only support \"shellArgs\" key in combination with \"shell\" key")]
    ShellArgsWithoutShell,

    #[error("\"{step}\" step \"shellArgs\" option must be a string or a list of strings, found {found}")]
    InvalidShellArgs { step: String, found: String },

    #[error("\"{step}\" step \"shellArgs\" option must contain only strings, found {found}")]
    NonStringShellArg { step: String, found: String },
}

/// Step validator
pub struct StepValidator;

impl StepValidator {
    /// Check a decoded step. Pure: the step is not modified.
    pub fn validate(step: &RawStep) -> Result<(), ValidationError> {
        let result = match step {
            RawStep::Empty => Err(ValidationError::EmptyStep),
            RawStep::BareName(name) => validate_bare_name(name),
            RawStep::ArgsMap(map) => validate_args_map(map),
            RawStep::OptionsMap(map) => validate_options_map(map),
            RawStep::InlineString(map) => validate_inline(map),
        };

        if let Err(error) = &result {
            log::warn!("Step validation error: {}", error);
        }
        result
    }
}

fn validate_bare_name(name: &str) -> Result<(), ValidationError> {
    if BUILTIN_STEP_NAMES.contains(&name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidStepName {
            name: name.to_string(),
        })
    }
}

/// The single `(key, value)` pair of a step mapping
fn single_entry<V>(map: &IndexMap<String, V>) -> Result<(&str, &V), ValidationError> {
    match map.first() {
        None => Err(ValidationError::EmptyStep),
        Some((key, value)) if map.len() == 1 => Ok((key.as_str(), value)),
        Some(_) => Err(ValidationError::MultipleKeys {
            count: map.len(),
            keys: YamlParser::join_keys(map.keys()),
        }),
    }
}

fn check_step_type(name: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidStepType {
            name: name.to_string(),
        })
    }
}

fn validate_args_map(map: &ArgsMap) -> Result<(), ValidationError> {
    let (name, args) = single_entry(map)?;
    check_step_type(name, BUILTIN_STEP_NAMES)?;

    if args.len() > 1 {
        return Err(ValidationError::MultipleArgsKeys {
            count: args.len(),
            keys: YamlParser::join_keys(args.keys()),
        });
    }
    if let Some(key) = args.keys().find(|key| key.as_str() != EXTRA_ARGS_KEY) {
        return Err(ValidationError::UnknownArgsKey {
            key: key.clone(),
            step: name.to_string(),
        });
    }
    Ok(())
}

fn validate_options_map(map: &OptionsMap) -> Result<(), ValidationError> {
    let (name, options) = single_entry(map)?;
    check_step_type(name, OPTION_STEP_NAMES)?;

    if name == ENV {
        validate_env_options(options)?;
    }

    if options.contains_key(SHELL_KEY) && !options.contains_key(COMMAND_KEY) {
        return Err(ValidationError::ShellWithoutCommand);
    }
    if options.contains_key(SHELL_ARGS_KEY) && !options.contains_key(SHELL_KEY) {
        return Err(ValidationError::ShellArgsWithoutShell);
    }

    match options.get(SHELL_ARGS_KEY) {
        None | Some(OptionValue::String(_)) => Ok(()),
        Some(OptionValue::Sequence(items)) => match items.iter().find(|item| !item.is_string()) {
            Some(item) => Err(ValidationError::NonStringShellArg {
                step: name.to_string(),
                found: item.to_string(),
            }),
            None => Ok(()),
        },
        Some(other) => Err(ValidationError::InvalidShellArgs {
            step: name.to_string(),
            found: other.to_string(),
        }),
    }
}

fn validate_env_options(options: &IndexMap<String, OptionValue>) -> Result<(), ValidationError> {
    if let Some(key) = options
        .keys()
        .find(|key| !ENV_OPTION_KEYS.contains(&key.as_str()))
    {
        return Err(ValidationError::UnknownEnvKey { key: key.clone() });
    }
    if !options.contains_key(NAME_KEY) {
        return Err(ValidationError::MissingEnvName);
    }
    if options.contains_key(VALUE_KEY) && options.contains_key(COMMAND_KEY) {
        return Err(ValidationError::EnvValueAndCommand);
    }
    Ok(())
}

fn validate_inline(map: &InlineMap) -> Result<(), ValidationError> {
    // The command text itself is opaque here.
    let (name, _) = single_entry(map)?;
    check_step_type(name, INLINE_STEP_NAMES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_accept_extra_args() {
        for name in BUILTIN_STEP_NAMES {
            assert!(validate_bare_name(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn test_run_is_not_a_bare_name() {
        assert_eq!(
            validate_bare_name("run").unwrap_err().to_string(),
            "\"run\" is not a valid step type, maybe you omitted the 'run' key"
        );
    }

    #[test]
    fn test_single_entry_on_empty_map() {
        let map: InlineMap = IndexMap::new();
        assert_eq!(single_entry(&map).unwrap_err(), ValidationError::EmptyStep);
    }

    #[test]
    fn test_inline_names() {
        assert!(check_step_type(MULTIENV, INLINE_STEP_NAMES).is_ok());
        assert!(check_step_type(ENV, INLINE_STEP_NAMES).is_err());
    }
}
