//! Step normalization
//!
//! Converts a validated [`RawStep`] into the [`CanonicalStep`] the engine
//! consumes.

use indexmap::IndexMap;
use runway_core::ast::names::{
    COMMAND_KEY, ENV, EXTRA_ARGS_KEY, NAME_KEY, OUTPUT_KEY, SHELL_ARGS_KEY, SHELL_KEY,
};
use runway_core::ast::OptionValue;
use runway_core::{CanonicalStep, RawStep};

/// Step normalizer
pub struct StepNormalizer;

impl StepNormalizer {
    /// Convert a step that passed validation.
    ///
    /// Steps that were never validated still map without panicking, but
    /// only the first top-level key is used.
    pub fn to_canonical(step: &RawStep) -> CanonicalStep {
        let canonical = match step {
            RawStep::Empty => CanonicalStep::default(),
            RawStep::BareName(name) => CanonicalStep::named(name.as_str()),
            RawStep::ArgsMap(map) => match map.first() {
                Some((name, args)) => CanonicalStep {
                    extra_args: args.get(EXTRA_ARGS_KEY).cloned().unwrap_or_default(),
                    ..CanonicalStep::named(name.as_str())
                },
                None => CanonicalStep::default(),
            },
            RawStep::OptionsMap(map) => match map.first() {
                Some((name, options)) => from_options(name, options),
                None => CanonicalStep::default(),
            },
            RawStep::InlineString(map) => match map.first() {
                Some((name, command)) => CanonicalStep {
                    run_command: command.clone(),
                    ..CanonicalStep::named(name.as_str())
                },
                None => CanonicalStep::default(),
            },
        };

        log::debug!("Normalized step {:?}", canonical.name);
        canonical
    }
}

fn from_options(name: &str, options: &IndexMap<String, OptionValue>) -> CanonicalStep {
    let text = |key: &str| {
        options
            .get(key)
            .and_then(OptionValue::as_text)
            .unwrap_or_default()
    };

    let mut step = CanonicalStep::named(name);
    if name == ENV {
        step.env_var_name = text(NAME_KEY);
    }
    // An env step's "value" option is not carried over.
    step.run_command = text(COMMAND_KEY);
    step.output = text(OUTPUT_KEY);
    step.shell = text(SHELL_KEY);
    step.shell_args = match options.get(SHELL_ARGS_KEY) {
        Some(OptionValue::String(args)) => args.split_whitespace().map(str::to_string).collect(),
        Some(OptionValue::Sequence(items)) => items.iter().filter_map(OptionValue::as_text).collect(),
        _ => Vec::new(),
    };
    step
}
