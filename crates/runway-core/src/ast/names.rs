//! Step names and option keys
//!
//! The vocabulary shared by the recognizer, validator and normalizer.

pub const INIT: &str = "init";
pub const PLAN: &str = "plan";
pub const APPLY: &str = "apply";
pub const POLICY_CHECK: &str = "policy_check";
pub const IMPORT: &str = "import";
pub const RUN: &str = "run";
pub const ENV: &str = "env";
pub const MULTIENV: &str = "multienv";

/// Nested key of a built-in step carrying extra command-line arguments
pub const EXTRA_ARGS_KEY: &str = "extra_args";

pub const NAME_KEY: &str = "name";
pub const VALUE_KEY: &str = "value";
pub const COMMAND_KEY: &str = "command";
pub const SHELL_KEY: &str = "shell";
pub const SHELL_ARGS_KEY: &str = "shellArgs";
pub const OUTPUT_KEY: &str = "output";
