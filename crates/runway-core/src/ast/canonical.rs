//! Canonical step definitions
//!
//! Whatever shape a step was written in, the execution engine only ever
//! sees a [`CanonicalStep`].

use serde::{Deserialize, Serialize};

/// Normalized form of a validated step
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanonicalStep {
    /// Step type, e.g. `plan`, `run` or `env`
    pub name: String,

    /// Additional arguments for built-in steps
    pub extra_args: Vec<String>,

    /// Command for `run`, `env` and `multienv` steps
    pub run_command: String,

    /// Variable set by an `env` step
    pub env_var_name: String,

    /// Output handling requested by `run`/`multienv` steps
    pub output: String,

    /// Shell the command runs under, empty for the default shell
    pub shell: String,

    /// Arguments passed to `shell`
    pub shell_args: Vec<String>,
}

impl CanonicalStep {
    /// Create a step with only its name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
