//! Engine configuration
//!
//! Batch mode and the two policy switches that choose between legacy and
//! corrected behavior. Loadable from JSON:
//!
//! ```json
//! { "mode": "single", "or_policy": "any_of", "abort_notice": "notify_failure" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

/// Batch aggregation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Evaluate every binding, then aggregate.
    #[default]
    Continuous,
    /// Stop the batch at the first failing binding.
    Single,
}

/// How the OR stage of a binding is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrPolicy {
    /// Only the first OR rule is consulted; the others never run.
    #[default]
    FirstOnly,
    /// The stage passes as soon as any OR rule passes. When all fail, the
    /// first rule's message is reported.
    AnyOf,
}

/// What the listener hears when [`Mode::Single`] aborts a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortNotice {
    /// No callback at all.
    #[default]
    Silent,
    /// `on_failure()` is invoked once.
    NotifyFailure,
}

/// Configuration of a [`Validator`](crate::engine::Validator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Batch aggregation mode.
    pub mode: Mode,
    /// OR stage evaluation.
    pub or_policy: OrPolicy,
    /// Listener behavior on SINGLE-mode abort.
    pub abort_notice: AbortNotice,
}

impl ValidatorConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Sets the batch mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the OR stage policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_or_policy(mut self, or_policy: OrPolicy) -> Self {
        self.or_policy = or_policy;
        self
    }

    /// Sets the abort notice.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_abort_notice(mut self, abort_notice: AbortNotice) -> Self {
        self.abort_notice = abort_notice;
        self
    }
}
