//! Configuration and programmer errors
//!
//! A rule rejecting a value is not an error: it is reported through the
//! error display and the batch listener. The types here cover contract
//! violations that must abort evaluation loudly.

use std::borrow::Cow;

use crate::foundation::ResourceId;

/// A contract violation raised while evaluating rules.
///
/// Returned from [`Validator::validate`](crate::engine::Validator::validate)
/// instead of invoking the listener, so a misconfigured rule never hides
/// behind an ordinary validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// A rule failed but carries neither a resource id nor a text.
    #[error("rule `{rule}` has no error output configured: set either a resource id or a message text")]
    NoErrorOutput { rule: Cow<'static, str> },

    /// A rule that compares against a value received none.
    #[error("rule `{rule}` requires a value to compare, got none")]
    MissingValue { rule: Cow<'static, str> },

    /// The resource resolver does not know the rule's resource id.
    #[error("resource {id} could not be resolved")]
    UnresolvedResource { id: ResourceId },

    /// A rule was constructed with inconsistent parameters.
    #[error("rule `{rule}` is invalid: {reason}")]
    InvalidRule {
        rule: Cow<'static, str>,
        reason: Cow<'static, str>,
    },
}

impl ValidatorError {
    /// Creates a `MissingValue` error for the named rule.
    pub fn missing_value(rule: impl Into<Cow<'static, str>>) -> Self {
        Self::MissingValue { rule: rule.into() }
    }

    /// Creates a `NoErrorOutput` error for the named rule.
    pub fn no_error_output(rule: impl Into<Cow<'static, str>>) -> Self {
        Self::NoErrorOutput { rule: rule.into() }
    }

    /// Creates an `InvalidRule` error.
    pub fn invalid_rule(
        rule: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

/// Failure to load a [`ValidatorConfig`](crate::engine::ValidatorConfig).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid config JSON.
    #[error("failed to parse validator config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config file could not be read.
    #[error("failed to read validator config: {0}")]
    Io(#[from] std::io::Error),
}
