//! Regular expression rules

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ErrorMessage, Rule, RuleResult, ValidatorError};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// REGEX RULE
// ============================================================================

/// Validates that a value matches a regular expression.
#[derive(Debug, Clone)]
pub struct Matches {
    /// Compiled pattern.
    pub pattern: Regex,
    message: ErrorMessage,
}

impl Matches {
    /// Compiles `pattern` into a rule.
    pub fn new(pattern: &str) -> Result<Self, ValidatorError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ValidatorError::invalid_rule("Matches", e.to_string()))?;
        Ok(Self::from_regex(pattern))
    }

    /// Wraps an already compiled pattern.
    #[must_use]
    pub fn from_regex(pattern: Regex) -> Self {
        Self {
            pattern,
            message: ErrorMessage::text("Value has an invalid format"),
        }
    }
}

crate::rule!(@message_builders Matches);

impl Rule for Matches {
    fn validate(&self, value: Option<&str>) -> RuleResult {
        let value = value.ok_or_else(|| ValidatorError::missing_value("Matches"))?;
        Ok(self.pattern.is_match(value))
    }

    fn message(&self) -> &ErrorMessage {
        &self.message
    }

    fn name(&self) -> &str {
        "Matches"
    }
}

/// Creates a regex rule.
pub fn matches(pattern: &str) -> Result<Matches, ValidatorError> {
    Matches::new(pattern)
}

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Validates email format.
    ///
    /// Uses a simple but effective regex pattern.
    pub Email;
    check(input) { EMAIL_REGEX.is_match(input) }
    message { "Invalid email address" }
    fn email();
}
