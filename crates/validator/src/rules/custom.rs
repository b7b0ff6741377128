//! Caller-defined rules

use std::fmt;

use crate::foundation::{ErrorMessage, Rule, RuleResult, ValidatorError};

/// A rule backed by a caller closure.
///
/// # Examples
///
/// ```rust,ignore
/// let even = predicate("Must be an even number", |v| {
///     v.parse::<i64>().is_ok_and(|n| n % 2 == 0)
/// });
/// assert_eq!(even.validate(Some("4")), Ok(true));
/// ```
#[derive(Clone)]
pub struct Predicate<F> {
    check: F,
    message: ErrorMessage,
}

impl<F> Predicate<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    /// Creates a rule reporting `message` whenever `check` returns false.
    pub fn new(message: impl Into<ErrorMessage>, check: F) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    /// Replaces the message reported when this rule fails.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = message.into();
        self
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<F> Rule for Predicate<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, value: Option<&str>) -> RuleResult {
        let value = value.ok_or_else(|| ValidatorError::missing_value("Predicate"))?;
        Ok((self.check)(value))
    }

    fn message(&self) -> &ErrorMessage {
        &self.message
    }

    fn name(&self) -> &str {
        "Predicate"
    }
}

/// Creates a closure-backed rule.
pub fn predicate<F>(message: impl Into<ErrorMessage>, check: F) -> Predicate<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    Predicate::new(message, check)
}
