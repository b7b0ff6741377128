//! Presence and length rules
//!
//! Length is measured in Unicode scalar values (chars).

use crate::foundation::{ErrorMessage, Rule, RuleResult, ValidatorError};

// ============================================================================
// REQUIRED
// ============================================================================

/// Validates that a value is present and not blank.
///
/// Unlike the other rules, an absent value is a plain rejection.
#[derive(Debug, Clone)]
pub struct Required {
    message: ErrorMessage,
}

impl Required {
    /// Creates the rule with its default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: ErrorMessage::text("This field is required"),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

crate::rule!(@message_builders Required);

impl Rule for Required {
    fn validate(&self, value: Option<&str>) -> RuleResult {
        Ok(value.is_some_and(|v| !v.trim().is_empty()))
    }

    fn message(&self) -> &ErrorMessage {
        &self.message
    }

    fn name(&self) -> &str {
        "Required"
    }
}

/// Creates a [`Required`] rule.
#[must_use]
pub fn required() -> Required {
    Required::new()
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::rule! {
    /// Validates that a value is not empty.
    pub NotEmpty;
    check(input) { !input.is_empty() }
    message { "Value must not be empty" }
    fn not_empty();
}

// ============================================================================
// MIN / MAX / EXACT LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a value has at least `min` characters.
    #[derive(PartialEq, Eq, Hash)]
    pub MinLength { min: usize };
    check(self, input) { input.chars().count() >= self.min }
    message { format!("Must be at least {min} characters") }
    new(min: usize) { min: min }
    fn min_length(min: usize);
}

crate::rule! {
    /// Validates that a value has at most `max` characters.
    #[derive(PartialEq, Eq, Hash)]
    pub MaxLength { max: usize };
    check(self, input) { input.chars().count() <= self.max }
    message { format!("Must be at most {max} characters") }
    new(max: usize) { max: max }
    fn max_length(max: usize);
}

crate::rule! {
    /// Validates that a value has exactly `length` characters.
    #[derive(PartialEq, Eq, Hash)]
    pub ExactLength { length: usize };
    check(self, input) { input.chars().count() == self.length }
    message { format!("Must be exactly {length} characters") }
    new(length: usize) { length: length }
    fn exact_length(length: usize);
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a value's length is within `min..=max`.
///
/// Cheaper than a `MinLength` / `MaxLength` pair since chars are counted
/// once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
    message: ErrorMessage,
}

impl LengthRange {
    /// Creates a new length range rule.
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ValidatorError> {
        if min > max {
            return Err(ValidatorError::invalid_rule(
                "LengthRange",
                format!("min ({min}) must be <= max ({max})"),
            ));
        }
        Ok(Self {
            min,
            max,
            message: ErrorMessage::text(format!("Must be between {min} and {max} characters")),
        })
    }
}

crate::rule!(@message_builders LengthRange);

impl Rule for LengthRange {
    fn validate(&self, value: Option<&str>) -> RuleResult {
        let value = value.ok_or_else(|| ValidatorError::missing_value("LengthRange"))?;
        let len = value.chars().count();
        Ok((self.min..=self.max).contains(&len))
    }

    fn message(&self) -> &ErrorMessage {
        &self.message
    }

    fn name(&self) -> &str {
        "LengthRange"
    }
}

/// Creates a length range rule.
pub fn length_range(min: usize, max: usize) -> Result<LengthRange, ValidatorError> {
    LengthRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
