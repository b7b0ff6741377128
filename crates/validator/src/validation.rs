//! Validation bindings
//!
//! A [`Validation`] ties one input source to four ordered rule stages and an
//! optional error sink. Bindings are cheap to build per call; the rules they
//! hold are shared through `Arc` and can be reused.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::foundation::{Rule, TextInput};

// ============================================================================
// STAGE
// ============================================================================

/// Rule category inside a binding, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Mandatory rules, all must pass.
    Base,
    /// All must pass.
    And,
    /// Alternatives; see [`OrPolicy`](crate::engine::OrPolicy).
    Or,
    /// All must pass.
    Condition,
}

impl Stage {
    /// Stages in the order the engine evaluates them.
    pub const ORDER: [Stage; 4] = [Stage::Base, Stage::And, Stage::Or, Stage::Condition];

    /// Lowercase stage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Base => "base",
            Stage::And => "and",
            Stage::Or => "or",
            Stage::Condition => "condition",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// One input source bound to its rule stages and error sink.
///
/// The value is resolved when the engine reaches the binding: the live input
/// is read first, and the literal text is used when there is no live input
/// or it holds nothing.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::prelude::*;
///
/// let email = Validation::new("email")
///     .with_input(&email_field)
///     .with_sink("email")
///     .rule(not_empty())
///     .and_rule(email());
/// ```
#[derive(Clone)]
pub struct Validation<'a> {
    name: Cow<'static, str>,
    text: String,
    input: Option<&'a dyn TextInput>,
    sink: Option<Cow<'static, str>>,
    base_rules: Vec<Arc<dyn Rule>>,
    and_rules: Vec<Arc<dyn Rule>>,
    or_rules: Vec<Arc<dyn Rule>>,
    conditions: Vec<Arc<dyn Rule>>,
}

impl<'a> Validation<'a> {
    /// Creates an empty binding with an empty literal and no sink.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            input: None,
            sink: None,
            base_rules: Vec::new(),
            and_rules: Vec::new(),
            or_rules: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Sets the literal value, used when no live input text is available.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Reads the value from a live input at evaluation time.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_input(mut self, input: &'a dyn TextInput) -> Self {
        self.input = Some(input);
        self
    }

    /// Routes this binding's errors to `sink`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_sink(mut self, sink: impl Into<Cow<'static, str>>) -> Self {
        self.sink = Some(sink.into());
        self
    }

    /// Appends a base rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R: Rule + 'static>(self, rule: R) -> Self {
        self.shared_rule(Stage::Base, Arc::new(rule))
    }

    /// Appends an AND rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn and_rule<R: Rule + 'static>(self, rule: R) -> Self {
        self.shared_rule(Stage::And, Arc::new(rule))
    }

    /// Appends an OR rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn or_rule<R: Rule + 'static>(self, rule: R) -> Self {
        self.shared_rule(Stage::Or, Arc::new(rule))
    }

    /// Appends a condition.
    #[must_use = "builder methods must be chained or built"]
    pub fn condition<R: Rule + 'static>(self, rule: R) -> Self {
        self.shared_rule(Stage::Condition, Arc::new(rule))
    }

    /// Appends an already shared rule to `stage`.
    #[must_use = "builder methods must be chained or built"]
    pub fn shared_rule(mut self, stage: Stage, rule: Arc<dyn Rule>) -> Self {
        self.stage_mut(stage).push(rule);
        self
    }

    /// Binding name, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The literal value.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sink key, if errors of this binding are displayed.
    pub fn sink(&self) -> Option<&str> {
        self.sink.as_deref()
    }

    /// Rules of one stage, in evaluation order.
    pub fn rules(&self, stage: Stage) -> &[Arc<dyn Rule>] {
        match stage {
            Stage::Base => &self.base_rules,
            Stage::And => &self.and_rules,
            Stage::Or => &self.or_rules,
            Stage::Condition => &self.conditions,
        }
    }

    /// Returns true if no stage holds a rule.
    pub fn is_unconstrained(&self) -> bool {
        Stage::ORDER.iter().all(|stage| self.rules(*stage).is_empty())
    }

    /// Resolves the current value: live input text, else the literal.
    pub fn resolve_value(&self) -> String {
        self.input
            .and_then(|input| input.current_text())
            .unwrap_or_else(|| self.text.clone())
    }

    fn stage_mut(&mut self, stage: Stage) -> &mut Vec<Arc<dyn Rule>> {
        match stage {
            Stage::Base => &mut self.base_rules,
            Stage::And => &mut self.and_rules,
            Stage::Or => &mut self.or_rules,
            Stage::Condition => &mut self.conditions,
        }
    }
}

impl fmt::Debug for Validation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation")
            .field("name", &self.name)
            .field("text", &self.text)
            .field("live_input", &self.input.is_some())
            .field("sink", &self.sink)
            .field("base_rules", &self.base_rules)
            .field("and_rules", &self.and_rules)
            .field("or_rules", &self.or_rules)
            .field("conditions", &self.conditions)
            .finish()
    }
}
