//! Core traits of the validation system
//!
//! [`Rule`] is the unit of validation logic. The remaining traits are the
//! narrow seams to the outside world: where input text comes from, where
//! errors are displayed, how resource ids become strings, and who hears the
//! batch outcome.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ErrorMessage, ResourceId, ValidatorError};

// ============================================================================
// RULE
// ============================================================================

/// A stateless predicate paired with the message reported when it fails.
///
/// Rules are built once, never mutated, and may be shared between bindings
/// and reused across engine calls.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::foundation::{ErrorMessage, Rule, ValidatorError};
///
/// #[derive(Debug)]
/// struct NoSpaces {
///     message: ErrorMessage,
/// }
///
/// impl Rule for NoSpaces {
///     fn validate(&self, value: Option<&str>) -> Result<bool, ValidatorError> {
///         let value = value.ok_or_else(|| ValidatorError::missing_value(self.name().to_owned()))?;
///         Ok(!value.contains(' '))
///     }
///
///     fn message(&self) -> &ErrorMessage {
///         &self.message
///     }
/// }
/// ```
pub trait Rule: Send + Sync + fmt::Debug {
    /// Checks a value.
    ///
    /// Returns `Ok(false)` when the value is rejected. Returns an error when
    /// the rule cannot be evaluated at all, e.g. a comparison rule handed no
    /// value.
    fn validate(&self, value: Option<&str>) -> Result<bool, ValidatorError>;

    /// The message reported when this rule rejects a value.
    fn message(&self) -> &ErrorMessage;

    /// Returns the name of this rule.
    ///
    /// Used for tracing and error messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn validate(&self, value: Option<&str>) -> Result<bool, ValidatorError> {
        (**self).validate(value)
    }

    fn message(&self) -> &ErrorMessage {
        (**self).message()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// COLLABORATORS
// ============================================================================

/// A live input whose current text is read at evaluation time.
pub trait TextInput {
    /// Current text, or `None` when the input holds nothing.
    fn current_text(&self) -> Option<String>;
}

/// The surface where per-field errors are shown and cleared.
///
/// Sinks are addressed by the key a [`Validation`](crate::validation::Validation)
/// was bound to. The engine never renders anything itself.
pub trait ErrorDisplay {
    /// Removes any error shown on the sink and disables error display.
    fn clear_error(&self, sink: &str);

    /// Enables error display on the sink and shows `text`.
    fn show_error(&self, sink: &str, text: &str);
}

/// Synchronous lookup of localized strings.
pub trait ResourceResolver {
    /// Returns the string for `id`, or `None` if it is unknown.
    fn resolve(&self, id: ResourceId) -> Option<String>;
}

/// Receives the outcome of a batch.
pub trait ValidationListener {
    /// Every binding passed. `values` holds the resolved values in
    /// submission order.
    fn on_success(&mut self, values: Vec<String>);

    /// At least one binding failed.
    fn on_failure(&mut self);
}

impl<T: ErrorDisplay + ?Sized> ErrorDisplay for &T {
    fn clear_error(&self, sink: &str) {
        (**self).clear_error(sink);
    }

    fn show_error(&self, sink: &str, text: &str) {
        (**self).show_error(sink, text);
    }
}

impl<T: ErrorDisplay + ?Sized> ErrorDisplay for Arc<T> {
    fn clear_error(&self, sink: &str) {
        (**self).clear_error(sink);
    }

    fn show_error(&self, sink: &str, text: &str) {
        (**self).show_error(sink, text);
    }
}

impl<T: ResourceResolver + ?Sized> ResourceResolver for &T {
    fn resolve(&self, id: ResourceId) -> Option<String> {
        (**self).resolve(id)
    }
}

impl<T: ResourceResolver + ?Sized> ResourceResolver for Arc<T> {
    fn resolve(&self, id: ResourceId) -> Option<String> {
        (**self).resolve(id)
    }
}

impl<T: TextInput + ?Sized> TextInput for Arc<T> {
    fn current_text(&self) -> Option<String> {
        (**self).current_text()
    }
}

impl<L: ValidationListener + ?Sized> ValidationListener for &mut L {
    fn on_success(&mut self, values: Vec<String>) {
        (**self).on_success(values);
    }

    fn on_failure(&mut self) {
        (**self).on_failure();
    }
}

/// Listener that ignores the outcome; use the returned
/// [`BatchOutcome`](crate::engine::BatchOutcome) instead.
impl ValidationListener for () {
    fn on_success(&mut self, _values: Vec<String>) {}

    fn on_failure(&mut self) {}
}

// ============================================================================
// CLOSURE LISTENER
// ============================================================================

/// A [`ValidationListener`] built from two closures.
///
/// Created by [`listener`].
pub struct FnListener<S, F> {
    on_success: S,
    on_failure: F,
}

impl<S, F> fmt::Debug for FnListener<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}

impl<S, F> ValidationListener for FnListener<S, F>
where
    S: FnMut(Vec<String>),
    F: FnMut(),
{
    fn on_success(&mut self, values: Vec<String>) {
        (self.on_success)(values);
    }

    fn on_failure(&mut self) {
        (self.on_failure)();
    }
}

/// Creates a listener from a success and a failure closure.
///
/// # Examples
///
/// ```rust,ignore
/// let mut accepted = Vec::new();
/// let mut on_done = listener(|values| accepted = values, || eprintln!("invalid form"));
/// validator.validate(&mut on_done, &bindings)?;
/// ```
pub fn listener<S, F>(on_success: S, on_failure: F) -> FnListener<S, F>
where
    S: FnMut(Vec<String>),
    F: FnMut(),
{
    FnListener {
        on_success,
        on_failure,
    }
}
