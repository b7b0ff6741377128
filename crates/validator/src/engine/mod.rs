//! Validation engine
//!
//! [`Validator`] evaluates a batch of [`Validation`] bindings, reports the
//! first failing rule of each binding through the injected
//! [`ErrorDisplay`], and tells a [`ValidationListener`] how the batch went.
//!
//! # Per-binding evaluation
//!
//! Stages run in the fixed order base → AND → OR → conditions. Within the
//! base, AND and condition stages every rule must pass and evaluation stops
//! at the first rejection. The OR stage follows the configured
//! [`OrPolicy`]. The first rejecting rule's message is shown and nothing
//! after it is evaluated.
//!
//! # Batch aggregation
//!
//! All sinks of the batch are cleared first. In [`Mode::Continuous`] every
//! binding is evaluated; the listener gets `on_success` with the resolved
//! values only if the last binding and the batch as a whole passed.
//! In [`Mode::Single`] the batch stops at the first failing binding and the
//! listener hears what [`AbortNotice`] says.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let board = ErrorBoard::new();
//! let mut validator = Validator::new(NoResources, &board);
//! validator.set_mode(Mode::Single);
//!
//! let bindings = [
//!     Validation::new("username").with_text("al").with_sink("username").rule(min_length(3)),
//! ];
//! let outcome = validator.validate(&mut (), &bindings)?;
//! assert_eq!(outcome, BatchOutcome::Aborted { index: 0 });
//! ```

pub mod config;

pub use config::{AbortNotice, Mode, OrPolicy, ValidatorConfig};

use std::borrow::Cow;
use std::sync::Arc;

use crate::foundation::{
    ErrorDisplay, ResourceResolver, Rule, RuleResult, ValidationListener, ValidatorError,
};
use crate::validation::{Stage, Validation};

/// How a batch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchOutcome {
    /// Every binding passed; `on_success` was invoked.
    Passed,
    /// The batch ran to its end and failed; `on_failure` was invoked.
    Failed,
    /// [`Mode::Single`] stopped the batch at the binding with this index.
    Aborted {
        /// Index of the failing binding.
        index: usize,
    },
}

impl BatchOutcome {
    /// Returns true for [`BatchOutcome::Passed`].
    #[must_use]
    pub fn is_passed(self) -> bool {
        self == BatchOutcome::Passed
    }
}

/// The field validation engine.
///
/// Holds the injected resource resolver and error display plus the
/// configuration. Configuration changes persist across calls; everything
/// else is per call.
#[derive(Debug, Clone)]
pub struct Validator<R, D> {
    resources: R,
    display: D,
    config: ValidatorConfig,
}

impl<R, D> Validator<R, D>
where
    R: ResourceResolver,
    D: ErrorDisplay,
{
    /// Creates an engine in [`Mode::Continuous`] with default policies.
    pub fn new(resources: R, display: D) -> Self {
        Self {
            resources,
            display,
            config: ValidatorConfig::default(),
        }
    }

    /// Replaces the whole configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the batch mode for this and all later calls.
    pub fn set_mode(&mut self, mode: Mode) -> &mut Self {
        self.config.mode = mode;
        self
    }

    /// Sets the OR stage policy.
    pub fn set_or_policy(&mut self, or_policy: OrPolicy) -> &mut Self {
        self.config.or_policy = or_policy;
        self
    }

    /// Sets what the listener hears on SINGLE-mode abort.
    pub fn set_abort_notice(&mut self, abort_notice: AbortNotice) -> &mut Self {
        self.config.abort_notice = abort_notice;
        self
    }

    /// Current batch mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Current configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The injected resource resolver.
    pub fn resources(&self) -> &R {
        &self.resources
    }

    /// The injected error display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Validates a batch and notifies `listener`.
    ///
    /// Returns an error, without invoking the listener, when a rule cannot
    /// be evaluated or a failing rule has no usable message.
    pub fn validate<L>(
        &self,
        listener: &mut L,
        validations: &[Validation<'_>],
    ) -> Result<BatchOutcome, ValidatorError>
    where
        L: ValidationListener + ?Sized,
    {
        let span = tracing::debug_span!(
            "validate",
            mode = ?self.config.mode,
            bindings = validations.len()
        );
        let _enter = span.enter();

        self.run_batch(listener, validations)
            .inspect_err(|error| tracing::error!(%error, "validation aborted"))
    }

    /// Validates a single binding without involving a listener.
    ///
    /// The binding's sink is cleared first, then shows the first failing
    /// rule's message.
    pub fn check(&self, validation: &Validation<'_>) -> RuleResult {
        self.clear_errors(std::slice::from_ref(validation));
        let value = validation.resolve_value();
        self.evaluate(&value, validation)
            .inspect_err(|error| tracing::error!(%error, "validation aborted"))
    }

    fn run_batch<L>(
        &self,
        listener: &mut L,
        validations: &[Validation<'_>],
    ) -> Result<BatchOutcome, ValidatorError>
    where
        L: ValidationListener + ?Sized,
    {
        self.clear_errors(validations);

        let mut overall_valid = true;
        let mut last_valid = false;
        let mut values = Vec::with_capacity(validations.len());

        for (index, validation) in validations.iter().enumerate() {
            let value = validation.resolve_value();

            if self.evaluate(&value, validation)? {
                last_valid = true;
                values.push(value);
            } else {
                overall_valid = false;
                last_valid = false;

                if self.config.mode == Mode::Single {
                    tracing::warn!(
                        binding = validation.name(),
                        index,
                        "single mode: batch aborted"
                    );
                    if self.config.abort_notice == AbortNotice::NotifyFailure {
                        listener.on_failure();
                    }
                    return Ok(BatchOutcome::Aborted { index });
                }
            }
        }

        if last_valid && overall_valid {
            tracing::debug!(values = values.len(), "batch passed");
            listener.on_success(values);
            Ok(BatchOutcome::Passed)
        } else {
            tracing::debug!("batch failed");
            listener.on_failure();
            Ok(BatchOutcome::Failed)
        }
    }

    fn clear_errors(&self, validations: &[Validation<'_>]) {
        for sink in validations.iter().filter_map(Validation::sink) {
            self.display.clear_error(sink);
        }
    }

    /// Runs the stages of one binding against its resolved value.
    fn evaluate(&self, value: &str, validation: &Validation<'_>) -> RuleResult {
        for stage in Stage::ORDER {
            if let Some(rule) = self.first_failure(stage, validation.rules(stage), value)? {
                tracing::debug!(
                    binding = validation.name(),
                    %stage,
                    rule = rule.name(),
                    "binding failed"
                );
                self.report(validation, rule)?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the rule whose message the stage reports, or `None` if the
    /// stage passed.
    fn first_failure<'r>(
        &self,
        stage: Stage,
        rules: &'r [Arc<dyn Rule>],
        value: &str,
    ) -> Result<Option<&'r dyn Rule>, ValidatorError> {
        if stage != Stage::Or {
            for rule in rules {
                if !passes(stage, rule.as_ref(), value)? {
                    return Ok(Some(rule.as_ref()));
                }
            }
            return Ok(None);
        }

        let Some(first) = rules.first() else {
            return Ok(None);
        };
        match self.config.or_policy {
            OrPolicy::FirstOnly => {
                if passes(stage, first.as_ref(), value)? {
                    Ok(None)
                } else {
                    Ok(Some(first.as_ref()))
                }
            }
            OrPolicy::AnyOf => {
                for rule in rules {
                    if passes(stage, rule.as_ref(), value)? {
                        return Ok(None);
                    }
                }
                Ok(Some(first.as_ref()))
            }
        }
    }

    /// Shows the rule's message on the binding's sink.
    fn report(&self, validation: &Validation<'_>, rule: &dyn Rule) -> Result<(), ValidatorError> {
        let message = rule.message();
        if !message.has_message() {
            return Err(ValidatorError::no_error_output(rule.name().to_owned()));
        }

        let Some(sink) = validation.sink() else {
            return Ok(());
        };

        let text = if let Some(id) = message.resource_id() {
            Cow::Owned(
                self.resources
                    .resolve(id)
                    .ok_or(ValidatorError::UnresolvedResource { id })?,
            )
        } else {
            Cow::Borrowed(message.text_message().unwrap_or_default())
        };

        self.display.show_error(sink, &text);
        Ok(())
    }
}

fn passes(stage: Stage, rule: &dyn Rule, value: &str) -> RuleResult {
    let passed = rule.validate(Some(value))?;
    tracing::trace!(%stage, rule = rule.name(), passed, "rule evaluated");
    Ok(passed)
}
