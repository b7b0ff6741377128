//! Batch and per-binding behavior of the validation engine.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// HELPERS
// ============================================================================

/// Rule with a fixed verdict that counts its evaluations.
#[derive(Debug)]
struct Counting {
    verdict: bool,
    calls: AtomicUsize,
    message: ErrorMessage,
}

impl Counting {
    fn pass() -> Arc<Self> {
        Self::with(true, ErrorMessage::text("unexpected"))
    }

    fn fail(text: &'static str) -> Arc<Self> {
        Self::with(false, ErrorMessage::text(text))
    }

    fn with(verdict: bool, message: ErrorMessage) -> Arc<Self> {
        Arc::new(Self {
            verdict,
            calls: AtomicUsize::new(0),
            message,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Rule for Counting {
    fn validate(&self, _value: Option<&str>) -> RuleResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.verdict)
    }

    fn message(&self) -> &ErrorMessage {
        &self.message
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Recorder {
    successes: Vec<Vec<String>>,
    failures: usize,
}

impl ValidationListener for Recorder {
    fn on_success(&mut self, values: Vec<String>) {
        self.successes.push(values);
    }

    fn on_failure(&mut self) {
        self.failures += 1;
    }
}

fn cleared() -> Option<SinkState> {
    Some(SinkState::default())
}

fn shown(text: &str) -> Option<SinkState> {
    Some(SinkState {
        enabled: true,
        error: Some(text.to_owned()),
    })
}

fn valid(name: &'static str, value: &str) -> Validation<'static> {
    Validation::new(name)
        .with_text(value)
        .with_sink(name)
        .rule(not_empty())
}

fn invalid(name: &'static str, text: &'static str) -> Validation<'static> {
    Validation::new(name)
        .with_text("")
        .with_sink(name)
        .rule(not_empty().with_text(text))
}

// ============================================================================
// PER-BINDING EVALUATION
// ============================================================================

#[rstest]
#[case("")]
#[case("anything")]
#[case("  spaced  ")]
fn binding_without_rules_is_valid(#[case] value: &str) {
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let binding = Validation::new("free").with_text(value).with_sink("free");

    assert_eq!(validator.check(&binding), Ok(true));
    assert_eq!(validator.display().state("free"), cleared());
}

#[rstest]
#[case::base(Stage::Base)]
#[case::and(Stage::And)]
#[case::condition(Stage::Condition)]
fn first_failing_rule_wins_and_stops_the_stage(#[case] stage: Stage) {
    let board = ErrorBoard::new();
    let validator = Validator::new(NoResources, &board);

    let before = Counting::pass();
    let first = Counting::fail("first");
    let second = Counting::fail("second");
    let after = Counting::pass();
    let binding = Validation::new("f")
        .with_text("value")
        .with_sink("f")
        .shared_rule(stage, before.clone())
        .shared_rule(stage, first.clone())
        .shared_rule(stage, second.clone())
        .shared_rule(stage, after.clone());

    assert_eq!(validator.check(&binding), Ok(false));
    assert_eq!(board.state("f"), shown("first"));
    assert_eq!(
        [before.calls(), first.calls(), second.calls(), after.calls()],
        [1, 1, 0, 0]
    );
}

#[test]
fn failing_stage_skips_later_stages() {
    let board = ErrorBoard::new();
    let validator = Validator::new(NoResources, &board);

    let base = Counting::pass();
    let and = Counting::fail("and failed");
    let or = Counting::pass();
    let condition = Counting::pass();
    let binding = Validation::new("f")
        .with_sink("f")
        .shared_rule(Stage::Condition, condition.clone())
        .shared_rule(Stage::Or, or.clone())
        .shared_rule(Stage::And, and.clone())
        .shared_rule(Stage::Base, base.clone());

    assert_eq!(validator.check(&binding), Ok(false));
    assert_eq!(board.error("f").as_deref(), Some("and failed"));
    assert_eq!(
        [base.calls(), and.calls(), or.calls(), condition.calls()],
        [1, 1, 0, 0]
    );
}

#[test]
fn all_stages_run_when_everything_passes() {
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let rules: Vec<Arc<Counting>> = (0..4).map(|_| Counting::pass()).collect();
    let binding = Stage::ORDER
        .iter()
        .zip(&rules)
        .fold(Validation::new("f"), |binding, (stage, rule)| {
            binding.shared_rule(*stage, rule.clone())
        });

    assert_eq!(validator.check(&binding), Ok(true));
    assert!(rules.iter().all(|rule| rule.calls() == 1));
}

// ============================================================================
// OR STAGE
// ============================================================================

#[test]
fn or_stage_consults_only_the_first_rule_by_default() {
    let board = ErrorBoard::new();
    let validator = Validator::new(NoResources, &board);

    let r1 = Counting::fail("r1");
    let r2 = Counting::pass();
    let binding = Validation::new("f")
        .with_sink("f")
        .shared_rule(Stage::Or, r1.clone())
        .shared_rule(Stage::Or, r2.clone());

    assert_eq!(validator.check(&binding), Ok(false));
    assert_eq!(board.error("f").as_deref(), Some("r1"));
    assert_eq!((r1.calls(), r2.calls()), (1, 0));
}

#[test]
fn or_stage_ignores_later_failures_when_first_passes() {
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let binding = Validation::new("f")
        .with_text("abc")
        .or_rule(equal("abc"))
        .or_rule(equal("never"));

    assert_eq!(validator.check(&binding), Ok(true));
}

#[test]
fn any_of_policy_passes_on_any_rule() {
    let board = ErrorBoard::new();
    let mut validator = Validator::new(NoResources, &board);
    validator.set_or_policy(OrPolicy::AnyOf);

    let r1 = Counting::fail("r1");
    let r2 = Counting::pass();
    let r3 = Counting::pass();
    let binding = Validation::new("f")
        .with_sink("f")
        .shared_rule(Stage::Or, r1.clone())
        .shared_rule(Stage::Or, r2.clone())
        .shared_rule(Stage::Or, r3.clone());

    assert_eq!(validator.check(&binding), Ok(true));
    assert_eq!((r1.calls(), r2.calls(), r3.calls()), (1, 1, 0));
    assert_eq!(board.state("f"), cleared());
}

#[test]
fn any_of_policy_reports_first_message_when_all_fail() {
    let board = ErrorBoard::new();
    let validator = Validator::new(NoResources, &board)
        .with_config(ValidatorConfig::default().with_or_policy(OrPolicy::AnyOf));

    let binding = Validation::new("phone")
        .with_text("12")
        .with_sink("phone")
        .or_rule(starts_with("+").with_text("needs country code"))
        .or_rule(exact_length(10).with_text("needs 10 digits"));

    assert_eq!(validator.check(&binding), Ok(false));
    assert_eq!(board.error("phone").as_deref(), Some("needs country code"));
}

#[rstest]
#[case::first_only(OrPolicy::FirstOnly)]
#[case::any_of(OrPolicy::AnyOf)]
fn empty_or_stage_is_vacuously_true(#[case] policy: OrPolicy) {
    let mut validator = Validator::new(NoResources, ErrorBoard::new());
    validator.set_or_policy(policy);
    let binding = Validation::new("f").with_text("x").rule(not_empty());

    assert_eq!(validator.check(&binding), Ok(true));
}

// ============================================================================
// BATCH AGGREGATION
// ============================================================================

#[test]
fn continuous_batch_with_one_failure() {
    let board = ErrorBoard::new();
    board.show_error("a", "stale");
    board.show_error("c", "stale");
    let validator = Validator::new(NoResources, &board);
    let mut recorder = Recorder::default();

    let outcome = validator
        .validate(
            &mut recorder,
            &[
                valid("a", "v1"),
                invalid("b", "b is required"),
                valid("c", "v3"),
            ],
        )
        .unwrap();

    assert_eq!(outcome, BatchOutcome::Failed);
    assert_eq!(
        recorder,
        Recorder {
            successes: vec![],
            failures: 1,
        }
    );
    assert_eq!(board.state("a"), cleared());
    assert_eq!(board.state("b"), shown("b is required"));
    assert_eq!(board.state("c"), cleared());
}

#[test]
fn continuous_batch_all_valid_passes_values_in_order() {
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let mut recorder = Recorder::default();

    let outcome = validator
        .validate(&mut recorder, &[valid("a", "v1"), valid("b", "v2")])
        .unwrap();

    assert_eq!(outcome, BatchOutcome::Passed);
    assert_eq!(recorder.successes, vec![vec!["v1".to_owned(), "v2".to_owned()]]);
    assert_eq!(recorder.failures, 0);
    assert!(validator.display().is_clean());
}

#[test]
fn continuous_batch_fails_when_only_an_earlier_binding_fails() {
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let mut recorder = Recorder::default();

    let outcome = validator
        .validate(&mut recorder, &[invalid("a", "bad"), valid("b", "v2")])
        .unwrap();

    assert_eq!(outcome, BatchOutcome::Failed);
    assert_eq!(recorder.failures, 1);
    assert!(recorder.successes.is_empty());
}

#[test]
fn continuous_batch_evaluates_every_binding() {
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let tail = Counting::pass();
    let bindings = [
        invalid("a", "bad"),
        invalid("b", "bad"),
        Validation::new("c").shared_rule(Stage::Base, tail.clone()),
    ];

    let outcome = validator.validate(&mut (), &bindings).unwrap();

    assert_eq!(outcome, BatchOutcome::Failed);
    assert_eq!(tail.calls(), 1);
    assert_eq!(validator.display().errors().len(), 2);
}

#[test]
fn single_binding_batch() {
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let mut recorder = Recorder::default();

    validator.validate(&mut recorder, &[valid("a", "only")]).unwrap();
    validator.validate(&mut recorder, &[invalid("a", "bad")]).unwrap();

    assert_eq!(recorder.successes, vec![vec!["only".to_owned()]]);
    assert_eq!(recorder.failures, 1);
}

#[test]
fn empty_batch_reports_failure() {
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let mut recorder = Recorder::default();

    assert_eq!(
        validator.validate(&mut recorder, &[]),
        Ok(BatchOutcome::Failed)
    );
    assert_eq!(recorder.failures, 1);
}

#[test]
fn single_mode_aborts_silently() {
    let board = ErrorBoard::new();
    board.show_error("c", "stale");
    let mut validator = Validator::new(NoResources, &board);
    validator.set_mode(Mode::Single);
    let mut recorder = Recorder::default();

    let third = Counting::pass();
    let bindings = [
        valid("a", "v1"),
        invalid("b", "b is required"),
        Validation::new("c")
            .with_sink("c")
            .shared_rule(Stage::Base, third.clone()),
    ];

    let outcome = validator.validate(&mut recorder, &bindings).unwrap();

    assert_eq!(outcome, BatchOutcome::Aborted { index: 1 });
    assert_eq!(recorder, Recorder::default());
    assert_eq!(board.state("a"), cleared());
    assert_eq!(board.state("b"), shown("b is required"));
    assert_eq!(board.state("c"), cleared());
    assert_eq!(third.calls(), 0);
}

#[test]
fn single_mode_can_notify_on_abort() {
    let mut validator = Validator::new(NoResources, ErrorBoard::new());
    validator
        .set_mode(Mode::Single)
        .set_abort_notice(AbortNotice::NotifyFailure);
    let mut recorder = Recorder::default();

    let outcome = validator
        .validate(&mut recorder, &[invalid("a", "bad"), valid("b", "v2")])
        .unwrap();

    assert_eq!(outcome, BatchOutcome::Aborted { index: 0 });
    assert_eq!(recorder.failures, 1);
    assert!(recorder.successes.is_empty());
}

#[test]
fn single_mode_passes_like_continuous_when_all_valid() {
    let mut validator = Validator::new(NoResources, ErrorBoard::new());
    validator.set_mode(Mode::Single);
    let mut recorder = Recorder::default();

    let outcome = validator
        .validate(&mut recorder, &[valid("a", "v1"), valid("b", "v2")])
        .unwrap();

    assert_eq!(outcome, BatchOutcome::Passed);
    assert_eq!(recorder.successes, vec![vec!["v1".to_owned(), "v2".to_owned()]]);
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

#[test]
fn rule_without_message_is_a_configuration_error() {
    let board = ErrorBoard::new();
    let validator = Validator::new(NoResources, &board);
    let mut recorder = Recorder::default();
    let bindings = [Validation::new("f")
        .with_sink("f")
        .rule(not_empty().with_message(ErrorMessage::none()))];

    let result = validator.validate(&mut recorder, &bindings);

    assert_eq!(
        result,
        Err(ValidatorError::NoErrorOutput {
            rule: "NotEmpty".into()
        })
    );
    assert_eq!(board.state("f"), cleared());
    assert_eq!(recorder, Recorder::default());
}

#[test]
fn rule_without_message_is_fine_while_it_passes() {
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let binding = Validation::new("f")
        .with_text("x")
        .rule(not_empty().with_message(ErrorMessage::none()));

    assert_eq!(validator.check(&binding), Ok(true));
}

#[test]
fn equal_rule_rejects_absent_value_with_an_error() {
    let rule = equal("keyword");
    assert!(matches!(
        rule.validate(None),
        Err(ValidatorError::MissingValue { .. })
    ));
    assert_eq!(rule.validate(Some("other")), Ok(false));
}

// ============================================================================
// COLLABORATORS
// ============================================================================

#[test]
fn resource_messages_are_resolved() {
    let board = ErrorBoard::new();
    let table = StringTable::new().with(10u32, "Ce champ est obligatoire");
    let validator = Validator::new(&table, &board);

    let bindings = [Validation::new("name")
        .with_sink("name")
        .rule(not_empty().with_resource(10u32))];
    validator.validate(&mut (), &bindings).unwrap();

    assert_eq!(board.error("name").as_deref(), Some("Ce champ est obligatoire"));
}

#[test]
fn live_input_is_read_on_every_call() {
    let field = LiveText::new("al");
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let bindings = [Validation::new("username")
        .with_input(&field)
        .with_sink("username")
        .rule(min_length(3).with_text("too short"))];

    let mut recorder = Recorder::default();
    validator.validate(&mut recorder, &bindings).unwrap();
    field.set("alice");
    validator.validate(&mut recorder, &bindings).unwrap();

    assert_eq!(recorder.failures, 1);
    assert_eq!(recorder.successes, vec![vec!["alice".to_owned()]]);
    assert_eq!(validator.display().state("username"), cleared());
}

#[test]
fn closure_listener_receives_values() {
    let validator = Validator::new(NoResources, ErrorBoard::new());
    let mut accepted = Vec::new();
    let mut failed = false;

    {
        let mut on_done = listener(|values| accepted = values, || failed = true);
        validator
            .validate(&mut on_done, &[valid("a", "x"), valid("b", "y")])
            .unwrap();
    }

    assert_eq!(accepted, ["x", "y"]);
    assert!(!failed);
}

#[test]
fn repeated_calls_are_idempotent() {
    let board = ErrorBoard::new();
    let validator = Validator::new(NoResources, &board);
    let bindings = [
        valid("a", "v1"),
        invalid("b", "bad"),
        Validation::new("c")
            .with_text("12")
            .with_sink("c")
            .rule(numeric())
            .condition(min_length(3)),
    ];

    let mut first = Recorder::default();
    let first_outcome = validator.validate(&mut first, &bindings).unwrap();
    let first_errors = board.errors();

    let mut second = Recorder::default();
    let second_outcome = validator.validate(&mut second, &bindings).unwrap();

    assert_eq!(first_outcome, second_outcome);
    assert_eq!(first, second);
    assert_eq!(first_errors, board.errors());
    assert_eq!(first_errors.len(), 2);
}
