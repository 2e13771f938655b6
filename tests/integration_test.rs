//! Integration tests for aicalc.

#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};

use aicalc::core::{MAX_DISPLAY_LEN, Operator, Session, SubmitOutcome, UnaryFunction};
use aicalc::error::Result;
use aicalc::eval::{EvaluateRequest, EvaluateResponse, ExpressionEvaluator};
use async_trait::async_trait;

/// Evaluator that returns a fixed result and counts calls.
struct FixedEvaluator {
    result: f64,
    calls: AtomicUsize,
}

impl FixedEvaluator {
    fn new(result: f64) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExpressionEvaluator for FixedEvaluator {
    async fn evaluate(&self, _request: &EvaluateRequest) -> Result<EvaluateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(EvaluateResponse {
            result: self.result,
        })
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

#[tokio::test]
async fn test_full_calculation_flow() {
    let mut session = Session::new();
    let evaluator = FixedEvaluator::new(16.5);

    session.press_token("1");
    session.press_token("2");
    session.press_operator(Operator::Add);
    session.press_token("4");
    session.press_token(".");
    session.press_token("5");
    assert_eq!(session.display(), "12 + 4.5");

    let outcome = session.submit(&evaluator).await.expect("submit failed");
    assert!(matches!(outcome, SubmitOutcome::Evaluated(r) if (r - 16.5).abs() < f64::EPSILON));
    assert_eq!(session.display(), "16.5");

    let latest = session.history().latest().expect("history entry");
    assert_eq!(latest.expression, "12 + 4.5");
    assert!((latest.result - 16.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_division_by_zero_never_reaches_the_evaluator() {
    let mut session = Session::new();
    let evaluator = FixedEvaluator::new(99.0);

    session.press_token("9");
    session.press_operator(Operator::Divide);
    session.press_token("0");

    let result = session.submit(&evaluator).await;
    assert!(result.is_err());
    assert_eq!(session.display(), "Error");
    assert_eq!(evaluator.call_count(), 0);
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_error_display_recovers_on_next_token() {
    let mut session = Session::new();
    let evaluator = FixedEvaluator::new(7.0);

    session.press_token("9");
    session.press_operator(Operator::Divide);
    session.press_token("0");
    let _ = session.submit(&evaluator).await;
    assert_eq!(session.display(), "Error");

    // The next digit replaces the sentinel and calculation continues.
    session.press_token("7");
    assert_eq!(session.display(), "7");

    let outcome = session.submit(&evaluator).await.expect("submit failed");
    assert!(matches!(outcome, SubmitOutcome::Evaluated(_)));
    assert_eq!(session.display(), "7");
}

#[tokio::test]
async fn test_submit_on_initial_display_is_ignored() {
    let mut session = Session::new();
    let evaluator = FixedEvaluator::new(1.0);

    let outcome = session.submit(&evaluator).await.expect("submit failed");
    assert!(matches!(outcome, SubmitOutcome::Ignored));
    assert_eq!(evaluator.call_count(), 0);
}

#[tokio::test]
async fn test_history_preserves_submission_order() {
    let mut session = Session::new();
    let evaluator = FixedEvaluator::new(4.0);

    session.press_token("2");
    session.press_operator(Operator::Add);
    session.press_token("2");
    session.submit(&evaluator).await.expect("first submit");

    session.press_operator(Operator::Multiply);
    session.press_token("3");
    session.submit(&evaluator).await.expect("second submit");

    let entries = session.history().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].expression, "2 + 2");
    assert_eq!(entries[1].expression, "4 * 3");

    let recent: Vec<&str> = session
        .history()
        .iter_recent()
        .map(|e| e.expression.as_str())
        .collect();
    assert_eq!(recent, vec!["4 * 3", "2 + 2"]);
}

#[tokio::test]
async fn test_memory_survives_calculations() {
    let mut session = Session::new();
    let evaluator = FixedEvaluator::new(50.0);

    session.press_token("4");
    session.press_token("2");
    session.memory_add();

    session.press_operator(Operator::Add);
    session.press_token("8");
    session.submit(&evaluator).await.expect("submit failed");

    assert!((session.memory_value() - 42.0).abs() < f64::EPSILON);
    let recalled = session.memory_recall();
    assert!((recalled - 42.0).abs() < f64::EPSILON);
    assert_eq!(session.display(), "42");
}

#[test]
fn test_unary_functions_wrap_the_display() {
    let mut session = Session::new();

    session.press_token("9");
    session.press_function(UnaryFunction::Sqrt);
    assert_eq!(session.display(), "sqrt(9)");

    session.all_clear();
    session.press_token("5");
    session.press_token("0");
    session.press_function(UnaryFunction::Percent);
    assert_eq!(session.display(), "(50) / 100");
}

#[test]
fn test_display_stops_growing_past_the_ceiling() {
    let mut session = Session::new();

    for _ in 0..MAX_DISPLAY_LEN + 10 {
        session.press_token("9");
    }
    let len = session.display().len();
    assert!(len <= MAX_DISPLAY_LEN + 1);

    let before = session.display().to_string();
    session.press_token("1");
    assert_eq!(session.display(), before);
}

mod property_tests {
    use aicalc::core::{InputBuffer, Operator, format_number, parse_number_prefix};
    use proptest::prelude::*;

    fn arb_operator() -> impl Strategy<Value = Operator> {
        prop_oneof![
            Just(Operator::Add),
            Just(Operator::Subtract),
            Just(Operator::Multiply),
            Just(Operator::Divide),
        ]
    }

    proptest! {
        #[test]
        fn typed_digits_appear_verbatim(digits in "[1-9][0-9]{0,8}") {
            let mut buffer = InputBuffer::new();
            for c in digits.chars() {
                buffer.push_token(&c.to_string());
            }
            prop_assert_eq!(buffer.text(), digits.as_str());
        }

        #[test]
        fn second_operator_replaces_the_first(
            digits in "[1-9][0-9]{0,4}",
            first in arb_operator(),
            second in arb_operator(),
        ) {
            let mut buffer = InputBuffer::new();
            buffer.push_token(&digits);
            buffer.push_operator(first);
            buffer.push_operator(second);

            let expected = format!("{digits}{}", second.padded());
            prop_assert_eq!(buffer.text(), expected.as_str());
        }

        #[test]
        fn token_appends_never_shrink_the_display(
            seed in "[1-9][0-9]{0,3}",
            tokens in prop::collection::vec("[0-9.]{1,2}", 1..20),
        ) {
            let mut buffer = InputBuffer::new();
            buffer.push_token(&seed);
            let mut prev = buffer.text().len();
            for token in &tokens {
                buffer.push_token(token);
                prop_assert!(buffer.text().len() >= prev);
                prev = buffer.text().len();
            }
        }

        #[test]
        fn backspace_always_bottoms_out_at_zero(digits in "[0-9]{1,10}", extra in 0usize..5) {
            let mut buffer = InputBuffer::new();
            buffer.push_token(&digits);
            for _ in 0..digits.len() + extra {
                buffer.backspace();
            }
            prop_assert_eq!(buffer.text(), "0");
        }

        #[test]
        fn integral_results_format_without_a_point(n in -1_000_000i64..1_000_000) {
            let text = format_number(n as f64);
            prop_assert_eq!(text.parse::<i64>().ok(), Some(n));
        }

        #[test]
        fn leading_number_survives_a_trailing_expression(n in -1000i32..1000) {
            let display = format!("{n} + 123");
            let parsed = parse_number_prefix(&display);
            prop_assert_eq!(parsed, Some(f64::from(n)));
        }

        #[test]
        fn push_token_never_panics(token in "[0-9.]{1,3}", repeats in 1usize..60) {
            let mut buffer = InputBuffer::new();
            for _ in 0..repeats {
                buffer.push_token(&token);
            }
            prop_assert!(!buffer.text().is_empty());
        }
    }
}

/// CLI command integration tests.
mod cli_tests {
    use aicalc::cli::commands::execute;
    use aicalc::cli::parser::{Cli, Commands};
    use aicalc::error::{Error, ValidationError};
    use aicalc::eval::DEFAULT_MODEL;

    /// Helper to create a CLI struct for offline commands.
    fn make_cli(command: Commands) -> Cli {
        Cli {
            model: DEFAULT_MODEL.to_string(),
            api_base: None,
            prompt_dir: None,
            verbose: false,
            format: "text".to_string(),
            command: Some(command),
        }
    }

    #[test]
    fn test_cmd_eval_rejects_division_by_zero() {
        let cli = make_cli(Commands::Eval {
            expression: "8 / 0".to_string(),
        });
        let result = execute(&cli);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::DivisionByZero))
        ));
    }

    #[test]
    fn test_cmd_eval_rejects_blank_expression() {
        let cli = make_cli(Commands::Eval {
            expression: "  ".to_string(),
        });
        let result = execute(&cli);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::EmptyExpression))
        ));
    }

    #[test]
    fn test_cmd_eval_validation_ignores_output_format() {
        let mut cli = make_cli(Commands::Eval {
            expression: "8 / 0".to_string(),
        });
        cli.format = "json".to_string();
        assert!(execute(&cli).is_err());

        cli.format = "bogus".to_string();
        assert!(execute(&cli).is_err());
    }

    #[test]
    fn test_cmd_init_prompts_scaffolds_once() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let target = temp_dir.path().join("prompts");

        let cli = make_cli(Commands::InitPrompts {
            dir: Some(target.clone()),
        });
        let output = execute(&cli).expect("first init-prompts");
        assert!(output.contains("Wrote 1 prompt template(s):"));
        assert!(target.join("evaluator.md").exists());

        let cli = make_cli(Commands::InitPrompts { dir: Some(target) });
        let output = execute(&cli).expect("second init-prompts");
        assert!(output.contains("already present"));
    }
}
