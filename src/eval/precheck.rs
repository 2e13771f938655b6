//! Local screening applied before an expression leaves the process.
//!
//! The calculator does no arithmetic of its own, so screening is minimal:
//! empty input and the one failure mode worth catching without a round
//! trip, a literal division by zero. The check is deliberately narrow and
//! textual; divisors that merely evaluate to zero are the endpoint's
//! problem.

use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a spaced `/ 0` whose next character does not start a decimal
/// fraction: `"8 / 0"` and `"8 / 0 + 1"` match, `"8 / 0.5"` does not.
#[allow(clippy::expect_used)]
static DIVISION_BY_ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/ 0([^.]|$)").expect("static pattern compiles"));

/// Validates expression text before submission.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyExpression`] for blank input and
/// [`ValidationError::DivisionByZero`] when the literal screen matches.
pub fn validate_expression(expression: &str) -> Result<(), ValidationError> {
    if expression.trim().is_empty() {
        return Err(ValidationError::EmptyExpression);
    }
    if DIVISION_BY_ZERO.is_match(expression) {
        return Err(ValidationError::DivisionByZero);
    }
    Ok(())
}
