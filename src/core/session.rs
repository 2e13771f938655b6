//! Calculator session state.
//!
//! A [`Session`] owns the display buffer, calculation history, and memory
//! register, and runs the evaluation lifecycle against an
//! [`ExpressionEvaluator`]. While an evaluation is pending the editing
//! keys are locked out; clears are deliberately exempt so the user can
//! always bail out.

use crate::core::history::{History, HistoryEntry};
use crate::core::input::{InputBuffer, Operator, UnaryFunction};
use crate::core::memory::{MemoryRegister, parse_number_prefix};
use crate::error::Result;
use crate::eval::{EvaluateRequest, ExpressionEvaluator, validate_expression};

/// Outcome of an equals-key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    /// The press was ignored: an evaluation was already pending, or the
    /// display showed a sentinel with nothing to evaluate.
    Ignored,
    /// Evaluation completed with the given result.
    Evaluated(f64),
}

/// Interactive calculator state.
///
/// # Examples
///
/// ```
/// use aicalc::core::{Operator, Session};
///
/// let mut session = Session::new();
/// session.press_token("1");
/// session.press_token("2");
/// session.press_operator(Operator::Multiply);
/// session.press_token("3");
/// assert_eq!(session.display(), "12 * 3");
/// ```
#[derive(Debug, Default)]
pub struct Session {
    input: InputBuffer,
    history: History,
    memory: MemoryRegister,
    evaluating: bool,
    panel_open: bool,
}

impl Session {
    /// Creates a fresh session: display `"0"`, empty history, zero memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.input.text()
    }

    /// Returns the calculation history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Returns the memory register value.
    #[must_use]
    pub const fn memory_value(&self) -> f64 {
        self.memory.recall()
    }

    /// Returns true while an evaluation is pending.
    #[must_use]
    pub const fn is_evaluating(&self) -> bool {
        self.evaluating
    }

    /// Returns true if the history and memory panel is open.
    #[must_use]
    pub const fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Appends a digit or decimal-point token. Ignored while evaluating.
    pub fn press_token(&mut self, token: &str) {
        if self.evaluating {
            return;
        }
        self.input.push_token(token);
    }

    /// Appends an operator. Ignored while evaluating.
    pub fn press_operator(&mut self, op: Operator) {
        if self.evaluating {
            return;
        }
        self.input.push_operator(op);
    }

    /// Applies a unary function to the display. Ignored while evaluating.
    pub fn press_function(&mut self, func: UnaryFunction) {
        if self.evaluating {
            return;
        }
        self.input.apply_function(func);
    }

    /// Removes the last display character. Ignored while evaluating.
    pub fn press_backspace(&mut self) {
        if self.evaluating {
            return;
        }
        self.input.backspace();
    }

    /// Resets the display to `"0"`. Never locked out.
    pub fn clear_entry(&mut self) {
        self.input.clear();
    }

    /// Resets the display, history, and memory. Never locked out.
    pub fn all_clear(&mut self) {
        self.input.clear();
        self.history.clear();
        self.memory.clear();
    }

    /// Removes all history entries, leaving display and memory alone.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Opens or closes the history and memory panel.
    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    /// Adds the numeric prefix of the display to memory.
    ///
    /// Silently does nothing when the display has no numeric prefix.
    pub fn memory_add(&mut self) {
        if let Some(value) = parse_number_prefix(self.input.text()) {
            self.memory.add(value);
        }
    }

    /// Subtracts the numeric prefix of the display from memory.
    ///
    /// Silently does nothing when the display has no numeric prefix.
    pub fn memory_subtract(&mut self) {
        if let Some(value) = parse_number_prefix(self.input.text()) {
            self.memory.subtract(value);
        }
    }

    /// Zeroes the memory register unconditionally.
    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    /// Writes the memory value into the display and returns it.
    pub fn memory_recall(&mut self) -> f64 {
        let value = self.memory.recall();
        self.input.set_result(value);
        value
    }

    /// Submits the current display for evaluation.
    ///
    /// The press is ignored while an evaluation is pending or when the
    /// display shows `"Error"` or the initial `"0"`. Otherwise the
    /// expression is screened locally, sent to the evaluator, and the
    /// outcome applied: on success the result is recorded in history and
    /// shown on the display; on any failure the display shows `"Error"`
    /// and the error is returned for the caller to surface. Exactly one
    /// evaluation is in flight at a time.
    ///
    /// # Errors
    ///
    /// Returns the validation or evaluation error that failed the
    /// submission.
    pub async fn submit<E>(&mut self, evaluator: &E) -> Result<SubmitOutcome>
    where
        E: ExpressionEvaluator + ?Sized,
    {
        if self.evaluating || self.input.is_error() || self.input.is_initial() {
            return Ok(SubmitOutcome::Ignored);
        }

        self.evaluating = true;
        let expression = self.input.text().to_string();
        let outcome = run_evaluation(evaluator, &expression).await;
        self.evaluating = false;

        match outcome {
            Ok(value) => {
                self.history.record(HistoryEntry::new(expression, value));
                self.input.set_result(value);
                Ok(SubmitOutcome::Evaluated(value))
            }
            Err(err) => {
                self.input.set_error();
                Err(err)
            }
        }
    }
}

/// Screens and evaluates one expression.
async fn run_evaluation<E>(evaluator: &E, expression: &str) -> Result<f64>
where
    E: ExpressionEvaluator + ?Sized,
{
    validate_expression(expression)?;
    let response = evaluator.evaluate(&EvaluateRequest::new(expression)).await?;
    Ok(response.result)
}
