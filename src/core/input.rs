//! Display input buffer for the calculator.
//!
//! The display is a single string edited through key presses. It starts at
//! `"0"`, shows `"Error"` after a failed evaluation, and enforces a length
//! ceiling on token appends. Operators are kept space-padded so the display
//! text doubles as the expression sent to the evaluation endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Initial display contents.
pub const INITIAL_DISPLAY: &str = "0";

/// Display sentinel shown after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

/// Token appends are ignored once the display grows past this length.
pub const MAX_DISPLAY_LEN: usize = 40;

/// A binary operator key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`*`).
    Multiply,
    /// Division (`/`).
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the wire symbol used in expression text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the space-padded form the display uses between operands.
    #[must_use]
    pub const fn padded(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Subtract => " - ",
            Self::Multiply => " * ",
            Self::Divide => " / ",
        }
    }

    /// Parses an operator symbol, accepting the Unicode keypad aliases
    /// `×` and `÷`.
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A unary function key that rewrites the whole display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFunction {
    /// Square root: wraps the display in `sqrt(...)`.
    Sqrt,
    /// Percent: wraps the display in `(...) / 100`.
    Percent,
    /// Exponent: appends `^`, leaving the exponent to be typed.
    Exponent,
}

/// The calculator display buffer.
///
/// All edits go through the key-press methods below; the resulting text is
/// what the user sees and, verbatim, what gets submitted for evaluation.
///
/// # Examples
///
/// ```
/// use aicalc::core::{InputBuffer, Operator};
///
/// let mut input = InputBuffer::new();
/// input.push_token("12");
/// input.push_operator(Operator::Add);
/// input.push_token("3");
/// assert_eq!(input.text(), "12 + 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBuffer {
    text: String,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBuffer {
    /// Creates a buffer showing the initial `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: INITIAL_DISPLAY.to_string(),
        }
    }

    /// Returns the current display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the display shows the initial `"0"`.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.text == INITIAL_DISPLAY
    }

    /// Returns true if the display shows the error sentinel.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.text == ERROR_DISPLAY
    }

    /// Appends a digit or decimal-point token.
    ///
    /// Ignored when the display has grown past [`MAX_DISPLAY_LEN`]. The
    /// initial `"0"` and the error sentinel are replaced rather than
    /// appended to.
    pub fn push_token(&mut self, token: &str) {
        if self.text.len() > MAX_DISPLAY_LEN {
            return;
        }
        if self.is_initial() || self.is_error() {
            self.text = token.to_string();
        } else {
            self.text.push_str(token);
        }
    }

    /// Appends a space-padded operator.
    ///
    /// On the error sentinel the display becomes the bare operator symbol.
    /// A trailing operator is replaced instead of stacked, so pressing two
    /// operators in a row keeps only the second.
    pub fn push_operator(&mut self, op: Operator) {
        if self.is_error() {
            self.text = op.symbol().to_string();
            return;
        }
        if self.trailing_operator().is_some() {
            self.text.truncate(self.text.len() - 3);
        }
        self.text.push(' ');
        self.text.push(op.symbol());
        self.text.push(' ');
    }

    /// Rewrites the display through a unary function.
    pub fn apply_function(&mut self, func: UnaryFunction) {
        self.text = match func {
            UnaryFunction::Sqrt => format!("sqrt({})", self.text),
            UnaryFunction::Percent => format!("({}) / 100", self.text),
            UnaryFunction::Exponent => format!("{}^", self.text),
        };
    }

    /// Removes the last character, resetting to `"0"` when one remains.
    pub fn backspace(&mut self) {
        if self.text.len() > 1 {
            self.text.pop();
        } else {
            self.text = INITIAL_DISPLAY.to_string();
        }
    }

    /// Resets the display to `"0"`.
    pub fn clear(&mut self) {
        self.text = INITIAL_DISPLAY.to_string();
    }

    /// Replaces the display with a formatted evaluation result.
    pub fn set_result(&mut self, value: f64) {
        self.text = format_number(value);
    }

    /// Replaces the display with the error sentinel.
    pub fn set_error(&mut self) {
        self.text = ERROR_DISPLAY.to_string();
    }

    /// Returns the operator the display currently ends with, if any.
    #[must_use]
    pub fn trailing_operator(&self) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| self.text.ends_with(op.padded()))
    }
}

/// Formats an evaluation result for the display.
///
/// Integral values print without a fractional part; everything else prints
/// with up to ten fractional digits, trailing zeros trimmed. The output
/// contains no grouping separators so it can be edited further as
/// expression text.
///
/// # Examples
///
/// ```
/// use aicalc::core::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-12.25), "-12.25");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
