//! Memory register driven by the M+, M-, MC, and MR keys.

use serde::{Deserialize, Serialize};

/// Single-value calculator memory, starting at zero.
///
/// # Examples
///
/// ```
/// use aicalc::core::MemoryRegister;
///
/// let mut memory = MemoryRegister::new();
/// memory.add(10.0);
/// memory.subtract(2.5);
/// assert!((memory.recall() - 7.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    /// Creates a register holding zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Returns the stored value.
    #[must_use]
    pub const fn recall(self) -> f64 {
        self.value
    }

    /// Adds an operand to the stored value.
    pub fn add(&mut self, operand: f64) {
        self.value += operand;
    }

    /// Subtracts an operand from the stored value.
    pub fn subtract(&mut self, operand: f64) {
        self.value -= operand;
    }

    /// Resets the stored value to zero.
    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}

/// Parses the leading numeric prefix of a display string.
///
/// This is the lenient read the memory keys use: leading whitespace is
/// skipped, an optional sign, integer digits, fraction, and exponent are
/// consumed, and parsing stops at the first character that cannot extend a
/// float literal. Returns `None` when no digits are found, so `"2 + 2"`
/// parses as `2` while `"Error"` parses as nothing.
#[must_use]
pub fn parse_number_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first().copied(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if bytes.get(end).copied() == Some(b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(|b| b.is_ascii_digit()) {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits = has_digits || frac_end > frac_start;
            end = frac_end;
        }
    }

    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end).copied(), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end).copied(), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(|b| b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    trimmed[..end].parse().ok()
}
