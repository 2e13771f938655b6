//! Core domain models for the calculator.
//!
//! This module contains the fundamental data structures of the calculator:
//! the display input buffer, calculation history, memory register, and the
//! session that ties them together. All arithmetic is delegated through the
//! [`crate::eval`] gateway; nothing here computes a result locally.

pub mod history;
pub mod input;
pub mod memory;
pub mod session;

pub use history::{History, HistoryEntry};
pub use input::{
    ERROR_DISPLAY, INITIAL_DISPLAY, InputBuffer, MAX_DISPLAY_LEN, Operator, UnaryFunction,
    format_number,
};
pub use memory::{MemoryRegister, parse_number_prefix};
pub use session::{Session, SubmitOutcome};
