//! # aicalc
//!
//! A calculator that delegates arithmetic to a language model.
//!
//! aicalc keeps the display string, calculation history, and memory register
//! locally and sends each finished expression to an OpenAI-compatible chat
//! endpoint for evaluation. The model answers with a single JSON object
//! carrying the numeric result.
//!
//! ## Features
//!
//! - **Display editing**: digit, operator, and function keys build the expression
//! - **Model evaluation**: expressions are evaluated by a chat model in JSON mode
//! - **History**: every successful calculation is recorded newest-first
//! - **Memory register**: M+, M-, MC, and MR over the leading number of the display

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod eval;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{
    History, HistoryEntry, InputBuffer, MemoryRegister, Operator, Session, SubmitOutcome,
    UnaryFunction,
};

// Re-export evaluation types
pub use eval::{EvaluatorConfig, ExpressionEvaluator, OpenAiEvaluator};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
