//! CLI layer for aicalc.
//!
//! Provides the command-line interface using clap, with the interactive
//! calculator loop, one-shot evaluation, and prompt scaffolding.

pub mod commands;
pub mod output;
pub mod parser;
pub mod repl;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
