//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{History, HistoryEntry, format_number};
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a completed evaluation.
#[must_use]
pub fn format_evaluation(entry: &HistoryEntry, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            format!("{} = {}\n", entry.expression, format_number(entry.result))
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct EvaluationOutput<'a> {
                expression: &'a str,
                result: f64,
            }
            format_json(&EvaluationOutput {
                expression: &entry.expression,
                result: entry.result,
            })
        }
    }
}

/// Formats the history and memory panel.
#[must_use]
pub fn format_panel(history: &History, memory: f64, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_panel_text(history, memory),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct PanelOutput<'a> {
                history: Vec<&'a HistoryEntry>,
                memory: f64,
            }
            format_json(&PanelOutput {
                history: history.iter_recent().collect(),
                memory,
            })
        }
    }
}

fn format_panel_text(history: &History, memory: f64) -> String {
    let mut output = String::new();
    output.push_str("History\n");
    output.push_str("=======\n");
    if history.is_empty() {
        output.push_str("  (no calculations yet)\n");
    } else {
        for entry in history.iter_recent() {
            let _ = writeln!(
                output,
                "  {} = {}",
                entry.expression,
                format_number(entry.result)
            );
        }
    }
    output.push('\n');
    let _ = writeln!(output, "Memory: {}", format_number(memory));
    output
}

/// Formats the result of scaffolding prompt templates.
#[must_use]
pub fn format_written_prompts(paths: &[PathBuf], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if paths.is_empty() {
                return "Prompt templates already present.\n".to_string();
            }
            let mut output = String::new();
            let _ = writeln!(output, "Wrote {} prompt template(s):", paths.len());
            for path in paths {
                let _ = writeln!(output, "  {}", path.display());
            }
            output
        }
        OutputFormat::Json => format_json(&paths),
    }
}

/// Formats an error for terminal or JSON output.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
