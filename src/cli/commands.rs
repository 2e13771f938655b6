//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{OutputFormat, format_evaluation, format_written_prompts};
use crate::cli::parser::{Cli, Commands};
use crate::cli::repl;
use crate::core::HistoryEntry;
use crate::error::{Error, Result};
use crate::eval::{
    EvaluateRequest, ExpressionEvaluator, OpenAiEvaluator, PromptSet, validate_expression,
};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Some(Commands::Eval { expression }) => cmd_eval(cli, expression, format),
        Some(Commands::InitPrompts { dir }) => cmd_init_prompts(dir.as_deref(), format),
        Some(Commands::Repl) | None => repl::run(cli),
    }
}

/// Builds the async runtime evaluation requests run on.
pub(crate) fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Error::ExecutionFailed(format!("failed to start async runtime: {e}")))
}

// ==================== Command Implementations ====================

fn cmd_eval(cli: &Cli, expression: &str, format: OutputFormat) -> Result<String> {
    // Screen locally before any request goes out.
    validate_expression(expression)?;

    let evaluator = OpenAiEvaluator::new(&cli.evaluator_config());
    let runtime = build_runtime()?;
    let response = runtime.block_on(evaluator.evaluate(&EvaluateRequest::new(expression)))?;

    let entry = HistoryEntry::new(expression.to_string(), response.result);
    Ok(format_evaluation(&entry, format))
}

fn cmd_init_prompts(dir: Option<&std::path::Path>, format: OutputFormat) -> Result<String> {
    let target = dir
        .map(std::path::PathBuf::from)
        .or_else(PromptSet::default_dir)
        .ok_or_else(|| Error::ExecutionFailed("cannot determine home directory".to_string()))?;

    let written = PromptSet::write_defaults(&target)?;
    Ok(format_written_prompts(&written, format))
}
