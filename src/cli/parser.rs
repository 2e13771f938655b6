//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::eval::{DEFAULT_MODEL, EvaluatorConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aicalc: a model-assisted calculator.
///
/// A keypad-style calculator that performs no arithmetic locally: every
/// expression is evaluated by an external model endpoint returning a
/// structured numeric result.
#[derive(Parser, Debug)]
#[command(name = "aicalc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Model identifier sent to the evaluation endpoint.
    #[arg(short, long, env = "AICALC_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of an OpenAI-compatible endpoint.
    ///
    /// Defaults to the public OpenAI API. The API key is read from the
    /// `OPENAI_API_KEY` environment variable.
    #[arg(long, env = "AICALC_API_BASE")]
    pub api_base: Option<String>,

    /// Directory containing prompt template overrides.
    ///
    /// Defaults to `~/.config/aicalc/prompts/`.
    #[arg(long, env = "AICALC_PROMPT_DIR")]
    pub prompt_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute. Defaults to the interactive calculator.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive calculator.
    Repl,

    /// Evaluate a single expression and exit.
    Eval {
        /// Expression text, e.g. "2 + 2".
        expression: String,
    },

    /// Write the default prompt templates to a directory for editing.
    #[command(name = "init-prompts")]
    InitPrompts {
        /// Target directory (defaults to `~/.config/aicalc/prompts/`).
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Builds the evaluator configuration from the CLI arguments.
    #[must_use]
    pub fn evaluator_config(&self) -> EvaluatorConfig {
        let mut config = EvaluatorConfig::new().with_model(&self.model);
        if let Some(ref api_base) = self.api_base {
            config = config.with_api_base(api_base);
        }
        if let Some(ref prompt_dir) = self.prompt_dir {
            config = config.with_prompt_dir(prompt_dir.clone());
        }
        config
    }
}
