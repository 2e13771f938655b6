//! System prompt and template builder for the evaluator model.
//!
//! The system prompt pins the model to the evaluator role and the JSON
//! reply contract. It can be overridden from a template file; the user
//! message is built per request from the expression text.

use std::path::Path;

/// System prompt instructing the model to act as an expression evaluator.
pub const EVALUATOR_SYSTEM_PROMPT: &str = r#"You are a mathematical expression evaluator. You will take a mathematical expression as input and return the result of the evaluated expression as a number.

Respond with a single JSON object of the form {"result": <number>} and nothing else. Do not wrap the reply in markdown fences. If the expression cannot be evaluated, respond with {"result": null}."#;

/// Default prompt directory under user config.
const DEFAULT_PROMPT_DIR: &str = ".config/aicalc/prompts";

/// Filename for the evaluator prompt template.
const EVALUATOR_FILENAME: &str = "evaluator.md";

/// The system prompt used for evaluation requests.
///
/// Loaded from an external template file when available, falling back to
/// the compiled-in default. Use [`PromptSet::load`] to resolve the prompt
/// directory from CLI flags, environment variables, or the default path.
#[derive(Debug, Clone)]
pub struct PromptSet {
    /// System prompt for the evaluator model.
    pub evaluator: String,
}

impl PromptSet {
    /// Loads the prompt from the given directory, falling back to the
    /// compiled-in default.
    ///
    /// Resolution order for `prompt_dir`:
    /// 1. Explicit `prompt_dir` argument (from `--prompt-dir` CLI flag)
    /// 2. `AICALC_PROMPT_DIR` environment variable
    /// 3. `~/.config/aicalc/prompts/`
    ///
    /// A missing or unreadable file uses the default.
    #[must_use]
    pub fn load(prompt_dir: Option<&Path>) -> Self {
        let resolved_dir = prompt_dir
            .map(std::path::PathBuf::from)
            .or_else(|| {
                std::env::var("AICALC_PROMPT_DIR")
                    .ok()
                    .map(std::path::PathBuf::from)
            })
            .or_else(|| dirs::home_dir().map(|h| h.join(DEFAULT_PROMPT_DIR)));

        let evaluator = resolved_dir
            .map(|dir| dir.join(EVALUATOR_FILENAME))
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .unwrap_or_else(|| EVALUATOR_SYSTEM_PROMPT.to_string());

        Self { evaluator }
    }

    /// Returns the compiled-in default without checking the filesystem.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            evaluator: EVALUATOR_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Writes the compiled-in default prompt to the given directory.
    ///
    /// Creates the directory if it does not exist. An existing file is
    /// **not** overwritten; use this for initial scaffolding only.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if directory creation or file writing fails.
    pub fn write_defaults(dir: &Path) -> std::io::Result<Vec<std::path::PathBuf>> {
        std::fs::create_dir_all(dir)?;

        let mut written = Vec::new();
        let path = dir.join(EVALUATOR_FILENAME);
        if !path.exists() {
            std::fs::write(&path, EVALUATOR_SYSTEM_PROMPT)?;
            written.push(path);
        }

        Ok(written)
    }

    /// Returns the default prompt directory under the user's home.
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn default_dir() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|h| h.join(DEFAULT_PROMPT_DIR))
    }
}

/// Builds the user message for a single evaluation request.
#[must_use]
pub fn build_user_prompt(expression: &str) -> String {
    format!("Expression: {expression}")
}
