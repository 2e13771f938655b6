//! OpenAI-compatible evaluation backend.
//!
//! Sends each expression to a chat-completions endpoint in JSON mode and
//! parses the structured reply. Works against the public OpenAI API or any
//! compatible server via a base-URL override.

use crate::error::{EvalError, Result};
use crate::eval::prompt::{PromptSet, build_user_prompt};
use crate::eval::schema::{EvaluateRequest, EvaluateResponse};
use crate::eval::traits::ExpressionEvaluator;
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs, ResponseFormat,
};
use async_trait::async_trait;
use std::path::PathBuf;

/// Default model identifier sent to the endpoint.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for the evaluation endpoint.
///
/// # Examples
///
/// ```
/// use aicalc::eval::EvaluatorConfig;
///
/// let config = EvaluatorConfig::new()
///     .with_model("gpt-4o")
///     .with_api_base("http://localhost:8080/v1");
/// assert_eq!(config.model, "gpt-4o");
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Model identifier.
    pub model: String,
    /// Base URL override for OpenAI-compatible endpoints.
    pub api_base: Option<String>,
    /// Directory holding prompt template overrides.
    pub prompt_dir: Option<PathBuf>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: None,
            prompt_dir: None,
        }
    }
}

impl EvaluatorConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Sets the base URL of an OpenAI-compatible endpoint.
    #[must_use]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = Some(api_base.to_string());
        self
    }

    /// Sets the prompt template override directory.
    #[must_use]
    pub fn with_prompt_dir(mut self, prompt_dir: PathBuf) -> Self {
        self.prompt_dir = Some(prompt_dir);
        self
    }
}

/// Evaluator backed by an OpenAI-compatible chat-completions endpoint.
///
/// The API key is read from the `OPENAI_API_KEY` environment variable by
/// the underlying client. Requests pin the model to the evaluator system
/// prompt, force a JSON object reply, and use temperature zero.
#[derive(Debug, Clone)]
pub struct OpenAiEvaluator {
    client: Client<OpenAIConfig>,
    model: String,
    system_prompt: String,
}

impl OpenAiEvaluator {
    /// Creates an evaluator from the given config.
    #[must_use]
    pub fn new(config: &EvaluatorConfig) -> Self {
        let mut openai_config = OpenAIConfig::new();
        if let Some(ref api_base) = config.api_base {
            openai_config = openai_config.with_api_base(api_base);
        }
        let prompts = PromptSet::load(config.prompt_dir.as_deref());

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            system_prompt: prompts.evaluator,
        }
    }
}

#[async_trait]
impl ExpressionEvaluator for OpenAiEvaluator {
    async fn evaluate(&self, request: &EvaluateRequest) -> Result<EvaluateResponse> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(self.system_prompt.as_str())
            .build()
            .map_err(|e| EvalError::Request(e.to_string()))?;
        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(build_user_prompt(&request.expression))
            .build()
            .map_err(|e| EvalError::Request(e.to_string()))?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([system.into(), user.into()])
            .response_format(ResponseFormat::JsonObject)
            .temperature(0.0)
            .build()
            .map_err(|e| EvalError::Request(e.to_string()))?;

        tracing::debug!(
            model = %self.model,
            expression = %request.expression,
            "sending evaluation request"
        );

        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| EvalError::Api(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(EvalError::EmptyResponse)?;

        parse_reply(&content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }

    fn description(&self) -> &'static str {
        "OpenAI-compatible chat-completions endpoint in JSON mode"
    }
}

/// Parses the model reply into a structured response.
///
/// The prompt demands a `{"result": <number>}` object; a bare number is
/// also accepted since some models drop the wrapper. Anything else, and
/// any non-finite value, is rejected.
fn parse_reply(content: &str) -> Result<EvaluateResponse> {
    let trimmed = content.trim();

    let response = match serde_json::from_str::<EvaluateResponse>(trimmed) {
        Ok(response) => response,
        Err(_) => {
            let result: f64 = trimmed.parse().map_err(|_| EvalError::Malformed {
                reply: truncate_reply(trimmed),
            })?;
            EvaluateResponse { result }
        }
    };

    if !response.result.is_finite() {
        return Err(EvalError::NonFinite {
            value: response.result,
        }
        .into());
    }

    Ok(response)
}

/// Truncates a reply for inclusion in error messages.
fn truncate_reply(reply: &str) -> String {
    const MAX_LEN: usize = 80;
    if reply.len() <= MAX_LEN {
        reply.to_string()
    } else {
        let truncated: String = reply.chars().take(MAX_LEN).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::Path;

    #[test]
    fn test_config_defaults() {
        let config = EvaluatorConfig::new();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_base.is_none());
        assert!(config.prompt_dir.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = EvaluatorConfig::new()
            .with_model("gpt-4o")
            .with_api_base("http://localhost:1234/v1")
            .with_prompt_dir(PathBuf::from("/tmp/prompts"));

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.api_base.as_deref(), Some("http://localhost:1234/v1"));
        assert_eq!(config.prompt_dir.as_deref(), Some(Path::new("/tmp/prompts")));
    }

    #[test]
    fn test_evaluator_name() {
        use crate::eval::traits::ExpressionEvaluator;

        let evaluator = OpenAiEvaluator::new(&EvaluatorConfig::new());
        assert_eq!(evaluator.name(), "openai");
        assert!(!evaluator.description().is_empty());
    }

    #[test]
    fn test_parse_reply_json_object() {
        let response = parse_reply(r#"{"result": 4}"#).unwrap();
        assert!((response.result - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_reply_json_object_with_whitespace() {
        let response = parse_reply("  {\"result\": -2.5}\n").unwrap();
        assert!((response.result + 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_reply_bare_number() {
        let response = parse_reply("42").unwrap();
        assert!((response.result - 42.0).abs() < f64::EPSILON);

        let response = parse_reply("0.75\n").unwrap();
        assert!((response.result - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_reply_rejects_prose() {
        let err = parse_reply("The answer is 4").unwrap_err();
        assert!(matches!(
            err,
            Error::Evaluation(EvalError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_reply_rejects_null_result() {
        let err = parse_reply(r#"{"result": null}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::Evaluation(EvalError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_reply_rejects_non_finite() {
        let err = parse_reply("inf").unwrap_err();
        assert!(matches!(
            err,
            Error::Evaluation(EvalError::NonFinite { .. })
        ));

        let err = parse_reply("NaN").unwrap_err();
        assert!(matches!(
            err,
            Error::Evaluation(EvalError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_truncate_reply_keeps_short_text() {
        assert_eq!(truncate_reply("short"), "short");
    }

    #[test]
    fn test_truncate_reply_caps_long_text() {
        let long = "x".repeat(200);
        let truncated = truncate_reply(&long);
        assert_eq!(truncated.len(), 83);
        assert!(truncated.ends_with("..."));
    }
}
