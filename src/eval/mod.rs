//! Expression evaluation gateway.
//!
//! Everything between a submitted display string and a numeric result
//! lives here: local screening, the prompt templates, the wire payloads,
//! and the model backend behind the [`ExpressionEvaluator`] trait.

pub mod openai;
pub mod precheck;
pub mod prompt;
pub mod schema;
pub mod traits;

pub use openai::{DEFAULT_MODEL, EvaluatorConfig, OpenAiEvaluator};
pub use precheck::validate_expression;
pub use prompt::{EVALUATOR_SYSTEM_PROMPT, PromptSet, build_user_prompt};
pub use schema::{EvaluateRequest, EvaluateResponse};
pub use traits::ExpressionEvaluator;
