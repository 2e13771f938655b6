//! Evaluator trait definition.
//!
//! Defines the interface to the external evaluation endpoint, keeping the
//! calculator state machine independent of any particular model backend.

use crate::error::Result;
use crate::eval::schema::{EvaluateRequest, EvaluateResponse};
use async_trait::async_trait;

/// Trait for evaluating expressions through an external model.
///
/// Implementations must be `Send + Sync`. They are responsible for the
/// full round trip: building the model request, calling the endpoint, and
/// mapping the reply onto [`EvaluateResponse`]. A returned result is
/// always a finite number.
#[async_trait]
pub trait ExpressionEvaluator: Send + Sync {
    /// Evaluates a single expression.
    ///
    /// # Arguments
    ///
    /// * `request` - The expression payload to submit.
    ///
    /// # Returns
    ///
    /// The structured numeric response.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be reached or the reply
    /// cannot be interpreted as a finite number.
    async fn evaluate(&self, request: &EvaluateRequest) -> Result<EvaluateResponse>;

    /// Returns the name of the evaluation backend.
    fn name(&self) -> &'static str;

    /// Returns a description of the evaluation backend.
    fn description(&self) -> &'static str {
        "No description available"
    }
}
