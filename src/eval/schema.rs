//! Request and response payloads exchanged with the evaluation endpoint.
//!
//! The wire contract is deliberately tiny: an expression string goes out,
//! a single number comes back as a JSON object.

use serde::{Deserialize, Serialize};

/// A single expression submitted for evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// The mathematical expression to evaluate.
    pub expression: String,
}

impl EvaluateRequest {
    /// Creates a request for the given expression text.
    #[must_use]
    pub fn new(expression: &str) -> Self {
        Self {
            expression: expression.to_string(),
        }
    }
}

/// The numeric result returned by the evaluation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    /// The result of the evaluated expression.
    pub result: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_new() {
        let request = EvaluateRequest::new("2 + 2");
        assert_eq!(request.expression, "2 + 2");
    }

    #[test]
    fn test_request_serializes_to_expression_field() {
        let request = EvaluateRequest::new("sqrt(9)");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"expression":"sqrt(9)"}"#);
    }

    #[test]
    fn test_response_parses_from_object() {
        let response: EvaluateResponse = serde_json::from_str(r#"{"result": 4}"#).unwrap();
        assert!((response.result - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_response_parses_fractional_result() {
        let response: EvaluateResponse = serde_json::from_str(r#"{"result": 0.75}"#).unwrap();
        assert!((response.result - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_response_rejects_null_result() {
        let parsed = serde_json::from_str::<EvaluateResponse>(r#"{"result": null}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_round_trip() {
        let response = EvaluateResponse { result: -12.5 };
        let json = serde_json::to_string(&response).unwrap();
        let restored: EvaluateResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, response);
    }
}
