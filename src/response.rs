use axum::http::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::evaluate_with_limit;

/// Confirmation note attached to every successful evaluation.
pub const SUCCESS_MESSAGE: &str = "✅ Parsed and evaluated successfully";
/// Error body for any method other than `POST`.
pub const METHOD_NOT_ALLOWED: &str = "Use POST method";
/// Error body when the request carries no usable `expression`.
pub const MISSING_EXPRESSION: &str = "Missing 'expression' in body";

/// JSON body returned by the evaluation endpoint.
///
/// Serialized without a tag, so each variant is a flat object. Non-finite
/// results such as `5/0` serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EvalResponse {
    /// The expression evaluated.
    Success {
        /// The expression as received.
        expression: String,
        /// The computed value.
        result:     f64,
        /// Always [`SUCCESS_MESSAGE`].
        message:    String,
    },
    /// The expression was received but failed to evaluate.
    Failure {
        /// The expression as received.
        expression: String,
        /// Human readable error message.
        error:      String,
    },
    /// The request was refused before any evaluation.
    Rejected {
        /// Why the request was refused.
        error: String,
    },
}

/// A status code paired with the body to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body:   EvalResponse,
}

impl Reply {
    fn rejected(status: StatusCode, error: &str) -> Self {
        Self { status,
               body: EvalResponse::Rejected { error: error.to_owned() } }
    }

    /// `405` for a request that is not a `POST`.
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::rejected(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
    }

    /// `400` for a body without an `expression`.
    #[must_use]
    pub fn missing_expression() -> Self {
        Self::rejected(StatusCode::BAD_REQUEST, MISSING_EXPRESSION)
    }

    /// Evaluates `expression` and shapes the outcome.
    ///
    /// `200` with the result on success, `400` with the error message on
    /// failure. The expression is echoed back either way.
    #[must_use]
    pub fn evaluated(expression: String, max_depth: usize) -> Self {
        match evaluate_with_limit(&expression, max_depth) {
            Ok(result) => Self { status: StatusCode::OK,
                                 body:   EvalResponse::Success { expression,
                                                                 result,
                                                                 message: SUCCESS_MESSAGE.to_owned() }, },
            Err(e) => Self { status: StatusCode::BAD_REQUEST,
                             body:   EvalResponse::Failure { expression,
                                                             error: e.to_string() }, },
        }
    }
}

/// Pulls the `expression` field out of a JSON request body.
///
/// Returns `None` when the body is not JSON, has no `expression`, or the
/// field is not a non-empty string.
#[must_use]
pub fn extract_expression(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("expression")? {
        Value::String(expression) if !expression.is_empty() => Some(expression.clone()),
        _ => None,
    }
}

/// Handles one request from method and raw body to reply.
///
/// # Example
/// ```
/// use axum::http::{Method, StatusCode};
/// use reckon::response::handle;
///
/// let reply = handle(&Method::POST, br#"{"expression": "8-3-2"}"#, 256);
/// assert_eq!(reply.status, StatusCode::OK);
///
/// let reply = handle(&Method::GET, b"", 256);
/// assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
/// ```
#[must_use]
pub fn handle(method: &Method, body: &[u8], max_depth: usize) -> Reply {
    if *method != Method::POST {
        return Reply::method_not_allowed();
    }

    match extract_expression(body) {
        Some(expression) => Reply::evaluated(expression, max_depth),
        None => Reply::missing_expression(),
    }
}
