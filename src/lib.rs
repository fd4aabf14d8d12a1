//! # reckon
//!
//! reckon evaluates four-operator arithmetic expressions such as
//! `(2 + 3) * 4.5`. A `logos` lexer feeds a recursive-descent parser that
//! computes the value while it parses, so no syntax tree is ever built.
//!
//! The same evaluator backs a command line tool and a small JSON-over-HTTP
//! endpoint.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    lexer::tokenize,
    parser::core::{Bounds, DEFAULT_MAX_DEPTH, parse_source},
};

/// Provides the error type shared by every phase.
///
/// This module defines the closed set of failures an evaluation can end in:
/// nothing to tokenize, an unexpected token, running out of tokens, a missing
/// `)`, leftover tokens, and excessive nesting. Each carries the byte offset
/// it refers to.
pub mod error;
/// Tokenizer, parser, and arithmetic.
///
/// This module ties together lexing and the single-pass parse-and-evaluate
/// step behind [`evaluate`].
pub mod interpreter;
/// Request and response shapes for the evaluation endpoint.
///
/// Turns a request body into an expression and an evaluation outcome into a
/// status code and JSON body. Shared by the HTTP server and `reckon eval
/// --json`.
pub mod response;
/// HTTP transport.
///
/// An `axum` router exposing the evaluator at `/api/parse`.
pub mod server;

pub use error::ParseError;

/// Evaluates an arithmetic expression.
///
/// Tokenizes `source`, then parses and evaluates it in one pass with the
/// default nesting limit. Each call owns its tokens, so calls are independent
/// and safe to run concurrently.
///
/// Division by zero is not an error; it produces an infinity or NaN.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found.
///
/// # Examples
/// ```
/// use reckon::{ParseError, evaluate};
///
/// assert_eq!(evaluate("2+3*4"), Ok(14.0));
/// assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
/// assert_eq!(evaluate("5/0"), Ok(f64::INFINITY));
///
/// assert_eq!(evaluate(""), Err(ParseError::InvalidExpression));
/// assert!(matches!(evaluate("(1+2"), Err(ParseError::ExpectedClosingParen { .. })));
/// ```
pub fn evaluate(source: &str) -> Result<f64, ParseError> {
    evaluate_with_limit(source, DEFAULT_MAX_DEPTH)
}

/// Evaluates an arithmetic expression with a custom parenthesis nesting
/// limit.
///
/// # Errors
/// As [`evaluate`], plus [`ParseError::NestingTooDeep`] once more than
/// `max_depth` parentheses are open at the same time.
pub fn evaluate_with_limit(source: &str, max_depth: usize) -> Result<f64, ParseError> {
    let tokens = tokenize(source)?;
    parse_source(&tokens, Bounds::new(max_depth, source.len()))
}
