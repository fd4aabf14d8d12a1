use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Bounds, ParseResult, parse_expression},
    },
};

/// Parses a factor: a number or a parenthesized expression.
///
/// Consumes exactly one token before deciding. A `(` descends one nesting
/// level and hands off to [`parse_grouping`]; anything else must convert to a
/// number.
///
/// Grammar:
/// ```text
///     factor := "(" expression ")"
///             | number
/// ```
///
/// # Errors
/// - `UnexpectedToken` for an operator or `)` in factor position.
/// - `UnexpectedEndOfInput` if no tokens remain.
/// - `NestingTooDeep` if the `(` exceeds the nesting limit.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, bounds: Bounds) -> ParseResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::LParen, offset)) => parse_grouping(tokens, bounds.descend(*offset)?, *offset),
        Some((Token::Number(text), offset)) => parse_number(text, *offset),
        Some((tok, offset)) => Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                                 offset: *offset, }),
        None => Err(ParseError::UnexpectedEndOfInput { offset: bounds.end() }),
    }
}

/// Parses the remainder of a parenthesized expression.
///
/// Expected form `( expression )`, positioned just after the `(`. The token
/// following the inner expression is consumed and must be `)`; anything
/// else, including the end of input, yields
/// `ParseError::ExpectedClosingParen` pointing at the opening parenthesis.
///
/// # Returns
/// The inner value as-is.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, bounds: Bounds, open: usize) -> ParseResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let value = parse_expression(tokens, bounds)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(value),
        _ => Err(ParseError::ExpectedClosingParen { offset: open }),
    }
}

fn parse_number(text: &str, offset: usize) -> ParseResult<f64> {
    text.parse().map_err(|_| ParseError::UnexpectedToken { token: text.to_owned(),
                                                           offset })
}
