use std::iter::Peekable;

use crate::interpreter::{
    evaluator::BinaryOperator,
    lexer::Token,
    parser::{
        core::{Bounds, ParseResult},
        factor::parse_factor,
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, folding each term
/// into the running value as soon as it is parsed.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `bounds`: Nesting limits for this call.
///
/// # Returns
/// The value of the parsed span.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, bounds: Bounds) -> ParseResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut value = parse_multiplicative(tokens, bounds)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = BinaryOperator::from_token(token)
           && op.is_additive()
        {
            tokens.next();
            let right = parse_multiplicative(tokens, bounds)?;
            value = op.apply(value, right);
            continue;
        }
        break;
    }
    Ok(value)
}

/// Parses multiplication and division expressions.
///
/// Same shape as [`parse_additive`], one precedence level down.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, bounds: Bounds) -> ParseResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut value = parse_factor(tokens, bounds)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = BinaryOperator::from_token(token)
           && op.is_multiplicative()
        {
            tokens.next();
            let right = parse_factor(tokens, bounds)?;
            value = op.apply(value, right);
            continue;
        }
        break;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::core::DEFAULT_MAX_DEPTH};

    fn additive(source: &str) -> (ParseResult<f64>, usize) {
        let tokens = tokenize(source).unwrap();
        let mut iter = tokens.iter().peekable();
        let value = parse_additive(&mut iter, Bounds::new(DEFAULT_MAX_DEPTH, source.len()));
        (value, iter.count())
    }

    #[test]
    fn folds_left_to_right() {
        assert_eq!(additive("8-3-2"), (Ok(3.0), 0));
        assert_eq!(additive("16/4/2"), (Ok(2.0), 0));
        assert_eq!(additive("2+3*4"), (Ok(14.0), 0));
    }

    #[test]
    fn stops_before_a_token_it_cannot_fold() {
        assert_eq!(additive("1+2)+4"), (Ok(3.0), 3));
        assert_eq!(additive("6/2 5"), (Ok(3.0), 1));
    }

    #[test]
    fn missing_right_operand() {
        let (value, _) = additive("1+");
        assert_eq!(value,
                   Err(crate::error::ParseError::UnexpectedEndOfInput { offset: 2 }));
    }
}
