use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in an arithmetic expression.
///
/// A token is either a numeric literal, kept in its textual form until a
/// factor converts it, or one of the six single-character symbols.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14` or `42`.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_owned())]
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Splits an expression into tokens paired with their byte offsets.
///
/// Characters that are neither part of a number nor one of `+ - * / ( )` are
/// dropped. A malformed run such as `1.2.3` therefore yields `1.2` and `3`,
/// and the parser rejects the leftover number as trailing input.
///
/// # Errors
/// Returns `ParseError::InvalidExpression` if nothing in `source` could be
/// tokenized.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * (1.5)").unwrap();
/// assert_eq!(tokens[0], (Token::Number("2".into()), 0));
/// assert_eq!(tokens[2], (Token::LParen, 4));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => {
                tracing::trace!(offset = lexer.span().start,
                                slice = lexer.slice(),
                                "dropping unrecognised input");
            },
        }
    }

    if tokens.is_empty() {
        return Err(ParseError::InvalidExpression);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(tok, _)| tok).collect()
    }

    fn num(text: &str) -> Token {
        Token::Number(text.to_owned())
    }

    #[test]
    fn numbers_and_symbols() {
        assert_eq!(kinds("(32+604.453)*3562"),
                   vec![Token::LParen,
                        num("32"),
                        Token::Plus,
                        num("604.453"),
                        Token::RParen,
                        Token::Star,
                        num("3562")]);
    }

    #[test]
    fn offsets_point_at_token_starts() {
        let tokens = tokenize("  12 /  3").unwrap();
        assert_eq!(tokens,
                   vec![(num("12"), 2), (Token::Slash, 5), (num("3"), 8)]);
    }

    #[test]
    fn unrecognised_characters_are_dropped() {
        assert_eq!(kinds("2a+b3"), vec![num("2"), Token::Plus, num("3")]);
        assert_eq!(kinds("x = 7 % 2"), vec![num("7"), num("2")]);
    }

    #[test]
    fn malformed_number_splits() {
        assert_eq!(kinds("1.2.3"), vec![num("1.2"), num("3")]);
        assert_eq!(kinds("5."), vec![num("5")]);
        assert_eq!(kinds(".5"), vec![num("5")]);
    }

    #[test]
    fn nothing_recognisable_is_invalid() {
        assert_eq!(tokenize(""), Err(ParseError::InvalidExpression));
        assert_eq!(tokenize("   "), Err(ParseError::InvalidExpression));
        assert_eq!(tokenize("abc"), Err(ParseError::InvalidExpression));
    }

    #[test]
    fn display_reproduces_source_text() {
        let rendered: String = kinds("(1.50-2)/3").iter().map(ToString::to_string).collect();
        assert_eq!(rendered, "(1.50-2)/3");
    }
}
