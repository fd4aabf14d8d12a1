use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply parentheses may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Per-call parsing limits threaded through every production.
///
/// Each `(` descends one level; the parse fails once `max_depth` levels are
/// already open. `end` is the byte length of the source, reported when the
/// tokens run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    depth:     usize,
    max_depth: usize,
    end:       usize,
}

impl Bounds {
    /// Creates bounds for a source of `end` bytes at nesting depth zero.
    #[must_use]
    pub const fn new(max_depth: usize, end: usize) -> Self {
        Self { depth: 0,
               max_depth,
               end }
    }

    /// Returns the bounds one nesting level deeper.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` pointing at `offset` when the
    /// limit is already reached.
    pub const fn descend(self, offset: usize) -> ParseResult<Self> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    offset });
        }
        Ok(Self { depth: self.depth + 1,
                  ..self })
    }

    /// Byte offset reported for `UnexpectedEndOfInput`.
    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }
}

/// Parses and evaluates a full expression.
///
/// This is the entry point for a single precedence climb. It begins at the
/// lowest-precedence level, addition, and recursively descends.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `bounds`: Nesting limits for this call.
///
/// # Returns
/// The value of the expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, bounds: Bounds) -> ParseResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, bounds)
}

/// Evaluates a complete token sequence.
///
/// Parses one expression and then requires every token to have been
/// consumed. A leftover token fails with `ParseError::TrailingInput` even
/// though a value was computed.
///
/// # Errors
/// Propagates any production error, or `TrailingInput` for unconsumed
/// tokens.
pub fn parse_source(tokens: &[(Token, usize)], bounds: Bounds) -> ParseResult<f64> {
    let mut iter = tokens.iter().peekable();
    let value = parse_expression(&mut iter, bounds)?;

    if let Some((token, offset)) = iter.next() {
        return Err(ParseError::TrailingInput { token:  token.to_string(),
                                               offset: *offset, });
    }

    Ok(value)
}
