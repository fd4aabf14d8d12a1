#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or parsing an
/// expression.
///
/// Every variant is terminal for the evaluation that raised it. Offsets are
/// byte offsets into the original expression text.
pub enum ParseError {
    /// The input contained nothing that could be tokenized.
    InvalidExpression,
    /// Found a token where a number or `(` was expected.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// Ran out of tokens where a number or `(` was expected.
    UnexpectedEndOfInput {
        /// Byte offset of the end of the input.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(`.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingInput {
        /// The first token that was not consumed.
        token:  String,
        /// Byte offset of that token.
        offset: usize,
    },
    /// Parentheses were nested deeper than the configured limit.
    NestingTooDeep {
        /// The limit that was exceeded.
        limit:  usize,
        /// Byte offset of the `(` that crossed the limit.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the name of the error kind, e.g. `"ExpectedClosingParen"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidExpression => "InvalidExpression",
            Self::UnexpectedToken { .. } => "UnexpectedToken",
            Self::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            Self::ExpectedClosingParen { .. } => "ExpectedClosingParen",
            Self::TrailingInput { .. } => "TrailingInput",
            Self::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// Returns the byte offset the error points at, if it has one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::InvalidExpression => None,
            Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::ExpectedClosingParen { offset }
            | Self::TrailingInput { offset, .. }
            | Self::NestingTooDeep { offset, .. } => Some(*offset),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression => write!(f, "Invalid expression"),

            Self::UnexpectedToken { token, .. } => write!(f, "Unexpected token: {token}"),

            Self::UnexpectedEndOfInput { .. } => write!(f, "Unexpected end of input"),

            Self::ExpectedClosingParen { .. } => write!(f, "Expected closing parenthesis"),

            Self::TrailingInput { .. } => write!(f, "Unexpected input remaining"),

            Self::NestingTooDeep { limit, .. } => {
                write!(f, "Parentheses nested deeper than {limit} levels")
            },
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_wire_format() {
        assert_eq!(ParseError::InvalidExpression.to_string(), "Invalid expression");
        assert_eq!(ParseError::UnexpectedToken { token:  ")".into(),
                                                 offset: 3, }.to_string(),
                   "Unexpected token: )");
        assert_eq!(ParseError::ExpectedClosingParen { offset: 0 }.to_string(),
                   "Expected closing parenthesis");
        assert_eq!(ParseError::TrailingInput { token:  ")".into(),
                                               offset: 3, }.to_string(),
                   "Unexpected input remaining");
    }

    #[test]
    fn offset_is_absent_only_for_empty_input() {
        assert_eq!(ParseError::InvalidExpression.offset(), None);
        assert_eq!(ParseError::UnexpectedEndOfInput { offset: 4 }.offset(), Some(4));
        assert_eq!(ParseError::NestingTooDeep { limit:  2,
                                                offset: 7, }.kind(),
                   "NestingTooDeep");
    }
}
