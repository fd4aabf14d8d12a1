use crate::interpreter::lexer::Token;

/// Arithmetic operators recognised between operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps a token to its operator, or `None` for numbers and parentheses.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::Number(_) | Token::LParen | Token::RParen => None,
        }
    }

    /// Returns `true` for the operators folded at the expression level.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for the operators folded at the term level.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Folds `right` into `left`.
    ///
    /// Division by zero is not an error: it yields an infinity, or NaN for
    /// `0 / 0`, and the result propagates like any other value.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::evaluator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(8.0, 3.0), 5.0);
    /// assert!(BinaryOperator::Div.apply(5.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}
