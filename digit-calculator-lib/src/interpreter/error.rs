use crate::interpreter::token::TokenKind;
use std::error::Error;
use std::fmt;
use std::fmt::Formatter;

/// Why an expression could not be evaluated or converted.
///
/// Library functions return [`anyhow::Result`]; the underlying kind can be recovered
/// with `error.downcast_ref::<ExpressionError>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// A character that is not a digit, `+`, `*`, `(` or `)`.
    InvalidCharacter { character: char, position: usize },
    /// An expected token was missing, or an unexpected one was found.
    InvalidSyntax { message: String },
    /// The result does not fit in an `i64`.
    Overflow,
}

impl ExpressionError {
    pub(crate) fn syntax(message: impl Into<String>) -> ExpressionError {
        ExpressionError::InvalidSyntax {
            message: message.into(),
        }
    }

    pub(crate) fn expected(expected: TokenKind, found: TokenKind) -> ExpressionError {
        Self::syntax(format!("expected {} but found {}", expected, found))
    }

    pub fn is_invalid_character(&self) -> bool {
        matches!(self, ExpressionError::InvalidCharacter { .. })
    }

    pub fn is_invalid_syntax(&self) -> bool {
        matches!(self, ExpressionError::InvalidSyntax { .. })
    }
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "invalid character encountered: {:?} at position {}",
                character, position
            ),
            ExpressionError::InvalidSyntax { message } => write!(f, "invalid syntax: {}", message),
            ExpressionError::Overflow => write!(f, "result is too large"),
        }
    }
}

impl Error for ExpressionError {}
