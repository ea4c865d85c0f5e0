use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;
use anyhow::Result;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Multiply,
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Multiply => Token::Times,
        }
    }

    /// Higher binds tighter.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add => 1,
            BinaryOperator::Multiply => 2,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    pub fn evaluate(&self, a: i64, b: i64) -> Result<i64> {
        let result = match self {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Multiply => a.checked_mul(b),
        };
        result.ok_or_else(|| ExpressionError::Overflow.into())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
