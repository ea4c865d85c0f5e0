use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    Integer(u8),
    Plus,
    Times,
    LeftParenthesis,
    RightParenthesis,
    EndOfInput,
}

/// What kind of token something is, without any payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Integer,
    Plus,
    Times,
    LeftParenthesis,
    RightParenthesis,
    EndOfInput,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Integer(_) => TokenKind::Integer,
            Token::Plus => TokenKind::Plus,
            Token::Times => TokenKind::Times,
            Token::LeftParenthesis => TokenKind::LeftParenthesis,
            Token::RightParenthesis => TokenKind::RightParenthesis,
            Token::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// The literal character of an operator or parenthesis token.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Token::Plus => Some('+'),
            Token::Times => Some('*'),
            Token::LeftParenthesis => Some('('),
            Token::RightParenthesis => Some(')'),
            Token::Integer(_) | Token::EndOfInput => None,
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '+' => Some(Token::Plus),
            '*' => Some(Token::Times),
            '(' => Some(Token::LeftParenthesis),
            ')' => Some(Token::RightParenthesis),
            _ => None,
        }
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Times => Some(BinaryOperator::Multiply),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(value) => write!(f, "{}", value),
            Token::EndOfInput => Ok(()),
            token => match token.symbol() {
                Some(symbol) => write!(f, "{}", symbol),
                None => Ok(()),
            },
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Integer => "integer",
            TokenKind::Plus => "'+'",
            TokenKind::Times => "'*'",
            TokenKind::LeftParenthesis => "'('",
            TokenKind::RightParenthesis => "')'",
            TokenKind::EndOfInput => "end of input",
        };
        write!(f, "{}", name)
    }
}
