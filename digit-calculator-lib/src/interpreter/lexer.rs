use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;
use anyhow::{bail, Result};
use log::trace;

/// Reads tokens one character at a time from a borrowed expression.
///
/// Every pass over an expression should create its own stream, since reading a token
/// consumes it.
///
/// Numbers are single digits only: `"12"` produces two separate integer tokens.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    text: &'a str,
    position: usize,
    failed: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> TokenStream<'a> {
        TokenStream {
            text,
            position: 0,
            failed: false,
        }
    }

    /// Byte offset of the next character to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Reads the token at the current position and advances past it.
    ///
    /// Once the end of the text is reached, [`Token::EndOfInput`] is returned on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// use digit_calculator::interpreter::lexer::TokenStream;
    /// use digit_calculator::interpreter::token::Token;
    ///
    /// let mut stream = TokenStream::new("2*");
    /// assert_eq!(stream.next_token()?, Token::Integer(2));
    /// assert_eq!(stream.next_token()?, Token::Times);
    /// assert_eq!(stream.next_token()?, Token::EndOfInput);
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn next_token(&mut self) -> Result<Token> {
        let character = match self.text[self.position..].chars().next() {
            None => return Ok(Token::EndOfInput),
            Some(character) => character,
        };

        let token = if let Some(digit) = character.to_digit(10) {
            Token::Integer(digit as u8)
        } else if let Some(token) = Token::from_symbol(character) {
            token
        } else {
            bail!(ExpressionError::InvalidCharacter {
                character,
                position: self.position,
            })
        };

        trace!("token {:?} at {}", token, self.position);
        self.position += character.len_utf8();
        Ok(token)
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(Token::EndOfInput) => None,
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

/// Reads every token of the given expression, not including the end marker.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens, in the order they appear.
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    TokenStream::new(expression).collect()
}
