use crate::interpreter::error::ExpressionError;
use crate::interpreter::lexer::TokenStream;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{bail, Result};

/// Deepest parenthesis nesting accepted before evaluation gives up.
pub(crate) const MAX_NESTING_DEPTH: usize = 256;

/// Evaluates an expression by recursive descent, reducing each production as soon as it
/// has been read. No syntax tree is built.
///
/// ```text
/// expr   := term ('+' term)*
/// term   := factor ('*' factor)*
/// factor := INTEGER | '(' expr ')'
/// ```
pub(crate) struct Evaluator<'a> {
    tokens: TokenStream<'a>,
    current_token: Token,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(mut tokens: TokenStream<'a>) -> Result<Evaluator<'a>> {
        let current_token = tokens.next_token()?;
        Ok(Evaluator {
            tokens,
            current_token,
            depth: 0,
        })
    }

    pub(crate) fn current_token(&self) -> Token {
        self.current_token
    }

    /// Consumes the current token if it is of the expected kind.
    fn eat(&mut self, expected: TokenKind) -> Result<()> {
        let found = self.current_token.kind();
        if found != expected {
            bail!(ExpressionError::expected(expected, found));
        }
        self.current_token = self.tokens.next_token()?;
        Ok(())
    }

    fn factor(&mut self) -> Result<i64> {
        match self.current_token {
            Token::Integer(value) => {
                self.eat(TokenKind::Integer)?;
                Ok(value.into())
            }
            Token::LeftParenthesis => {
                self.eat(TokenKind::LeftParenthesis)?;
                self.depth += 1;
                if self.depth > MAX_NESTING_DEPTH {
                    bail!(ExpressionError::syntax("expression is nested too deeply"));
                }
                let result = self.expr()?;
                self.depth -= 1;
                if self.current_token.kind() != TokenKind::RightParenthesis {
                    bail!(ExpressionError::syntax(format!(
                        "expected closing parenthesis but found {}",
                        self.current_token.kind()
                    )));
                }
                self.eat(TokenKind::RightParenthesis)?;
                Ok(result)
            }
            other => bail!(ExpressionError::syntax(format!(
                "expected integer or '(' but found {}",
                other.kind()
            ))),
        }
    }

    fn term(&mut self) -> Result<i64> {
        let mut result = self.factor()?;

        while self.current_token.kind() == TokenKind::Times {
            self.eat(TokenKind::Times)?;
            result = BinaryOperator::Multiply.evaluate(result, self.factor()?)?;
        }

        Ok(result)
    }

    pub(crate) fn expr(&mut self) -> Result<i64> {
        let mut result = self.term()?;

        while self.current_token.kind() == TokenKind::Plus {
            self.eat(TokenKind::Plus)?;
            result = BinaryOperator::Add.evaluate(result, self.term()?)?;
        }

        Ok(result)
    }

    /// Evaluates a whole expression, optionally ignoring whatever follows it.
    pub(crate) fn evaluate(mut self, allow_trailing_input: bool) -> Result<i64> {
        let result = self.expr()?;
        if !allow_trailing_input && self.current_token() != Token::EndOfInput {
            bail!(ExpressionError::syntax(format!(
                "unexpected trailing input at position {}",
                self.tokens.position() - 1
            )));
        }
        Ok(result)
    }
}
