use crate::interpreter::error::ExpressionError;
use crate::interpreter::lexer::TokenStream;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use anyhow::{bail, Result};
use itertools::Itertools;

/// Converts an infix expression into postfix (reverse Polish) notation using an
/// operator stack.
///
/// Only parentheses are checked for balance; the arrangement of operands and operators
/// is not validated, so `"1+"` becomes `"1 +"`.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The postfix symbols, separated by single spaces.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use digit_calculator::interpreter::converter::infix_converter::to_postfix;
///
/// assert_eq!(to_postfix("(1+2)*3")?, "1 2 + 3 *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix(expression: &str) -> Result<String> {
    let postfix_tokens = infix_to_postfix(TokenStream::new(expression))?;
    Ok(postfix_tokens.iter().join(" "))
}

fn infix_to_postfix(mut tokens: TokenStream) -> Result<Vec<Token>> {
    let mut operators: Vec<Token> = vec![];
    let mut output: Vec<Token> = vec![];
    loop {
        let token = tokens.next_token()?;
        match token {
            Token::EndOfInput => break,
            Token::Integer(_) => output.push(token),
            Token::LeftParenthesis => operators.push(token),
            Token::Plus => parse_operator_token(&mut operators, &mut output, BinaryOperator::Add),
            Token::Times => {
                parse_operator_token(&mut operators, &mut output, BinaryOperator::Multiply)
            }
            Token::RightParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::LeftParenthesis => {
                bail!(ExpressionError::syntax("mismatched parenthesis"));
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => {
                bail!(ExpressionError::syntax("mismatched parenthesis"));
            }
            // Discard the open parenthesis.
            Some(Token::LeftParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    // Only operators and open parentheses are ever pushed.
    while let Some(other_operator) = operators.last().and_then(Token::as_binary_operator) {
        if !other_operator.precedence_ge(&operator) {
            break;
        }
        output.push(other_operator.token());
        operators.pop();
    }

    operators.push(operator.token());
}
