use crate::interpreter::lexer::TokenStream;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Renders every token of the expression back to text, in the order it was read.
///
/// This is what the calculator reports as its "prefix" output. No operators are moved
/// and no syntax is checked, so the result is the input itself: `"(1+2"` renders as
/// `"(1+2"`. Only invalid characters cause an error.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The concatenated tokens, without separators.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use digit_calculator::interpreter::converter::surface_renderer::to_prefix;
///
/// assert_eq!(to_prefix("(1+2)*3")?, "(1+2)*3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_prefix(expression: &str) -> Result<String> {
    let mut tokens = TokenStream::new(expression);
    let mut builder = Builder::new(expression.len());

    loop {
        match tokens.next_token()? {
            Token::EndOfInput => break,
            token => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}
