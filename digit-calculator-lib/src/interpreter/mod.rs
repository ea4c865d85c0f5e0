pub mod converter;
pub mod error;
mod evaluator;
pub mod lexer;
mod operator;
pub mod token;

use crate::interpreter::converter::infix_converter::to_postfix;
use crate::interpreter::converter::surface_renderer::to_prefix;
use crate::interpreter::evaluator::Evaluator;
use crate::interpreter::lexer::TokenStream;
use anyhow::Result;
use log::debug;
use std::fmt;
use std::fmt::{Display, Formatter};

pub use operator::BinaryOperator;

/// The three outputs of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The numeric value of the expression.
    pub value: i64,
    /// The tokens of the expression rendered back in the order they were read.
    pub prefix: String,
    /// The expression in postfix notation, separated by spaces.
    pub postfix: String,
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result: {}", self.value)?;
        writeln!(f, "Prefix: {}", self.prefix)?;
        write!(f, "Postfix: {}", self.postfix)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Whether anything left over after a complete expression (e.g. a stray `)`) is
    /// ignored instead of rejected.
    pub allow_trailing_input: bool,
}

/// Evaluates the given expression and renders it in prefix and postfix notation.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, made of single digits, `+`, `*`
/// and parentheses, without whitespace.
///
/// returns: The value and both renderings, or the first error encountered.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use digit_calculator::interpreter::evaluate;
///
/// let evaluation = evaluate("1+2*3")?;
/// assert_eq!(evaluation.value, 7);
/// assert_eq!(evaluation.postfix, "1 2 3 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<Evaluation> {
    evaluate_with(expression, EvaluationOptions::default())
}

/// Like [`evaluate`], with control over how strictly the expression is read.
pub fn evaluate_with(expression: &str, options: EvaluationOptions) -> Result<Evaluation> {
    let value = Evaluator::new(TokenStream::new(expression))?
        .evaluate(options.allow_trailing_input)?;
    let prefix = to_prefix(expression)?;
    let postfix = to_postfix(expression)?;
    debug!(
        "{:?} evaluated to {}, prefix {:?}, postfix {:?}",
        expression, value, prefix, postfix
    );

    Ok(Evaluation {
        value,
        prefix,
        postfix,
    })
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::ExpressionError;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn error_of(expression: &str) -> ExpressionError {
        let error = evaluate(expression).unwrap_err();
        error.downcast_ref::<ExpressionError>().unwrap().clone()
    }

    #[parameterized(
        expression = { "1+2", "1+2*3", "(1+2)*3", "1+2+3", "2*(3+4)" },
        expected_value = { 3, 7, 9, 6, 14 },
        expected_postfix = { "1 2 +", "1 2 3 * +", "1 2 + 3 *", "1 2 + 3 +", "2 3 4 + *" }
    )]
    fn evaluate_expression_returns_all_notations(
        expression: &str,
        expected_value: i64,
        expected_postfix: &str,
    ) {
        use pretty_assertions::assert_eq;
        let evaluation = evaluate(expression).unwrap();

        assert_eq!(
            evaluation,
            Evaluation {
                value: expected_value,
                prefix: expression.to_string(),
                postfix: expected_postfix.to_string(),
            }
        )
    }

    #[test]
    fn every_single_digit_evaluates_to_itself() {
        for digit in 0..=9i64 {
            let evaluation = evaluate(&digit.to_string()).unwrap();

            assert_eq!(evaluation.value, digit);
            assert_eq!(evaluation.prefix, digit.to_string());
            assert_eq!(evaluation.postfix, digit.to_string());
        }
    }

    #[test]
    fn unmatched_parenthesis_fails_with_invalid_syntax() {
        assert!(error_of("(1+2").is_invalid_syntax());
        assert!(to_postfix("(1+2")
            .unwrap_err()
            .downcast_ref::<ExpressionError>()
            .unwrap()
            .is_invalid_syntax());
    }

    #[test]
    fn invalid_character_fails_with_invalid_character() {
        assert!(error_of("1+a").is_invalid_character())
    }

    #[test]
    fn whitespace_is_an_invalid_character() {
        assert!(error_of("1 + 2").is_invalid_character())
    }

    #[test]
    fn trailing_input_is_rejected_by_default() {
        assert!(error_of("1+2)").is_invalid_syntax())
    }

    #[test]
    fn trailing_input_is_accepted_when_allowed_but_still_checked_by_postfix() {
        let options = EvaluationOptions {
            allow_trailing_input: true,
        };

        assert!(evaluate_with("1+2)", options).is_err());
        assert_eq!(
            evaluate_with("1+2(", options).unwrap_err().to_string(),
            "invalid syntax: mismatched parenthesis"
        );
    }

    #[test]
    fn trailing_digit_is_accepted_when_allowed() {
        let options = EvaluationOptions {
            allow_trailing_input: true,
        };

        let evaluation = evaluate_with("1+23", options).unwrap();

        assert_eq!(evaluation.value, 3);
        assert_eq!(evaluation.prefix, "1+23");
        assert_eq!(evaluation.postfix, "1 2 3 +");
    }

    #[test]
    fn deeply_nested_expression_fails_with_invalid_syntax() {
        let expression = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));

        assert!(error_of(&expression).is_invalid_syntax())
    }

    #[test]
    fn evaluating_twice_gives_identical_results() {
        let first = evaluate("(1+2)*(3+4)").unwrap();
        let second = evaluate("(1+2)*(3+4)").unwrap();

        assert_eq!(first, second)
    }

    #[test]
    fn evaluation_displays_on_labelled_lines() {
        let evaluation = evaluate("1+2*3").unwrap();

        assert_eq!(
            evaluation.to_string(),
            "Result: 7\nPrefix: 1+2*3\nPostfix: 1 2 3 * +"
        )
    }
}
