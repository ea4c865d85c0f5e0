use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use digit_calculator::interpreter::{evaluate_with, EvaluationOptions};
use log::{debug, info};
use std::io;
use std::io::{BufRead, Write};

/// Evaluates expressions of single digits, `+`, `*` and parentheses, and prints them in
/// prefix and postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Starts an interactive session when omitted
    expression: Option<String>,

    /// Text shown before each line in an interactive session
    #[clap(long, default_value = "Enter your expression input: ")]
    prompt: String,

    /// Ignore anything that follows a complete expression instead of rejecting it
    #[clap(long)]
    allow_trailing_input: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let options = EvaluationOptions {
        allow_trailing_input: args.allow_trailing_input,
    };

    match args.expression {
        Some(expression) => {
            let evaluation = evaluate_with(&expression, options)?;
            println!("{}", evaluation);
            Ok(())
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_session(stdin.lock(), stdout.lock(), &args.prompt, options)
        }
    }
}

/// Reads one expression per line until end of input or a quit command, printing the
/// result or the error of each. Errors in an expression do not end the session.
fn run_session(
    mut input: impl BufRead,
    mut output: impl Write,
    prompt: &str,
    options: EvaluationOptions,
) -> Result<()> {
    let mut bytes = Vec::new();
    loop {
        write!(output, "{}", prompt).context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;

        bytes.clear();
        let read = input
            .read_until(b'\n', &mut bytes)
            .context("Failed to read expression")?;
        if read == 0 {
            writeln!(output).context("Failed to write output")?;
            info!("End of input, leaving session");
            return Ok(());
        }

        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line,
            Err(error) => {
                debug!("Skipping line that is not UTF-8: {}", error);
                writeln!(output, "Error: input is not valid UTF-8")
                    .context("Failed to write output")?;
                continue;
            }
        };
        let expression = line.trim_end_matches(&['\r', '\n'][..]);
        if QUIT_COMMANDS.contains(&expression) {
            debug!("Quit command {:?} received", expression);
            return Ok(());
        }

        let written = match evaluate_with(expression, options) {
            Ok(evaluation) => writeln!(output, "{}", evaluation),
            Err(error) => writeln!(output, "Error: {}", error),
        };
        written.context("Failed to write output")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_bytes(input: &[u8], options: EvaluationOptions) -> String {
        let mut output = Vec::new();
        run_session(input, &mut output, "> ", options).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn run(input: &str, options: EvaluationOptions) -> String {
        run_bytes(input.as_bytes(), options)
    }

    #[test]
    fn session_prints_results_until_end_of_input() {
        let output = run("1+2*3\n", EvaluationOptions::default());

        assert_eq!(
            output,
            "> Result: 7\nPrefix: 1+2*3\nPostfix: 1 2 3 * +\n> \n"
        )
    }

    #[test]
    fn session_continues_after_error() {
        let output = run("1+a\n(1+2)*3\nquit\n", EvaluationOptions::default());

        assert_eq!(
            output,
            "> Error: invalid character encountered: 'a' at position 2\n\
             > Result: 9\nPrefix: (1+2)*3\nPostfix: 1 2 + 3 *\n\
             > "
        )
    }

    #[test]
    fn session_continues_after_line_that_is_not_utf8() {
        let output = run_bytes(b"\xff\xfe\n1+2\n", EvaluationOptions::default());

        assert_eq!(
            output,
            "> Error: input is not valid UTF-8\n\
             > Result: 3\nPrefix: 1+2\nPostfix: 1 2 +\n\
             > \n"
        )
    }

    #[test]
    fn session_stops_at_exit_command() {
        let output = run("exit\n5\n", EvaluationOptions::default());

        assert_eq!(output, "> ")
    }

    #[test]
    fn session_reads_last_line_without_newline() {
        let output = run("4", EvaluationOptions::default());

        assert_eq!(output, "> Result: 4\nPrefix: 4\nPostfix: 4\n> \n")
    }

    #[test]
    fn session_passes_options_through() {
        let options = EvaluationOptions {
            allow_trailing_input: true,
        };

        let output = run("12\n", options);

        assert_eq!(output, "> Result: 1\nPrefix: 12\nPostfix: 1 2\n> \n")
    }

    #[test]
    fn arguments_are_well_formed() {
        use clap::CommandFactory;
        Arguments::command().debug_assert();
    }
}
