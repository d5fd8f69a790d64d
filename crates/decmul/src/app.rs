//! Application entry point: stdin operands in, product line out.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use tracing::debug;

use decmul_core::MulError;

/// Run the application.
pub fn run() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read standard input")?;
    debug!(bytes = input.len(), "read standard input");

    let product = multiply_tokens(&input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{product}").context("failed to write standard output")?;
    Ok(())
}

/// Extract the first two whitespace-separated tokens and multiply them.
///
/// Tokens beyond the second are ignored; fewer than two is an explicit
/// error, never silent empty output.
fn multiply_tokens(input: &str) -> Result<String, MulError> {
    let mut tokens = input.split_whitespace();
    let a = tokens
        .next()
        .ok_or_else(|| MulError::MalformedInput("expected two operands, got none".into()))?;
    let b = tokens
        .next()
        .ok_or_else(|| MulError::MalformedInput("expected two operands, got one".into()))?;
    decmul_core::multiply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_tokens_multiply() {
        assert_eq!(multiply_tokens("123 456").unwrap(), "56088");
    }

    #[test]
    fn newline_separated_tokens() {
        assert_eq!(multiply_tokens("123\n456\n").unwrap(), "56088");
    }

    #[test]
    fn extra_tokens_are_ignored() {
        assert_eq!(multiply_tokens("12 34 9999").unwrap(), "408");
    }

    #[test]
    fn no_tokens_is_an_error() {
        assert!(matches!(
            multiply_tokens(""),
            Err(MulError::MalformedInput(_))
        ));
        assert!(matches!(
            multiply_tokens("   \n\t "),
            Err(MulError::MalformedInput(_))
        ));
    }

    #[test]
    fn one_token_is_an_error() {
        assert!(matches!(
            multiply_tokens("123"),
            Err(MulError::MalformedInput(_))
        ));
    }

    #[test]
    fn invalid_digits_propagate() {
        assert!(matches!(
            multiply_tokens("12a 34"),
            Err(MulError::MalformedInput(_))
        ));
    }
}
