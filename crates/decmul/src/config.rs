//! Command-line configuration.
//!
//! The data interface is fixed: two operands on stdin, the product on
//! stdout. The only flag is observability.

use clap::Parser;

/// DecMul-rs — multiply two decimal integers from standard input.
#[derive(Parser, Debug)]
#[command(name = "decmul", version, about)]
pub struct AppConfig {
    /// Verbose logging (to stderr).
    #[arg(short, long, env = "DECMUL_VERBOSE")]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
