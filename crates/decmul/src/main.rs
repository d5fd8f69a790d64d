//! DecMul-rs — NTT-based decimal multiplication.

use decmul_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Logs go to stderr; stdout carries only the product.
    let default_level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    if let Err(err) = app::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
