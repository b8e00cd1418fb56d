use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::fizzbuzz::Classification;
use crate::error::KataError;

/// Initialize structured logging based on verbosity level.
///
/// Diagnostics go to stderr; stdout carries only program output.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("number_katas=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a line the user typed that could not be used
pub fn log_input_rejected(input: &str, error: &KataError) {
    tracing::debug!(input = input, reason = %error, "Input rejected");
}

/// Log a computed circle area
pub fn log_circle_area(radius: f64, area: f64) {
    tracing::debug!(radius = radius, area = area, "Circle area computed");
}

/// Log a FizzBuzz classification
pub fn log_classification(n: i128, classification: &Classification) {
    tracing::debug!(number = %n, result = %classification, "Number classified");
}

/// Log a computed greatest common divisor
pub fn log_gcd(a: i128, b: i128, result: i128) {
    tracing::debug!(a = %a, b = %b, gcd = %result, "GCD computed");
}

/// Log the input stream closing
pub fn log_end_of_input(program: &str, lines: usize) {
    tracing::debug!(program = program, lines = lines, "End of input reached");
}
