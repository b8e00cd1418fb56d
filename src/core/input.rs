//! Parsing of user-entered text
//!
//! Surrounding whitespace (including the line terminator) is ignored, the
//! way a person typing at a terminal would expect.

use crate::error::{KataError, Result};

/// Parses a circle radius.
///
/// Anything `f64::from_str` accepts is a number, `nan` and `inf` included.
/// Negative values are rejected; `-0` and `nan` are not negative.
pub fn parse_radius(input: &str) -> Result<f64> {
    let trimmed = input.trim();

    let radius: f64 = trimmed
        .parse()
        .map_err(|_| KataError::not_numeric(trimmed))?;

    if radius < 0.0 {
        return Err(KataError::negative_radius(radius));
    }

    Ok(radius)
}

/// Parses a signed decimal integer that fits in an `i128`.
pub fn parse_integer(input: &str) -> Result<i128> {
    let trimmed = input.trim();
    trimmed
        .parse::<i128>()
        .map_err(|_| KataError::not_integer(trimmed))
}

/// Whether a line carries nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
