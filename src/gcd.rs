//! The gcd program.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::core::gcd::gcd;
use crate::error::{KataError, Result};
use crate::logging;

pub const FIRST_PROMPT: &str = "Enter the first integer: ";
pub const SECOND_PROMPT: &str = "Enter the second integer: ";
pub const INVALID_INTEGER: &str = "please enter an integer.";

#[derive(Debug, Default)]
pub struct GcdCommand;

impl GcdCommand {
    pub fn new() -> Self {
        Self
    }

    /// Reads both integers and prints their GCD. Returns `None` when the
    /// input ended before both values were supplied.
    pub fn execute<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Option<i128>> {
        let Some(first) = read_operand(console, FIRST_PROMPT)? else {
            return Ok(None);
        };
        let Some(second) = read_operand(console, SECOND_PROMPT)? else {
            return Ok(None);
        };

        let result = gcd(first, second);
        logging::log_gcd(first, second, result);
        console.say(format_args!("GCD = {result}"))?;

        Ok(Some(result))
    }
}

fn read_operand<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<i128>> {
    match console.read_int_retrying(prompt, INVALID_INTEGER) {
        Ok(value) => Ok(Some(value)),
        Err(err @ KataError::EndOfInput { .. }) => {
            console.report(&err)?;
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
