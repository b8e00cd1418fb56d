//! The fizzbuzz program.
//!
//! Classifies one integer per input line until the input ends. Blank lines
//! are skipped and unparsable lines are reported without stopping the loop.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::core::fizzbuzz::classify;
use crate::core::input::{is_blank, parse_integer};
use crate::error::Result;
use crate::logging;

pub const HEADER: &str = "Enter integers:";
pub const END_OF_INPUT: &str = "End of input";

/// Line counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FizzBuzzSummary {
    pub classified: usize,
    pub rejected: usize,
    pub skipped: usize,
}

impl FizzBuzzSummary {
    pub fn total(&self) -> usize {
        self.classified + self.rejected + self.skipped
    }
}

#[derive(Debug, Default)]
pub struct FizzBuzzCommand;

impl FizzBuzzCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<FizzBuzzSummary> {
        console.say(HEADER)?;

        let mut summary = FizzBuzzSummary::default();

        while let Some(line) = console.read_line()? {
            if is_blank(&line) {
                summary.skipped += 1;
                continue;
            }

            match parse_integer(&line) {
                Ok(n) => {
                    let classification = classify(n);
                    logging::log_classification(n, &classification);
                    console.say(classification)?;
                    summary.classified += 1;
                }
                Err(err) => {
                    logging::log_input_rejected(&line, &err);
                    console.report(&err)?;
                    summary.rejected += 1;
                }
            }
        }

        console.say(END_OF_INPUT)?;
        logging::log_end_of_input("fizzbuzz", summary.total());

        Ok(summary)
    }
}
