//! The circle-area program.
//!
//! Asks for a radius exactly once. Bad input is reported and the run ends;
//! there is no second attempt.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::core::circle::{circle_area, format_area};
use crate::core::input::parse_radius;
use crate::error::{KataError, Result};
use crate::logging;

pub const RADIUS_PROMPT: &str = "Enter the circle radius: ";

/// How a single run ended.
#[derive(Debug)]
pub enum CircleOutcome {
    Area(f64),
    Rejected(KataError),
}

impl CircleOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Area(_))
    }
}

#[derive(Debug, Default)]
pub struct CircleAreaCommand;

impl CircleAreaCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<CircleOutcome> {
        let Some(line) = console.prompt(RADIUS_PROMPT)? else {
            let err = KataError::end_of_input("circle radius");
            console.report(&err)?;
            return Ok(CircleOutcome::Rejected(err));
        };

        match parse_radius(&line) {
            Ok(radius) => {
                let area = circle_area(radius);
                logging::log_circle_area(radius, area);
                console.say(format_args!(
                    "The area of the circle is: {}",
                    format_area(area)
                ))?;
                Ok(CircleOutcome::Area(area))
            }
            Err(err) => {
                logging::log_input_rejected(&line, &err);
                console.report(&err)?;
                Ok(CircleOutcome::Rejected(err))
            }
        }
    }
}
