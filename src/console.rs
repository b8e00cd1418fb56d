//! Line-oriented terminal I/O shared by the three programs.
//!
//! A [`Console`] owns an input reader and an output writer, so the programs
//! run unchanged against locked stdin/stdout or against in-memory buffers.

use colored::Colorize;
use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::core::input::parse_integer;
use crate::error::{KataError, Result};
use crate::logging;

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
    at_prompt: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
            at_prompt: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Reads the next line without its terminator. Returns `None` once the
    /// input is exhausted. Bytes that are not valid UTF-8 are replaced rather
    /// than failing the read, so they surface later as a parse error.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(|e| KataError::io_error("reading from the console", e))?;

        if read == 0 {
            // Keep whatever comes next off the prompt's line
            if self.at_prompt {
                self.at_prompt = false;
                self.write_line("")?;
            }
            return Ok(None);
        }

        self.at_prompt = false;

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Writes `text` without a newline, flushes, then reads one line.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")
            .and_then(|_| self.output.flush())
            .map_err(|e| KataError::io_error("writing a prompt", e))?;
        self.at_prompt = true;
        self.read_line()
    }

    /// Prints one line of program output.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        self.write_line(line)
    }

    /// Prints a user-facing error as `Error: <message>`.
    pub fn report(&mut self, message: impl Display) -> Result<()> {
        let label = if self.color {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };
        self.write_line(format_args!("{label} {message}"))
    }

    /// Prompts until the user enters a valid integer.
    ///
    /// Every invalid attempt prints `Error: <error>` and prompts again. Fails
    /// with [`KataError::EndOfInput`] if the input runs out first.
    pub fn read_int_retrying(&mut self, prompt: &str, error: &str) -> Result<i128> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Err(KataError::end_of_input(prompt.trim_end().trim_end_matches(':')));
            };

            match parse_integer(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    logging::log_input_rejected(&line, &err);
                    self.report(error)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")
            .and_then(|_| self.output.flush())
            .map_err(|e| KataError::io_error("writing to the console", e))
    }
}
