//! Three small terminal programs: circle area, FizzBuzz and the Euclidean GCD.
//!
//! Each program lives in its own module and runs against a [`Console`], so
//! the binaries in `src/bin` only parse flags, set up logging and hand over
//! stdin/stdout.

pub mod circle_area;
pub mod cli;
pub mod console;
pub mod core;
pub mod error;
pub mod fizzbuzz;
pub mod gcd;
pub mod logging;

pub use circle_area::{CircleAreaCommand, CircleOutcome};
pub use console::Console;
pub use error::{KataError, Result};
pub use fizzbuzz::{FizzBuzzCommand, FizzBuzzSummary};
pub use gcd::GcdCommand;
