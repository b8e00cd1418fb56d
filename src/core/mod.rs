//! Core computations
//!
//! Pure functions behind the three programs: parsing what the user typed,
//! circle geometry, FizzBuzz classification and the Euclidean GCD. Nothing
//! in here touches the console, so every function can be tested in isolation.

pub mod circle;
pub mod fizzbuzz;
pub mod gcd;
pub mod input;

#[cfg(test)]
mod fizzbuzz_proptest;

#[cfg(test)]
mod gcd_proptest;

#[cfg(test)]
mod input_proptest;
