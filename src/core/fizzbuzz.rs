use std::fmt;

/// What FizzBuzz says about a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    FizzBuzz,
    Fizz,
    Buzz,
    Number(i128),
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FizzBuzz => write!(f, "FizzBuzz"),
            Self::Fizz => write!(f, "Fizz"),
            Self::Buzz => write!(f, "Buzz"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Classifies `n`. Divisibility by both 3 and 5 is checked before either
/// alone, so multiples of 15 are always `FizzBuzz`.
pub fn classify(n: i128) -> Classification {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => Classification::FizzBuzz,
        (true, false) => Classification::Fizz,
        (false, true) => Classification::Buzz,
        (false, false) => Classification::Number(n),
    }
}
