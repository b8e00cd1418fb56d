use std::fmt;

#[derive(Debug)]
pub enum KataError {
    NotNumeric {
        input: String,
    },
    NegativeRadius {
        radius: f64,
    },
    NotInteger {
        input: String,
    },
    EndOfInput {
        expected: String,
    },
    IoError {
        operation: String,
        source: std::io::Error,
    },
}

impl KataError {
    pub fn not_numeric(input: impl Into<String>) -> Self {
        Self::NotNumeric {
            input: input.into(),
        }
    }

    pub fn negative_radius(radius: f64) -> Self {
        Self::NegativeRadius { radius }
    }

    pub fn not_integer(input: impl Into<String>) -> Self {
        Self::NotInteger {
            input: input.into(),
        }
    }

    pub fn end_of_input(expected: impl Into<String>) -> Self {
        Self::EndOfInput {
            expected: expected.into(),
        }
    }

    pub fn io_error(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            operation: operation.into(),
            source,
        }
    }
}

impl fmt::Display for KataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric { .. } => write!(f, "please enter a numeric value for the radius."),
            Self::NegativeRadius { .. } => write!(f, "the radius cannot be negative."),
            Self::NotInteger { .. } => write!(f, "please enter a valid integer."),
            Self::EndOfInput { .. } => write!(f, "no input was provided."),
            Self::IoError { operation, source } => {
                write!(f, "I/O error while {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for KataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
