use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanmergeError {
    /// The value supplied for a range entry is not a sequence
    NotAPair,

    /// A range entry does not hold exactly two elements
    WrongArity(usize),

    /// A range endpoint is not representable as a number; 0 marks the
    /// start endpoint, 1 the end
    NonNumericEndpoint(usize),
}

impl Error for SpanmergeError { }

impl Display for SpanmergeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::NotAPair =>
                write!(f, "The range entry is not a sequence of endpoints!"),
            Self::WrongArity(len) =>
                write!(f, "Expected a range entry with exactly two endpoints, got {len}!"),
            Self::NonNumericEndpoint(0) =>
                write!(f, "The start endpoint of the range entry is not a number!"),
            Self::NonNumericEndpoint(_) =>
                write!(f, "The end endpoint of the range entry is not a number!"),
        }
    }
}
