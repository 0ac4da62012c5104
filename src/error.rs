//! Error types returned by digit list operations
//!
//! Index and argument violations are reported loudly through
//! [`DigitListError`]. Malformed decimal input is reported by
//! [`ParseDigitListError`], which the quiet constructors swallow.

use std::error::Error;
use std::fmt;

use num_bigint::ParseBigIntError;

use crate::Digit;

/// Contract violation on a digit list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DigitListError {
    /// Index outside of the valid range for the operation
    OutOfRange {
        index: usize,
        len: usize,
    },
    /// Digit is not representable in the list's base
    InvalidDigit {
        digit: Digit,
        base: u8,
    },
    /// Base outside of the supported `2..=10` range
    InvalidBase(u8),
    /// Mutation attempted through a read-only cursor
    UnsupportedCursorMutation(&'static str),
}

impl fmt::Display for DigitListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DigitListError::*;

        match *self {
            OutOfRange { index, len } => {
                write!(f, "index {} out of range for list of length {}", index, len)
            }
            InvalidDigit { digit, base } => {
                write!(f, "digit {} is not valid in base {}", digit, base)
            }
            InvalidBase(base) => write!(f, "unsupported base {}", base),
            UnsupportedCursorMutation(op) => {
                write!(f, "cursor does not support '{}'", op)
            }
        }
    }
}

impl Error for DigitListError {}


/// Failure to read a decimal number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDigitListError {
    ParseBigInt(ParseBigIntError),
    InvalidDigit(char),
    Empty,
}

impl fmt::Display for ParseDigitListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseDigitListError::*;

        match *self {
            ParseBigInt(ref e) => e.fmt(f),
            InvalidDigit(c) => write!(f, "InvalidDigit: {:?} is not a decimal digit", c),
            Empty => "Failed to parse empty string".fmt(f),
        }
    }
}

impl Error for ParseDigitListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ParseDigitListError::ParseBigInt(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseBigIntError> for ParseDigitListError {
    fn from(err: ParseBigIntError) -> ParseDigitListError {
        ParseDigitListError::ParseBigInt(err)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let err = DigitListError::OutOfRange { index: 4, len: 4 };
        assert_eq!(err.to_string(), "index 4 out of range for list of length 4");
    }

    #[test]
    fn display_invalid_digit() {
        let err = DigitListError::InvalidDigit { digit: 5, base: 3 };
        assert_eq!(err.to_string(), "digit 5 is not valid in base 3");
    }

    #[test]
    fn display_cursor_mutation() {
        let err = DigitListError::UnsupportedCursorMutation("remove");
        assert_eq!(err.to_string(), "cursor does not support 'remove'");
    }

    #[test]
    fn parse_error_source() {
        assert!(ParseDigitListError::Empty.source().is_none());
        assert_eq!(ParseDigitListError::Empty.to_string(), "Failed to parse empty string");
    }
}
