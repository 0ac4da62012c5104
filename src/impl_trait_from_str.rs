use std::str::FromStr;

use crate::{parse_decimal, DigitList, ParseDigitListError};

impl FromStr for DigitList {
    type Err = ParseDigitListError;

    /// Strict counterpart of [`DigitList::from_decimal_str`]
    ///
    /// Malformed input is an error; zero parses to an empty list.
    ///
    #[inline]
    fn from_str(s: &str) -> Result<DigitList, ParseDigitListError> {
        parse_decimal(s).map(DigitList::from)
    }
}
