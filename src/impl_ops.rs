//! Implement math operations: BitOr

use std::ops::BitOr;

use crate::DigitList;


impl BitOr<&DigitList> for &DigitList {
    type Output = DigitList;

    /// Ternary list of the bitwise OR of both values
    #[inline]
    fn bitor(self, rhs: &DigitList) -> DigitList {
        self.additional_operation(Some(rhs)).unwrap_or_default()
    }
}

impl BitOr<DigitList> for DigitList {
    type Output = DigitList;

    #[inline]
    fn bitor(self, rhs: DigitList) -> DigitList {
        &self | &rhs
    }
}

impl BitOr<&DigitList> for DigitList {
    type Output = DigitList;

    #[inline]
    fn bitor(self, rhs: &DigitList) -> DigitList {
        &self | rhs
    }
}
