//! Radix conversion
//!
//! A list's value is recovered by folding its digits, least significant
//! first, into a `BigUint`. New lists are produced from a `BigUint` by
//! repeated division, prepending each remainder, so the most significant
//! digit ends up at the head.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{Context, Digit, DigitList, DigitListError, MAX_BASE, MIN_BASE};


/// Sum of `digit * base^position` over digits given least significant first
pub(crate) fn fold_digits<I>(digits: I, base: u8) -> BigUint
where
    I: IntoIterator<Item = Digit>,
{
    let radix = BigUint::from(base);
    let mut place = BigUint::from(1u8);
    let mut acc = BigUint::zero();
    for d in digits {
        if d != 0 {
            acc += &place * d;
        }
        place *= &radix;
    }
    acc
}

/// Write `value` into `list` in `list.base()`, most significant digit first
///
/// Zero writes nothing.
///
fn prepend_digits(list: &mut DigitList, value: &BigUint) {
    let radix = BigUint::from(list.base());
    let mut n = value.clone();
    while !n.is_zero() {
        let (q, r) = n.div_rem(&radix);
        // r < radix <= MAX_BASE
        let digit = r.to_u8().unwrap_or_default();
        list.push_front_unchecked(digit);
        n = q;
    }
}

impl DigitList {
    /// Build list representing `value` in `base`
    ///
    /// Zero yields an empty list.
    ///
    pub fn from_biguint(value: &BigUint, base: u8) -> Result<DigitList, DigitListError> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(DigitListError::InvalidBase(base));
        }
        Ok(DigitList::from_biguint_unchecked(value, base))
    }

    /// `from_biguint` for a base already known to be in `2..=10`
    pub(crate) fn from_biguint_unchecked(value: &BigUint, base: u8) -> DigitList {
        let mut list = DigitList::new();
        list.set_base(base);
        prepend_digits(&mut list, value);
        list
    }

    /// Same value written in octal
    ///
    /// The original list is untouched. An empty or zero list produces an
    /// empty list.
    ///
    pub fn change_scale(&self) -> DigitList {
        self.change_scale_with_context(&Context::default())
    }

    /// Same value written in the context's scale base
    pub fn change_scale_with_context(&self, ctx: &Context) -> DigitList {
        let value = self.to_biguint();
        if value.is_zero() {
            return DigitList::new();
        }

        let result = DigitList::from_biguint_unchecked(&value, ctx.scale_base());
        trace!(from = self.base, to = ctx.scale_base(), digits = result.len, "changed scale");
        result
    }

    /// Same value written in `base`
    pub fn change_scale_to(&self, base: u8) -> Result<DigitList, DigitListError> {
        let ctx = Context::default().with_scale_base(base)?;
        Ok(self.change_scale_with_context(&ctx))
    }

    /// Bitwise OR of the values of `self` and `arg`, written in ternary
    ///
    /// Each operand is decoded in its own base. Returns `None` when there
    /// is no argument to combine with; a zero result is an empty list.
    /// Neither operand is modified.
    ///
    pub fn additional_operation(&self, arg: Option<&DigitList>) -> Option<DigitList> {
        self.additional_operation_with_context(arg, &Context::default())
    }

    /// Bitwise OR of the values of `self` and `arg`, written in `ctx.base()`
    pub fn additional_operation_with_context(
        &self,
        arg: Option<&DigitList>,
        ctx: &Context,
    ) -> Option<DigitList> {
        let other = match arg {
            Some(other) => other,
            None => {
                debug!("no argument for OR combination");
                return None;
            }
        };

        let combined = self.to_biguint() | other.to_biguint();
        Some(DigitList::from_biguint_unchecked(&combined, ctx.base()))
    }

    /// Decimal rendering of the represented value
    ///
    /// An empty list renders as the empty string.
    ///
    pub fn to_decimal_string(&self) -> String {
        if self.len == 0 {
            return String::new();
        }
        self.to_biguint().to_str_radix(10)
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test_radix {
    use super::*;
    use crate::DigitSequence;
    use paste::paste;

    include!("radix.tests.rs");
}
