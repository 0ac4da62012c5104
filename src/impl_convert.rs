//! Code for implementing From/To DigitLists

use num_bigint::BigUint;

use crate::{DigitList, DEFAULT_BASE};


macro_rules! impl_from_type {
    ($from_ty:ty) => {
        impl From<$from_ty> for DigitList {
            /// Ternary digits of the value; zero is the empty list
            fn from(n: $from_ty) -> Self {
                DigitList::from(&BigUint::from(n))
            }
        }
    };
}

impl_from_type!(u8);
impl_from_type!(u16);
impl_from_type!(u32);
impl_from_type!(u64);
impl_from_type!(u128);
impl_from_type!(usize);

impl From<&BigUint> for DigitList {
    fn from(n: &BigUint) -> Self {
        DigitList::from_biguint(n, DEFAULT_BASE).unwrap_or_default()
    }
}

impl From<BigUint> for DigitList {
    fn from(n: BigUint) -> Self {
        DigitList::from(&n)
    }
}

impl From<&DigitList> for BigUint {
    fn from(list: &DigitList) -> Self {
        list.to_biguint()
    }
}
