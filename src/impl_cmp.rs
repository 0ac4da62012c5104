//! Implementation of comparison operations
//!
//! Two lists are equal when they hold the same digits in the same order.
//! The base is *not* compared: ternary `10` and octal `10` are equal even
//! though they represent 3 and 8. Compare [`DigitList::to_biguint`] to
//! compare represented values.
//!

use std::hash::{Hash, Hasher};

use crate::DigitList;

impl PartialEq for DigitList {
    fn eq(&self, rhs: &DigitList) -> bool {
        self.len == rhs.len && self.iter().eq(rhs.iter())
    }
}

impl Eq for DigitList {}

impl Hash for DigitList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for d in self.iter() {
            d.hash(state);
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::DigitSequence;
    use std::collections::hash_map::DefaultHasher;

    fn hash(list: &DigitList) -> u64 {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn same_digits_are_equal() {
        let a = DigitList::from_decimal_str("100");
        let b = DigitList::from_digits(3, vec![1, 0, 2, 0, 1]).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn different_digits() {
        let a = DigitList::from_decimal_str("100");
        let b = DigitList::from_decimal_str("101");
        assert_ne!(a, b);

        let mut c = a.clone();
        c.remove(4).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn empty_lists_are_equal() {
        assert_eq!(DigitList::new(), DigitList::with_base(8).unwrap());
    }

    #[test]
    fn base_is_ignored() {
        let ternary = DigitList::from_digits(3, vec![1, 0]).unwrap();
        let octal = DigitList::from_digits(8, vec![1, 0]).unwrap();
        assert_eq!(ternary, octal);
        assert_eq!(hash(&ternary), hash(&octal));
        assert_ne!(ternary.to_biguint(), octal.to_biguint());
    }

    #[test]
    fn equality_after_mutation() {
        let mut a = DigitList::from_decimal_str("100");
        let b = a.clone();
        a.shift_left();
        assert_ne!(a, b);
        a.shift_right();
        assert_eq!(a, b);
    }
}
