// Property tests to be included by lib.rs (if enabled)

use proptest::prelude::*;
use proptest::collection::vec as digit_vec;

fn ternary_digits() -> impl Strategy<Value = Vec<Digit>> {
    digit_vec(0u8..3, 0..40)
}

fn octal_digits() -> impl Strategy<Value = Vec<Digit>> {
    digit_vec(0u8..8, 0..40)
}

fn assert_linked(list: &DigitList) -> Result<(), TestCaseError> {
    prop_assert_eq!(list.iter().count(), list.len());
    prop_assert_eq!(list.iter_rev().count(), list.len());
    Ok(())
}

mod conversion {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< decimal_round_trip_ $t >](n in 1..=<$t>::MAX) {
                    let s = n.to_string();
                    let list = DigitList::from_decimal_str(&s);
                    prop_assert_eq!(list.to_decimal_string(), s);
                    prop_assert!(list.get(0).unwrap() != 0);
                }

                #[test]
                fn [< change_scale_preserves_value_ $t >](n: $t) {
                    let list = DigitList::from(n);
                    let octal = list.change_scale();
                    prop_assert_eq!(octal.to_biguint(), BigUint::from(n));
                    prop_assert!(octal.iter().all(|d| d < 8));
                }

                #[test]
                fn [< or_matches_native_ $t >](a: $t, b: $t) {
                    let x = DigitList::from(a);
                    let y = DigitList::from(b).change_scale();
                    let z = x.additional_operation(Some(&y)).unwrap();
                    prop_assert_eq!(z.to_biguint(), BigUint::from(a | b));
                    prop_assert_eq!(z.base(), 3);
                }
            } }
        };
    }

    impl_test!(u32);
    impl_test!(u64);
    impl_test!(u128);
}

mod sequence {
    use super::*;

    proptest! {
        #[test]
        fn sort_ascending_is_sorted(digits in ternary_digits()) {
            let mut list = DigitList::from_digits(3, digits.clone()).unwrap();
            list.sort_ascending();
            let mut expected = digits;
            expected.sort();
            prop_assert_eq!(list.to_vec(), expected);
        }

        #[test]
        fn sort_descending_is_sorted(digits in octal_digits()) {
            let mut list = DigitList::from_digits(8, digits.clone()).unwrap();
            list.sort_descending();
            let mut expected = digits;
            expected.sort_by(|a, b| b.cmp(a));
            prop_assert_eq!(list.to_vec(), expected);
        }

        #[test]
        fn shifts_are_rotations(digits in octal_digits()) {
            let mut list = DigitList::from_digits(8, digits.clone()).unwrap();
            list.shift_left();
            let mut expected = digits.clone();
            if !expected.is_empty() {
                expected.rotate_left(1);
            }
            prop_assert_eq!(list.to_vec(), expected);

            list.shift_right();
            prop_assert_eq!(list.to_vec(), digits);
        }

        #[test]
        fn len_tracks_chain(
            digits in ternary_digits(),
            ops in digit_vec((0usize..4, 0usize..64, 0u8..3), 0..60),
        ) {
            let mut list = DigitList::from_digits(3, digits).unwrap();
            for (op, pos, digit) in ops {
                match op {
                    0 => { let _ = list.insert(pos % (list.len() + 1), digit); }
                    1 if !list.is_empty() => { let _ = list.remove(pos % list.len()); }
                    2 => { list.remove_digit(digit); }
                    _ => { list.push(digit).unwrap(); }
                }
                assert_linked(&list)?;
            }
        }

        #[test]
        fn get_matches_vec(digits in octal_digits()) {
            let list = DigitList::from_digits(8, digits.clone()).unwrap();
            for (i, d) in digits.iter().enumerate() {
                prop_assert_eq!(list.get(i), Ok(*d));
            }
            prop_assert!(list.get(digits.len()).is_err());
        }
    }
}
