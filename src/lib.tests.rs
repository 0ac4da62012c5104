// Crate-level tests, included by lib.rs

#[test]
fn default_is_empty_ternary() {
    let list = DigitList::default();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.base(), 3);
    assert_eq!(list.to_string(), "");
}

#[test]
fn record_book_number_is_fixed() {
    assert_eq!(DigitList::record_book_number(), RECORD_BOOK_NUMBER);
    assert_eq!(DigitList::record_book_number(), DigitList::record_book_number());
}

#[test]
fn with_base_bounds() {
    assert_eq!(DigitList::with_base(8).unwrap().base(), 8);
    assert_eq!(DigitList::with_base(2).unwrap().base(), 2);
    assert_eq!(DigitList::with_base(10).unwrap().base(), 10);
    assert_eq!(DigitList::with_base(1).unwrap_err(), DigitListError::InvalidBase(1));
    assert_eq!(DigitList::with_base(16).unwrap_err(), DigitListError::InvalidBase(16));
}

#[test]
fn from_digits_rejects_invalid() {
    assert_eq!(
        DigitList::from_digits(3, vec![1, 3]).unwrap_err(),
        DigitListError::InvalidDigit { digit: 3, base: 3 }
    );
    assert_eq!(
        DigitList::from_digits(0, vec![]).unwrap_err(),
        DigitListError::InvalidBase(0)
    );
}

#[test]
fn iterator_is_lazy_and_restartable() {
    let list = DigitList::from_decimal_str("100");
    let mut iter = list.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.len(), 3);

    let again: Vec<Digit> = list.iter().collect();
    assert_eq!(again, vec![1, 0, 2, 0, 1]);

    let mut total = 0;
    for d in &list {
        total += d as u32;
    }
    assert_eq!(total, 4);
}

#[test]
fn to_vec_is_a_snapshot() {
    let mut list = DigitList::from_decimal_str("5");
    let snapshot = list.to_vec();
    list.push(2).unwrap();
    assert_eq!(snapshot, vec![1, 2]);
    assert_eq!(list.to_vec(), vec![1, 2, 2]);
}

#[test]
fn is_zero() {
    assert!(DigitList::new().is_zero());
    assert!(DigitList::from_digits(3, vec![0, 0]).unwrap().is_zero());
    assert!(!DigitList::from_decimal_str("1").is_zero());
}

mod round_trip {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $ternary:literal, $octal:literal) => {
            paste! {
                #[test]
                fn [< decimal_ $name >]() {
                    let list = DigitList::from_decimal_str($input);
                    assert_eq!(list.to_string(), $ternary);
                    assert_eq!(list.to_decimal_string(), $input);
                }

                #[test]
                fn [< octal_ $name >]() {
                    let octal = DigitList::from_decimal_str($input).change_scale();
                    assert_eq!(octal.to_string(), $octal);
                    assert_eq!(octal.to_decimal_string(), $input);
                }
            }
        };
    }

    impl_case!(case_1: "1" => "1", "1");
    impl_case!(case_8: "8" => "22", "10");
    impl_case!(case_100: "100" => "10201", "144");
    impl_case!(case_729: "729" => "1000000", "1331");
    impl_case!(case_4096: "4096" => "12121201", "10000");
    impl_case!(case_u64_max: "18446744073709551615"
        => "11112220022122120101211020120210210211220",
           "1777777777777777777777");
}

mod bounds {
    use super::*;

    fn lists() -> Vec<DigitList> {
        vec![
            DigitList::new(),
            DigitList::from_decimal_str("1"),
            DigitList::from_decimal_str("100"),
        ]
    }

    #[test]
    fn index_equal_to_len_fails() {
        for mut list in lists() {
            let len = list.len();
            let err = DigitListError::OutOfRange { index: len, len };
            assert_eq!(list.get(len), Err(err.clone()));
            assert_eq!(list.set(len, 0), Err(err.clone()));
            assert_eq!(list.remove(len), Err(err.clone()));
            assert_eq!(list.len(), len);
        }
    }

    #[test]
    fn index_past_len_fails_for_insert() {
        for mut list in lists() {
            let len = list.len();
            assert_eq!(
                list.insert(len + 1, 0),
                Err(DigitListError::OutOfRange { index: len + 1, len })
            );
            assert!(list.insert(len, 0).is_ok());
        }
    }

    #[test]
    fn wrapped_negative_index_fails() {
        // -1 as seen through an unsigned index
        let minus_one = usize::MAX;
        for mut list in lists() {
            assert!(list.get(minus_one).is_err());
            assert!(list.set(minus_one, 0).is_err());
            assert!(list.insert(minus_one, 0).is_err());
            assert!(list.remove(minus_one).is_err());
            assert!(list.cursor(minus_one).is_err());
            assert!(!list.swap(minus_one, 0));
        }
    }
}

#[test]
fn empty_and_invalid_input_degrade() {
    for input in ["abc", "", "0", "-7", "12abc", " "].iter() {
        assert_eq!(DigitList::from_decimal_str(input).len(), 0);
    }
    assert_eq!(DigitList::from_file("/nonexistent/path/to/number.txt").len(), 0);
}

#[test]
fn scale_change_then_fold_gives_original() {
    let n = DigitList::from_decimal_str("100");
    assert_eq!(n.to_string(), "10201");
    let octal = n.change_scale();
    assert_eq!(octal.to_biguint(), BigUint::from(100u32));
    assert_eq!(octal.to_biguint(), n.to_biguint());
}

#[test]
fn or_of_five_and_three() {
    let a = DigitList::from_decimal_str("5");
    let b = DigitList::from_decimal_str("3");
    let c = a.additional_operation(Some(&b)).unwrap();
    assert_eq!(c.to_vec(), vec![2, 1]);
    assert_eq!(c.to_decimal_string(), "7");
}

#[test]
fn clone_is_independent() {
    let a = DigitList::from_decimal_str("100");
    let mut b = a.clone();
    b.sort_ascending();
    assert_eq!(a.to_string(), "10201");
    assert_eq!(b.to_string(), "00112");
}
