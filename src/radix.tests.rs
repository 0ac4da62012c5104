// Tests for radix conversion, included by radix.rs

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

mod fold_digits {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: base $base:literal [ $($d:literal),* ] => $expected:literal) => {
            #[test]
            fn $name() {
                // digits are listed most significant first
                let mut digits: Vec<Digit> = vec![ $($d),* ];
                digits.reverse();
                assert_eq!(fold_digits(digits, $base), big($expected));
            }
        };
    }

    impl_case!(case_empty: base 3 [] => 0);
    impl_case!(case_10201_b3: base 3 [1, 0, 2, 0, 1] => 100);
    impl_case!(case_144_b8: base 8 [1, 4, 4] => 100);
    impl_case!(case_21_b3: base 3 [2, 1] => 7);
    impl_case!(case_leading_zeros: base 3 [0, 0, 1, 2] => 5);
    impl_case!(case_777_b8: base 8 [7, 7, 7] => 511);
}

mod from_biguint {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal in $base:literal => [ $($d:literal),* ]) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let list = DigitList::from_biguint(&big($n), $base).unwrap();
                    let expected: Vec<Digit> = vec![ $($d),* ];
                    assert_eq!(list.to_vec(), expected);
                    assert_eq!(list.base(), $base);
                }
            }
        };
    }

    impl_case!(zero: 0 in 3 => []);
    impl_case!(one: 1 in 3 => [1]);
    impl_case!(hundred_ternary: 100 in 3 => [1, 0, 2, 0, 1]);
    impl_case!(hundred_octal: 100 in 8 => [1, 4, 4]);
    impl_case!(seven_ternary: 7 in 3 => [2, 1]);
    impl_case!(ten_binary: 10 in 2 => [1, 0, 1, 0]);
    impl_case!(ninety_decimal: 90 in 10 => [9, 0]);

    #[test]
    fn rejects_base() {
        assert_eq!(
            DigitList::from_biguint(&big(5), 16).unwrap_err(),
            DigitListError::InvalidBase(16)
        );
        assert!(DigitList::from_biguint(&big(5), 1).is_err());
    }
}

mod change_scale {
    use super::*;

    #[test]
    fn hundred_to_octal() {
        let ternary = DigitList::from_decimal_str("100");
        assert_eq!(ternary.to_vec(), vec![1, 0, 2, 0, 1]);

        let octal = ternary.change_scale();
        assert_eq!(octal.base(), 8);
        assert_eq!(octal.to_vec(), vec![1, 4, 4]);
        assert_eq!(octal.to_biguint(), big(100));
        assert_eq!(octal.to_decimal_string(), "100");
    }

    #[test]
    fn does_not_modify_original() {
        let ternary = DigitList::from_decimal_str("12345");
        let before = ternary.to_vec();
        let _ = ternary.change_scale();
        assert_eq!(ternary.to_vec(), before);
        assert_eq!(ternary.base(), 3);
    }

    #[test]
    fn empty_and_zero() {
        assert!(DigitList::new().change_scale().is_empty());

        let zeros = DigitList::from_digits(3, vec![0, 0]).unwrap();
        let result = zeros.change_scale();
        assert!(result.is_empty());
        assert_eq!(result.base(), 3);
    }

    #[test]
    fn octal_to_octal() {
        let octal = DigitList::from_digits(8, vec![7, 0, 1]).unwrap();
        assert_eq!(octal.change_scale().to_vec(), vec![7, 0, 1]);
    }

    #[test]
    fn to_other_base() {
        let n = DigitList::from_decimal_str("100");
        let binary = n.change_scale_to(2).unwrap();
        assert_eq!(binary.to_string(), "1100100");
        assert_eq!(n.change_scale_to(11).unwrap_err(), DigitListError::InvalidBase(11));
    }

    #[test]
    fn with_context() {
        let ctx = Context::new(3, 5).unwrap();
        let n = DigitList::from_decimal_str("100");
        let quinary = n.change_scale_with_context(&ctx);
        assert_eq!(quinary.base(), 5);
        assert_eq!(quinary.to_string(), "400");
    }

    #[test]
    fn out_of_range_scale_base_is_an_error() {
        let n = DigitList::from_decimal_str("100");
        for base in [0u8, 1, 11, 16].iter() {
            assert_eq!(n.change_scale_to(*base), Err(DigitListError::InvalidBase(*base)));
            assert!(Context::default().with_scale_base(*base).is_err());
        }
    }

    #[test]
    fn every_context_keeps_nonzero_values() {
        let n = DigitList::from_decimal_str("100");
        for base in MIN_BASE..=MAX_BASE {
            let ctx = Context::new(base, base).unwrap();

            let scaled = n.change_scale_with_context(&ctx);
            assert_eq!(scaled.base(), base);
            assert_eq!(scaled.to_decimal_string(), "100");

            let combined = n.additional_operation_with_context(Some(&n), &ctx).unwrap();
            assert_eq!(combined.base(), base);
            assert_eq!(combined.to_decimal_string(), "100");
        }
    }

    #[test]
    fn large_value() {
        let decimal = "340282366920938463463374607431768211457";
        let n = DigitList::from_decimal_str(decimal);
        let octal = n.change_scale();
        assert_eq!(octal.to_decimal_string(), decimal);
        // 2^128 + 1
        assert_eq!(octal.len(), 43);
        assert_eq!(octal.get(0), Ok(4));
        assert_eq!(octal.get(42), Ok(1));
    }
}

mod additional_operation {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal | $b:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let a = DigitList::from_decimal_str($a);
                let b = DigitList::from_decimal_str($b);
                let result = a.additional_operation(Some(&b)).unwrap();
                assert_eq!(result.base(), 3);
                assert_eq!(result.to_decimal_string(), $expected);
            }
        };
    }

    impl_case!(case_5_or_3: "5" | "3" => "7");
    impl_case!(case_8_or_1: "8" | "1" => "9");
    impl_case!(case_12_or_10: "12" | "10" => "14");
    impl_case!(case_same: "100" | "100" => "100");
    impl_case!(case_with_empty: "42" | "" => "42");
    impl_case!(case_large: "18446744073709551616" | "1" => "18446744073709551617");

    #[test]
    fn five_or_three_digits() {
        let a = DigitList::from_decimal_str("5");
        let b = DigitList::from_decimal_str("3");
        let result = a.additional_operation(Some(&b)).unwrap();
        assert_eq!(result.to_vec(), vec![2, 1]);
    }

    #[test]
    fn operands_decoded_in_own_base() {
        // octal "12" is 10, ternary "12" is 5
        let octal = DigitList::from_digits(8, vec![1, 2]).unwrap();
        let ternary = DigitList::from_digits(3, vec![1, 2]).unwrap();
        let result = octal.additional_operation(Some(&ternary)).unwrap();
        assert_eq!(result.to_decimal_string(), "15");
        assert_eq!(result.base(), 3);
    }

    #[test]
    fn missing_argument() {
        let a = DigitList::from_decimal_str("5");
        assert!(a.additional_operation(None).is_none());
    }

    #[test]
    fn zero_result_is_empty() {
        let empty = DigitList::new();
        let result = empty.additional_operation(Some(&DigitList::new())).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn operands_untouched() {
        let a = DigitList::from_decimal_str("5");
        let b = DigitList::from_decimal_str("3").change_scale();
        let _ = a.additional_operation(Some(&b));
        assert_eq!(a.to_vec(), vec![1, 2]);
        assert_eq!(b.to_vec(), vec![3]);
        assert_eq!(b.base(), 8);
    }

    #[test]
    fn with_context() {
        let ctx = Context::new(2, 8).unwrap();
        let a = DigitList::from_decimal_str("5");
        let b = DigitList::from_decimal_str("3");
        let result = a.additional_operation_with_context(Some(&b), &ctx).unwrap();
        assert_eq!(result.base(), 2);
        assert_eq!(result.to_string(), "111");
    }
}

#[test]
fn decimal_string_of_empty() {
    assert_eq!(DigitList::new().to_decimal_string(), "");
}

#[test]
fn decimal_string_round_trip() {
    for n in [1u64, 2, 3, 8, 26, 27, 100, 6561, 99999, u64::MAX].iter() {
        let s = n.to_string();
        assert_eq!(DigitList::from_decimal_str(&s).to_decimal_string(), s);
    }
}
