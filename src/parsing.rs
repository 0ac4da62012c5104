//! Routines for parsing decimal input into DigitLists

use num_bigint::BigUint;
use num_traits::Num;

use crate::{Context, DigitList, ParseDigitListError};


/// Parse decimal digit string (surrounding whitespace allowed)
///
/// Signs, separators and any other non-digit characters are rejected.
///
pub fn parse_decimal(s: &str) -> Result<BigUint, ParseDigitListError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseDigitListError::Empty);
    }
    if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseDigitListError::InvalidDigit(c));
    }
    Ok(BigUint::from_str_radix(s, 10)?)
}

impl DigitList {
    /// Build ternary list from a decimal string
    ///
    /// Malformed input, empty input and zero all produce an empty list.
    ///
    pub fn from_decimal_str(s: &str) -> DigitList {
        DigitList::from_decimal_str_with_context(s, &Context::default())
    }

    /// Build list in `ctx.base()` from a decimal string
    ///
    /// Zero yields an empty list in `ctx.base()`; malformed input yields an
    /// empty ternary list.
    ///
    pub fn from_decimal_str_with_context(s: &str, ctx: &Context) -> DigitList {
        match parse_decimal(s) {
            Ok(value) => DigitList::from_biguint_unchecked(&value, ctx.base()),
            Err(err) => {
                debug!(input = s, error = %err, "ignoring malformed decimal input");
                DigitList::new()
            }
        }
    }
}


#[cfg(test)]
mod test_parse_decimal {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!(parse_decimal($input), Ok(BigUint::from($expected as u64)));
            }
        };
        ($name:ident: $input:literal => Err($err:expr)) => {
            #[test]
            fn $name() {
                assert_eq!(parse_decimal($input), Err($err));
            }
        };
    }

    impl_case!(case_100: "100" => 100);
    impl_case!(case_zero: "0" => 0);
    impl_case!(case_leading_zeros: "00042" => 42);
    impl_case!(case_whitespace: "  7\n" => 7);

    impl_case!(case_empty: "" => Err(ParseDigitListError::Empty));
    impl_case!(case_blank: " \t " => Err(ParseDigitListError::Empty));
    impl_case!(case_negative: "-5" => Err(ParseDigitListError::InvalidDigit('-')));
    impl_case!(case_plus: "+5" => Err(ParseDigitListError::InvalidDigit('+')));
    impl_case!(case_hello: "hello" => Err(ParseDigitListError::InvalidDigit('h')));
    impl_case!(case_decimal_point: "1.5" => Err(ParseDigitListError::InvalidDigit('.')));
    impl_case!(case_underscore: "1_000" => Err(ParseDigitListError::InvalidDigit('_')));
    impl_case!(case_inner_space: "1 0" => Err(ParseDigitListError::InvalidDigit(' ')));

    #[test]
    fn beyond_u64() {
        let n = parse_decimal("123456789012345678901234567890").unwrap();
        assert_eq!(n.to_str_radix(10), "123456789012345678901234567890");
    }
}

#[cfg(test)]
mod test_from_decimal_str {
    use super::*;
    use crate::DigitSequence;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let list = DigitList::from_decimal_str($input);
                assert_eq!(list.to_string(), $expected);
                assert_eq!(list.base(), 3);
            }
        };
    }

    impl_case!(case_100: "100" => "10201");
    impl_case!(case_1: "1" => "1");
    impl_case!(case_3: "3" => "10");
    impl_case!(case_5: "5" => "12");
    impl_case!(case_trimmed: " 9 " => "100");
    impl_case!(case_zero: "0" => "");
    impl_case!(case_zeros: "000" => "");
    impl_case!(case_empty: "" => "");
    impl_case!(case_letters: "abc" => "");
    impl_case!(case_negative: "-100" => "");

    #[test]
    fn invalid_input_is_empty() {
        for input in ["", "   ", "x1", "0", "-1", "1e3"].iter() {
            assert_eq!(DigitList::from_decimal_str(input).len(), 0, "{:?}", input);
        }
    }

    #[test]
    fn with_context_base() {
        let ctx = Context::new(8, 3).unwrap();
        let list = DigitList::from_decimal_str_with_context("100", &ctx);
        assert_eq!(list.base(), 8);
        assert_eq!(list.to_string(), "144");
    }

    #[test]
    fn zero_keeps_context_base() {
        let ctx = Context::new(8, 3).unwrap();
        let list = DigitList::from_decimal_str_with_context("0", &ctx);
        assert!(list.is_empty());
        assert_eq!(list.base(), 8);
    }

    #[test]
    fn malformed_with_context_is_empty_ternary() {
        let ctx = Context::new(8, 3).unwrap();
        let list = DigitList::from_decimal_str_with_context("0x10", &ctx);
        assert!(list.is_empty());
        assert_eq!(list.base(), 3);
    }
}
