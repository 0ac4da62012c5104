// Tests for the sequence contract, included by sequence.rs

fn ternary(digits: &[Digit]) -> DigitList {
    DigitList::from_digits(3, digits.iter().copied()).unwrap()
}

/// Walk the chain both ways and check it agrees with `len`
fn assert_consistent(list: &DigitList) {
    assert_eq!(list.iter().count(), list.len());
    assert_eq!(list.iter_rev().count(), list.len());
    assert_eq!(list.arena_len(), list.len());

    let mut forward = list.to_vec();
    forward.reverse();
    assert_eq!(list.iter_rev().collect::<Vec<_>>(), forward);
}

mod get {
    use super::*;

    #[test]
    fn every_position() {
        let list = ternary(&[1, 0, 2, 0, 1, 2]);
        let found: Vec<_> = (0..6).map(|i| list.get(i).unwrap()).collect();
        assert_eq!(found, vec![1, 0, 2, 0, 1, 2]);
    }

    macro_rules! impl_case {
        ($name:ident: $digits:expr, $index:expr) => {
            paste! {
                #[test]
                fn [< out_of_range_ $name >]() {
                    let list = ternary(&$digits);
                    assert_eq!(
                        list.get($index),
                        Err(DigitListError::OutOfRange { index: $index, len: list.len() })
                    );
                }
            }
        };
    }

    impl_case!(empty: [], 0);
    impl_case!(at_len: [1, 2], 2);
    impl_case!(past_len: [1, 2], 7);
    impl_case!(max: [1], usize::MAX);
}

mod set {
    use super::*;

    #[test]
    fn returns_old_digit() {
        let mut list = ternary(&[1, 0, 2]);
        assert_eq!(list.set(1, 2), Ok(0));
        assert_eq!(list.set(2, 0), Ok(2));
        assert_eq!(list.to_vec(), vec![1, 2, 0]);
    }

    #[test]
    fn out_of_range() {
        let mut list = ternary(&[1, 0, 2]);
        assert_eq!(list.set(3, 1), Err(DigitListError::OutOfRange { index: 3, len: 3 }));
        let mut empty = DigitList::new();
        assert_eq!(empty.set(0, 1), Err(DigitListError::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn rejects_digit_outside_base() {
        let mut list = ternary(&[1, 0, 2]);
        assert_eq!(list.set(0, 3), Err(DigitListError::InvalidDigit { digit: 3, base: 3 }));
        assert_eq!(list.to_vec(), vec![1, 0, 2]);
    }
}

mod push {
    use super::*;

    #[test]
    fn appends_at_tail() {
        let mut list = DigitList::new();
        list.push(1).unwrap();
        list.push(0).unwrap();
        list.push(2).unwrap();
        assert_eq!(list.to_vec(), vec![1, 0, 2]);
        assert_consistent(&list);
    }

    #[test]
    fn rejects_digit_outside_base() {
        let mut list = DigitList::new();
        assert_eq!(list.push(7), Err(DigitListError::InvalidDigit { digit: 7, base: 3 }));
        assert!(list.is_empty());

        let mut octal = DigitList::with_base(8).unwrap();
        assert_eq!(octal.push(7), Ok(()));
    }
}

mod insert {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $digits:expr, $index:literal, $value:literal => $expected:expr) => {
            #[test]
            fn $name() {
                let mut list = ternary(&$digits);
                list.insert($index, $value).unwrap();
                assert_eq!(list.to_vec(), $expected.to_vec());
                assert_consistent(&list);
            }
        };
    }

    impl_case!(case_into_empty: [], 0, 2 => [2]);
    impl_case!(case_front: [1, 1], 0, 2 => [2, 1, 1]);
    impl_case!(case_back: [1, 1], 2, 2 => [1, 1, 2]);
    impl_case!(case_middle: [1, 1, 1, 1], 1, 0 => [1, 0, 1, 1, 1]);
    impl_case!(case_middle_tail_side: [1, 1, 1, 1], 3, 0 => [1, 1, 1, 0, 1]);

    #[test]
    fn out_of_range() {
        let mut list = ternary(&[1, 2]);
        assert_eq!(list.insert(3, 0), Err(DigitListError::OutOfRange { index: 3, len: 2 }));
        assert_eq!(list.to_vec(), vec![1, 2]);
    }
}

mod remove {
    use super::*;

    #[test]
    fn by_index() {
        let mut list = ternary(&[1, 0, 2, 1]);
        assert_eq!(list.remove(2), Ok(2));
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.remove(1), Ok(1));
        assert_eq!(list.to_vec(), vec![0]);
        assert_consistent(&list);
        assert_eq!(list.remove(0), Ok(0));
        assert!(list.is_empty());
        assert_consistent(&list);
    }

    #[test]
    fn by_index_out_of_range() {
        let mut list = ternary(&[1, 0]);
        assert_eq!(list.remove(2), Err(DigitListError::OutOfRange { index: 2, len: 2 }));
        let mut empty = DigitList::new();
        assert_eq!(empty.remove(0), Err(DigitListError::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn first_matching_digit() {
        let mut list = ternary(&[1, 2, 0, 2]);
        assert!(list.remove_digit(2));
        assert_eq!(list.to_vec(), vec![1, 0, 2]);
        assert!(list.remove_digit(2));
        assert_eq!(list.to_vec(), vec![1, 0]);
        assert!(!list.remove_digit(2));
        assert_consistent(&list);
    }
}

mod search {
    use super::*;

    #[test]
    fn index_of() {
        let list = ternary(&[1, 0, 2, 0, 1]);
        assert_eq!(list.index_of(0), Some(1));
        assert_eq!(list.index_of(1), Some(0));
        assert_eq!(list.index_of(2), Some(2));
        assert_eq!(DigitList::new().index_of(0), None);
    }

    #[test]
    fn last_index_of() {
        let list = ternary(&[1, 0, 2, 0, 1]);
        assert_eq!(list.last_index_of(0), Some(3));
        assert_eq!(list.last_index_of(1), Some(4));
        assert_eq!(list.last_index_of(2), Some(2));
        assert_eq!(ternary(&[1, 1]).last_index_of(0), None);
    }

    #[test]
    fn contains() {
        let list = ternary(&[1, 0, 1]);
        assert!(list.contains(0));
        assert!(!list.contains(2));
        assert!(list.contains_all(&[1, 0]));
        assert!(list.contains_all(&[]));
        assert!(!list.contains_all(&[0, 2]));
    }
}

mod bulk {
    use super::*;

    #[test]
    fn extend_digits() {
        let mut list = ternary(&[1]);
        list.extend_digits(vec![0, 2, 2]).unwrap();
        assert_eq!(list.to_vec(), vec![1, 0, 2, 2]);
        assert_consistent(&list);
    }

    #[test]
    fn extend_digits_validates_everything_first() {
        let mut list = ternary(&[1]);
        let result = list.extend_digits(vec![0, 2, 5, 1]);
        assert_eq!(result, Err(DigitListError::InvalidDigit { digit: 5, base: 3 }));
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[test]
    fn insert_all_keeps_order() {
        let mut list = ternary(&[1, 1]);
        list.insert_all(1, vec![0, 2, 0]).unwrap();
        assert_eq!(list.to_vec(), vec![1, 0, 2, 0, 1]);
        assert_consistent(&list);
    }

    #[test]
    fn insert_all_out_of_range() {
        let mut list = ternary(&[1, 1]);
        assert_eq!(
            list.insert_all(3, vec![0]),
            Err(DigitListError::OutOfRange { index: 3, len: 2 })
        );
        assert_eq!(list.to_vec(), vec![1, 1]);
    }

    #[test]
    fn remove_all() {
        let mut list = ternary(&[1, 0, 2, 0, 1]);
        assert!(list.remove_all(&[0, 2]));
        assert_eq!(list.to_vec(), vec![1, 1]);
        assert!(!list.remove_all(&[0]));
        assert_consistent(&list);
    }

    #[test]
    fn retain_all() {
        let mut list = ternary(&[1, 0, 2, 0, 1]);
        assert!(list.retain_all(&[0]));
        assert_eq!(list.to_vec(), vec![0, 0]);
        assert!(!list.retain_all(&[0, 1]));
        assert!(list.retain_all(&[]));
        assert!(list.is_empty());
        assert_consistent(&list);
    }
}

mod sub_list {
    use super::*;

    #[test]
    fn copies_range() {
        let list = ternary(&[1, 0, 2, 0, 1]);
        let sub = list.sub_list(1, 4).unwrap();
        assert_eq!(sub.to_vec(), vec![0, 2, 0]);
        assert_eq!(list.sub_list(2, 2).unwrap().len(), 0);
        assert_eq!(list.sub_list(0, 5).unwrap(), list);
    }

    #[test]
    fn is_independent() {
        let list = ternary(&[1, 0, 2]);
        let mut sub = list.sub_list(0, 2).unwrap();
        sub.set(0, 2).unwrap();
        assert_eq!(list.to_vec(), vec![1, 0, 2]);
    }

    #[test]
    fn keeps_base() {
        let octal = DigitList::from_digits(8, vec![7, 1, 4]).unwrap();
        let sub = octal.sub_list(0, 1).unwrap();
        assert_eq!(sub.base(), 8);
        assert_eq!(sub.to_vec(), vec![7]);
    }

    #[test]
    fn out_of_range() {
        let list = ternary(&[1, 0, 2]);
        assert!(list.sub_list(0, 4).is_err());
        assert!(list.sub_list(2, 1).is_err());
    }
}

#[test]
fn clear_resets_base() {
    let mut octal = DigitList::from_digits(8, vec![7, 1]).unwrap();
    octal.clear();
    assert!(octal.is_empty());
    assert_eq!(octal.base(), 3);
    assert_consistent(&octal);
}

#[test]
fn mixed_operations_keep_len_consistent() {
    let mut list = DigitList::new();
    for i in 0..20u8 {
        list.insert((i as usize * 7) % (list.len() + 1), i % 3).unwrap();
        assert_consistent(&list);
    }
    for i in 0..10 {
        list.remove((i * 5) % list.len()).unwrap();
        assert_consistent(&list);
    }
    list.remove_all(&[1]);
    assert_consistent(&list);
    list.push(1).unwrap();
    list.insert_all(1, vec![2, 2]).unwrap();
    assert_consistent(&list);
}

mod traversal {
    use super::*;
    use crate::ListCursor;

    /// Forward digits from `iter`, backward digits from a cursor started at the tail
    fn walk<S: DigitSequence>(seq: &S) -> (Vec<Digit>, Vec<Digit>) {
        let forward = seq.iter().collect();

        let mut cursor = seq.cursor(seq.len()).unwrap();
        let mut backward = Vec::new();
        while cursor.has_previous() {
            backward.extend(cursor.previous_digit());
        }
        (forward, backward)
    }

    #[test]
    fn generic_iteration() {
        let list = ternary(&[1, 0, 2, 0, 1, 2]);
        let (forward, backward) = walk(&list);
        assert_eq!(forward, vec![1, 0, 2, 0, 1, 2]);
        assert_eq!(backward, vec![2, 1, 0, 2, 0, 1]);
    }

    #[test]
    fn generic_iteration_of_empty() {
        let (forward, backward) = walk(&DigitList::new());
        assert!(forward.is_empty());
        assert!(backward.is_empty());
    }

    #[test]
    fn generic_cursor_bounds() {
        fn cursor_at<S: DigitSequence>(seq: &S, index: usize) -> bool {
            seq.cursor(index).is_ok()
        }
        let list = ternary(&[1, 2]);
        assert!(cursor_at(&list, 2));
        assert!(!cursor_at(&list, 3));
    }
}
