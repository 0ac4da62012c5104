//! In-place rearrangement of digit values
//!
//! These move digit *values* between nodes; the chain itself is never
//! relinked.

use crate::{Digit, DigitList};

impl DigitList {
    /// Exchange digits at `i` and `j`
    ///
    /// Returns false (and does nothing) if either index is out of range.
    ///
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i >= self.len || j >= self.len {
            return false;
        }
        if i == j {
            return true;
        }

        let a = self.node_index_at(i);
        let b = self.node_index_at(j);
        let (da, db) = (self.node(a).digit, self.node(b).digit);
        self.node_mut(a).digit = db;
        self.node_mut(b).digit = da;
        true
    }

    /// Sort digits so they are non-decreasing from head to tail
    pub fn sort_ascending(&mut self) {
        self.bubble_sort(|a, b| a > b);
    }

    /// Sort digits so they are non-increasing from head to tail
    pub fn sort_descending(&mut self) {
        self.bubble_sort(|a, b| a < b);
    }

    /// Rotate digits one place toward the head; the head digit moves to the tail
    pub fn shift_left(&mut self) {
        if self.len <= 1 {
            return;
        }

        let (head, tail) = match (self.head_index(), self.tail_index()) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return,
        };
        let first = self.node(head).digit;

        let mut idx = head;
        while let Some(next) = self.node(idx).next {
            let digit = self.node(next).digit;
            self.node_mut(idx).digit = digit;
            idx = next;
        }
        debug_assert_eq!(idx, tail);
        self.node_mut(tail).digit = first;
    }

    /// Rotate digits one place toward the tail; the tail digit moves to the head
    pub fn shift_right(&mut self) {
        if self.len <= 1 {
            return;
        }

        let (head, tail) = match (self.head_index(), self.tail_index()) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return,
        };
        let last = self.node(tail).digit;

        let mut idx = tail;
        while let Some(prev) = self.node(idx).prev {
            let digit = self.node(prev).digit;
            self.node_mut(idx).digit = digit;
            idx = prev;
        }
        debug_assert_eq!(idx, head);
        self.node_mut(head).digit = last;
    }

    /// Adjacent-exchange sort; `out_of_order(a, b)` is true when `a`
    /// must not precede `b`
    fn bubble_sort<F>(&mut self, out_of_order: F)
    where
        F: Fn(Digit, Digit) -> bool,
    {
        if self.len <= 1 {
            return;
        }

        for pass in 0..self.len - 1 {
            let mut idx = match self.head_index() {
                Some(head) => head,
                None => return,
            };
            for _ in 0..self.len - pass - 1 {
                let next = match self.node(idx).next {
                    Some(next) => next,
                    None => break,
                };
                let (a, b) = (self.node(idx).digit, self.node(next).digit);
                if out_of_order(a, b) {
                    self.node_mut(idx).digit = b;
                    self.node_mut(next).digit = a;
                }
                idx = next;
            }
        }
    }
}


#[cfg(test)]
mod test {
    use crate::*;

    fn list(base: u8, digits: &[Digit]) -> DigitList {
        DigitList::from_digits(base, digits.iter().copied()).unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $method:ident $digits:expr => $expected:expr) => {
            #[test]
            fn $name() {
                let digits: Vec<Digit> = $digits.to_vec();
                let expected: Vec<Digit> = $expected.to_vec();
                let mut l = list(8, &digits);
                l.$method();
                assert_eq!(l.to_vec(), expected);
            }
        };
    }

    impl_case!(sort_ascending_ternary: sort_ascending [2, 0, 1, 2, 0] => [0, 0, 1, 2, 2]);
    impl_case!(sort_descending_ternary: sort_descending [2, 0, 1, 2, 0] => [2, 2, 1, 0, 0]);
    impl_case!(sort_ascending_octal: sort_ascending [7, 3, 5, 0, 1, 6] => [0, 1, 3, 5, 6, 7]);
    impl_case!(sort_descending_sorted: sort_descending [7, 5, 5, 1] => [7, 5, 5, 1]);
    impl_case!(sort_ascending_single: sort_ascending [4] => [4]);
    impl_case!(sort_descending_empty: sort_descending [] => []);

    impl_case!(shift_left_four: shift_left [1, 2, 3, 4] => [2, 3, 4, 1]);
    impl_case!(shift_right_four: shift_right [1, 2, 3, 4] => [4, 1, 2, 3]);
    impl_case!(shift_left_pair: shift_left [1, 0] => [0, 1]);
    impl_case!(shift_right_single: shift_right [5] => [5]);
    impl_case!(shift_left_empty: shift_left [] => []);

    #[test]
    fn sort_on_ternary_list() {
        let mut l = list(3, &[2, 0, 1, 2, 0]);
        l.sort_ascending();
        assert_eq!(l.to_vec(), vec![0, 0, 1, 2, 2]);
        l.sort_descending();
        assert_eq!(l.to_vec(), vec![2, 2, 1, 0, 0]);
    }

    #[test]
    fn shift_left_then_right_restores() {
        for len in 1..8u8 {
            let digits: Vec<Digit> = (0..len).collect();
            let mut l = list(8, &digits);
            l.shift_left();
            l.shift_right();
            assert_eq!(l.to_vec(), digits);

            l.shift_right();
            l.shift_left();
            assert_eq!(l.to_vec(), digits);
        }
    }

    #[test]
    fn full_rotation_is_identity() {
        let digits = [1, 2, 0, 0, 2];
        let mut l = list(3, &digits);
        for _ in 0..digits.len() {
            l.shift_left();
        }
        assert_eq!(l.to_vec(), digits.to_vec());
    }

    #[test]
    fn swap_values() {
        let mut l = list(3, &[1, 0, 2]);
        assert!(l.swap(0, 2));
        assert_eq!(l.to_vec(), vec![2, 0, 1]);
        assert!(l.swap(1, 1));
        assert_eq!(l.to_vec(), vec![2, 0, 1]);
        assert!(l.swap(2, 1));
        assert_eq!(l.to_vec(), vec![2, 1, 0]);
    }

    #[test]
    fn swap_out_of_range() {
        let mut l = list(3, &[1, 0, 2]);
        assert!(!l.swap(0, 3));
        assert!(!l.swap(3, 3));
        assert!(!DigitList::new().swap(0, 0));
        assert_eq!(l.to_vec(), vec![1, 0, 2]);
    }
}
