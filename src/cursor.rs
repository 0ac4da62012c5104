//! Bidirectional read-only cursor over a digit list
//!
//! A cursor sits *between* digits: at position `i` the next digit is the
//! one at index `i` and the previous digit is the one at `i - 1`. In a
//! list of length *n* there are *n* + 1 valid positions.

use crate::{Digit, DigitList, DigitListError};


/// Cursor operations; mutation through the cursor is refused
pub trait ListCursor {
    fn has_next(&self) -> bool;

    /// Return the next digit and move forward
    fn next_digit(&mut self) -> Option<Digit>;

    fn has_previous(&self) -> bool;

    /// Move backward and return the digit passed over
    fn previous_digit(&mut self) -> Option<Digit>;

    /// Index of the digit `next_digit` would return
    fn next_index(&self) -> usize;

    /// Index of the digit `previous_digit` would return, `None` at the start
    fn previous_index(&self) -> Option<usize>;

    fn remove(&mut self) -> Result<(), DigitListError> {
        Err(DigitListError::UnsupportedCursorMutation("remove"))
    }

    fn set(&mut self, _digit: Digit) -> Result<(), DigitListError> {
        Err(DigitListError::UnsupportedCursorMutation("set"))
    }

    fn add(&mut self, _digit: Digit) -> Result<(), DigitListError> {
        Err(DigitListError::UnsupportedCursorMutation("add"))
    }
}


/// Cursor returned by [`DigitList::cursor`]
#[derive(Clone, Debug)]
pub struct DigitCursor<'a> {
    list: &'a DigitList,
    /// slot of the digit at `index`, `None` past the tail
    current: Option<usize>,
    index: usize,
}

impl<'a> DigitCursor<'a> {
    pub(crate) fn new(list: &'a DigitList, index: usize) -> Self {
        let current = if index < list.len {
            Some(list.node_index_at(index))
        } else {
            None
        };
        Self { list, current, index }
    }
}

impl ListCursor for DigitCursor<'_> {
    fn has_next(&self) -> bool {
        self.index < self.list.len
    }

    fn next_digit(&mut self) -> Option<Digit> {
        let idx = self.current?;
        let node = self.list.node(idx);
        self.current = node.next;
        self.index += 1;
        Some(node.digit)
    }

    fn has_previous(&self) -> bool {
        self.index > 0
    }

    fn previous_digit(&mut self) -> Option<Digit> {
        if !self.has_previous() {
            return None;
        }
        let idx = match self.current {
            Some(idx) => self.list.node(idx).prev?,
            None => self.list.tail_index()?,
        };
        self.current = Some(idx);
        self.index -= 1;
        Some(self.list.node(idx).digit)
    }

    fn next_index(&self) -> usize {
        self.index
    }

    fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }
}

impl Iterator for DigitCursor<'_> {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        self.next_digit()
    }
}


#[cfg(test)]
mod test_cursor {
    use super::*;

    fn list() -> DigitList {
        DigitList::from_digits(3, vec![1, 0, 2, 2]).unwrap()
    }

    #[test]
    fn walks_forward() {
        let list = list();
        let mut cursor = list.cursor(0).unwrap();
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(cursor.next_digit(), Some(1));
        assert_eq!(cursor.next_digit(), Some(0));
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(cursor.next_digit(), Some(2));
        assert_eq!(cursor.next_digit(), Some(2));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_digit(), None);
    }

    #[test]
    fn walks_backward_from_end() {
        let list = list();
        let mut cursor = list.cursor(4).unwrap();
        assert!(!cursor.has_next());
        assert_eq!(cursor.previous_digit(), Some(2));
        assert_eq!(cursor.previous_digit(), Some(2));
        assert_eq!(cursor.previous_digit(), Some(0));
        assert_eq!(cursor.previous_digit(), Some(1));
        assert_eq!(cursor.previous_digit(), None);
        assert_eq!(cursor.next_index(), 0);
    }

    #[test]
    fn back_and_forth() {
        let list = list();
        let mut cursor = list.cursor(2).unwrap();
        assert_eq!(cursor.next_digit(), Some(2));
        assert_eq!(cursor.previous_digit(), Some(2));
        assert_eq!(cursor.previous_digit(), Some(0));
        assert_eq!(cursor.next_digit(), Some(0));
        assert_eq!(cursor.next_index(), 2);
    }

    #[test]
    fn iterates_rest() {
        let list = list();
        let rest: Vec<_> = list.cursor(1).unwrap().collect();
        assert_eq!(rest, vec![0, 2, 2]);
    }

    #[test]
    fn out_of_range() {
        let list = list();
        assert_eq!(
            list.cursor(5).unwrap_err(),
            DigitListError::OutOfRange { index: 5, len: 4 }
        );
        assert!(DigitList::new().cursor(0).is_ok());
    }

    #[test]
    fn refuses_mutation() {
        let list = list();
        let mut cursor = list.cursor(1).unwrap();
        assert_eq!(cursor.remove(), Err(DigitListError::UnsupportedCursorMutation("remove")));
        assert_eq!(cursor.set(1), Err(DigitListError::UnsupportedCursorMutation("set")));
        assert_eq!(cursor.add(1), Err(DigitListError::UnsupportedCursorMutation("add")));
        assert_eq!(list.len, 4);
    }
}
