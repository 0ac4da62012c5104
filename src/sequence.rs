//! Ordered-sequence contract
//!
//! [`DigitSequence`] is the general mutable-sequence interface of a digit
//! list: indexed access, insertion and removal, search, bulk membership and
//! forward or bidirectional traversal.
//! All bounds and digit checks run before the list is touched, so a failed
//! call leaves the sequence unchanged.

use crate::{Digit, DigitCursor, DigitList, DigitListError, Iter, ListCursor};


/// Mutable ordered sequence of digits
pub trait DigitSequence {
    /// Head-to-tail iterator over the digits
    type Iter<'a>: Iterator<Item = Digit>
    where
        Self: 'a;

    /// Read-only bidirectional cursor
    type Cursor<'a>: ListCursor
    where
        Self: 'a;

    /// Number of digits
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Digit at `index` (`0 <= index < len`)
    fn get(&self, index: usize) -> Result<Digit, DigitListError>;

    /// Replace digit at `index`, returning the previous digit
    fn set(&mut self, index: usize, digit: Digit) -> Result<Digit, DigitListError>;

    /// Append digit after the tail
    fn push(&mut self, digit: Digit) -> Result<(), DigitListError>;

    /// Insert digit at `index` (`0 <= index <= len`), shifting later digits
    fn insert(&mut self, index: usize, digit: Digit) -> Result<(), DigitListError>;

    /// Remove and return digit at `index`
    fn remove(&mut self, index: usize) -> Result<Digit, DigitListError>;

    /// Remove first occurrence of `digit`; true if one was found
    fn remove_digit(&mut self, digit: Digit) -> bool;

    /// Position of first occurrence of `digit`
    fn index_of(&self, digit: Digit) -> Option<usize>;

    /// Position of last occurrence of `digit`
    fn last_index_of(&self, digit: Digit) -> Option<usize>;

    fn contains(&self, digit: Digit) -> bool {
        self.index_of(digit).is_some()
    }

    fn contains_all(&self, digits: &[Digit]) -> bool {
        digits.iter().all(|&d| self.contains(d))
    }

    /// Append every digit in iteration order
    fn extend_digits<I>(&mut self, digits: I) -> Result<(), DigitListError>
    where
        I: IntoIterator<Item = Digit>;

    /// Insert every digit starting at `index`, preserving their order
    fn insert_all<I>(&mut self, index: usize, digits: I) -> Result<(), DigitListError>
    where
        I: IntoIterator<Item = Digit>;

    /// Remove every digit that appears in `digits`; true if any was removed
    fn remove_all(&mut self, digits: &[Digit]) -> bool;

    /// Remove every digit that does not appear in `digits`; true if any was removed
    fn retain_all(&mut self, digits: &[Digit]) -> bool;

    /// Remove all digits
    fn clear(&mut self);

    fn iter(&self) -> Self::Iter<'_>;

    /// Cursor positioned before the digit at `index` (`0 <= index <= len`)
    fn cursor(&self, index: usize) -> Result<Self::Cursor<'_>, DigitListError>;

    /// Independent copy of digits in `from..to`
    fn sub_list(&self, from: usize, to: usize) -> Result<Self, DigitListError>
    where
        Self: Sized;

    /// Snapshot of all digits in order
    fn to_vec(&self) -> Vec<Digit> {
        self.iter().collect()
    }
}


impl DigitSequence for DigitList {
    type Iter<'a> = Iter<'a>;
    type Cursor<'a> = DigitCursor<'a>;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<Digit, DigitListError> {
        self.check_index(index)?;
        Ok(self.node(self.node_index_at(index)).digit)
    }

    fn set(&mut self, index: usize, digit: Digit) -> Result<Digit, DigitListError> {
        self.check_digit(digit)?;
        self.check_index(index)?;
        let idx = self.node_index_at(index);
        Ok(std::mem::replace(&mut self.node_mut(idx).digit, digit))
    }

    fn push(&mut self, digit: Digit) -> Result<(), DigitListError> {
        self.check_digit(digit)?;
        self.push_back_unchecked(digit);
        Ok(())
    }

    fn insert(&mut self, index: usize, digit: Digit) -> Result<(), DigitListError> {
        self.check_digit(digit)?;
        if index > self.len {
            return Err(DigitListError::OutOfRange { index, len: self.len });
        }
        self.insert_unchecked(index, digit);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Digit, DigitListError> {
        self.check_index(index)?;
        let idx = self.node_index_at(index);
        Ok(self.unlink(idx))
    }

    fn remove_digit(&mut self, digit: Digit) -> bool {
        let mut cursor = self.head_index();
        while let Some(idx) = cursor {
            let node = *self.node(idx);
            if node.digit == digit {
                self.unlink(idx);
                return true;
            }
            cursor = node.next;
        }
        false
    }

    fn index_of(&self, digit: Digit) -> Option<usize> {
        self.iter().position(|d| d == digit)
    }

    fn last_index_of(&self, digit: Digit) -> Option<usize> {
        self.iter_rev()
            .position(|d| d == digit)
            .map(|from_tail| self.len - 1 - from_tail)
    }

    fn extend_digits<I>(&mut self, digits: I) -> Result<(), DigitListError>
    where
        I: IntoIterator<Item = Digit>,
    {
        let digits: Vec<Digit> = digits.into_iter().collect();
        for &d in digits.iter() {
            self.check_digit(d)?;
        }
        for d in digits {
            self.push_back_unchecked(d);
        }
        Ok(())
    }

    fn insert_all<I>(&mut self, index: usize, digits: I) -> Result<(), DigitListError>
    where
        I: IntoIterator<Item = Digit>,
    {
        if index > self.len {
            return Err(DigitListError::OutOfRange { index, len: self.len });
        }
        let digits: Vec<Digit> = digits.into_iter().collect();
        for &d in digits.iter() {
            self.check_digit(d)?;
        }
        for (offset, d) in digits.into_iter().enumerate() {
            self.insert_unchecked(index + offset, d);
        }
        Ok(())
    }

    fn remove_all(&mut self, digits: &[Digit]) -> bool {
        self.remove_where(|d| digits.contains(&d))
    }

    fn retain_all(&mut self, digits: &[Digit]) -> bool {
        self.remove_where(|d| !digits.contains(&d))
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn sub_list(&self, from: usize, to: usize) -> Result<DigitList, DigitListError> {
        if to > self.len {
            return Err(DigitListError::OutOfRange { index: to, len: self.len });
        }
        if from > to {
            return Err(DigitListError::OutOfRange { index: from, len: self.len });
        }

        let mut result = DigitList::new();
        result.set_base(self.base);
        for d in self.iter().skip(from).take(to - from) {
            result.push_back_unchecked(d);
        }
        Ok(result)
    }

    fn iter(&self) -> Iter<'_> {
        DigitList::iter(self)
    }

    fn cursor(&self, index: usize) -> Result<DigitCursor<'_>, DigitListError> {
        DigitList::cursor(self, index)
    }
}

impl DigitList {
    /// Single head-to-tail pass unlinking every node matching `pred`
    fn remove_where<F>(&mut self, pred: F) -> bool
    where
        F: Fn(Digit) -> bool,
    {
        let mut modified = false;
        let mut cursor = self.head_index();
        while let Some(idx) = cursor {
            let node = *self.node(idx);
            if pred(node.digit) {
                self.unlink(idx);
                modified = true;
            }
            cursor = node.next;
        }
        modified
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test_sequence {
    use super::*;
    use paste::paste;

    include!("sequence.tests.rs");
}
