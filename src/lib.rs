// Copyright 2026 Rostyslav Diadiushka
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A Digit List
//!
//! `DigitList` stores a non-negative integer as a doubly linked chain of
//! digits in a small radix (ternary by default, octal after
//! [`change_scale`](DigitList::change_scale)). The most significant digit
//! sits at the head and the least significant digit at the tail, so the
//! chain reads the same way the number is written.
//!
//! Besides radix conversion and a bitwise-OR combination of two lists,
//! the list satisfies the ordered-sequence contract of [`DigitSequence`]
//! (indexed access, insertion, removal, search, bulk membership) and a
//! handful of in-place mutators: sorting, cyclic shifting and swapping.
//!
//! Nodes live in an index-addressed arena; the back-link of each node is a
//! plain slot index, not an owning pointer.
//!
//! # Example
//!
//! ```
//! use digitlist::{DigitList, DigitSequence};
//!
//! let n = DigitList::from_decimal_str("100");
//! assert_eq!(n.to_string(), "10201");
//! assert_eq!(n.to_decimal_string(), "100");
//!
//! let octal = n.change_scale();
//! assert_eq!(octal.base(), 8);
//! assert_eq!(octal.to_string(), "144");
//!
//! assert_eq!(n.get(0), Ok(1));
//! ```
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]

pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde as serde_crate;

#[macro_use]
extern crate tracing;

use std::fmt;

use num_bigint::BigUint;

// const RECORD_BOOK_NUMBER: u32 = ${RUST_DIGITLIST_RECORD_BOOK_NUMBER} or 6;
include!(concat!(env!("OUT_DIR"), "/record_book_number.rs"));

#[cfg(test)]
extern crate paste;

mod arena;
use arena::{Arena, Node};

mod error;
pub use error::{DigitListError, ParseDigitListError};

// Ordered-sequence contract
mod sequence;
pub use sequence::DigitSequence;

mod cursor;
pub use cursor::{DigitCursor, ListCursor};

// Sorting, shifting, swapping
mod rearrange;

// Radix conversion & OR combination
mod radix;

// From<T> impls
mod impl_convert;
// BitOr
mod impl_ops;
// PartialEq, Hash
mod impl_cmp;
// Display, Debug
mod impl_fmt;
mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;

mod parsing;
pub use parsing::parse_decimal;

// Reading and writing decimal files
mod persistence;

// Radix configuration
mod context;
pub use context::{Context, DEFAULT_BASE, DEFAULT_SCALE_BASE};

/// A single place-value symbol, `0 <= digit < base`
pub type Digit = u8;

/// Smallest radix a list may carry
pub const MIN_BASE: u8 = 2;
/// Largest radix a list may carry; every digit renders as one character
pub const MAX_BASE: u8 = 10;


/// Non-negative integer stored as a doubly linked list of digits
///
/// The empty list represents "no value"; constructors never produce
/// leading zeros, so a non-empty list built from a number always starts
/// with a non-zero digit.
///
#[derive(Clone)]
pub struct DigitList {
    arena: Arena,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    base: u8,
}

impl Default for DigitList {
    #[inline]
    fn default() -> DigitList {
        DigitList::new()
    }
}

impl DigitList {
    /// Create an empty ternary list
    pub fn new() -> DigitList {
        DigitList {
            arena: Arena::new(),
            head: None,
            tail: None,
            len: 0,
            base: DEFAULT_BASE,
        }
    }

    /// Create an empty list in the given base
    pub fn with_base(base: u8) -> Result<DigitList, DigitListError> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(DigitListError::InvalidBase(base));
        }
        let mut list = DigitList::new();
        list.base = base;
        Ok(list)
    }

    /// Build list from digits, most significant first
    ///
    /// Every digit is validated before the list is built.
    ///
    pub fn from_digits<I>(base: u8, digits: I) -> Result<DigitList, DigitListError>
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut list = DigitList::with_base(base)?;
        list.extend_digits(digits)?;
        Ok(list)
    }

    /// The radix currently represented
    #[inline]
    pub fn base(&self) -> u8 {
        self.base
    }

    /// Fixed numeric identity of this implementation
    ///
    /// Set at build time by `RUST_DIGITLIST_RECORD_BOOK_NUMBER`.
    ///
    pub fn record_book_number() -> u32 {
        RECORD_BOOK_NUMBER
    }

    /// Iterate over the digits, most significant first
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Bidirectional cursor positioned before the digit at `index`
    pub fn cursor(&self, index: usize) -> Result<DigitCursor<'_>, DigitListError> {
        if index > self.len {
            return Err(DigitListError::OutOfRange { index, len: self.len });
        }
        Ok(DigitCursor::new(self, index))
    }

    /// Integer value of the digits, or zero if the list is empty
    pub fn to_biguint(&self) -> BigUint {
        radix::fold_digits(self.iter_rev(), self.base)
    }

    /// True if the list has no digits or all digits are zero
    pub fn is_zero(&self) -> bool {
        self.iter().all(|d| d == 0)
    }

    /// Iterate from tail to head (least significant first)
    pub(crate) fn iter_rev(&self) -> IterRev<'_> {
        IterRev {
            list: self,
            next: self.tail,
        }
    }

    pub(crate) fn head_index(&self) -> Option<usize> {
        self.head
    }

    pub(crate) fn tail_index(&self) -> Option<usize> {
        self.tail
    }

    pub(crate) fn node(&self, idx: usize) -> &Node {
        self.arena.node(idx)
    }

    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        self.arena.node_mut(idx)
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), DigitListError> {
        if index < self.len {
            Ok(())
        } else {
            Err(DigitListError::OutOfRange { index, len: self.len })
        }
    }

    pub(crate) fn check_digit(&self, digit: Digit) -> Result<(), DigitListError> {
        if digit < self.base {
            Ok(())
        } else {
            Err(DigitListError::InvalidDigit { digit, base: self.base })
        }
    }

    /// Slot index of the node at position `index`, walking from the
    /// closer end of the chain
    ///
    /// Caller guarantees `index < len`.
    ///
    pub(crate) fn node_index_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len);

        if index < self.len / 2 {
            let mut idx = self.head.expect("non-empty list has head");
            for _ in 0..index {
                idx = self.arena.node(idx).next.expect("chain shorter than len");
            }
            idx
        } else {
            let mut idx = self.tail.expect("non-empty list has tail");
            for _ in index..self.len - 1 {
                idx = self.arena.node(idx).prev.expect("chain shorter than len");
            }
            idx
        }
    }

    /// Link new node in front of the head
    pub(crate) fn push_front_unchecked(&mut self, digit: Digit) {
        let mut node = Node::new(digit);
        node.next = self.head;
        let idx = self.arena.alloc(node);
        match self.head {
            Some(old_head) => self.arena.node_mut(old_head).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Link new node after the tail
    pub(crate) fn push_back_unchecked(&mut self, digit: Digit) {
        let mut node = Node::new(digit);
        node.prev = self.tail;
        let idx = self.arena.alloc(node);
        match self.tail {
            Some(old_tail) => self.arena.node_mut(old_tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Insert digit so it ends up at position `index` (`0 <= index <= len`)
    pub(crate) fn insert_unchecked(&mut self, index: usize, digit: Digit) {
        debug_assert!(index <= self.len);

        if index == 0 {
            self.push_front_unchecked(digit);
        } else if index == self.len {
            self.push_back_unchecked(digit);
        } else {
            let at = self.node_index_at(index);
            let before = self.arena.node(at).prev;

            let mut node = Node::new(digit);
            node.prev = before;
            node.next = Some(at);
            let idx = self.arena.alloc(node);

            if let Some(before) = before {
                self.arena.node_mut(before).next = Some(idx);
            }
            self.arena.node_mut(at).prev = Some(idx);
            self.len += 1;
        }
    }

    /// Detach node from the chain, relinking its neighbours
    pub(crate) fn unlink(&mut self, idx: usize) -> Digit {
        let node = self.arena.release(idx);

        match node.prev {
            Some(prev) => self.arena.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.arena.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.digit
    }

    /// Drop all nodes and return to the ternary default
    pub(crate) fn reset(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.base = DEFAULT_BASE;
    }

    pub(crate) fn set_base(&mut self, base: u8) {
        debug_assert!((MIN_BASE..=MAX_BASE).contains(&base));
        self.base = base;
    }

    #[cfg(test)]
    pub(crate) fn arena_len(&self) -> usize {
        self.arena.len()
    }
}


/// Forward iterator over the digits of a list
#[derive(Clone)]
pub struct Iter<'a> {
    list: &'a DigitList,
    next: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        let idx = self.next?;
        let node = self.list.node(idx);
        self.next = node.next;
        self.remaining -= 1;
        Some(node.digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

/// Backward iterator, least significant digit first
pub(crate) struct IterRev<'a> {
    list: &'a DigitList,
    next: Option<usize>,
}

impl Iterator for IterRev<'_> {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        let idx = self.next?;
        let node = self.list.node(idx);
        self.next = node.prev;
        Some(node.digit)
    }
}

impl<'a> IntoIterator for &'a DigitList {
    type Item = Digit;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}



#[cfg(all(test, property_tests))]
extern crate proptest;

#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use paste::paste;

    include!("lib.tests.property-tests.rs");
}
