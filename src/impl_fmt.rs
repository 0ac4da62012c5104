//! Implementation of std::fmt traits
//!
//! `Display` writes the digits head to tail with no separator. Bases are
//! capped at 10, so every digit is a single character and the output is
//! unambiguous.
//!

use std::fmt::{self, Write};

use crate::DigitList;


impl fmt::Display for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::with_capacity(self.len);
        for d in self.iter() {
            buf.push(char::from(b'0' + d));
        }
        f.pad(&buf)
    }
}

impl fmt::Debug for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DigitList(base={}, \"", self.base)?;
        for d in self.iter() {
            f.write_char(char::from(b'0' + d))?;
        }
        f.write_char('"')?;
        f.write_char(')')
    }
}
