// \file src/context.rs

//! A `Context` names the radixes used by operations that build new
//! lists: the base decimal input and OR results are written in, and the
//! base [`change_scale`](crate::DigitList::change_scale) converts to.

use crate::{DigitListError, MAX_BASE, MIN_BASE};

/// Ternary: radix of freshly parsed lists and OR results
pub const DEFAULT_BASE: u8 = 3;
/// Octal: radix produced by `change_scale`
pub const DEFAULT_SCALE_BASE: u8 = 8;

/// Radix settings for list-producing operations
///
/// Both radixes are always within `2..=10`; the only ways to build a
/// context are [`Default`] and the validating constructors.
///
/// ```compile_fail
/// use digitlist::Context;
/// let ctx = Context { base: 16, scale_base: 11 };
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    /// Radix of lists built from decimal input or by combination
    base: u8,

    /// Radix targeted by scale changes
    scale_base: u8,
}

impl Default for Context {
    fn default() -> Context {
        Context {
            base: DEFAULT_BASE,
            scale_base: DEFAULT_SCALE_BASE,
        }
    }
}

impl Context {
    /// Build context, rejecting radixes outside `2..=10`
    pub fn new(base: u8, scale_base: u8) -> Result<Context, DigitListError> {
        for &b in [base, scale_base].iter() {
            if !(MIN_BASE..=MAX_BASE).contains(&b) {
                return Err(DigitListError::InvalidBase(b));
            }
        }
        Ok(Context { base, scale_base })
    }

    /// Radix of lists built from decimal input or by combination
    #[inline]
    pub fn base(&self) -> u8 {
        self.base
    }

    /// Radix targeted by scale changes
    #[inline]
    pub fn scale_base(&self) -> u8 {
        self.scale_base
    }

    /// Copy of this context with a different input base
    pub fn with_base(self, base: u8) -> Result<Context, DigitListError> {
        Context::new(base, self.scale_base)
    }

    /// Copy of this context with a different scale base
    pub fn with_scale_base(self, scale_base: u8) -> Result<Context, DigitListError> {
        Context::new(self.base, scale_base)
    }
}
