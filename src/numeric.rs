//! Range guards for primitive numbers.
//!
//! Each guard returns the checked value on success so it can be used inline:
//!
//! ```rust
//! use guardtext::RangeExt;
//!
//! fn page_size(requested: u32) -> guardtext::Result<u32> {
//!     requested.ensure_positive("requested")?.ensure_at_most(500, "requested")
//! }
//!
//! assert_eq!(page_size(50), Ok(50));
//! assert!(page_size(0).is_err());
//! assert!(page_size(501).is_err());
//! ```

use crate::error::{reject, Error, Result};
use std::fmt;

/// Numbers with a well-defined zero.
pub trait Zero: Copy + PartialOrd + fmt::Display {
    const ZERO: Self;
}

macro_rules! impl_zero {
    ($zero:literal => $($ty:ty),*) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_zero!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_zero!(0.0 => f32, f64);

/// Range guards over any [`Zero`] number.
///
/// Comparisons follow `PartialOrd`, so a `NaN` never satisfies an ordering
/// requirement.
pub trait RangeExt: Zero {
    /// Fails if the value is zero.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming `param`.
    fn ensure_non_zero(self, param: &str) -> Result<Self> {
        check(self, self != Self::ZERO, param, || "be a non-zero value".into())
    }

    /// Fails if the value is below zero.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming `param`.
    fn ensure_non_negative(self, param: &str) -> Result<Self> {
        check(self, self >= Self::ZERO, param, || {
            "be a non-negative value".into()
        })
    }

    /// Fails if the value is zero or below.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming `param`.
    fn ensure_positive(self, param: &str) -> Result<Self> {
        check(self, self > Self::ZERO, param, || {
            "be a non-negative and non-zero value".into()
        })
    }

    /// Fails if the value equals `other`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming `param`.
    fn ensure_not_equal(self, other: Self, param: &str) -> Result<Self> {
        check(self, self != other, param, || {
            format!("not be equal to '{other}'")
        })
    }

    /// Fails unless the value equals `other`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming `param`.
    fn ensure_equal(self, other: Self, param: &str) -> Result<Self> {
        check(self, self == other, param, || format!("be equal to '{other}'"))
    }

    /// Fails if the value is greater than `other`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming `param`.
    fn ensure_at_most(self, other: Self, param: &str) -> Result<Self> {
        check(self, self <= other, param, || {
            format!("be less than or equal to '{other}'")
        })
    }

    /// Fails if the value is greater than or equal to `other`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming `param`.
    fn ensure_less_than(self, other: Self, param: &str) -> Result<Self> {
        check(self, self < other, param, || format!("be less than '{other}'"))
    }

    /// Fails if the value is less than `other`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming `param`.
    fn ensure_at_least(self, other: Self, param: &str) -> Result<Self> {
        check(self, self >= other, param, || {
            format!("be greater than or equal to '{other}'")
        })
    }

    /// Fails if the value is less than or equal to `other`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming `param`.
    fn ensure_greater_than(self, other: Self, param: &str) -> Result<Self> {
        check(self, self > other, param, || {
            format!("be greater than '{other}'")
        })
    }
}

impl<T: Zero> RangeExt for T {}

fn check<T, F>(value: T, holds: bool, param: &str, requirement: F) -> Result<T>
where
    T: fmt::Display,
    F: FnOnce() -> String,
{
    if holds {
        Ok(value)
    } else {
        reject(Error::out_of_range(param, &value, &requirement()))
    }
}
