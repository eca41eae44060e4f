//! Dynamic value representation for debug text.
//!
//! [`DebugValue`] is the payload half of a named value handed to the
//! formatter: a scalar, a piece of text, a nested sequence or map, or the
//! absence marker [`DebugValue::Null`].
//!
//! ## Creating Values
//!
//! ```rust
//! use guardtext::{debug_value, DebugValue};
//!
//! let null = DebugValue::Null;
//! let flag = DebugValue::from(true);
//! let count = DebugValue::from(42);
//! let text = DebugValue::from("hello");
//! let maybe = DebugValue::from(None::<u32>);
//! assert!(maybe.is_null());
//!
//! let list = debug_value!([1, null, "three"]);
//! assert_eq!(list.to_string(), "[1,(null),three]");
//! ```
//!
//! ## Converting from Rust Types
//!
//! ```rust
//! use guardtext::{to_value, DebugValue};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 10, y: 20 }).unwrap();
//! assert_eq!(value.as_map().map(|m| m.len()), Some(2));
//! ```

use crate::DebugMap;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::fmt;

/// Text written for an absent value.
pub const NULL_TEXT: &str = "(null)";

/// A dynamically-typed value that can be rendered into debug text.
///
/// # Examples
///
/// ```rust
/// use guardtext::{DebugValue, Number};
///
/// let num = DebugValue::Number(Number::Integer(42));
/// let text = DebugValue::String("hello".to_string());
///
/// assert!(DebugValue::Null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DebugValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<DebugValue>),
    Map(DebugMap),
    Date(DateTime<Utc>),
    BigInt(BigInt),
}

/// A numeric value: an integer, a float, or a special float value.
///
/// # Examples
///
/// ```rust
/// use guardtext::Number;
///
/// assert!(Number::Integer(42).is_integer());
/// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
/// assert_eq!(Number::from(f64::NEG_INFINITY), Number::NegativeInfinity);
/// assert_eq!(Number::NaN.to_string(), "NaN");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` for Infinity, -Infinity, and NaN.
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if it is integral and in range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => f.write_str("Infinity"),
            Number::NegativeInfinity => f.write_str("-Infinity"),
            Number::NaN => f.write_str("NaN"),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(f64::from(value))
    }
}

macro_rules! impl_from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(i64::from(value))
                }
            }

            impl From<$ty> for DebugValue {
                fn from(value: $ty) -> Self {
                    DebugValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DebugValue {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(i) => DebugValue::Number(Number::Integer(i)),
                        Err(_) => DebugValue::BigInt(BigInt::from(value)),
                    }
                }
            }
        )*
    };
}

impl_from_wide_int!(isize, usize, u64, i128, u128);

impl DebugValue {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, DebugValue::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, DebugValue::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, DebugValue::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, DebugValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, DebugValue::Sequence(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, DebugValue::Map(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, DebugValue::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, DebugValue::BigInt(_))
    }

    /// Returns `true` for values the formatter writes without a key label:
    /// booleans, numbers, dates, and big integers.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            DebugValue::Bool(_) | DebugValue::Number(_) | DebugValue::Date(_) | DebugValue::BigInt(_)
        )
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DebugValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DebugValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DebugValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[DebugValue]> {
        match self {
            DebugValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&DebugMap> {
        match self {
            DebugValue::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            DebugValue::Date(dt) => Some(dt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            DebugValue::BigInt(bi) => Some(bi),
            _ => None,
        }
    }
}

/// Renders the value's text representation.
///
/// Text is written verbatim, absent values as `(null)`, sequences as
/// `[a,b]`, and maps as `{k: v, k2: v2}`.
impl fmt::Display for DebugValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugValue::Null => f.write_str(NULL_TEXT),
            DebugValue::Bool(b) => write!(f, "{}", b),
            DebugValue::Number(n) => write!(f, "{}", n),
            DebugValue::String(s) => f.write_str(s),
            DebugValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            DebugValue::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            DebugValue::Date(dt) => f.write_str(&dt.to_rfc3339()),
            DebugValue::BigInt(bi) => write!(f, "{}", bi),
        }
    }
}

impl From<bool> for DebugValue {
    fn from(value: bool) -> Self {
        DebugValue::Bool(value)
    }
}

impl From<f32> for DebugValue {
    fn from(value: f32) -> Self {
        DebugValue::Number(Number::from(value))
    }
}

impl From<f64> for DebugValue {
    fn from(value: f64) -> Self {
        DebugValue::Number(Number::from(value))
    }
}

impl From<Number> for DebugValue {
    fn from(value: Number) -> Self {
        DebugValue::Number(value)
    }
}

impl From<char> for DebugValue {
    fn from(value: char) -> Self {
        DebugValue::String(value.to_string())
    }
}

impl From<String> for DebugValue {
    fn from(value: String) -> Self {
        DebugValue::String(value)
    }
}

impl From<&String> for DebugValue {
    fn from(value: &String) -> Self {
        DebugValue::String(value.clone())
    }
}

impl From<&str> for DebugValue {
    fn from(value: &str) -> Self {
        DebugValue::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for DebugValue {
    fn from(value: DateTime<Utc>) -> Self {
        DebugValue::Date(value)
    }
}

impl From<BigInt> for DebugValue {
    fn from(value: BigInt) -> Self {
        DebugValue::BigInt(value)
    }
}

impl From<DebugMap> for DebugValue {
    fn from(value: DebugMap) -> Self {
        DebugValue::Map(value)
    }
}

/// `None` becomes [`DebugValue::Null`].
impl<T: Into<DebugValue>> From<Option<T>> for DebugValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DebugValue::Null, Into::into)
    }
}

impl<T: Into<DebugValue>> From<Vec<T>> for DebugValue {
    fn from(value: Vec<T>) -> Self {
        DebugValue::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<DebugValue>> From<&[T]> for DebugValue {
    fn from(value: &[T]) -> Self {
        DebugValue::Sequence(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<DebugValue>> FromIterator<T> for DebugValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DebugValue::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
