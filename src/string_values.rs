//! An ordered container of zero or more optional strings.
//!
//! [`StringValues`] models a header or query parameter that can appear any
//! number of times, where individual occurrences may be missing.
//!
//! ## Examples
//!
//! ```rust
//! use guardtext::StringValues;
//!
//! let accept = StringValues::from(vec!["text/html", "application/json"]);
//! assert_eq!(accept.len(), 2);
//! assert_eq!(accept.to_string(), "text/html,application/json");
//!
//! let blank = StringValues::from(vec![Some(""), None]);
//! assert!(blank.is_blank());
//! assert!(blank.ensure_non_blank("accept").is_err());
//! ```

use crate::error::{reject, Error, Result};
use crate::{DebugValue, TextExt};
use std::fmt;

/// Zero or more optional strings, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringValues(Vec<Option<String>>);

impl StringValues {
    /// Creates an empty container.
    #[must_use]
    pub const fn new() -> Self {
        StringValues(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no items at all. Blank items still count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the item at `index`; `Some(None)` is a present-but-absent item.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Option<&str>> {
        self.0.get(index).map(Option::as_deref)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.0.iter().map(Option::as_deref)
    }

    pub fn push(&mut self, value: Option<String>) {
        self.0.push(value);
    }

    /// Returns `true` if there are no items, or every item is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.iter().all(|value| value.is_blank())
    }

    /// Returns `true` if at least one item is non-blank.
    #[must_use]
    pub fn is_non_blank(&self) -> bool {
        !self.is_blank()
    }

    /// Returns the container if at least one item is non-blank.
    ///
    /// # Errors
    ///
    /// [`Error::BlankValues`] naming `param`.
    pub fn ensure_non_blank(&self, param: &str) -> Result<&Self> {
        if self.is_blank() {
            return reject(Error::blank_values(param));
        }
        Ok(self)
    }
}

/// Items joined with `,`; absent items are written as empty text.
impl fmt::Display for StringValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(value.unwrap_or_default())?;
        }
        Ok(())
    }
}

impl From<&str> for StringValues {
    fn from(value: &str) -> Self {
        StringValues(vec![Some(value.to_string())])
    }
}

impl From<String> for StringValues {
    fn from(value: String) -> Self {
        StringValues(vec![Some(value)])
    }
}

/// `None` becomes an empty container.
impl From<Option<String>> for StringValues {
    fn from(value: Option<String>) -> Self {
        StringValues(value.into_iter().map(Some).collect())
    }
}

impl From<Vec<&str>> for StringValues {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().map(Some).collect()
    }
}

impl From<Vec<String>> for StringValues {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().map(Some).collect()
    }
}

impl From<Vec<Option<&str>>> for StringValues {
    fn from(values: Vec<Option<&str>>) -> Self {
        values.into_iter().collect()
    }
}

impl From<Vec<Option<String>>> for StringValues {
    fn from(values: Vec<Option<String>>) -> Self {
        StringValues(values)
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for StringValues {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        StringValues(iter.into_iter().map(|value| value.map(Into::into)).collect())
    }
}

impl IntoIterator for StringValues {
    type Item = Option<String>;
    type IntoIter = std::vec::IntoIter<Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Each item becomes a text value, absent items become [`DebugValue::Null`].
impl From<StringValues> for DebugValue {
    fn from(values: StringValues) -> Self {
        DebugValue::from(values.0)
    }
}

impl From<&StringValues> for DebugValue {
    fn from(values: &StringValues) -> Self {
        values.iter().collect()
    }
}
