//! Error types for guard failures and value conversion.
//!
//! Every guard in this crate reports a violated precondition through [`Error`],
//! naming the offending parameter so the failure can be traced back to the
//! call site.
//!
//! ## Error Categories
//!
//! - **Presence**: a required value was `None` ([`Error::Null`])
//! - **Emptiness**: a string, collection, or [`StringValues`](crate::StringValues)
//!   carried no usable content
//! - **Range**: a number failed a zero, sign, equality, or ordering check
//! - **Conversion**: a `T: Serialize` could not be turned into a
//!   [`DebugValue`](crate::DebugValue)
//!
//! ## Examples
//!
//! ```rust
//! use guardtext::{Error, TextExt};
//!
//! let result = "   ".ensure_non_blank("name");
//! assert!(matches!(result, Err(Error::Blank { .. })));
//!
//! if let Err(err) = result {
//!     assert_eq!(err.param(), Some("name"));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every precondition failure reported by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A required value was absent.
    #[error("Value cannot be null. (Parameter '{param}')")]
    Null { param: String },

    /// A string was empty or only whitespace.
    #[error(
        "The value cannot be an empty string or composed entirely of whitespace. (Parameter '{param}')"
    )]
    Blank { param: String },

    /// A collection had no elements.
    #[error("The {type_name} cannot be empty. (Parameter '{param}')")]
    Empty { param: String, type_name: String },

    /// A multi-value string had no items, or only blank ones.
    #[error(
        "The argument '{param}' cannot be empty or composed by only empty values (Parameter '{param}')"
    )]
    BlankValues { param: String },

    /// A number failed a range check.
    #[error("{param} ('{actual}') must {requirement}. (Parameter '{param}')")]
    OutOfRange {
        param: String,
        actual: String,
        requirement: String,
    },

    /// Unsupported type for value conversion
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an error for a required value that was `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardtext::Error;
    ///
    /// let err = Error::null("config");
    /// assert!(err.to_string().contains("'config'"));
    /// ```
    pub fn null(param: &str) -> Self {
        Error::Null {
            param: param.to_string(),
        }
    }

    /// Creates an error for an empty or whitespace-only string.
    pub fn blank(param: &str) -> Self {
        Error::Blank {
            param: param.to_string(),
        }
    }

    /// Creates an error for an empty collection.
    ///
    /// `type_name` is the human readable collection type shown in the message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardtext::Error;
    ///
    /// let err = Error::empty("ids", "[u32]");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "The [u32] cannot be empty. (Parameter 'ids')"
    /// );
    /// ```
    pub fn empty(param: &str, type_name: &str) -> Self {
        Error::Empty {
            param: param.to_string(),
            type_name: type_name.to_string(),
        }
    }

    /// Creates an error for a multi-value string without any non-blank item.
    pub fn blank_values(param: &str) -> Self {
        Error::BlankValues {
            param: param.to_string(),
        }
    }

    /// Creates a range error.
    ///
    /// `requirement` completes the sentence "`param` must ...".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardtext::Error;
    ///
    /// let err = Error::out_of_range("retries", &-1, "be a non-negative value");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "retries ('-1') must be a non-negative value. (Parameter 'retries')"
    /// );
    /// ```
    pub fn out_of_range<T: fmt::Display + ?Sized>(
        param: &str,
        actual: &T,
        requirement: &str,
    ) -> Self {
        Error::OutOfRange {
            param: param.to_string(),
            actual: actual.to_string(),
            requirement: requirement.to_string(),
        }
    }

    /// Creates an unsupported type error for values that cannot be converted.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the name of the parameter that violated its precondition.
    ///
    /// Conversion errors carry no parameter and return `None`.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        match self {
            Error::Null { param }
            | Error::Blank { param }
            | Error::Empty { param, .. }
            | Error::BlankValues { param }
            | Error::OutOfRange { param, .. } => Some(param),
            Error::UnsupportedType(_) | Error::Custom(_) => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

/// Reports a guard failure and returns it as an `Err`.
pub(crate) fn reject<T>(error: Error) -> Result<T> {
    tracing::debug!(
        target: "guardtext::guard",
        param = error.param().unwrap_or_default(),
        "{}",
        error
    );
    Err(error)
}

pub type Result<T> = std::result::Result<T, Error>;
