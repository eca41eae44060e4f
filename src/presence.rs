//! Presence guard for optional values.

use crate::error::{reject, Error, Result};

/// Turns a required-but-optional value into a `Result`.
///
/// # Examples
///
/// ```rust
/// use guardtext::{Error, OptionExt};
///
/// assert_eq!(Some(3).ensure_some("retries"), Ok(3));
/// assert_eq!(None::<u8>.ensure_some("retries"), Err(Error::null("retries")));
/// ```
pub trait OptionExt<T> {
    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// [`Error::Null`] naming `param` if the value is `None`.
    fn ensure_some(self, param: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ensure_some(self, param: &str) -> Result<T> {
        match self {
            Some(value) => Ok(value),
            None => reject(Error::null(param)),
        }
    }
}
