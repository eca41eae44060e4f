//! Conditional appends for `String` buffers.

use std::fmt::{self, Write};

/// Appending helpers for text buffers.
pub trait BuilderExt {
    /// Appends `value` only when `condition` holds.
    ///
    /// An absent value appends nothing. Returns the buffer for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardtext::BuilderExt;
    ///
    /// let mut out = String::from("GET");
    /// out.append_if(true, Some(' '))
    ///     .append_if(false, Some("ignored"))
    ///     .append_if(true, None::<&str>)
    ///     .append_if(true, Some("/health"));
    /// assert_eq!(out, "GET /health");
    /// ```
    fn append_if<T: fmt::Display>(&mut self, condition: bool, value: Option<T>) -> &mut Self;
}

impl BuilderExt for String {
    fn append_if<T: fmt::Display>(&mut self, condition: bool, value: Option<T>) -> &mut Self {
        if let (true, Some(value)) = (condition, value) {
            // Writing into a String cannot fail.
            let _ = write!(self, "{value}");
        }
        self
    }
}
