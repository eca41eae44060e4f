//! Formatting policy for debug text.
//!
//! ## Examples
//!
//! ```rust
//! use guardtext::{format_debug_text_with, DebugTextOptions, DebugValue};
//!
//! let options = DebugTextOptions::new()
//!     .with_prefix("Request")
//!     .excluding_nulls();
//!
//! let text = format_debug_text_with(
//!     &[("path", DebugValue::from("/")), ("query", DebugValue::Null)],
//!     &options,
//! );
//! assert_eq!(text, "Request path: /");
//! ```

/// Controls how named values are rendered into debug text.
///
/// By default absent values are included as `(null)` and no prefix is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugTextOptions {
    /// Whether absent values, and absent items of sequences, are written.
    pub include_nulls: bool,
    /// Text written before the first entry.
    pub prefix: Option<String>,
}

impl Default for DebugTextOptions {
    fn default() -> Self {
        DebugTextOptions {
            include_nulls: true,
            prefix: None,
        }
    }
}

impl DebugTextOptions {
    /// Creates default options: nulls included, no prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardtext::DebugTextOptions;
    ///
    /// let options = DebugTextOptions::new();
    /// assert!(options.include_nulls);
    /// assert!(options.prefix.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix written before the first entry.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets whether absent values are written.
    #[must_use]
    pub fn with_include_nulls(mut self, include_nulls: bool) -> Self {
        self.include_nulls = include_nulls;
        self
    }

    /// Skips absent values and absent sequence items.
    #[must_use]
    pub fn excluding_nulls(self) -> Self {
        self.with_include_nulls(false)
    }

    pub(crate) fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = DebugTextOptions::new().with_prefix("P").excluding_nulls();
        assert_eq!(options.prefix(), Some("P"));
        assert!(!options.include_nulls);

        let options = options.with_include_nulls(true);
        assert!(options.include_nulls);
    }
}
