//! Blank checks, guards, and joining for text.
//!
//! A string is *blank* when it is absent, empty, or made only of whitespace.
//! [`TextExt`] is implemented for `str`, `String`, and `Option` of either, so
//! the same calls work whether or not the caller already unwrapped the value.
//!
//! ## Examples
//!
//! ```rust
//! use guardtext::TextExt;
//!
//! assert!(" \t ".is_blank());
//! assert!(None::<&str>.is_blank());
//! assert!(Some("ciao").is_non_blank());
//!
//! let name = Some("Alice").ensure_non_blank("name").unwrap();
//! assert_eq!(name, "Alice");
//! ```

use crate::error::{reject, Error, Result};

/// Blank predicates and guards for text.
pub trait TextExt {
    /// The text type handed back by [`TextExt::ensure_non_blank`].
    type Target: ?Sized;

    /// Returns `true` if the value is absent, empty, or only whitespace.
    fn is_blank(&self) -> bool;

    /// Returns `true` if the value contains at least one non-whitespace character.
    #[inline]
    fn is_non_blank(&self) -> bool {
        !self.is_blank()
    }

    /// Returns the text if it is non-blank.
    ///
    /// # Errors
    ///
    /// [`Error::Null`] if the value is `None`, [`Error::Blank`] if it is empty or
    /// only whitespace.
    fn ensure_non_blank(&self, param: &str) -> Result<&Self::Target>;
}

impl TextExt for str {
    type Target = str;

    #[inline]
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn ensure_non_blank(&self, param: &str) -> Result<&str> {
        if self.is_blank() {
            return reject(Error::blank(param));
        }
        Ok(self)
    }
}

impl TextExt for String {
    type Target = str;

    #[inline]
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }

    fn ensure_non_blank(&self, param: &str) -> Result<&str> {
        self.as_str().ensure_non_blank(param)
    }
}

impl<S> TextExt for &S
where
    S: TextExt + ?Sized,
{
    type Target = S::Target;

    #[inline]
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }

    fn ensure_non_blank(&self, param: &str) -> Result<&S::Target> {
        (**self).ensure_non_blank(param)
    }
}

impl<S> TextExt for Option<S>
where
    S: TextExt,
{
    type Target = S::Target;

    #[inline]
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, TextExt::is_blank)
    }

    fn ensure_non_blank(&self, param: &str) -> Result<&S::Target> {
        match self {
            Some(text) => text.ensure_non_blank(param),
            None => reject(Error::null(param)),
        }
    }
}

/// Joins optional strings with an optional separator.
///
/// Returns an empty string when `values` is `None` or yields nothing. Blank
/// items (absent, empty, or whitespace) are dropped unless `include_empty` is
/// set, in which case absent items contribute empty text. A `None` separator
/// joins the items back to back.
///
/// # Examples
///
/// ```rust
/// use guardtext::join_strings;
///
/// let values = vec![Some("a"), None, Some("b")];
/// assert_eq!(join_strings(Some(values.clone()), Some("; "), false), "a; b");
/// assert_eq!(join_strings(Some(values), Some("; "), true), "a; ; b");
/// assert_eq!(join_strings(None::<Vec<Option<&str>>>, Some("; "), true), "");
/// ```
#[must_use]
pub fn join_strings<I, S>(values: Option<I>, separator: Option<&str>, include_empty: bool) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let Some(values) = values else {
        return String::new();
    };

    let separator = separator.unwrap_or_default();
    let mut joined = String::new();
    let mut first = true;

    for value in values {
        let text: &str = match &value {
            Some(text) => text.as_ref(),
            None => "",
        };
        if !include_empty && text.is_blank() {
            continue;
        }

        if !first {
            joined.push_str(separator);
        }
        first = false;
        joined.push_str(text);
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLANK: [&str; 4] = ["", " ", "\t", " \t "];
    const NON_BLANK: [&str; 3] = ["ciao", " ciao ", "\tciao\t"];

    #[test]
    fn test_blank_predicates() {
        for value in BLANK {
            assert!(value.is_blank(), "{value:?}");
            assert!(!Some(value).is_non_blank(), "{value:?}");
        }
        for value in NON_BLANK {
            assert!(value.is_non_blank(), "{value:?}");
            assert!(!Some(value.to_string()).is_blank(), "{value:?}");
        }
        assert!(None::<String>.is_blank());
    }

    #[test]
    fn test_ensure_non_blank_on_none() {
        let value: Option<&str> = None;
        assert_eq!(value.ensure_non_blank("value"), Err(Error::null("value")));
    }

    #[test]
    fn test_ensure_non_blank_on_whitespace() {
        assert_eq!(" ".ensure_non_blank("value"), Err(Error::blank("value")));
        assert_eq!(
            Some(String::new()).ensure_non_blank("value"),
            Err(Error::blank("value"))
        );
    }

    #[test]
    fn test_ensure_non_blank_keeps_text_untrimmed() {
        assert_eq!(" ciao ".ensure_non_blank("value"), Ok(" ciao "));
    }

    #[test]
    fn test_join_strings_without_empty_values() {
        let join = |v: Vec<Option<&str>>| join_strings(Some(v), Some("; "), false);
        assert_eq!(join(vec![]), "");
        assert_eq!(join(vec![None]), "");
        assert_eq!(join(vec![None, Some("ciao")]), "ciao");
        assert_eq!(join(vec![Some("ciao")]), "ciao");
        assert_eq!(join(vec![Some("a"), Some("b")]), "a; b");
        assert_eq!(join(vec![Some("a"), None, Some("b")]), "a; b");
    }

    #[test]
    fn test_join_strings_with_empty_values() {
        let join = |v: Vec<Option<&str>>| join_strings(Some(v), Some("; "), true);
        assert_eq!(join(vec![]), "");
        assert_eq!(join(vec![None]), "");
        assert_eq!(join(vec![None, Some("ciao")]), "; ciao");
        assert_eq!(join(vec![Some("ciao")]), "ciao");
        assert_eq!(join(vec![Some("a"), Some("b")]), "a; b");
        assert_eq!(join(vec![Some("a"), None, Some("b")]), "a; ; b");
    }

    #[test]
    fn test_join_strings_without_separator() {
        assert_eq!(
            join_strings(Some(vec![Some("a"), Some("b")]), None, false),
            "ab"
        );
    }
}
