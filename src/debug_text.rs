//! Key/value debug-text formatter.
//!
//! Renders an ordered list of named values into one line of diagnostic text:
//!
//! ```rust
//! use guardtext::{format_debug_text, DebugValue};
//!
//! let text = format_debug_text(
//!     &[
//!         ("host", DebugValue::from("localhost")),
//!         ("ports", DebugValue::from(vec![80, 443])),
//!         ("proxy", DebugValue::Null),
//!     ],
//!     true,
//!     Some("Endpoint"),
//! );
//! assert_eq!(text, "Endpoint host: localhost, ports: 80,443, proxy: (null)");
//! ```
//!
//! Each value is classified as follows:
//!
//! - **absent**: `key: (null)`, or nothing at all when nulls are excluded
//! - **text**: `key: text`, written verbatim
//! - **sequence**: `key: a,b,c`; absent items are skipped when nulls are
//!   excluded, and a sequence left with no items writes nothing. Map entries
//!   are items written as `[key, value]`.
//! - **other scalars** (booleans, numbers, dates, big integers): the value
//!   alone, without a key label or separator
//!
//! The first labelled entry is preceded by a space when a prefix is set;
//! every later one by `", "`. Scalars are appended as-is and do not count
//! as that first entry.

use crate::builder::BuilderExt;
use crate::error::{Error, Result};
use crate::value::NULL_TEXT;
use crate::{to_value, DebugTextOptions, DebugValue};
use serde::Serialize;
use std::fmt::{self, Write};

/// Formats named values into a single line of debug text.
///
/// Entries are written in input order. An empty `pairs` returns the prefix,
/// or an empty string when there is none.
#[must_use]
pub fn format_debug_text(
    pairs: &[(&str, DebugValue)],
    include_nulls: bool,
    prefix: Option<&str>,
) -> String {
    render(
        pairs.iter().map(|(key, value)| (*key, value)),
        include_nulls,
        prefix,
    )
}

/// Formats named values using a [`DebugTextOptions`] policy.
#[must_use]
pub fn format_debug_text_with(pairs: &[(&str, DebugValue)], options: &DebugTextOptions) -> String {
    format_debug_text(pairs, options.include_nulls, options.prefix())
}

/// Formats a single named value.
///
/// # Examples
///
/// ```rust
/// use guardtext::format_debug_text1;
///
/// assert_eq!(format_debug_text1("id", "abc", true, None), "id: abc");
/// assert_eq!(format_debug_text1("id", None::<&str>, false, Some("Row")), "Row");
/// ```
#[must_use]
pub fn format_debug_text1(
    key1: &str,
    value1: impl Into<DebugValue>,
    include_nulls: bool,
    prefix: Option<&str>,
) -> String {
    format_debug_text(&[(key1, value1.into())], include_nulls, prefix)
}

/// Formats two named values.
#[must_use]
pub fn format_debug_text2(
    key1: &str,
    value1: impl Into<DebugValue>,
    key2: &str,
    value2: impl Into<DebugValue>,
    include_nulls: bool,
    prefix: Option<&str>,
) -> String {
    format_debug_text(
        &[(key1, value1.into()), (key2, value2.into())],
        include_nulls,
        prefix,
    )
}

/// Formats three named values.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn format_debug_text3(
    key1: &str,
    value1: impl Into<DebugValue>,
    key2: &str,
    value2: impl Into<DebugValue>,
    key3: &str,
    value3: impl Into<DebugValue>,
    include_nulls: bool,
    prefix: Option<&str>,
) -> String {
    format_debug_text(
        &[
            (key1, value1.into()),
            (key2, value2.into()),
            (key3, value3.into()),
        ],
        include_nulls,
        prefix,
    )
}

/// Formats the fields of a struct or map as named values.
///
/// Fields are written in declaration order.
///
/// # Examples
///
/// ```rust
/// use guardtext::{to_debug_text, DebugTextOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Connection { host: String, port: u16, user: Option<String> }
///
/// let conn = Connection { host: "db".into(), port: 5432, user: None };
/// let text = to_debug_text(&conn, &DebugTextOptions::new().excluding_nulls()).unwrap();
/// assert_eq!(text, "host: db5432");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `value` does not serialize to a map,
/// or any error raised while converting it.
pub fn to_debug_text<T>(value: &T, options: &DebugTextOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_value(value)? {
        DebugValue::Map(map) => Ok(render(
            map.iter().map(|(key, value)| (key.as_str(), value)),
            options.include_nulls,
            options.prefix(),
        )),
        _ => Err(Error::unsupported_type(
            "debug text requires a struct or map",
        )),
    }
}

fn render<'a, I>(entries: I, include_nulls: bool, prefix: Option<&str>) -> String
where
    I: IntoIterator<Item = (&'a str, &'a DebugValue)>,
{
    let mut writer = DebugTextWriter::new(include_nulls, prefix);
    for (key, value) in entries {
        writer.entry(key, value);
    }
    writer.out
}

/// Single formatting pass; `first` is shared by every entry.
struct DebugTextWriter {
    out: String,
    include_nulls: bool,
    prefixed: bool,
    first: bool,
}

impl DebugTextWriter {
    fn new(include_nulls: bool, prefix: Option<&str>) -> Self {
        let mut out = String::new();
        out.append_if(true, prefix);
        DebugTextWriter {
            out,
            include_nulls,
            prefixed: prefix.is_some(),
            first: true,
        }
    }

    fn entry(&mut self, key: &str, value: &DebugValue) {
        match value {
            DebugValue::Null if !self.include_nulls => {}
            DebugValue::Null => {
                self.label(key);
                self.out.push_str(NULL_TEXT);
            }
            DebugValue::String(text) => {
                self.label(key);
                self.out.push_str(text);
            }
            DebugValue::Sequence(items) => {
                self.items(key, items.iter().map(|item| (!item.is_null()).then_some(item)));
            }
            DebugValue::Map(map) => {
                self.items(key, map.iter().map(|(k, v)| Some(MapEntry(k, v))));
            }
            DebugValue::Bool(_)
            | DebugValue::Number(_)
            | DebugValue::Date(_)
            | DebugValue::BigInt(_) => self.push_display(value),
        }
    }

    /// Writes the items of a sequence; `None` marks an absent item.
    fn items<I, D>(&mut self, key: &str, items: I)
    where
        I: IntoIterator<Item = Option<D>>,
        D: fmt::Display,
    {
        let mut first_item = true;
        for item in items {
            if item.is_none() && !self.include_nulls {
                continue;
            }

            if first_item {
                self.label(key);
                first_item = false;
            } else {
                self.out.push(',');
            }

            match item {
                Some(item) => self.push_display(item),
                None => self.out.push_str(NULL_TEXT),
            }
        }
    }

    fn label(&mut self, key: &str) {
        self.separator();
        self.out.push_str(key);
        self.out.push_str(": ");
    }

    fn separator(&mut self) {
        if self.first {
            self.out.append_if(self.prefixed, Some(' '));
            self.first = false;
        } else {
            self.out.push_str(", ");
        }
    }

    fn push_display(&mut self, value: impl fmt::Display) {
        // Writing into a String cannot fail.
        let _ = write!(self.out, "{}", value);
    }
}

/// A map entry written as a sequence item.
struct MapEntry<'a>(&'a str, &'a DebugValue);

impl fmt::Display for MapEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DebugMap;

    fn text(pairs: &[(&str, DebugValue)], include_nulls: bool, prefix: Option<&str>) -> String {
        format_debug_text(pairs, include_nulls, prefix)
    }

    #[test]
    fn test_empty_input_returns_prefix() {
        assert_eq!(text(&[], true, None), "");
        assert_eq!(text(&[], true, Some("P")), "P");
        assert_eq!(text(&[], false, Some("")), "");
    }

    #[test]
    fn test_text_values() {
        assert_eq!(text(&[("a", "x".into())], true, None), "a: x");
        assert_eq!(
            text(&[("a", "x".into()), ("b", "y".into())], true, Some("Pre")),
            "Pre a: x, b: y"
        );
    }

    #[test]
    fn test_null_values() {
        assert_eq!(text(&[("a", DebugValue::Null)], false, None), "");
        assert_eq!(text(&[("a", DebugValue::Null)], true, None), "a: (null)");
        assert_eq!(text(&[("a", DebugValue::Null)], false, Some("P")), "P");
    }

    #[test]
    fn test_sequences() {
        assert_eq!(text(&[("a", vec![1, 2].into())], true, None), "a: 1,2");
        assert_eq!(
            text(&[("a", vec![None, Some(1)].into())], false, None),
            "a: 1"
        );
        assert_eq!(
            text(&[("a", vec![None, Some(1)].into())], true, None),
            "a: (null),1"
        );
    }

    #[test]
    fn test_fully_skipped_sequence_writes_nothing() {
        let nulls = DebugValue::from(vec![None::<i32>, None]);
        assert_eq!(
            text(&[("a", nulls.clone()), ("b", "y".into())], false, Some("P")),
            "P b: y"
        );
        assert_eq!(text(&[("a", DebugValue::Sequence(vec![]))], true, None), "");
        assert_eq!(text(&[("a", nulls)], true, None), "a: (null),(null)");
    }

    #[test]
    fn test_scalars_have_no_label() {
        assert_eq!(text(&[("n", 5.into())], true, None), "5");
        assert_eq!(
            text(&[("a", "x".into()), ("n", 5.into()), ("ok", true.into())], true, Some("P")),
            "P a: x5true"
        );
    }

    #[test]
    fn test_scalars_do_not_consume_first_separator() {
        assert_eq!(
            text(&[("n", 5.into()), ("a", "x".into())], true, Some("P")),
            "P5 a: x"
        );
        assert_eq!(text(&[("a", "x".into()), ("n", 5.into())], true, None), "a: x5");
        assert_eq!(
            text(&[("n", 5.into()), ("a", "x".into()), ("b", "y".into())], true, None),
            "5a: x, b: y"
        );
    }

    #[test]
    fn test_skipped_entries_do_not_consume_first_separator() {
        assert_eq!(
            text(&[("a", DebugValue::Null), ("b", "y".into())], false, None),
            "b: y"
        );
        assert_eq!(
            text(&[("a", DebugValue::Null), ("b", "y".into())], false, Some("P")),
            "P b: y"
        );
    }

    #[test]
    fn test_map_entries_are_items() {
        let mut map = DebugMap::new();
        map.insert("x".to_string(), 1.into());
        map.insert("y".to_string(), DebugValue::Null);
        assert_eq!(
            text(&[("m", map.into())], false, None),
            "m: [x, 1],[y, (null)]"
        );
        assert_eq!(text(&[("m", DebugMap::new().into())], true, None), "");
    }

    #[test]
    fn test_text_is_not_escaped() {
        assert_eq!(
            text(&[("q", "a, b: c".into())], true, None),
            "q: a, b: c"
        );
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        assert_eq!(
            text(&[("k", "1".into()), ("k", "2".into())], true, None),
            "k: 1, k: 2"
        );
    }

    #[test]
    fn test_convenience_forms_match_sequence_form() {
        assert_eq!(
            format_debug_text1("a", "x", true, Some("P")),
            text(&[("a", "x".into())], true, Some("P"))
        );
        assert_eq!(
            format_debug_text2("a", "x", "b", None::<&str>, false, None),
            text(&[("a", "x".into()), ("b", DebugValue::Null)], false, None)
        );
        assert_eq!(
            format_debug_text3("a", 1, "b", vec!["p", "q"], "c", None::<u8>, true, None),
            "1b: p,q, c: (null)"
        );
    }

    #[test]
    fn test_options_form() {
        let options = DebugTextOptions::new().with_prefix("Pre").excluding_nulls();
        assert_eq!(
            format_debug_text_with(&[("a", DebugValue::Null), ("b", "y".into())], &options),
            "Pre b: y"
        );
    }

    #[test]
    fn test_to_debug_text_rejects_non_maps() {
        assert!(matches!(
            to_debug_text(&vec![1, 2], &DebugTextOptions::new()),
            Err(Error::UnsupportedType(_))
        ));
    }
}
