/// Builds a [`DebugValue`](crate::DebugValue) from literal-like syntax.
///
/// ```rust
/// use guardtext::{debug_value, DebugValue};
///
/// let value = debug_value!({ "id": 7, "tags": ["a", null] });
/// assert_eq!(value.to_string(), "{id: 7, tags: [a,(null)]}");
/// assert_eq!(debug_value!(null), DebugValue::Null);
/// ```
#[macro_export]
macro_rules! debug_value {
    (null) => {
        $crate::DebugValue::Null
    };

    (true) => {
        $crate::DebugValue::Bool(true)
    };

    (false) => {
        $crate::DebugValue::Bool(false)
    };

    ([]) => {
        $crate::DebugValue::Sequence(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::DebugValue::Sequence(vec![$($crate::debug_value!($elem)),*])
    };

    ({}) => {
        $crate::DebugValue::Map($crate::DebugMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::DebugMap::new();
        $(
            map.insert($key.to_string(), $crate::debug_value!($value));
        )*
        $crate::DebugValue::Map(map)
    }};

    // Anything else goes through `From`.
    ($other:expr) => {
        $crate::DebugValue::from($other)
    };
}

/// Formats `key => value` pairs into debug text.
///
/// Without options, nulls are included and no prefix is written. Pass a
/// [`DebugTextOptions`](crate::DebugTextOptions) before a `;` to change that.
///
/// ```rust
/// use guardtext::{debug_text, DebugTextOptions};
///
/// let user: Option<&str> = None;
/// assert_eq!(debug_text!("id" => 7u32, "user" => user), "7user: (null)");
///
/// let options = DebugTextOptions::new().with_prefix("Session").excluding_nulls();
/// assert_eq!(debug_text!(options; "user" => user, "state" => "open"), "Session state: open");
/// ```
#[macro_export]
macro_rules! debug_text {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::format_debug_text(
            &[$(($key, $crate::DebugValue::from($value))),*],
            true,
            None,
        )
    };

    ($options:expr; $($key:expr => $value:expr),* $(,)?) => {
        $crate::format_debug_text_with(
            &[$(($key, $crate::DebugValue::from($value))),*],
            &$options,
        )
    };
}

/// Unwraps an `Option`, naming the argument expression on failure.
///
/// ```rust
/// use guardtext::ensure_some;
///
/// fn port(configured: Option<u16>) -> guardtext::Result<u16> {
///     ensure_some!(configured)
/// }
///
/// assert_eq!(port(Some(80)), Ok(80));
/// assert_eq!(port(None).unwrap_err().param(), Some("configured"));
/// ```
#[macro_export]
macro_rules! ensure_some {
    ($value:expr) => {
        $crate::OptionExt::ensure_some($value, stringify!($value))
    };
}

/// Checks that text is non-blank, naming the argument expression on failure.
///
/// ```rust
/// use guardtext::ensure_non_blank;
///
/// let name = "  ";
/// assert_eq!(ensure_non_blank!(name).unwrap_err().param(), Some("name"));
/// ```
#[macro_export]
macro_rules! ensure_non_blank {
    ($value:expr) => {{
        use $crate::TextExt as _;
        ($value).ensure_non_blank(stringify!($value))
    }};
}

/// Checks that a collection is non-empty, naming the argument expression on failure.
///
/// ```rust
/// use guardtext::ensure_non_empty;
///
/// let ids: Vec<u32> = Vec::new();
/// assert_eq!(ensure_non_empty!(ids).unwrap_err().param(), Some("ids"));
/// ```
#[macro_export]
macro_rules! ensure_non_empty {
    ($value:expr) => {{
        use $crate::CollectionExt as _;
        ($value).ensure_non_empty(stringify!($value))
    }};
}

#[cfg(test)]
mod tests {
    use crate::{DebugMap, DebugValue, Number};

    #[test]
    fn test_debug_value_primitives() {
        assert_eq!(debug_value!(null), DebugValue::Null);
        assert_eq!(debug_value!(true), DebugValue::Bool(true));
        assert_eq!(debug_value!(false), DebugValue::Bool(false));
        assert_eq!(debug_value!(42), DebugValue::Number(Number::Integer(42)));
        assert_eq!(debug_value!(3.5), DebugValue::Number(Number::Float(3.5)));
        assert_eq!(debug_value!("hello"), DebugValue::String("hello".to_string()));
    }

    #[test]
    fn test_debug_value_collections() {
        assert_eq!(debug_value!([]), DebugValue::Sequence(vec![]));
        assert_eq!(debug_value!({}), DebugValue::Map(DebugMap::new()));
        assert_eq!(
            debug_value!([1, null]),
            DebugValue::Sequence(vec![DebugValue::from(1), DebugValue::Null])
        );
    }

    #[test]
    fn test_debug_text_macro() {
        assert_eq!(debug_text!(), "");
        assert_eq!(debug_text!("a" => "x", "b" => vec![1, 2]), "a: x, b: 1,2");

        let options = crate::DebugTextOptions::new().with_prefix("P");
        assert_eq!(debug_text!(options; ), "P");
    }

    #[test]
    fn test_guard_macros_capture_expressions() {
        struct Config {
            name: String,
            hosts: Vec<String>,
            port: Option<u16>,
        }

        let config = Config {
            name: " ".to_string(),
            hosts: Vec::new(),
            port: None,
        };

        assert_eq!(ensure_non_blank!(config.name).unwrap_err().param(), Some("config.name"));
        assert_eq!(ensure_non_empty!(config.hosts).unwrap_err().param(), Some("config.hosts"));
        assert_eq!(ensure_some!(config.port).unwrap_err().param(), Some("config.port"));
    }
}
