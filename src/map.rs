//! Ordered map type for structured debug values.
//!
//! [`DebugMap`] wraps an [`IndexMap`] so fields keep the order they were
//! inserted in. Struct fields converted with [`to_value`](crate::to_value)
//! therefore render in declaration order.
//!
//! ## Examples
//!
//! ```rust
//! use guardtext::{DebugMap, DebugValue};
//!
//! let mut map = DebugMap::new();
//! map.insert("name".to_string(), DebugValue::from("Alice"));
//! map.insert("age".to_string(), DebugValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::DebugValue;
use indexmap::IndexMap;

/// An insertion-ordered map of string keys to debug values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DebugMap(IndexMap<String, DebugValue>);

impl DebugMap {
    /// Creates an empty `DebugMap`.
    #[must_use]
    pub fn new() -> Self {
        DebugMap(IndexMap::new())
    }

    /// Creates an empty `DebugMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        DebugMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, key: String, value: DebugValue) -> Option<DebugValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DebugValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, DebugValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, DebugValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, DebugValue> {
        self.0.iter()
    }
}

impl IntoIterator for DebugMap {
    type Item = (String, DebugValue);
    type IntoIter = indexmap::map::IntoIter<String, DebugValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DebugMap {
    type Item = (&'a String, &'a DebugValue);
    type IntoIter = indexmap::map::Iter<'a, String, DebugValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, DebugValue)> for DebugMap {
    fn from_iter<T: IntoIterator<Item = (String, DebugValue)>>(iter: T) -> Self {
        DebugMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut map = DebugMap::with_capacity(3);
        map.insert("zeta".to_string(), DebugValue::from(1));
        map.insert("alpha".to_string(), DebugValue::from(2));
        map.insert("mid".to_string(), DebugValue::from(3));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map: DebugMap = vec![
            ("a".to_string(), DebugValue::from(1)),
            ("b".to_string(), DebugValue::from(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.insert("a".to_string(), DebugValue::from(9)), Some(DebugValue::from(1)));
        let pairs: Vec<_> = map.into_iter().collect();
        assert_eq!(pairs[0], ("a".to_string(), DebugValue::from(9)));
    }
}
