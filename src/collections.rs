//! Emptiness checks and guards for slices, vectors, and optional collections.

use crate::error::{reject, Error, Result};
use std::any::type_name;

/// Emptiness predicates and guards for collections.
///
/// Implemented for `[T]`, `Vec<T>`, references to either, and `Option` of
/// any of those, where `None` counts as empty.
///
/// # Examples
///
/// ```rust
/// use guardtext::CollectionExt;
///
/// let ids = vec![1, 2, 3];
/// assert!(ids.is_non_empty());
/// assert!(ids.ensure_non_empty("ids").is_ok());
///
/// let missing: Option<Vec<u32>> = None;
/// assert!(missing.is_none_or_empty());
/// assert!(missing.ensure_non_empty("missing").is_err());
/// ```
pub trait CollectionExt {
    /// The collection type handed back by [`CollectionExt::ensure_non_empty`].
    type Target: ?Sized;

    /// Returns `true` if the collection is absent or has no elements.
    fn is_none_or_empty(&self) -> bool;

    /// Returns `true` if the collection is present and has at least one element.
    #[inline]
    fn is_non_empty(&self) -> bool {
        !self.is_none_or_empty()
    }

    /// Returns the collection if it has at least one element.
    ///
    /// # Errors
    ///
    /// [`Error::Null`] for `None`, [`Error::Empty`] naming the collection type
    /// when there are no elements.
    fn ensure_non_empty(&self, param: &str) -> Result<&Self::Target>;
}

impl<T> CollectionExt for [T] {
    type Target = [T];

    #[inline]
    fn is_none_or_empty(&self) -> bool {
        self.is_empty()
    }

    fn ensure_non_empty(&self, param: &str) -> Result<&[T]> {
        if self.is_empty() {
            return reject(Error::empty(param, type_name::<[T]>()));
        }
        Ok(self)
    }
}

impl<T> CollectionExt for Vec<T> {
    type Target = Vec<T>;

    #[inline]
    fn is_none_or_empty(&self) -> bool {
        self.is_empty()
    }

    fn ensure_non_empty(&self, param: &str) -> Result<&Vec<T>> {
        if self.is_empty() {
            return reject(Error::empty(param, type_name::<Vec<T>>()));
        }
        Ok(self)
    }
}

impl<C> CollectionExt for &C
where
    C: CollectionExt + ?Sized,
{
    type Target = C::Target;

    #[inline]
    fn is_none_or_empty(&self) -> bool {
        (**self).is_none_or_empty()
    }

    fn ensure_non_empty(&self, param: &str) -> Result<&C::Target> {
        (**self).ensure_non_empty(param)
    }
}

impl<C> CollectionExt for Option<C>
where
    C: CollectionExt,
{
    type Target = C::Target;

    #[inline]
    fn is_none_or_empty(&self) -> bool {
        self.as_ref().map_or(true, CollectionExt::is_none_or_empty)
    }

    fn ensure_non_empty(&self, param: &str) -> Result<&C::Target> {
        match self {
            Some(collection) => collection.ensure_non_empty(param),
            None => reject(Error::null(param)),
        }
    }
}
