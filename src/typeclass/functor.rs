//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use persistent_adt::control::some;
//! use persistent_adt::list;
//! use persistent_adt::typeclass::Functor;
//!
//! assert_eq!(list![1, 2, 3].fmap(|x| x * 2), list![2, 4, 6]);
//! assert_eq!(some(5).fmap(|n| n.to_string()), some("5".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::control::Optional;
use crate::persistent::List;

/// A type class for types that can have a function mapped over their contents.
///
/// The function is `FnMut` because a `List` applies it once per element.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the functor, consuming it.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to references of the value(s) inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    /// use persistent_adt::typeclass::Functor;
    ///
    /// let words = list!["a".to_string(), "bcd".to_string()];
    /// assert_eq!(words.fmap_ref(|s| s.len()), list![1, 3]);
    /// // words is still available here
    /// assert_eq!(words.size(), 2);
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every value inside the functor with `value`.
    fn replace<B: Clone>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(move |_| value.clone())
    }
}

impl<T> Functor for List<T> {
    fn fmap<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> List<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Optional<T> {
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnMut(&T) -> B,
    {
        self.as_ref().map(function)
    }
}
