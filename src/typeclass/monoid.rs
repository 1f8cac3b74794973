//! Monoid type class - a semigroup with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use persistent_adt::list;
//! use persistent_adt::persistent::List;
//! use persistent_adt::typeclass::Monoid;
//!
//! let flattened = List::combine_all(vec![list![1], list![2, 3], List::new()]);
//! assert_eq!(flattened, list![1, 2, 3]);
//! ```

use super::semigroup::Semigroup;
use crate::control::Optional;
use crate::persistent::List;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every value of `iterator`, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for List<T> {
    fn empty() -> Self {
        Self::Nil
    }
}

impl<T: Semigroup> Monoid for Optional<T> {
    fn empty() -> Self {
        Self::None
    }
}
