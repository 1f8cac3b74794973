//! Semigroup type class - an associative binary operation.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use persistent_adt::control::{none, some};
//! use persistent_adt::list;
//! use persistent_adt::typeclass::Semigroup;
//!
//! assert_eq!(list![1, 2].combine(list![3]), list![1, 2, 3]);
//! assert_eq!(
//!     some(String::from("ab")).combine(some(String::from("cd"))),
//!     some(String::from("abcd"))
//! );
//! assert_eq!(none().combine(some(String::from("x"))), some(String::from("x")));
//! ```

use crate::control::Optional;
use crate::persistent::List;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines `self` with a borrowed value.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

/// List concatenation.
impl<T> Semigroup for List<T> {
    fn combine(self, other: Self) -> Self {
        self.into_iter().chain(other).collect()
    }
}

/// Combines the inner values when both are defined, otherwise keeps the defined one.
impl<T: Semigroup> Semigroup for Optional<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            (Self::None, Self::None) => Self::None,
        }
    }
}
