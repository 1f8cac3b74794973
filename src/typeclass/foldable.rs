//! Foldable type class - reducing a container to a summary value.
//!
//! Folds borrow the container, so a `List` can be folded any number of times.
//!
//! # Examples
//!
//! ```rust
//! use persistent_adt::list;
//! use persistent_adt::typeclass::Foldable;
//!
//! let numbers = list![1, 2, 3, 4];
//! assert_eq!(numbers.fold_left(0, |sum, x| sum + x), 10);
//!
//! let digits = numbers.fold_right(String::new(), |x, acc| format!("{acc}{x}"));
//! assert_eq!(digits, "4321");
//! ```

use super::higher::TypeConstructor;
use crate::control::Optional;
use crate::persistent::List;

/// A type class for structures that can be folded into a single value.
pub trait Foldable: TypeConstructor {
    /// Folds from the first element to the last.
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &Self::Inner) -> B;

    /// Folds from the last element to the first.
    fn fold_right<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(&Self::Inner, B) -> B;

    /// Returns the number of elements.
    fn length(&self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns `true` if there are no elements.
    fn is_void(&self) -> bool {
        self.length() == 0
    }
}

impl<T> Foldable for List<T> {
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, function)
    }

    fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let references: Vec<&T> = self.iter().collect();
        references
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn length(&self) -> usize {
        self.size()
    }
}

impl<T> Foldable for Optional<T> {
    fn fold_left<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        match self {
            Self::Some(value) => function(init, value),
            Self::None => init,
        }
    }

    fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        match self {
            Self::Some(value) => function(value, init),
            Self::None => init,
        }
    }
}
