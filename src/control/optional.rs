//! Optional type - a value that may be absent.
//!
//! This module provides the `Optional<T>` type, which is either `Some(T)` or
//! `None`. Lookups on [`List`](crate::persistent::List) that may fail to find a
//! match (`find`, `find_last`, `collect_first`) return an `Optional` instead of
//! a null-like sentinel.
//!
//! An `Optional` never changes variant after construction; every
//! transformation returns a new value.
//!
//! # Examples
//!
//! ```rust
//! use persistent_adt::control::{Optional, none, some};
//!
//! let present = some(21).map(|x| x * 2);
//! assert_eq!(present, some(42));
//! assert_eq!(format!("{present}"), "Some(42)");
//!
//! let absent: Optional<i32> = none();
//! assert_eq!(absent.get_or_else(0), 0);
//! assert!(absent.get().is_err());
//! ```

use std::fmt;

use crate::error::NoSuchElementError;

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use persistent_adt::control::Optional;
///
/// let value: Optional<i32> = Optional::Some(5);
/// assert!(value.is_defined());
///
/// let empty: Optional<i32> = Optional::None;
/// assert!(empty.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

/// Wraps a value in `Optional::Some`.
///
/// # Examples
///
/// ```rust
/// use persistent_adt::control::{Optional, some};
///
/// assert_eq!(some("x"), Optional::Some("x"));
/// ```
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Returns a fresh `Optional::None`.
///
/// # Examples
///
/// ```rust
/// use persistent_adt::control::{Optional, none};
///
/// let empty: Optional<String> = none();
/// assert_eq!(empty, Optional::None);
/// ```
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

impl<T> Optional<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{Optional, none, some};
    ///
    /// assert!(some(1).is_defined());
    /// assert!(!none::<i32>().is_defined());
    /// ```
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    ///
    /// assert!(none::<i32>().is_empty());
    /// assert!(!some(1).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_defined()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    /// use persistent_adt::error::NoSuchElementError;
    ///
    /// assert_eq!(some(3).get(), Ok(&3));
    /// assert_eq!(none::<i32>().get(), Err(NoSuchElementError));
    /// ```
    #[inline]
    pub const fn get(&self) -> Result<&T, NoSuchElementError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(NoSuchElementError),
        }
    }

    /// Returns the wrapped value, consuming the optional.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::some;
    ///
    /// assert_eq!(some(String::from("a")).into_value(), Ok(String::from("a")));
    /// ```
    #[inline]
    pub fn into_value(self) -> Result<T, NoSuchElementError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(NoSuchElementError),
        }
    }

    /// Returns the wrapped value, or `default` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    ///
    /// assert_eq!(some(1).get_or_else(9), 1);
    /// assert_eq!(none().get_or_else(9), 9);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns `self` if it is `Some`, otherwise `alternative`.
    ///
    /// The alternative is itself an `Optional`, so both branches have the
    /// same shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    ///
    /// assert_eq!(some(1).or_else(some(2)), some(1));
    /// assert_eq!(none().or_else(some(2)), some(2));
    /// assert_eq!(none::<i32>().or_else(none()), none());
    /// ```
    #[inline]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => alternative,
        }
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts `&Optional<T>` into `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::some;
    ///
    /// let owned = some(String::from("hello"));
    /// assert_eq!(owned.as_ref().map(|s| s.len()), some(5));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Returns an iterator over the wrapped value (zero or one item).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    ///
    /// assert_eq!(some(4).iter().count(), 1);
    /// assert_eq!(none::<i32>().iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        let option: Option<&T> = self.as_ref().into();
        option.into_iter()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the wrapped value.
    ///
    /// `Some(v)` becomes `Some(function(v))`; `None` stays `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{Optional, none, some};
    ///
    /// assert_eq!(some(2).map(|x| x + 1), some(3));
    /// assert_eq!(none::<i32>().map(|x| x + 1), none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Applies a function returning an `Optional` to the wrapped value.
    ///
    /// `Some(v)` becomes `function(v)`; `None` stays `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{Optional, none, some};
    ///
    /// let half = |x: i32| if x % 2 == 0 { some(x / 2) } else { none() };
    /// assert_eq!(some(8).flat_map(half), some(4));
    /// assert_eq!(some(3).flat_map(half), none());
    /// assert_eq!(none().flat_map(half), none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Maps the wrapped value only when it satisfies `predicate`.
    ///
    /// Returns `None` for `None` and for a `Some` that fails the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    ///
    /// assert_eq!(some(4).collect(|x| x % 2 == 0, |x| x * 10), some(40));
    /// assert_eq!(some(3).collect(|x| x % 2 == 0, |x| x * 10), none());
    /// ```
    #[inline]
    pub fn collect<U, P, F>(self, predicate: P, function: F) -> Optional<U>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Optional::Some(function(value))
                } else {
                    Optional::None
                }
            }
            Self::None => Optional::None,
        }
    }

    /// Combines two defined values with `function`.
    ///
    /// Returns `None` if either side is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    ///
    /// assert_eq!(some(2).zip(some(3), |a, b| a * b), some(6));
    /// assert_eq!(some(2).zip(none::<i32>(), |a, b| a * b), none());
    /// ```
    #[inline]
    pub fn zip<U, V, F>(self, other: Optional<U>, function: F) -> Optional<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Some(value), Optional::Some(other_value)) => {
                Optional::Some(function(value, other_value))
            }
            _ => Optional::None,
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Calls `function` with the wrapped value; does nothing for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    ///
    /// let mut seen = Vec::new();
    /// some(1).apply(|x| seen.push(*x));
    /// none::<i32>().apply(|x| seen.push(*x));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn apply<F>(&self, function: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = self {
            function(value);
        }
    }
}

impl<T: PartialEq> Optional<T> {
    /// Returns `true` if this is `Some` and the wrapped value equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    ///
    /// assert!(some(1).contains(&1));
    /// assert!(!some(1).contains(&2));
    /// assert!(!none().contains(&1));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Self::Some(inner) => inner == value,
            Self::None => false,
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a standard `Option` into an `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{Optional, none, some};
    ///
    /// assert_eq!(Optional::from(Some(1)), some(1));
    /// assert_eq!(Optional::<i32>::from(None), none());
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::None, Self::Some)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts an `Optional` into a standard `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::some;
    ///
    /// let option: Option<i32> = some(1).into();
    /// assert_eq!(option, Some(1));
    /// ```
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_some_is_defined() {
        let value = some(42);
        assert!(value.is_defined());
        assert!(!value.is_empty());
    }

    #[rstest]
    fn test_none_is_empty() {
        let value: Optional<i32> = none();
        assert!(value.is_empty());
        assert!(!value.is_defined());
    }

    #[rstest]
    fn test_get_on_none_fails_with_fixed_message() {
        let error = none::<i32>().get().unwrap_err();
        assert_eq!(error.to_string(), "No value to get");
    }

    #[rstest]
    fn test_or_else_keeps_some() {
        assert_eq!(some(1).or_else(some(2)), some(1));
    }

    #[rstest]
    fn test_collect_on_none() {
        let result = none::<i32>().collect(|_| true, |x| x + 1);
        assert_eq!(result, none());
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", some("a")), "Some(a)");
        assert_eq!(format!("{}", none::<i32>()), "None");
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", some("a")), "Some(\"a\")");
        assert_eq!(format!("{:?}", none::<i32>()), "None");
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let option: Option<i32> = some(3).into();
        assert_eq!(Optional::from(option), some(3));

        let option: Option<i32> = none::<i32>().into();
        assert_eq!(Optional::from(option), none());
    }
}
