//! Function-type aliases shared by [`List`](crate::persistent::List) and
//! [`Optional`](crate::control::Optional).
//!
//! Operations taking a single function accept any closure generically. When
//! several closures of different concrete types must live in one container,
//! as with the predicate and mapper lists given to
//! [`List::collect`](crate::persistent::List::collect), they are boxed into
//! these aliases.
//!
//! # Examples
//!
//! ```rust
//! use persistent_adt::function::{mapper, predicate};
//! use persistent_adt::list;
//!
//! let predicates = list![predicate(|x: &i32| x % 2 == 0), predicate(|x: &i32| *x >= 5)];
//! let mappers = list![mapper(|x: &i32| x * 10), mapper(|x: &i32| x * 100)];
//!
//! let collected = list![1, 2, 3, 4, 5].collect(&predicates, &mappers);
//! assert_eq!(collected, list![20, 40, 500]);
//! ```

/// A boxed unary predicate: `T -> bool`.
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// A boxed unary mapper: `T -> U`.
pub type Mapper<'a, T, U> = Box<dyn Fn(&T) -> U + 'a>;

/// Boxes a closure as a [`Predicate`].
///
/// Spares callers the `as Predicate<'_, T>` cast when building lists of
/// predicates.
///
/// # Examples
///
/// ```rust
/// use persistent_adt::function::predicate;
///
/// let is_even = predicate(|x: &i32| x % 2 == 0);
/// assert!(is_even(&4));
/// assert!(!is_even(&3));
/// ```
pub fn predicate<'a, T, F>(function: F) -> Predicate<'a, T>
where
    F: Fn(&T) -> bool + 'a,
{
    Box::new(function)
}

/// Boxes a closure as a [`Mapper`].
///
/// # Examples
///
/// ```rust
/// use persistent_adt::function::mapper;
///
/// let times_ten = mapper(|x: &i32| x * 10);
/// assert_eq!(times_ten(&4), 40);
/// ```
pub fn mapper<'a, T, U, F>(function: F) -> Mapper<'a, T, U>
where
    F: Fn(&T) -> U + 'a,
{
    Box::new(function)
}
