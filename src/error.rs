//! Error types for the list and optional containers.
//!
//! Only two things can go wrong in this crate:
//!
//! - reading the value out of an empty [`Optional`](crate::control::Optional),
//!   which yields [`NoSuchElementError`]
//! - calling [`List::try_collect`](crate::persistent::List::try_collect) with
//!   predicate and mapper lists of different lengths, which yields
//!   [`CollectArityError`]
//!
//! Out-of-range [`List::get`](crate::persistent::List::get) is deliberately not
//! an error: it returns the standard `None` sentinel.

/// Represents an attempt to read the value of an empty `Optional`.
///
/// The error always displays the same message, so callers can match on it.
///
/// # Examples
///
/// ```rust
/// use persistent_adt::control::none;
/// use persistent_adt::error::NoSuchElementError;
///
/// let error = none::<i32>().get().unwrap_err();
/// assert_eq!(error, NoSuchElementError);
/// assert_eq!(format!("{error}"), "No value to get");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoSuchElementError;

impl NoSuchElementError {
    /// The fixed message carried by every `NoSuchElementError`.
    pub const MESSAGE: &'static str = "No value to get";
}

impl std::fmt::Display for NoSuchElementError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for NoSuchElementError {}

/// Represents a `try_collect` call whose predicate and mapper lists differ in length.
///
/// # Examples
///
/// ```rust
/// use persistent_adt::error::CollectArityError;
///
/// let error = CollectArityError { predicates: 2, mappers: 1 };
/// assert_eq!(
///     format!("{error}"),
///     "collect requires one mapper per predicate (got 2 predicates and 1 mappers)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectArityError {
    /// Number of predicates supplied.
    pub predicates: usize,
    /// Number of mappers supplied.
    pub mappers: usize,
}

impl std::fmt::Display for CollectArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "collect requires one mapper per predicate (got {} predicates and {} mappers)",
            self.predicates, self.mappers
        )
    }
}

impl std::error::Error for CollectArityError {}
