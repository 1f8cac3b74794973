//! Monad type class - sequencing computations that produce containers.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::pure(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.bind(Self::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use persistent_adt::control::{none, some, Optional};
//! use persistent_adt::list;
//! use persistent_adt::persistent::List;
//! use persistent_adt::typeclass::Monad;
//!
//! let pairs = list![1, 2].bind(|x| list![x, x * 10]);
//! assert_eq!(pairs, list![1, 10, 2, 20]);
//!
//! let halved = some(8).bind(|x| if x % 2 == 0 { some(x / 2) } else { none() });
//! assert_eq!(halved, some(4));
//!
//! assert_eq!(<List<i32> as Monad>::pure(3), list![3]);
//! assert_eq!(<Optional<i32> as Monad>::pure(3), some(3));
//! ```

use super::functor::Functor;
use crate::control::Optional;
use crate::persistent::List;

/// A type class for containers whose values can be chained into new containers.
pub trait Monad: Functor {
    /// Wraps a single value in the minimal container.
    fn pure<A>(value: A) -> Self::WithType<A>;

    /// Applies `function` to each value and flattens the produced containers.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the values of the first.
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
    {
        self.bind(move |_| next.clone())
    }
}

impl<T> Monad for List<T> {
    fn pure<A>(value: A) -> List<A> {
        List::singleton(value)
    }

    fn bind<B, F>(self, mut function: F) -> List<B>
    where
        F: FnMut(T) -> List<B>,
    {
        let mut flattened = Vec::new();
        for element in self {
            flattened.extend(function(element));
        }
        List::build_from_vec(flattened)
    }
}

impl<T> Monad for Optional<T> {
    fn pure<A>(value: A) -> Optional<A> {
        Optional::Some(value)
    }

    fn bind<B, F>(self, function: F) -> Optional<B>
    where
        F: FnMut(T) -> Optional<B>,
    {
        self.flat_map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{none, some};
    use crate::list;
    use rstest::rstest;

    #[rstest]
    fn list_bind_flattens_in_order() {
        let result = list![1, 2, 3].bind(|x| List::from(vec![x; 2]));
        assert_eq!(result, list![1, 1, 2, 2, 3, 3]);
    }

    #[rstest]
    fn list_bind_with_empty_results() {
        let result = list![1, 2, 3, 4].bind(|x| if x % 2 == 0 { list![x] } else { List::new() });
        assert_eq!(result, list![2, 4]);
    }

    #[derive(Debug, PartialEq)]
    struct Token(i32);

    #[rstest]
    fn list_bind_moves_non_clone_elements() {
        let result = list![Token(1), Token(2)].bind(|Token(n)| list![Token(n), Token(-n)]);
        assert_eq!(result, list![Token(1), Token(-1), Token(2), Token(-2)]);
    }

    #[rstest]
    fn list_left_identity() {
        let function = |x: i32| list![x, x + 1];
        assert_eq!(<List<i32> as Monad>::pure(5).bind(function), function(5));
    }

    #[rstest]
    fn optional_bind_short_circuits() {
        let result = none::<i32>().bind(|x| some(x + 1));
        assert_eq!(result, none());
    }

    #[rstest]
    fn optional_then() {
        assert_eq!(some(1).then(some("next")), some("next"));
        assert_eq!(none::<i32>().then(some("next")), none());
    }
}
