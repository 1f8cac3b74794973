//! # persistent-adt
//!
//! Immutable, structurally recursive containers with a Scala-flavoured API.
//!
//! ## Overview
//!
//! - **List**: a singly linked list that is either empty (`Nil`) or an
//!   element followed by another list (`Cons`)
//! - **Optional**: a value that is either present (`Some`) or absent (`None`)
//! - **Type Classes**: Functor, Monad, Foldable, Semigroup and Monoid
//!   instances for both containers
//!
//! Every operation leaves its receiver untouched and returns a new value.
//! Long lists are handled iteratively, so building, traversing, comparing and
//! dropping a list of any length never grows the call stack.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): Type class traits and instances
//! - `serde`: `Serialize` / `Deserialize` for `List` and `Optional`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use persistent_adt::prelude::*;
//!
//! let numbers = list![1, 2, 3, 4, 5];
//! let evens = numbers.filter(|x| x % 2 == 0);
//!
//! assert_eq!(evens.to_string(), "List(2, 4)");
//! assert_eq!(numbers.find(|x| *x > 3), some(4));
//! assert_eq!(numbers.index_of(&9), -1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and traits.
///
/// # Usage
///
/// ```rust
/// use persistent_adt::prelude::*;
///
/// let names: List<&str> = list!["ada", "grace"];
/// assert!(names.contains(&"ada"));
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::*;
    pub use crate::function::*;
    pub use crate::list;
    pub use crate::persistent::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod control;
pub mod error;
pub mod function;
pub mod persistent;

#[cfg(feature = "typeclass")]
pub mod typeclass;
