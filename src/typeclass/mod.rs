//! Type class traits implemented by [`List`](crate::persistent::List) and
//! [`Optional`](crate::control::Optional).
//!
//! - [`TypeConstructor`]: Higher-Kinded Type emulation
//! - [`Functor`] and [`Monad`]: mapping and chaining
//! - [`Foldable`]: left and right folds
//! - [`Semigroup`] and [`Monoid`]: combining values
//!
//! Trait methods are named so they never shadow the inherent operations of
//! the containers (`fmap` rather than `map`, `bind` rather than `flat_map`).
//!
//! Enabled by the `typeclass` feature, which is on by default.

mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
