//! Control structures.
//!
//! This module provides [`Optional`], the safe "value or absence" container
//! returned by the lookup operations of [`List`](crate::persistent::List),
//! together with its [`some`] and [`none`] constructors.
//!
//! # Examples
//!
//! ```rust
//! use persistent_adt::control::{none, some};
//!
//! let total = some(2).zip(some(3), |a, b| a + b);
//! assert_eq!(total, some(5));
//! assert_eq!(none::<i32>().map(|x| x + 1), none());
//! ```

mod optional;

pub use optional::{Optional, none, some};
