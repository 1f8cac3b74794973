//! Persistent (immutable) data structures.
//!
//! This module provides [`List`], an immutable singly-linked list, together
//! with its iterators, the [`from_array`] / [`to_array`] conversions, and the
//! [`list!`](crate::list!) constructor macro.
//!
//! Every transformation returns a new list; the receiver is never modified.
//!
//! # Examples
//!
//! ```rust
//! use persistent_adt::list;
//! use persistent_adt::persistent::{List, from_array, to_array};
//!
//! let list: List<i32> = from_array(vec![3, 1, 2]);
//! let sorted_view = list.filter(|x| *x > 1).map(|x| x * 10);
//! assert_eq!(to_array(&sorted_view), vec![30, 20]);
//!
//! // The original list is preserved
//! assert_eq!(list, list![3, 1, 2]);
//! ```

mod conversion;
mod list;
mod list_macro;

pub use conversion::{from_array, to_array};
pub use list::List;
pub use list::ListIntoIterator;
pub use list::ListIterator;
pub use list::Tail;
