//! The `list!` macro for building a [`List`](crate::persistent::List) from its elements.

/// Builds a [`List`](crate::persistent::List) from zero or more elements, in order.
///
/// `list![a, b, c]` is `Cons(a, Cons(b, Cons(c, Nil)))`, and `list![]` is `Nil`.
///
/// # Syntax
///
/// - `list![]` - The empty list
/// - `list![x]` - A single-element list
/// - `list![x, y, ...]` - A list holding the elements in the given order
///
/// # Examples
///
/// ```
/// use persistent_adt::list;
/// use persistent_adt::persistent::List;
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
///
/// let numbers = list![1, 2, 3];
/// assert_eq!(numbers.size(), 3);
/// assert_eq!(numbers.get(0), Some(&1));
///
/// // Trailing commas are accepted
/// let words = list!["a", "b",];
/// assert_eq!(words.size(), 2);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::persistent::List::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::List::from([$($element),+])
    };
}
