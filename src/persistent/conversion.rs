//! Conversions between a [`List`] and flat ordered sequences.
//!
//! [`from_array`] and [`to_array`] are the free-function forms of the
//! `FromIterator` / `to_vec` conversions. The list operations that must not
//! recurse (`reverse`, `appended`, `appended_all`, `flat_map`) use the same
//! round-trip through a flat buffer internally.

use super::List;

/// Builds a list holding `values` in order.
///
/// Accepts any finite iterable: a `Vec`, an array, a slice iterator, a range...
///
/// # Examples
///
/// ```rust
/// use persistent_adt::list;
/// use persistent_adt::persistent::from_array;
///
/// assert_eq!(from_array(vec![1, 2, 3]), list![1, 2, 3]);
/// assert_eq!(from_array(1..=3), list![1, 2, 3]);
/// assert!(from_array(Vec::<i32>::new()).is_empty());
/// ```
pub fn from_array<T, I>(values: I) -> List<T>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

/// Copies the elements of `list` into a Vec, in order.
///
/// # Examples
///
/// ```rust
/// use persistent_adt::list;
/// use persistent_adt::persistent::to_array;
///
/// assert_eq!(to_array(&list![1, 2, 3]), vec![1, 2, 3]);
/// ```
pub fn to_array<T: Clone>(list: &List<T>) -> Vec<T> {
    list.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![1, 2, 3, 4, 5])]
    fn test_from_array_preserves_length_and_order(#[case] values: Vec<i32>) {
        let list = from_array(values.clone());
        assert_eq!(list.size(), values.len());
        assert_eq!(to_array(&list), values);
    }

    #[rstest]
    fn test_from_array_matches_successive_prepends() {
        let values = vec![1, 2, 3];
        let built = values
            .iter()
            .rev()
            .fold(List::new(), |list, value| list.prepended(*value));
        assert_eq!(from_array(values), built);
    }
}
