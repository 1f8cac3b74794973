//! Integration tests for List.
//!
//! Exercise the public API the way a caller would: through the `list!` macro,
//! the prelude, and the conversion functions.

use persistent_adt::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn numbers() -> List<i32> {
    list![1, 2, 3, 4, 5]
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_list() {
    let list: List<i32> = List::new();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);
    assert_eq!(list.head(), None);
}

#[rstest]
fn test_prepended_puts_element_at_head() {
    let list = List::new().prepended(3).prepended(2).prepended(1);
    assert_eq!(list, list![1, 2, 3]);
    assert_eq!(list.head(), Some(&1));
}

#[rstest]
fn test_from_array_matches_successive_prepends() {
    let expected = List::new().prepended('c').prepended('b').prepended('a');
    assert_eq!(from_array(['a', 'b', 'c']), expected);
}

#[rstest]
fn test_to_array_round_trips(numbers: List<i32>) {
    assert_eq!(from_array(to_array(&numbers)), numbers);
}

#[rstest]
fn test_collect_from_iterator() {
    let squares: List<u32> = (1..=4).map(|x| x * x).collect();
    assert_eq!(squares, list![1, 4, 9, 16]);
}

#[rstest]
fn test_singleton() {
    assert_eq!(List::singleton("only"), list!["only"]);
}

// =============================================================================
// Access
// =============================================================================

#[rstest]
#[case(0, Some(1))]
#[case(4, Some(5))]
#[case(5, None)]
#[case(usize::MAX, None)]
fn test_get(numbers: List<i32>, #[case] index: usize, #[case] expected: Option<i32>) {
    assert_eq!(numbers.get(index).copied(), expected);
}

#[rstest]
fn test_tail_walks_the_chain(numbers: List<i32>) {
    let tail = numbers.tail();
    assert_eq!(tail.head(), Some(&2));
    assert_eq!(tail.tail().tail().tail().tail(), &List::Nil);
}

#[rstest]
fn test_pattern_matching_on_variants(numbers: List<i32>) {
    match &numbers {
        List::Cons(head, tail) => {
            assert_eq!(*head, 1);
            assert_eq!(tail.size(), 4);
        }
        List::Nil => panic!("expected a non-empty list"),
    }
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn test_appended_then_get_last(numbers: List<i32>) {
    assert_eq!(numbers.appended(6).get(5), Some(&6));
}

#[rstest]
fn test_reverse(numbers: List<i32>) {
    assert_eq!(numbers.reverse(), list![5, 4, 3, 2, 1]);
    assert_eq!(numbers.reverse().reverse(), numbers);
}

#[rstest]
fn test_filter_map_flat_map(numbers: List<i32>) {
    assert_eq!(numbers.filter(|x| x % 2 == 1), list![1, 3, 5]);
    assert_eq!(numbers.map(|x| x * x), list![1, 4, 9, 16, 25]);
    assert_eq!(
        list![1, 2, 3].flat_map(|x| list![*x, *x]),
        list![1, 1, 2, 2, 3, 3]
    );
}

#[rstest]
fn test_operations_leave_receiver_untouched(numbers: List<i32>) {
    let _ = numbers.appended(6);
    let _ = numbers.appended_all(vec![7, 8]);
    let _ = numbers.reverse();
    let _ = numbers.filter(|x| *x > 2);
    let _ = numbers.map(|x| x + 1);
    assert_eq!(numbers, list![1, 2, 3, 4, 5]);
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
fn test_find_and_find_last(numbers: List<i32>) {
    assert_eq!(numbers.find(|x| x % 2 == 0), some(2));
    assert_eq!(numbers.find_last(|x| x % 2 == 0), some(4));
    assert_eq!(numbers.find(|x| *x > 10), none());
    assert_eq!(numbers.find_last(|x| *x > 10), none());
}

#[rstest]
fn test_exists_forall_count(numbers: List<i32>) {
    assert!(numbers.exists(|x| *x == 5));
    assert!(numbers.forall(|x| *x > 0));
    assert!(!numbers.forall(|x| *x > 1));
    assert_eq!(numbers.count(|x| *x > 2), 3);
    assert!(List::<i32>::Nil.forall(|_| false));
    assert!(!List::<i32>::Nil.exists(|_| true));
}

#[rstest]
fn test_contains_and_index_of(numbers: List<i32>) {
    assert!(numbers.contains(&3));
    assert_eq!(numbers.index_of(&3), 2);
    assert_eq!(numbers.index_of(&42), -1);
    assert_eq!(List::<i32>::Nil.index_of(&1), -1);
}

#[rstest]
fn test_foreach_visits_in_order(numbers: List<i32>) {
    let mut visited = Vec::new();
    numbers.foreach(|x| visited.push(*x));
    assert_eq!(visited, vec![1, 2, 3, 4, 5]);
}

// =============================================================================
// collect / collect_first
// =============================================================================

#[rstest]
fn test_collect_dispatches_to_first_matching_predicate(numbers: List<i32>) {
    let predicates = list![
        predicate(|x: &i32| x % 2 == 0),
        predicate(|x: &i32| *x >= 5)
    ];
    let mappers = list![mapper(|x: &i32| x * 10), mapper(|x: &i32| x * 100)];
    assert_eq!(numbers.collect(&predicates, &mappers), list![20, 40, 500]);
}

#[rstest]
fn test_collect_can_change_element_type(numbers: List<i32>) {
    let predicates = list![predicate(|x: &i32| *x < 3)];
    let mappers = list![mapper(|x: &i32| format!("small-{x}"))];
    assert_eq!(
        numbers.collect(&predicates, &mappers),
        list!["small-1".to_string(), "small-2".to_string()]
    );
}

#[rstest]
fn test_collect_ignores_unpaired_predicates(numbers: List<i32>) {
    let predicates = list![
        predicate(|x: &i32| *x == 1),
        predicate(|_: &i32| true)
    ];
    let mappers = list![mapper(|x: &i32| x * 10)];
    assert_eq!(numbers.collect(&predicates, &mappers), list![10]);
}

#[rstest]
fn test_try_collect_rejects_mismatched_lengths(numbers: List<i32>) {
    let predicates = list![predicate(|x: &i32| *x == 1)];
    let mappers: List<Mapper<'_, i32, i32>> = List::new();
    let error = numbers.try_collect(&predicates, &mappers).unwrap_err();
    assert_eq!(
        error,
        CollectArityError {
            predicates: 1,
            mappers: 0
        }
    );
}

#[rstest]
fn test_collect_first(numbers: List<i32>) {
    assert_eq!(numbers.collect_first(|x| x % 2 == 0, |x| x * 10), some(20));
    assert_eq!(numbers.collect_first(|x| *x > 9, |x| x * 10), none());
}

// =============================================================================
// Formatting, equality, hashing
// =============================================================================

#[rstest]
fn test_display_and_debug(numbers: List<i32>) {
    assert_eq!(numbers.to_string(), "List(1, 2, 3, 4, 5)");
    assert_eq!(List::<i32>::Nil.to_string(), "List()");
    assert_eq!(format!("{numbers:?}"), "[1, 2, 3, 4, 5]");
}

#[rstest]
fn test_equal_lists_hash_equally() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    seen.insert(list![1, 2, 3]);
    assert!(seen.contains(&list![1, 2, 3]));
    assert!(!seen.contains(&list![1, 2]));
}

#[rstest]
fn test_list_of_optionals() {
    let values = list![some(1), none(), some(3)];
    assert_eq!(values.filter(|value| value.is_defined()).size(), 2);
    assert_eq!(values.to_string(), "List(Some(1), None, Some(3))");
}

// =============================================================================
// Long lists
// =============================================================================

#[rstest]
fn test_long_list_round_trip() {
    const LENGTH: usize = 100_000;

    let long: List<usize> = (0..LENGTH).collect();
    let copy = long.clone();
    assert_eq!(long, copy);
    assert_eq!(long.reverse().head(), Some(&(LENGTH - 1)));
    assert_eq!(long.appended_all(copy.iter().copied()).size(), LENGTH * 2);
    assert_eq!(long.get(LENGTH - 1), Some(&(LENGTH - 1)));
    assert!(long.to_string().len() > LENGTH);
}
