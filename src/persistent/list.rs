//! Immutable singly-linked list.
//!
//! This module provides [`List`], a cons-list with Scala-style combinators.
//!
//! # Overview
//!
//! `List<T>` is a closed sum type: either [`List::Nil`] or
//! [`List::Cons`] holding one element and the exclusively owned rest of the
//! list. It provides:
//!
//! - O(1) prepend (`prepended`, consuming the receiver)
//! - O(1) head and tail access
//! - O(n) index access, size, append, and reverse
//!
//! No operation mutates an existing list. Every transformation returns a newly
//! built list and leaves its receiver untouched.
//!
//! # Stack Safety
//!
//! Traversals walk the list with [`ListIterator`] and constructions build the
//! result back-to-front from a flat `Vec` buffer, so no operation recurses over
//! the list. `Clone`, `PartialEq`, and `Hash` are iterative as well, and the
//! [`Tail`] of every `Cons` node unlinks the rest of the chain in a loop when
//! dropped.
//!
//! # Examples
//!
//! ```rust
//! use persistent_adt::control::some;
//! use persistent_adt::list;
//!
//! let numbers = list![1, 2, 3, 4, 5];
//! assert_eq!(numbers.size(), 5);
//!
//! let evens = numbers.filter(|x| x % 2 == 0);
//! assert_eq!(evens, list![2, 4]);
//!
//! // The original list is untouched
//! assert_eq!(numbers.get(0), Some(&1));
//! assert_eq!(numbers.find(|x| *x > 3), some(4));
//! ```
//!
//! ```text
//! list![1, 2, 3]:  Cons(1) -> Cons(2) -> Cons(3) -> Nil
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::control::Optional;
use crate::error::CollectArityError;

/// An immutable singly-linked list.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `prepended`    | O(1)       |
/// | `head`/`tail`  | O(1)       |
/// | `size`         | O(n)       |
/// | `get`          | O(index)   |
/// | `appended`     | O(n)       |
/// | `appended_all` | O(n + m)   |
/// | `reverse`      | O(n)       |
///
/// # Examples
///
/// ```rust
/// use persistent_adt::persistent::{List, Tail};
///
/// let list = List::Cons(1, Tail::new(List::Cons(2, Tail::new(List::Nil))));
/// assert_eq!(list.size(), 2);
/// assert_eq!(list.head(), Some(&1));
/// ```
pub enum List<T> {
    /// The empty list.
    Nil,
    /// One element followed by the rest of the list.
    Cons(T, Tail<T>),
}

/// The owned remainder of a [`List::Cons`] node.
///
/// Dereferences to the [`List`] it holds. Dropping a `Tail` unlinks the
/// chain one node at a time, so a list of any length is dropped without
/// recursion, while `List` itself stays free to be moved apart by pattern
/// matching.
///
/// # Examples
///
/// ```rust
/// use persistent_adt::list;
/// use persistent_adt::persistent::{List, Tail};
///
/// let list = List::Cons(1, Tail::new(list![2, 3]));
/// if let List::Cons(head, tail) = list {
///     assert_eq!(head, 1);
///     assert_eq!(tail.into_list(), list![2, 3]);
/// }
/// ```
pub struct Tail<T>(Box<List<T>>);

impl<T> Tail<T> {
    /// Wraps `list` as the tail of a `Cons` node.
    #[inline]
    #[must_use]
    pub fn new(list: List<T>) -> Self {
        Self(Box::new(list))
    }

    /// Takes the list out of the tail.
    #[inline]
    #[must_use]
    pub fn into_list(mut self) -> List<T> {
        std::mem::take(&mut *self.0)
    }
}

impl<T> std::ops::Deref for Tail<T> {
    type Target = List<T>;

    #[inline]
    fn deref(&self) -> &List<T> {
        &self.0
    }
}

impl<T> Drop for Tail<T> {
    fn drop(&mut self) {
        let mut current = std::mem::take(&mut *self.0);
        while let List::Cons(_, tail) = &mut current {
            let next = std::mem::take(&mut *tail.0);
            current = next;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tail<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, formatter)
    }
}

impl<T> List<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::persistent::List;
    ///
    /// let list: List<i32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Nil
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::persistent::List;
    ///
    /// let list = List::singleton(42);
    /// assert_eq!(list.head(), Some(&42));
    /// assert_eq!(list.size(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::Cons(element, Tail::new(Self::Nil))
    }

    /// Builds a list from a Vec, keeping the Vec's order.
    ///
    /// Consumes the buffer from its end, consing each element onto the
    /// accumulated tail.
    pub(crate) fn build_from_vec(elements: Vec<T>) -> Self {
        elements
            .into_iter()
            .rev()
            .fold(Self::Nil, |tail, element| Self::Cons(element, Tail::new(tail)))
    }

    /// Returns `true` if the list is `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    /// use persistent_adt::persistent::List;
    ///
    /// assert!(List::<i32>::new().is_empty());
    /// assert!(!list![1].is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(n); the length is not cached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    /// use persistent_adt::persistent::List;
    ///
    /// assert_eq!(list![1, 2, 3].size(), 3);
    /// assert_eq!(List::<i32>::Nil.size(), 0);
    /// ```
    #[must_use]
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns a reference to the first element, or `None` for `Nil`.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        match self {
            Self::Cons(head, _) => Some(head),
            Self::Nil => None,
        }
    }

    /// Returns the list without its first element.
    ///
    /// The tail of `Nil` is `Nil`. No elements are copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// let list = list![1, 2, 3];
    /// assert_eq!(list.tail(), &list![2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tail(&self) -> &Self {
        match self {
            Self::Cons(_, tail) => &**tail,
            Self::Nil => self,
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// let list = list![1, 2, 3];
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> ListIterator<'_, T> {
        ListIterator { current: self }
    }

    /// Returns a new list with `element` in front of the current elements.
    ///
    /// The receiver is moved into the new list's tail, so nothing is
    /// traversed or copied. Keep a clone if the original is still needed.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    /// use persistent_adt::persistent::List;
    ///
    /// assert_eq!(list![2, 3].prepended(1), list![1, 2, 3]);
    /// assert_eq!(List::Nil.prepended(1), list![1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn prepended(self, element: T) -> Self {
        Self::Cons(element, Tail::new(self))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// An out-of-range index yields the plain `None` sentinel rather than an
    /// error or an [`Optional`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// let list = list![1, 2, 3, 4, 5].appended(6);
    /// assert_eq!(list.get(5), Some(&6));
    /// assert_eq!(list.get(6), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns a new list with `function` applied to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// assert_eq!(list![1, 2, 3].map(|x| x * 2), list![2, 4, 6]);
    /// assert_eq!(list![1, 2].map(|x| x.to_string()), list!["1".to_string(), "2".to_string()]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    ///
    /// Stops at the first match. `Nil` yields `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// assert!(list![1, 2, 3].exists(|x| *x == 2));
    /// assert!(!list![1, 2, 3].exists(|x| *x > 3));
    /// ```
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Vacuously `true` for `Nil`.
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns the number of elements satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4].count(|x| x % 2 == 0), 2);
    /// ```
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.iter().filter(|element| predicate(*element)).count()
    }

    /// Calls `function` on every element, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// let mut sum = 0;
    /// list![1, 2, 3].foreach(|x| sum += x);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn foreach<F>(&self, function: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(function);
    }

    /// Maps the first element satisfying `predicate` with `mapper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    /// use persistent_adt::list;
    ///
    /// let list = list![1, 2, 3, 4, 5];
    /// assert_eq!(list.collect_first(|x| x % 2 == 0, |x| x * 10), some(20));
    /// assert_eq!(list.collect_first(|x| *x > 5, |x| x * 10), none());
    /// ```
    pub fn collect_first<U, P, M>(&self, predicate: P, mapper: M) -> Optional<U>
    where
        P: Fn(&T) -> bool,
        M: FnOnce(&T) -> U,
    {
        self.iter()
            .find(|element| predicate(*element))
            .map(mapper)
            .into()
    }

    /// Dispatches each element to the mapper paired with its first matching predicate.
    ///
    /// `predicates` and `mappers` are paired by position. For each element the
    /// lowest-positioned predicate that holds wins and the mapper at the same
    /// position produces the output; later predicates are not consulted.
    /// Elements matching no predicate are dropped. Output order follows the
    /// element order, not the predicate order.
    ///
    /// A predicate without a mapper at its position (or a mapper without a
    /// predicate) takes no part in the dispatch. Use
    /// [`try_collect`](Self::try_collect) to reject such inputs instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::function::{mapper, predicate};
    /// use persistent_adt::list;
    ///
    /// let predicates = list![predicate(|x: &i32| x % 2 == 0), predicate(|x: &i32| *x >= 5)];
    /// let mappers = list![mapper(|x: &i32| x * 10), mapper(|x: &i32| x * 100)];
    ///
    /// assert_eq!(list![1, 2, 3, 4, 5].collect(&predicates, &mappers), list![20, 40, 500]);
    /// ```
    #[must_use]
    pub fn collect<U, P, M>(&self, predicates: &List<P>, mappers: &List<M>) -> List<U>
    where
        P: Fn(&T) -> bool,
        M: Fn(&T) -> U,
    {
        self.iter()
            .filter_map(|element| {
                predicates
                    .iter()
                    .zip(mappers.iter())
                    .find(|(predicate, _)| predicate(element))
                    .map(|(_, mapper)| mapper(element))
            })
            .collect()
    }

    /// Like [`collect`](Self::collect), but requires one mapper per predicate.
    ///
    /// # Errors
    ///
    /// Returns [`CollectArityError`] if `predicates` and `mappers` differ in
    /// length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::error::CollectArityError;
    /// use persistent_adt::function::{mapper, predicate};
    /// use persistent_adt::list;
    ///
    /// let predicates = list![predicate(|x: &i32| x % 2 == 0), predicate(|x: &i32| *x >= 5)];
    /// let mappers = list![mapper(|x: &i32| x * 10)];
    ///
    /// let result = list![1, 2, 3].try_collect(&predicates, &mappers);
    /// assert_eq!(result, Err(CollectArityError { predicates: 2, mappers: 1 }));
    /// ```
    pub fn try_collect<U, P, M>(
        &self,
        predicates: &List<P>,
        mappers: &List<M>,
    ) -> Result<List<U>, CollectArityError>
    where
        P: Fn(&T) -> bool,
        M: Fn(&T) -> U,
    {
        let predicate_count = predicates.size();
        let mapper_count = mappers.size();
        if predicate_count != mapper_count {
            return Err(CollectArityError {
                predicates: predicate_count,
                mappers: mapper_count,
            });
        }
        Ok(self.collect(predicates, mappers))
    }
}

impl<T: PartialEq> List<T> {
    /// Returns `true` if some element equals `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// assert!(list![1, 2, 3].contains(&2));
    /// assert!(!list![1, 2, 3].contains(&4));
    /// ```
    pub fn contains(&self, element: &T) -> bool {
        self.iter().any(|candidate| candidate == element)
    }

    /// Returns the position of the first element equal to `element`, or `-1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// assert_eq!(list![5, 6, 6].index_of(&6), 1);
    /// assert_eq!(list![5, 6, 6].index_of(&7), -1);
    /// ```
    #[allow(clippy::cast_possible_wrap)]
    pub fn index_of(&self, element: &T) -> isize {
        // Every node is a live heap allocation, so a position never exceeds isize::MAX.
        self.iter()
            .position(|candidate| candidate == element)
            .map_or(-1, |index| index as isize)
    }
}

impl<T: Clone> List<T> {
    /// Copies the elements into a Vec, keeping their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// assert_eq!(list![1, 2, 3].to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns a new list with the elements in reverse order.
    ///
    /// Conses each element onto an accumulator while walking the list once.
    ///
    /// # Complexity
    ///
    /// O(n) time and space, constant stack depth
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    /// use persistent_adt::persistent::List;
    ///
    /// assert_eq!(list![1, 2, 3].reverse(), list![3, 2, 1]);
    /// assert_eq!(List::<i32>::Nil.reverse(), List::Nil);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter().fold(Self::Nil, |accumulator, element| {
            Self::Cons(element.clone(), Tail::new(accumulator))
        })
    }

    /// Returns a new list with `element` after the current elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    /// use persistent_adt::persistent::List;
    ///
    /// assert_eq!(list![1, 2].appended(3), list![1, 2, 3]);
    /// assert_eq!(List::Nil.appended(1), list![1]);
    /// ```
    #[must_use]
    pub fn appended(&self, element: T) -> Self {
        let mut elements = self.to_vec();
        elements.push(element);
        Self::build_from_vec(elements)
    }

    /// Returns a new list with the elements of `other` after the current elements.
    ///
    /// `other` may be another `List`, a `Vec`, an array, or any other
    /// finite iterable. An empty `other` yields a list equal to `self`.
    ///
    /// # Complexity
    ///
    /// O(n + m) time and space, constant stack depth
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// let list = list![1, 2];
    /// assert_eq!(list.appended_all(list![3, 4]), list![1, 2, 3, 4]);
    /// assert_eq!(list.appended_all(vec![3]), list![1, 2, 3]);
    /// assert_eq!(list.appended_all(Vec::new()), list);
    /// ```
    #[must_use]
    pub fn appended_all<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements = self.to_vec();
        elements.extend(other);
        Self::build_from_vec(elements)
    }

    /// Returns a new list of the elements satisfying `predicate`, order preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4].filter(|x| x % 2 == 1), list![1, 3]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(*element))
            .cloned()
            .collect()
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::{none, some};
    /// use persistent_adt::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4].find(|x| *x > 2), some(3));
    /// assert_eq!(list![1, 2, 3, 4].find(|x| *x > 4), none());
    /// ```
    pub fn find<P>(&self, predicate: P) -> Optional<T>
    where
        P: Fn(&T) -> bool,
    {
        self.iter()
            .find(|element| predicate(*element))
            .cloned()
            .into()
    }

    /// Returns the last element satisfying `predicate`.
    ///
    /// When several elements match, the one closest to the end of the list
    /// wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::control::some;
    /// use persistent_adt::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4].find_last(|x| x % 2 == 1), some(3));
    /// ```
    pub fn find_last<P>(&self, predicate: P) -> Optional<T>
    where
        P: Fn(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(*element))
            .last()
            .cloned()
            .into()
    }
}

impl<T> List<T> {
    /// Returns the concatenation of `function(element)` for every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_adt::list;
    ///
    /// let doubled = list![1, 2, 3].flat_map(|x| list![*x, *x]);
    /// assert_eq!(doubled, list![1, 1, 2, 2, 3, 3]);
    /// ```
    #[must_use]
    pub fn flat_map<U, F>(&self, mut function: F) -> List<U>
    where
        F: FnMut(&T) -> List<U>,
    {
        let mut elements = Vec::new();
        for element in self {
            elements.extend(function(element));
        }
        List::build_from_vec(elements)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`List`].
pub struct ListIterator<'a, T> {
    current: &'a List<T>,
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            List::Cons(head, tail) => {
                self.current = &**tail;
                Some(head)
            }
            List::Nil => None,
        }
    }
}

impl<T> std::iter::FusedIterator for ListIterator<'_, T> {}

/// An owning iterator over elements of a [`List`].
///
/// Detaches one `Cons` node per step and moves its element out; nothing is
/// cloned.
pub struct ListIntoIterator<T> {
    remaining: List<T>,
}

impl<T> Iterator for ListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::take(&mut self.remaining) {
            List::Cons(head, tail) => {
                self.remaining = tail.into_list();
                Some(head)
            }
            List::Nil => None,
        }
    }
}

impl<T> std::iter::FusedIterator for ListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::Nil
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for List<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone> From<&List<T>> for Vec<T> {
    #[inline]
    fn from(list: &List<T>) -> Self {
        list.to_vec()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIterator { remaining: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

/// Hashes the length followed by every element in order, so equal lists hash
/// equally and lists differing only in length are told apart.
impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "List(")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = List<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for List<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor::new())
    }
}

static_assertions::assert_impl_all!(List<i32>: Send, Sync, Clone, Default);

// =============================================================================
// Tests
// =============================================================================
