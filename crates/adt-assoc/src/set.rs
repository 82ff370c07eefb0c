//! Unordered collection of unique elements with set algebra.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};

use adt_core::SetError;
use smallvec::SmallVec;

use crate::INLINE_CAPACITY;

/// A collection holding each element at most once.
///
/// Membership is decided by `PartialEq` with a linear scan. Iteration
/// follows insertion order, but equality and ordering ignore it:
/// `a == b` when both hold the same elements, and `a < b` when `a` is a
/// strict subset of `b`. Sets where neither contains the other are
/// unordered.
///
/// # Examples
///
/// ```
/// use adt_assoc::UniqueSet;
///
/// let a = UniqueSet::from([1, 2, 3]);
/// let b = UniqueSet::from([3, 4, 5]);
/// assert_eq!(&a & &b, UniqueSet::from([3]));
/// assert!(UniqueSet::from([3]) < a);
/// assert_eq!(a.partial_cmp(&b), None);
/// ```
#[derive(Clone)]
pub struct UniqueSet<T> {
    elements: SmallVec<[T; INLINE_CAPACITY]>,
}

impl<T> UniqueSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: PartialEq> UniqueSet<T> {
    /// Returns `true` if `element` is a member.
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Add `element`, returning `false` if it was already a member.
    pub fn add(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Remove `element`, returning the stored value.
    pub fn remove(&mut self, element: &T) -> Result<T, SetError> {
        let idx = self
            .elements
            .iter()
            .position(|e| e == element)
            .ok_or(SetError::ElementNotFound)?;
        Ok(self.elements.remove(idx))
    }

    /// Returns `true` if every element of `self` is in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|e| other.contains(e))
    }

    /// Returns `true` if every element of `other` is in `self`.
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// Elements in `self`, `other`, or both.
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut elements = self.elements.clone();
        elements.extend(other.iter().filter(|e| !self.contains(e)).cloned());
        Self { elements }
    }

    /// Elements in both `self` and `other`.
    pub fn intersect(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self {
            elements: self.iter().filter(|e| other.contains(e)).cloned().collect(),
        }
    }

    /// Elements in `self` but not in `other`.
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self {
            elements: self.iter().filter(|e| !other.contains(e)).cloned().collect(),
        }
    }
}

impl<T> Default for UniqueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for UniqueSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }
}

impl<T: Eq> Eq for UniqueSet<T> {}

impl<T: PartialEq> PartialOrd for UniqueSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subset_of(other), other.is_subset_of(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl<T: PartialEq + Clone> BitOr for &UniqueSet<T> {
    type Output = UniqueSet<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: PartialEq + Clone> BitAnd for &UniqueSet<T> {
    type Output = UniqueSet<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<T: PartialEq + Clone> Sub for &UniqueSet<T> {
    type Output = UniqueSet<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: PartialEq> FromIterator<T> for UniqueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for UniqueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for UniqueSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a UniqueSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for UniqueSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, e) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adt_test_utils::strategies::arb_elements;
    use proptest::prelude::*;

    #[test]
    fn add_is_idempotent() {
        let mut s = UniqueSet::new();
        assert!(s.add(7));
        assert!(!s.add(7));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn from_array_drops_duplicates() {
        let s = UniqueSet::from([1, 2, 2, 3, 1]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.to_string(), "{1, 2, 3}");
    }

    #[test]
    fn remove_absent_element_fails() {
        let mut s = UniqueSet::from([1, 2]);
        assert_eq!(s.remove(&5), Err(SetError::ElementNotFound));
        assert_eq!(s.remove(&1), Ok(1));
        assert_eq!(s.to_string(), "{2}");
    }

    #[test]
    fn intersection_of_overlapping_sets() {
        let a = UniqueSet::from([1, 2, 3]);
        let b = UniqueSet::from([3, 4, 5]);
        assert_eq!(&a & &b, UniqueSet::from([3]));
        assert_eq!(a.intersect(&b).len(), 1);
    }

    #[test]
    fn difference_keeps_left_only() {
        let a = UniqueSet::from([1, 2]);
        let b = UniqueSet::from([2, 3]);
        assert_eq!(&a - &b, UniqueSet::from([1]));
        assert_eq!(&b - &a, UniqueSet::from([3]));
    }

    #[test]
    fn union_preserves_left_order_then_new_right() {
        let a = UniqueSet::from([3, 1]);
        let b = UniqueSet::from([1, 4, 2]);
        assert_eq!((&a | &b).to_string(), "{3, 1, 4, 2}");
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(UniqueSet::from([1, 2, 3]), UniqueSet::from([3, 1, 2]));
        assert_ne!(UniqueSet::from([1, 2]), UniqueSet::from([1, 2, 3]));
        assert_eq!(UniqueSet::<u8>::new(), UniqueSet::new());
    }

    #[test]
    fn strict_subset_orders_less() {
        let small = UniqueSet::from([1, 2]);
        let big = UniqueSet::from([2, 1, 3]);
        assert!(small < big);
        assert!(small <= big);
        assert!(big > small);
        assert!(big >= small);
        assert!(!(big < big.clone()));
        assert!(big <= big.clone());
    }

    #[test]
    fn disjoint_sets_are_unordered() {
        let a = UniqueSet::from([1, 2]);
        let b = UniqueSet::from([3, 4]);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b));
        assert!(!(a > b));
        assert!(!(a >= b));
    }

    #[test]
    fn empty_set_is_subset_of_everything() {
        let empty = UniqueSet::<i32>::new();
        assert!(empty.is_subset_of(&UniqueSet::from([1])));
        assert!(empty.is_subset_of(&empty));
        assert!(UniqueSet::from([1]).is_superset_of(&empty));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(UniqueSet::<i32>::new().to_string(), "{}");
        assert_eq!(format!("{:?}", UniqueSet::from(["a"])), "{\"a\"}");
    }

    fn set_of(raw: &[u8]) -> UniqueSet<u8> {
        raw.iter().copied().collect()
    }

    proptest! {
        #[test]
        fn union_size_is_bounded(a in arb_elements(), b in arb_elements()) {
            let (a, b) = (set_of(&a), set_of(&b));
            let u = &a | &b;
            prop_assert!(u.len() <= a.len() + b.len());
            prop_assert!(u.len() >= a.len().max(b.len()));
            prop_assert!(a.is_subset_of(&u));
            prop_assert!(b.is_subset_of(&u));
        }

        #[test]
        fn intersection_is_subset_of_both(a in arb_elements(), b in arb_elements()) {
            let (a, b) = (set_of(&a), set_of(&b));
            let i = &a & &b;
            prop_assert!(i <= a);
            prop_assert!(i <= b);
            prop_assert_eq!(&i, &(&b & &a));
        }

        #[test]
        fn difference_and_intersection_partition(a in arb_elements(), b in arb_elements()) {
            let (a, b) = (set_of(&a), set_of(&b));
            let d = &a - &b;
            let i = &a & &b;
            prop_assert_eq!(d.len() + i.len(), a.len());
            prop_assert!(d.iter().all(|e| !b.contains(e)));
            prop_assert_eq!(&d | &i, a);
        }

        #[test]
        fn elements_stay_unique(raw in arb_elements()) {
            let s = set_of(&raw);
            let items: Vec<_> = s.iter().collect();
            for (i, x) in items.iter().enumerate() {
                prop_assert!(!items[i + 1..].contains(x));
            }
            prop_assert!(raw.iter().all(|e| s.contains(e)));
        }

        #[test]
        fn order_agrees_with_subset(a in arb_elements(), b in arb_elements()) {
            let (a, b) = (set_of(&a), set_of(&b));
            prop_assert_eq!(a <= b, a.is_subset_of(&b));
            prop_assert_eq!(a >= b, a.is_superset_of(&b));
            prop_assert_eq!(a == b, a <= b && b <= a);
        }
    }
}
