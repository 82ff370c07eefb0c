//! The fixed-capacity slot array.
//!
//! A [`FixedArray`] is allocated once at full size and never grows or
//! shrinks. Containers that need a different capacity allocate a new array
//! and move their elements across.

use std::ops::{Index, IndexMut};

use adt_core::ArrayError;

/// A fixed-size, index-bounded array of optional slots.
///
/// Every slot starts empty (`None`). Access outside `[0, len)` fails with
/// [`ArrayError::OutOfRange`]; indices are never clamped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedArray<T> {
    slots: Box<[Option<T>]>,
}

impl<T> FixedArray<T> {
    /// Create an array of `size` empty slots.
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, ArrayError> {
        if size == 0 {
            return Err(ArrayError::InvalidArgument { size });
        }
        let slots = std::iter::repeat_with(|| None).take(size).collect();
        Ok(Self { slots })
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a `FixedArray` has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Contents of the slot at `index`.
    pub fn get(&self, index: usize) -> Result<Option<&T>, ArrayError> {
        self.check(index)?;
        Ok(self.slots[index].as_ref())
    }

    /// Mutable contents of the slot at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, ArrayError> {
        self.check(index)?;
        Ok(self.slots[index].as_mut())
    }

    /// Store `value` at `index`, returning what the slot held before.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, ArrayError> {
        self.check(index)?;
        Ok(self.slots[index].replace(value))
    }

    /// Empty the slot at `index`, returning its contents.
    pub fn take(&mut self, index: usize) -> Result<Option<T>, ArrayError> {
        self.check(index)?;
        Ok(self.slots[index].take())
    }

    /// Reset every slot to the empty sentinel.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Overwrite every slot with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.slots.fill(Some(value));
    }

    /// Iterate over the slots in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// The raw slots.
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.slots
    }

    /// The raw slots, mutably. Length is fixed; contents are not.
    pub fn as_mut_slice(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    fn check(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.slots.len() {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl<T> Index<usize> for FixedArray<T> {
    type Output = Option<T>;

    fn index(&self, index: usize) -> &Self::Output {
        if let Err(e) = self.check(index) {
            panic!("{e}");
        }
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for FixedArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if let Err(e) = self.check(index) {
            panic!("{e}");
        }
        &mut self.slots[index]
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the slots of a [`FixedArray`], yielding `None` for empty
/// slots.
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
