//! The growable vector.

use std::fmt;
use std::ops::{Index, IndexMut};

use adt_array::FixedArray;
use adt_core::{ArrayError, ConfigError, VectorConfig};
use tracing::trace;

/// A resizable sequence backed by a [`FixedArray`].
///
/// Elements occupy slots `0..len` of the backing array; slots
/// `len..capacity` are empty. Bounds for `get`/`set`/`remove` are checked
/// against the logical length, not the capacity.
///
/// Capacity changes run synchronously inside the mutation that triggers
/// them. A single rebalance routine decides the new capacity: grow when
/// full, otherwise shrink when under-occupied. It runs before a push or
/// insert into a full array and after every insert and remove, so an
/// insert may shrink (or, if it filled the array, grow) on its way out.
#[derive(Clone)]
pub struct DynamicVector<T> {
    array: FixedArray<T>,
    len: usize,
    config: VectorConfig,
}

impl<T> DynamicVector<T> {
    /// Create an empty vector with the default initial capacity of 2.
    pub fn new() -> Self {
        Self::with_config(VectorConfig::default()).expect("default VectorConfig is valid")
    }

    /// Create an empty vector with the given initial capacity and the
    /// default resize policy.
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            array: FixedArray::new(capacity)?,
            len: 0,
            config: VectorConfig::new(capacity),
        })
    }

    /// Create an empty vector from a validated config.
    pub fn with_config(config: VectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            array: FixedArray::new(config.initial_capacity)?,
            len: 0,
            config,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing array.
    pub fn capacity(&self) -> usize {
        self.array.len()
    }

    /// The resize policy in effect.
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.check(index)?;
        self.array.get(index)?.ok_or(ArrayError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Mutable element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check(index)?;
        let len = self.len;
        self.array
            .get_mut(index)?
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Replace the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ArrayError> {
        self.check(index)?;
        let len = self.len;
        self.array
            .set(index, value)?
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Append `value` at the end, growing first if the array is full.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.rebalance();
        }
        self.array.as_mut_slice()[self.len] = Some(value);
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// `index` may equal `len()` (append position). Grows first if full,
    /// then rebalances after the insert.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.capacity() {
            self.rebalance();
        }
        let slots = self.array.as_mut_slice();
        slots[self.len] = Some(value);
        slots[index..=self.len].rotate_right(1);
        self.len += 1;
        self.rebalance();
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left, then rebalance.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check(index)?;
        let len = self.len;
        let slots = self.array.as_mut_slice();
        let removed = slots[index].take();
        slots[index..len].rotate_left(1);
        self.len -= 1;
        self.rebalance();
        removed.ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Remove and return the last element.
    ///
    /// Fails with [`ArrayError::OutOfRange`] on an empty vector.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        match self.len.checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(ArrayError::OutOfRange { index: 0, len: 0 }),
        }
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.array.as_slice()[..self.len].iter(),
        }
    }

    /// Grow if full, otherwise shrink if under-occupied.
    ///
    /// A computed capacity equal to the current one leaves the backing
    /// array untouched.
    fn rebalance(&mut self) {
        let capacity = self.capacity();
        let (target, direction) = if self.len == capacity {
            (self.config.grown_capacity(self.len), "grow")
        } else if self.config.should_shrink(self.len, capacity) {
            (self.config.shrunk_capacity(capacity, self.len), "shrink")
        } else {
            return;
        };
        if target == capacity {
            return;
        }
        trace!(
            direction = direction,
            from = capacity,
            to = target,
            len = self.len,
            "vector resized"
        );
        self.reallocate(target);
    }

    fn reallocate(&mut self, capacity: usize) {
        let mut array = FixedArray::new(capacity).expect("computed capacity is at least 1");
        let live = &mut self.array.as_mut_slice()[..self.len];
        for (dst, src) in array.as_mut_slice().iter_mut().zip(live) {
            *dst = src.take();
        }
        self.array = array;
    }

    fn check(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T> Default for DynamicVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicVector<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector([")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "])")
    }
}

impl<T> FromIterator<T> for DynamicVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T> Extend<T> for DynamicVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicVector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`DynamicVector`], front to back.
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
