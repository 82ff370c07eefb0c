//! Insertion-ordered map with linear-scan key lookup.

use std::fmt;
use std::ops::Index;

use adt_core::MapError;
use smallvec::SmallVec;

use crate::INLINE_CAPACITY;

/// A key/value pair owned by an [`AssociativeMap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// The entry's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The entry's value.
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// A key-unique mapping stored as an ordered sequence of entries.
///
/// Keys are compared with `PartialEq` only. Entries keep the order in which
/// their keys were first added; replacing a value does not move its entry,
/// and removing an entry preserves the order of the rest.
#[derive(Clone)]
pub struct AssociativeMap<K, V> {
    entries: SmallVec<[Entry<K, V>; INLINE_CAPACITY]>,
}

impl<K, V> AssociativeMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            entries: self.entries.iter(),
        }
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            entries: self.entries.iter(),
        }
    }

    /// The entries themselves, in insertion order.
    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.entries
    }
}

impl<K: PartialEq, V> AssociativeMap<K, V> {
    /// Returns `true` if an entry with `key` exists.
    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Map `key` to `value`.
    ///
    /// If `key` is already present its value is replaced in place and
    /// `false` is returned; otherwise a new entry is appended and `true` is
    /// returned.
    pub fn add(&mut self, key: K, value: V) -> bool {
        match self.position(&key) {
            Some(idx) => {
                self.entries[idx].value = value;
                false
            }
            None => {
                self.entries.push(Entry { key, value });
                true
            }
        }
    }

    /// Remove the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Result<V, MapError> {
        let idx = self.position(key).ok_or(MapError::KeyNotFound)?;
        Ok(self.entries.remove(idx).value)
    }

    /// Value associated with `key`.
    pub fn value_of(&self, key: &K) -> Result<&V, MapError> {
        let idx = self.position(key).ok_or(MapError::KeyNotFound)?;
        Ok(&self.entries[idx].value)
    }

    /// Mutable value associated with `key`.
    pub fn value_of_mut(&mut self, key: &K) -> Result<&mut V, MapError> {
        let idx = self.position(key).ok_or(MapError::KeyNotFound)?;
        Ok(&mut self.entries[idx].value)
    }

    /// A new map holding this map's entries followed by `other`'s, added
    /// with [`add`](Self::add) semantics: on shared keys `other` wins.
    pub fn merge(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut merged = self.clone();
        for entry in &other.entries {
            merged.add(entry.key.clone(), entry.value.clone());
        }
        merged
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|e| e.key == *key)
    }
}

impl<K, V> Default for AssociativeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V> Index<&K> for AssociativeMap<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        match self.value_of(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for AssociativeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for AssociativeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a AssociativeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssociativeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssociativeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the keys of an [`AssociativeMap`].
pub struct Keys<'a, K, V> {
    entries: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|e| &e.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the `(key, value)` pairs of an [`AssociativeMap`].
pub struct Iter<'a, K, V> {
    entries: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
