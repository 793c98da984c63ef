//! Insertion-ordered map with put semantics.
//!
//! This module provides [`OrderedMap`], a key-value container that preserves
//! insertion order and keeps keys unique by linear comparison.
//!
//! # Overview
//!
//! `OrderedMap` stores its entries in a single contiguous buffer in the order
//! keys were first inserted. Updating an existing key replaces its value in
//! place without moving it; removing a key shifts the remainder so the
//! relative order of the survivors never changes. Lookup is a linear scan,
//! which makes the container suitable for the modest collection sizes that
//! stream pipelines typically carry.
//!
//! Small collections (up to 8 entries) live inline without a heap
//! allocation; larger ones spill to the heap automatically.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(n)       |
//! | `get`          | O(n)       |
//! | `remove`       | O(n)       |
//! | `contains_key` | O(n)       |
//! | `len`          | O(1)       |
//! | `is_empty`     | O(1)       |
//! | `truncate`     | O(n)       |
//! | `skip_front`   | O(n)       |
//! | `retain`       | O(n)       |
//! | `iter`         | O(1) + O(n)|
//!
//! # Examples
//!
//! ```rust
//! use streamap::collection::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("one", 1);
//! map.insert("two", 2);
//! map.insert("three", 3);
//!
//! assert_eq!(map.get("two"), Some(&2));
//! assert_eq!(map.keys().collect::<Vec<_>>(), vec![&"one", &"two", &"three"]);
//! ```

use std::borrow::Borrow;
use std::fmt;

use smallvec::SmallVec;

/// Number of entries stored inline before spilling to the heap.
const INLINE_CAPACITY: usize = 8;

/// Entry buffer type: inline up to [`INLINE_CAPACITY`], heap beyond.
type EntryBuffer<K, V> = SmallVec<[(K, V); INLINE_CAPACITY]>;

/// An insertion-ordered key-value map with put semantics.
///
/// Keys are unique; inserting an existing key overwrites its value in place
/// while keeping the key's original position. New keys are appended. All
/// iteration and derived views follow first-insertion order.
///
/// # Examples
///
/// ```rust
/// use streamap::collection::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
/// let previous = map.insert("a", 3);
///
/// assert_eq!(previous, Some(1));
/// assert_eq!(map.values().collect::<Vec<_>>(), vec![&3, &2]);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    /// Entries in first-insertion order.
    entries: EntryBuffer<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    ///
    /// let map: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Creates a new empty map with room for at least `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SmallVec::with_capacity(capacity),
        }
    }

    /// Builds a map directly from pairs whose keys are already unique.
    ///
    /// Callers must guarantee uniqueness; no deduplication is performed.
    pub(crate) fn from_iter_unchecked<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first entry in insertion order, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// assert_eq!(map.first(), Some((&"a", &1)));
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|entry| (&entry.0, &entry.1))
    }

    /// Returns the last entry in insertion order, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|entry| (&entry.0, &entry.1))
    }

    /// Keeps only the first `count` entries, dropping the rest.
    ///
    /// A `count` at or beyond the current length leaves the map unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(0, "a"), (1, "b"), (2, "c")]);
    /// map.truncate(2);
    /// assert_eq!(map.len(), 2);
    ///
    /// map.truncate(10);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    pub fn truncate(&mut self, count: usize) {
        self.entries.truncate(count);
    }

    /// Removes the first `count` entries, keeping the remainder in order.
    ///
    /// A `count` at or beyond the current length empties the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(0, "a"), (1, "b"), (2, "c")]);
    /// map.skip_front(2);
    /// assert_eq!(map.first(), Some((&2, &"c")));
    /// ```
    pub fn skip_front(&mut self, count: usize) {
        let count = count.min(self.entries.len());
        self.entries.drain(..count);
    }

    /// Keeps only the entries for which `keep` returns `true`.
    ///
    /// Entries are visited exactly once, in insertion order; the survivors
    /// keep their keys and relative order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries.retain(|entry| keep(&entry.0, &entry.1));
    }

    /// Returns an iterator over key-value pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> OrderedMapIterator<'_, K, V> {
        OrderedMapIterator {
            entries: self.entries.iter(),
        }
    }

    /// Returns an iterator over keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in insertion order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Consumes the map, returning its keys as a `Vec` in insertion order.
    #[must_use]
    pub fn into_keys(self) -> Vec<K> {
        self.entries.into_iter().map(|(key, _)| key).collect()
    }

    /// Consumes the map, returning its values as a `Vec` in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// assert_eq!(map.into_values(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, value)| value).collect()
    }
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    /// Inserts a key-value pair with put semantics.
    ///
    /// If the key is already present, its value is replaced in place (the
    /// key keeps its position) and the previous value is returned. A new key
    /// is appended at the end and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.insert("a", 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|entry| entry.0 == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns a reference to the value for `key`, if present.
    ///
    /// The key may be any borrowed form of the map's key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    ///
    /// let map = OrderedMap::from([("a".to_string(), 1)]);
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("b"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|entry| entry.0.borrow() == key)
            .map(|entry| &entry.1)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter_mut()
            .find(|entry| entry.0.borrow() == key)
            .map(|entry| &mut entry.1)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// The remaining entries keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.remove("b"), Some(2));
    /// assert_eq!(map.keys().collect::<Vec<_>>(), vec![&"a", &"c"]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.0.borrow() == key)?;
        Some(self.entries.remove(position).1)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    /// Order-sensitive equality: two maps are equal when their entry
    /// sequences match pairwise.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: PartialEq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    /// Collects pairs with put semantics: a later duplicate key overwrites
    /// the earlier value while keeping the first-insertion position.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut map = Self::new();
        map.extend(pairs);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }
}

impl<K: PartialEq, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: PartialEq, V> From<Vec<(K, V)>> for OrderedMap<K, V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over key-value pairs of an [`OrderedMap`].
pub struct OrderedMapIterator<'a, K, V> {
    entries: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for OrderedMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| (&entry.0, &entry.1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// An owning iterator over key-value pairs of an [`OrderedMap`].
pub struct OrderedMapIntoIterator<K, V> {
    entries: smallvec::IntoIter<[(K, V); INLINE_CAPACITY]>,
}

impl<K, V> Iterator for OrderedMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = OrderedMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedMapIntoIterator {
            entries: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = OrderedMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for OrderedMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for OrderedMap<K, V>
where
    K: serde::Deserialize<'de> + PartialEq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct OrderedMapVisitor<K, V> {
            marker: std::marker::PhantomData<(K, V)>,
        }

        impl<'de, K, V> serde::de::Visitor<'de> for OrderedMapVisitor<K, V>
        where
            K: serde::Deserialize<'de> + PartialEq,
            V: serde::Deserialize<'de>,
        {
            type Value = OrderedMap<K, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a key-value map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


static_assertions::assert_impl_all!(OrderedMap<i32, String>: Send, Sync);
