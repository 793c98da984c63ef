//! Keyed collection with hashed lookup over heterogeneous key types.

use std::fmt;

use crate::collection::OrderedMap;
use crate::map::entry::Entry;
use crate::map::key::{KeyHash, MapKey};
use crate::stream::{Stream, collectors, mappers};

/// A keyed collection indexing entries by their normalized key form.
///
/// `Map` owns an insertion-ordered table from [`KeyHash`] to
/// [`Entry`], so the original key travels with its value while lookups go
/// through the normalized representation. Derived views (`keys`, `values`,
/// `stream`) are built with [`Stream`] pipelines over a snapshot of the
/// table and never disturb it.
///
/// # Examples
///
/// ```rust
/// use streamap::map::Map;
///
/// let mut map = Map::new();
/// map.put("a", 1);
/// map.put("b", 2);
/// map.put("a", 3);
///
/// assert_eq!(map.keys(), vec!["a", "b"]);
/// assert_eq!(map.values(), vec![3, 2]);
/// assert_eq!(map.get("a"), Some(&3));
/// assert_eq!(map.get_or("z", -1), -1);
/// ```
#[derive(Clone)]
pub struct Map<K, V> {
    /// Normalized key to entry, in first-insertion order.
    entries: OrderedMap<KeyHash, Entry<K, V>>,
}

impl<K: MapKey, V> Map<K, V> {
    /// Creates a new empty map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: OrderedMap::new(),
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

    /// Stores `value` under `key`.
    ///
    /// The slot is addressed by the key's normalized form: a new key is
    /// appended, an existing one is overwritten in place with its position
    /// unchanged.
    pub fn put(&mut self, key: K, value: V) {
        let key_hash = key.key_hash();
        self.entries.insert(key_hash, Entry::new(key, value));
    }

    /// Returns a reference to the value for `key`, if present.
    ///
    /// Any key type with the same normalized form addresses the same slot,
    /// so a `&str` looks up a `String` key. A missing key yields `None`,
    /// never an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::map::Map;
    ///
    /// let mut map = Map::new();
    /// map.put("a".to_string(), 1);
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("z"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: MapKey + ?Sized,
    {
        self.entries.get(&key.key_hash()).map(Entry::value)
    }

    /// Returns the value for `key`, or `default` when absent.
    #[must_use]
    pub fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        Q: MapKey + ?Sized,
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: MapKey + ?Sized,
    {
        self.entries.contains_key(&key.key_hash())
    }

    /// Returns all keys as a fresh sequence in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
        V: Clone,
    {
        Stream::of(self.entries.clone())
            .map(mappers::entry_keys())
            .collect(collectors::to_values())
    }

    /// Returns all values as a fresh sequence in insertion order.
    #[must_use]
    pub fn values(&self) -> Vec<V>
    where
        K: Clone,
        V: Clone,
    {
        Stream::of(self.entries.clone())
            .map(mappers::entry_values())
            .collect(collectors::to_values())
    }

    /// Returns an immutable view of the internal entry table.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &OrderedMap<KeyHash, Entry<K, V>> {
        &self.entries
    }

    /// Returns a [`Stream`] over the values of this map.
    ///
    /// The stream operates on a snapshot transformed out of the entry
    /// table; chaining mutations on it never corrupts the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::map::Map;
    ///
    /// let mut map = Map::new();
    /// map.put("a", 1);
    /// map.put("b", 2);
    ///
    /// let total: i32 = map.stream().into_iter().map(|(_, value)| value).sum();
    /// assert_eq!(total, 3);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub fn stream(&self) -> Stream<KeyHash, V>
    where
        K: Clone,
        V: Clone,
    {
        Stream::of(self.entries.clone()).map(mappers::entry_values())
    }

    /// Creates a map by putting each pair in iteration order.
    ///
    /// Later duplicate keys overwrite earlier ones; the final order
    /// reflects each unique key's first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::map::Map;
    ///
    /// let map = Map::from_entries([("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(map.keys(), vec!["a", "b"]);
    /// assert_eq!(map.values(), vec![3, 2]);
    /// ```
    #[must_use]
    pub fn from_entries<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.put(key, value);
        }
        map
    }
}

impl<K: MapKey, V> Default for Map<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|(_, entry)| (entry.key(), entry.value())))
            .finish()
    }
}

impl<K: MapKey, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::from_entries(pairs)
    }
}
