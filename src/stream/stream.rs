//! Fluent transformation pipelines over ordered key-value collections.

use std::fmt;

use crate::collection::{OrderedMap, OrderedMapIntoIterator};
use crate::optional::Optional;

/// A fluent pipeline over an [`OrderedMap`].
///
/// A `Stream` owns its backing collection: construction moves the map in,
/// every chaining operation consumes the stream, mutates the backing map and
/// returns the stream (re-typed where the transform changes key or value
/// types), and a terminal [`collect`](Self::collect) moves the map out
/// again. The source collection is consumed, never aliased.
///
/// Transforms receive `(value, key)` in that order.
///
/// # Examples
///
/// ```rust
/// use streamap::collection::OrderedMap;
/// use streamap::stream::{Stream, collectors};
///
/// let survivors = Stream::of(OrderedMap::from([(0, 1), (1, 2), (2, 3), (3, 4)]))
///     .filter(|value, _| value % 2 == 0)
///     .map(|value, _| value * 10)
///     .collect(collectors::to_array());
///
/// // Surviving entries keep their keys; nothing is re-indexed
/// assert_eq!(survivors, OrderedMap::from([(1, 20), (3, 40)]));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Stream<K, V> {
    /// The backing collection every operation acts on.
    entries: OrderedMap<K, V>,
}

impl<K, V> Stream<K, V> {
    /// Creates a stream that takes ownership of `entries`.
    ///
    /// All subsequent operations apply directly to this backing collection.
    #[inline]
    #[must_use]
    pub fn of(entries: OrderedMap<K, V>) -> Self {
        Self { entries }
    }

    /// Invokes `action(value, key)` for every entry in current order.
    ///
    /// The backing collection is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    /// use streamap::stream::Stream;
    ///
    /// let mut seen = Vec::new();
    /// Stream::of(OrderedMap::from([("a", 1), ("b", 2)]))
    ///     .for_each(|value, key| seen.push((*key, *value)));
    /// assert_eq!(seen, vec![("a", 1), ("b", 2)]);
    /// ```
    pub fn for_each<F>(self, mut action: F) -> Self
    where
        F: FnMut(&V, &K),
    {
        for (key, value) in &self.entries {
            action(value, key);
        }
        self
    }

    /// Keeps only the entries satisfying `predicate(value, key)`.
    ///
    /// Entries are visited exactly once, in current order; survivors keep
    /// their keys and relative order.
    #[must_use]
    pub fn filter<F>(mut self, mut predicate: F) -> Self
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.entries.retain(|key, value| predicate(value, key));
        self
    }

    /// Replaces every value with `transform(value, key)`.
    ///
    /// Keys and their order are unchanged; only values are rewritten.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    /// use streamap::stream::{Stream, collectors};
    ///
    /// let lengths = Stream::of(OrderedMap::from([("a", "x"), ("b", "xyz")]))
    ///     .map(|value, _| value.len())
    ///     .collect(collectors::to_array());
    /// assert_eq!(lengths, OrderedMap::from([("a", 1), ("b", 3)]));
    /// ```
    #[must_use]
    pub fn map<V2, F>(self, mut transform: F) -> Stream<K, V2>
    where
        F: FnMut(V, &K) -> V2,
    {
        Stream {
            entries: OrderedMap::from_iter_unchecked(self.entries.into_iter().map(
                |(key, value)| {
                    let transformed = transform(value, &key);
                    (key, transformed)
                },
            )),
        }
    }

    /// Re-keys every entry with `transform(value, key)`.
    ///
    /// Entries are processed in current order. When two entries produce the
    /// same new key, the later-processed value wins while the slot keeps the
    /// first producer's position, so the entry count drops by one per
    /// collision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    /// use streamap::stream::{Stream, collectors};
    ///
    /// let by_parity = Stream::of(OrderedMap::from([(0, 1), (1, 2), (2, 3)]))
    ///     .map_keys(|value, _| value % 2)
    ///     .collect(collectors::to_array());
    /// assert_eq!(by_parity, OrderedMap::from([(1, 3), (0, 2)]));
    /// ```
    #[must_use]
    pub fn map_keys<K2, F>(self, mut transform: F) -> Stream<K2, V>
    where
        K2: PartialEq,
        F: FnMut(&V, &K) -> K2,
    {
        let mut rekeyed = OrderedMap::with_capacity(self.entries.len());
        for (key, value) in self.entries {
            let new_key = transform(&value, &key);
            rekeyed.insert(new_key, value);
        }
        Stream::of(rekeyed)
    }

    /// Keeps only the first `count` entries in current order.
    ///
    /// A `count` at or beyond the current length is a no-op; zero empties
    /// the stream. Never an error.
    #[must_use]
    pub fn limit(mut self, count: usize) -> Self {
        self.entries.truncate(count);
        self
    }

    /// Drops the first `count` entries, keeping the rest in order.
    ///
    /// A `count` at or beyond the current length empties the stream. Never
    /// an error.
    #[must_use]
    pub fn skip(mut self, count: usize) -> Self {
        self.entries.skip_front(count);
        self
    }

    /// Discards keys, re-indexing the values sequentially from zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    /// use streamap::stream::{Stream, collectors};
    ///
    /// let sequence = Stream::of(OrderedMap::from([("a", 10), ("b", 20)]))
    ///     .values()
    ///     .collect(collectors::to_array());
    /// assert_eq!(sequence, OrderedMap::from([(0, 10), (1, 20)]));
    /// ```
    #[must_use]
    pub fn values(self) -> Stream<usize, V> {
        Stream {
            entries: OrderedMap::from_iter_unchecked(
                self.entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, (_, value))| (index, value)),
            ),
        }
    }

    /// Replaces every value with its own key, re-indexing sequentially.
    #[must_use]
    pub fn keys(self) -> Stream<usize, K> {
        Stream {
            entries: OrderedMap::from_iter_unchecked(
                self.entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, (key, _))| (index, key)),
            ),
        }
    }

    /// Returns the first value in current order, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::collection::OrderedMap;
    /// use streamap::optional::Optional;
    /// use streamap::stream::Stream;
    ///
    /// let stream = Stream::of(OrderedMap::from([("a", 1), ("b", 2)]));
    /// assert_eq!(stream.first(), Optional::of(1));
    ///
    /// let empty: Stream<&str, i32> = Stream::of(OrderedMap::new());
    /// assert!(empty.first().is_empty());
    /// ```
    #[must_use]
    pub fn first(&self) -> Optional<V>
    where
        V: Clone,
    {
        self.entries
            .first()
            .map_or_else(Optional::empty_value, |(_, value)| {
                Optional::of(value.clone())
            })
    }

    /// Returns the last value in current order, if any.
    #[must_use]
    pub fn last(&self) -> Optional<V>
    where
        V: Clone,
    {
        self.entries
            .last()
            .map_or_else(Optional::empty_value, |(_, value)| {
                Optional::of(value.clone())
            })
    }

    /// Ends the pipeline, handing the backing collection to `collector`.
    ///
    /// Returns whatever the collector produces.
    pub fn collect<R, C>(self, collector: C) -> R
    where
        C: FnOnce(OrderedMap<K, V>) -> R,
    {
        collector(self.entries)
    }

    /// Returns the number of entries currently in the stream.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stream holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the stream, returning the backing collection.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> OrderedMap<K, V> {
        self.entries
    }
}

impl<K, V> From<OrderedMap<K, V>> for Stream<K, V> {
    fn from(entries: OrderedMap<K, V>) -> Self {
        Self::of(entries)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Stream<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Stream").field(&self.entries).finish()
    }
}

impl<K, V> IntoIterator for Stream<K, V> {
    type Item = (K, V);
    type IntoIter = OrderedMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
