//! Collector factories for [`Stream::collect`](crate::stream::Stream::collect).
//!
//! A collector is the terminal function a pipeline hands its backing
//! collection to; its return value ends the chain.

use crate::collection::OrderedMap;
use crate::map::{Map, MapKey};

/// Identity collector: returns the backing collection unchanged.
///
/// # Examples
///
/// ```rust
/// use streamap::collection::OrderedMap;
/// use streamap::stream::{Stream, collectors};
///
/// let backing = OrderedMap::from([("a", 1)]);
/// let collected = Stream::of(backing.clone()).collect(collectors::to_array());
/// assert_eq!(collected, backing);
/// ```
pub fn to_array<K, V>() -> impl FnOnce(OrderedMap<K, V>) -> OrderedMap<K, V> {
    |backing| backing
}

/// Builds a [`Map`] from the backing collection's pairs.
///
/// Duplicate normalized keys resolve by put semantics.
///
/// # Examples
///
/// ```rust
/// use streamap::collection::OrderedMap;
/// use streamap::stream::{Stream, collectors};
///
/// let map = Stream::of(OrderedMap::from([("a", 1), ("b", 2)]))
///     .collect(collectors::to_map());
/// assert_eq!(map.get("a"), Some(&1));
/// assert_eq!(map.get("b"), Some(&2));
/// ```
pub fn to_map<K: MapKey, V>() -> impl FnOnce(OrderedMap<K, V>) -> Map<K, V> {
    |backing| Map::from_entries(backing)
}

/// Collects the values into a `Vec` in order, discarding keys.
///
/// # Examples
///
/// ```rust
/// use streamap::collection::OrderedMap;
/// use streamap::stream::{Stream, collectors};
///
/// let values = Stream::of(OrderedMap::from([("a", 1), ("b", 2)]))
///     .collect(collectors::to_values());
/// assert_eq!(values, vec![1, 2]);
/// ```
pub fn to_values<K, V>() -> impl FnOnce(OrderedMap<K, V>) -> Vec<V> {
    |backing| backing.into_values()
}
