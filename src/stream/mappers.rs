//! Transform factories for [`Stream::map`](crate::stream::Stream::map) and
//! [`Stream::map_keys`](crate::stream::Stream::map_keys).
//!
//! Each factory returns a `(value, key)` transform. The entry-oriented
//! factories ([`entry_keys`], [`entry_values`], [`as_entries`]) bridge
//! between raw pairs and [`Entry`] values, which is how
//! [`Map`](crate::map::Map) derives its views through stream pipelines.

use crate::collection::OrderedMap;
use crate::map::Entry;

/// Identity transform: every value maps to itself.
pub fn values<K, V>() -> impl FnMut(V, &K) -> V {
    |value, _| value
}

/// Replaces every value with its key.
///
/// # Examples
///
/// ```rust
/// use streamap::collection::OrderedMap;
/// use streamap::stream::{Stream, collectors, mappers};
///
/// let keyed = Stream::of(OrderedMap::from([("a", 1), ("b", 2)]))
///     .map(mappers::keys())
///     .collect(collectors::to_values());
/// assert_eq!(keyed, vec!["a", "b"]);
/// ```
pub fn keys<K: Clone, V>() -> impl FnMut(V, &K) -> K {
    |_, key| key.clone()
}

/// Extracts the key from an [`Entry`] value.
pub fn entry_keys<H, K, V>() -> impl FnMut(Entry<K, V>, &H) -> K {
    |entry, _| entry.into_key()
}

/// Extracts the value from an [`Entry`] value.
pub fn entry_values<H, K, V>() -> impl FnMut(Entry<K, V>, &H) -> V {
    |entry, _| entry.into_value()
}

/// Applies `function` to every value, ignoring keys.
///
/// The function is the named operation to perform on each item; additional
/// arguments ride in its captures.
///
/// # Examples
///
/// ```rust
/// use streamap::collection::OrderedMap;
/// use streamap::stream::{Stream, collectors, mappers};
///
/// let shouted = Stream::of(OrderedMap::from([(0, "a"), (1, "b")]))
///     .map(mappers::call_with_value(str::to_uppercase))
///     .collect(collectors::to_values());
/// assert_eq!(shouted, vec!["A".to_string(), "B".to_string()]);
/// ```
pub fn call_with_value<K, V, R, F>(mut function: F) -> impl FnMut(V, &K) -> R
where
    F: FnMut(V) -> R,
{
    move |value, _| function(value)
}

/// Wraps every `(value, key)` pair into an [`Entry`] keyed by the pair's key.
///
/// # Examples
///
/// ```rust
/// use streamap::collection::OrderedMap;
/// use streamap::map::Entry;
/// use streamap::stream::{Stream, collectors, mappers};
///
/// let entries = Stream::of(OrderedMap::from([("a", 1)]))
///     .map(mappers::as_entries())
///     .collect(collectors::to_values());
/// assert_eq!(entries, vec![Entry::new("a", 1)]);
/// ```
pub fn as_entries<K: Clone, V>() -> impl FnMut(V, &K) -> Entry<K, V> {
    |value, key| Entry::new(key.clone(), value)
}

/// Extracts the field stored under `key` from every keyed item.
///
/// An item missing the field yields `None`.
///
/// # Examples
///
/// ```rust
/// use streamap::collection::OrderedMap;
/// use streamap::stream::{Stream, collectors, mappers};
///
/// let rows = OrderedMap::from([
///     (0, OrderedMap::from([("name", "ada"), ("role", "engineer")])),
///     (1, OrderedMap::from([("role", "ghost")])),
/// ]);
/// let names = Stream::of(rows)
///     .map(mappers::item_key("name"))
///     .collect(collectors::to_values());
/// assert_eq!(names, vec![Some("ada"), None]);
/// ```
pub fn item_key<K, K2, V>(key: K2) -> impl FnMut(OrderedMap<K2, V>, &K) -> Option<V>
where
    K2: PartialEq,
{
    move |mut item, _| item.remove(&key)
}
