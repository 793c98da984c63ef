//! Predicate factories for [`Stream::filter`](crate::stream::Stream::filter).
//!
//! Each factory captures a comparand and returns a `(value, key)` predicate
//! using the native comparison semantics of the operand types.
//!
//! # Examples
//!
//! ```rust
//! use streamap::collection::OrderedMap;
//! use streamap::stream::{Stream, collectors, filters};
//!
//! let kept = Stream::of(OrderedMap::from([(0, 1), (1, 5), (2, 9)]))
//!     .filter(filters::greater(3))
//!     .collect(collectors::to_array());
//! assert_eq!(kept, OrderedMap::from([(1, 5), (2, 9)]));
//! ```

use crate::collection::OrderedMap;

/// Keeps items equal to `value`.
pub fn equals<K, V: PartialEq>(value: V) -> impl Fn(&V, &K) -> bool {
    move |item, _| *item == value
}

/// Keeps items different from `value`.
pub fn different<K, V: PartialEq>(value: V) -> impl Fn(&V, &K) -> bool {
    move |item, _| *item != value
}

/// Keeps items strictly greater than `value`.
pub fn greater<K, V: PartialOrd>(value: V) -> impl Fn(&V, &K) -> bool {
    move |item, _| *item > value
}

/// Keeps items strictly less than `value`.
pub fn less<K, V: PartialOrd>(value: V) -> impl Fn(&V, &K) -> bool {
    move |item, _| *item < value
}

/// Keeps items greater than or equal to `value`.
pub fn greater_or_equal<K, V: PartialOrd>(value: V) -> impl Fn(&V, &K) -> bool {
    move |item, _| *item >= value
}

/// Keeps items less than or equal to `value`.
pub fn less_or_equal<K, V: PartialOrd>(value: V) -> impl Fn(&V, &K) -> bool {
    move |item, _| *item <= value
}

/// Keeps sequence items containing `value`.
///
/// # Examples
///
/// ```rust
/// use streamap::collection::OrderedMap;
/// use streamap::stream::{Stream, collectors, filters};
///
/// let kept = Stream::of(OrderedMap::from([("a", vec![1, 2]), ("b", vec![3])]))
///     .filter(filters::array_has_value(2))
///     .collect(collectors::to_array());
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept.get("a"), Some(&vec![1, 2]));
/// ```
pub fn array_has_value<K, T, V>(value: T) -> impl Fn(&V, &K) -> bool
where
    T: PartialEq,
    V: AsRef<[T]>,
{
    move |item, _| item.as_ref().contains(&value)
}

/// Keeps keyed items containing `key`.
pub fn array_has_key<K, K2, V2>(key: K2) -> impl Fn(&OrderedMap<K2, V2>, &K) -> bool
where
    K2: PartialEq,
{
    move |item, _| item.contains_key(&key)
}
