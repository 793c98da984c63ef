//! Insertion-ordered key-value containers.
//!
//! This module provides [`OrderedMap`], the ordered backing container that
//! [`Stream`](crate::stream::Stream) pipelines operate on and that
//! [`Map`](crate::map::Map) uses for its entry table.
//!
//! # Examples
//!
//! ```rust
//! use streamap::collection::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("a", 1);
//! map.insert("b", 2);
//! map.insert("a", 3);
//!
//! // Overwriting keeps the original position
//! let pairs: Vec<(&&str, &i32)> = map.iter().collect();
//! assert_eq!(pairs, vec![(&"a", &3), (&"b", &2)]);
//! ```

mod ordered_map;

pub use ordered_map::OrderedMap;
pub use ordered_map::OrderedMapIntoIterator;
pub use ordered_map::OrderedMapIterator;
