//! # streamap
//!
//! A functional-style collection library for Rust providing fluent streams,
//! ordered maps, and optional values.
//!
//! ## Overview
//!
//! This library provides a small set of composable collection utilities:
//!
//! - **`OrderedMap`**: insertion-ordered key-value container with put
//!   semantics
//! - **`Stream`**: fluent transformation pipelines (`filter`, `map`,
//!   `map_keys`, `limit`, `skip`, `values`, `keys`) with terminal
//!   collection operations (`collect`, `first`, `last`, `for_each`)
//! - **`Map`**: keyed collection with hashed lookup over heterogeneous key
//!   types, built atop `Stream` pipelines
//! - **`Optional`**: presence/absence wrapper forcing explicit handling of
//!   "no value"
//! - **`filters` / `mappers` / `collectors`**: reusable factories producing
//!   the predicates, transforms, and collectors streams consume
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for the data-carrier types
//!
//! ## Example
//!
//! ```rust
//! use streamap::prelude::*;
//!
//! let survivors = Stream::of(OrderedMap::from([(0, 1), (1, 2), (2, 3), (3, 4)]))
//!     .filter(|value, _| value % 2 == 0)
//!     .map(|value, _| value * 10)
//!     .collect(collectors::to_array());
//!
//! // Surviving entries keep their original keys
//! assert_eq!(survivors, OrderedMap::from([(1, 20), (3, 40)]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and the factory modules.
///
/// # Usage
///
/// ```rust
/// use streamap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::OrderedMap;
    pub use crate::map::{Entry, IdentityKey, KeyHash, Map, MapKey};
    pub use crate::optional::{Optional, UnwrapError};
    pub use crate::stream::{Stream, collectors, filters, mappers};
}

pub mod collection;

pub mod map;

pub mod optional;

pub mod stream;
