//! Fluent streams over ordered key-value collections.
//!
//! This module provides [`Stream`], the chaining pipeline at the heart of
//! the crate, together with the factory families it consumes:
//!
//! - [`filters`]: predicate factories for [`Stream::filter`]
//! - [`mappers`]: transform factories for [`Stream::map`] and
//!   [`Stream::map_keys`]
//! - [`collectors`]: terminal factories for [`Stream::collect`]
//!
//! # Examples
//!
//! ```rust
//! use streamap::collection::OrderedMap;
//! use streamap::stream::{Stream, collectors, filters, mappers};
//!
//! let names = Stream::of(OrderedMap::from([
//!     (0, "ada"),
//!     (1, "grace"),
//!     (2, "edsger"),
//! ]))
//! .filter(filters::different("edsger"))
//! .map(mappers::call_with_value(str::to_uppercase))
//! .collect(collectors::to_values());
//!
//! assert_eq!(names, vec!["ADA".to_string(), "GRACE".to_string()]);
//! ```

pub mod collectors;
pub mod filters;
pub mod mappers;
#[allow(clippy::module_inception)]
mod stream;

pub use stream::Stream;
