//! Keyed collections over heterogeneous key types.
//!
//! This module provides [`Map`], a keyed collection built atop
//! [`Stream`](crate::stream::Stream) pipelines, together with its
//! supporting types:
//!
//! - [`Entry`]: the immutable key-value pair a `Map` stores.
//! - [`KeyHash`] and [`MapKey`]: key normalization — integer and string
//!   keys are self-hashing, reference-type keys hash by identity.
//! - [`IdentityKey`]: wrapper giving any payload identity-key semantics.
//!
//! # Examples
//!
//! ```rust
//! use streamap::map::{IdentityKey, Map};
//!
//! let mut map = Map::new();
//! let original = IdentityKey::new(vec![1, 2]);
//! let lookalike = IdentityKey::new(vec![1, 2]);
//!
//! map.put(original.clone(), "original");
//! map.put(lookalike, "lookalike");
//!
//! // Structural equality does not merge identity keys
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(&original), Some(&"original"));
//! ```

mod entry;
mod key;
#[allow(clippy::module_inception)]
mod map;

pub use entry::Entry;
pub use key::IdentityKey;
pub use key::KeyHash;
pub use key::MapKey;
pub use map::Map;
