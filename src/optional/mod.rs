//! Presence/absence wrapper forcing explicit handling of "no value".
//!
//! This module provides [`Optional`], a tagged wrapper over a value that may
//! or may not be present, and [`UnwrapError`], the error raised when an
//! empty wrapper is unwrapped.
//!
//! Presence is a property of the wrapper, never of the payload:
//! `Optional::of` always produces a present value, even when the payload is
//! itself something like `None`.
//!
//! # Examples
//!
//! ```rust
//! use streamap::optional::Optional;
//!
//! let present = Optional::of(5);
//! assert_eq!(present.unwrap(), 5);
//!
//! let empty: Optional<i32> = Optional::empty_value();
//! assert_eq!(empty.unwrap_or(9), 9);
//! ```

mod error;

pub use error::UnwrapError;

/// A value that may or may not be present.
///
/// Exactly one variant holds at any time. `Present` always carries a
/// payload; the payload's own notion of emptiness is irrelevant to the
/// wrapper's tag.
///
/// # Examples
///
/// ```rust
/// use streamap::optional::Optional;
///
/// // Presence is independent of the payload's own nullability
/// let wrapped: Optional<Option<i32>> = Optional::of(None);
/// assert!(wrapped.is_present());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Optional<T> {
    /// A present value.
    Present(T),
    /// No value.
    Empty,
}

impl<T> Optional<T> {
    /// Wraps `value` in a present `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::optional::Optional;
    ///
    /// assert_eq!(Optional::of(5).unwrap(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an empty `Optional`.
    #[inline]
    #[must_use]
    pub const fn empty_value() -> Self {
        Self::Empty
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics with the message `tried to unwrap an empty value` when called
    /// on an empty `Optional`. Use [`try_unwrap`](Self::try_unwrap) to
    /// propagate the failure instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::optional::Optional;
    ///
    /// assert_eq!(Optional::of("value").unwrap(), "value");
    /// ```
    #[must_use]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => panic!("{}", UnwrapError::MESSAGE),
        }
    }

    /// Returns the payload, or an [`UnwrapError`] when empty.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError`] when called on an empty `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::optional::{Optional, UnwrapError};
    ///
    /// assert_eq!(Optional::of(5).try_unwrap(), Ok(5));
    /// assert_eq!(Optional::<i32>::empty_value().try_unwrap(), Err(UnwrapError));
    /// ```
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(UnwrapError),
        }
    }

    /// Returns the payload if present, else `fallback` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::optional::Optional;
    ///
    /// assert_eq!(Optional::of(5).unwrap_or(9), 5);
    /// assert_eq!(Optional::empty_value().unwrap_or(9), 9);
    /// ```
    #[must_use]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => fallback,
        }
    }

    /// Returns `true` if no value is present.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if a value is present.
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Converts into the standard library's `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamap::optional::Optional;
    ///
    /// assert_eq!(Optional::of(5).into_option(), Some(5));
    /// assert_eq!(Optional::<i32>::empty_value().into_option(), None);
    /// ```
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    /// `Some` becomes `Present`; `None` becomes `Empty`.
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Empty, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Empty => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync);
