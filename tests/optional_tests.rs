//! Unit tests for `Optional`.

use rstest::rstest;
use streamap::optional::{Optional, UnwrapError};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_of_is_present() {
    let optional = Optional::of(5);
    assert!(optional.is_present());
    assert!(!optional.is_empty());
}

#[rstest]
fn test_empty_value_is_empty() {
    let optional: Optional<i32> = Optional::empty_value();
    assert!(optional.is_empty());
    assert!(!optional.is_present());
}

#[rstest]
fn test_presence_is_independent_of_payload_nullability() {
    let optional: Optional<Option<i32>> = Optional::of(None);
    assert!(optional.is_present());
    assert_eq!(optional.unwrap(), None);
}

// =============================================================================
// Unwrapping
// =============================================================================

#[rstest]
fn test_unwrap_returns_present_payload() {
    assert_eq!(Optional::of(5).unwrap(), 5);
}

#[rstest]
#[should_panic(expected = "tried to unwrap an empty value")]
fn test_unwrap_empty_panics_with_fixed_message() {
    let _ = Optional::<i32>::empty_value().unwrap();
}

#[rstest]
fn test_try_unwrap_returns_payload_or_error() {
    assert_eq!(Optional::of(5).try_unwrap(), Ok(5));
    assert_eq!(Optional::<i32>::empty_value().try_unwrap(), Err(UnwrapError));
}

#[rstest]
fn test_unwrap_error_propagates_with_question_mark() {
    fn unwrap_both(left: Optional<i32>, right: Optional<i32>) -> Result<i32, UnwrapError> {
        Ok(left.try_unwrap()? + right.try_unwrap()?)
    }

    assert_eq!(unwrap_both(Optional::of(1), Optional::of(2)), Ok(3));
    assert_eq!(
        unwrap_both(Optional::of(1), Optional::empty_value()),
        Err(UnwrapError)
    );
}

// =============================================================================
// Fallbacks
// =============================================================================

#[rstest]
fn test_unwrap_or_prefers_present_payload() {
    assert_eq!(Optional::of(5).unwrap_or(9), 5);
}

#[rstest]
fn test_unwrap_or_returns_fallback_unchanged_when_empty() {
    assert_eq!(Optional::empty_value().unwrap_or(9), 9);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_option_round_trip() {
    assert_eq!(Optional::from(Some(5)), Optional::of(5));
    assert_eq!(Optional::<i32>::from(None), Optional::empty_value());
    assert_eq!(Optional::of(5).into_option(), Some(5));
    assert_eq!(Option::<i32>::from(Optional::empty_value()), None);
}

#[rstest]
fn test_equality_distinguishes_tags() {
    assert_ne!(Optional::of(0), Optional::empty_value());
    assert_eq!(Optional::of(3), Optional::of(3));
    assert_ne!(Optional::of(3), Optional::of(4));
}
