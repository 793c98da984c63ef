//! Property-based tests for `Stream`, `OrderedMap`, and `Map`.
//!
//! These tests verify the arithmetic and ordering laws the pipeline
//! operations promise, over arbitrary collections.

use proptest::prelude::*;
use streamap::collection::OrderedMap;
use streamap::map::Map;
use streamap::stream::{Stream, collectors};

// =============================================================================
// Strategies
// =============================================================================

/// Generates an `OrderedMap<i32, i32>` with up to `max_size` entries.
fn ordered_map_strategy(max_size: usize) -> impl Strategy<Value = OrderedMap<i32, i32>> {
    prop::collection::vec((any::<i32>(), any::<i32>()), 0..max_size)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Generates a small `OrderedMap<i32, i32>` for faster tests.
fn small_map() -> impl Strategy<Value = OrderedMap<i32, i32>> {
    ordered_map_strategy(20)
}

proptest! {
    // =========================================================================
    // Size arithmetic
    // =========================================================================

    #[test]
    fn prop_filter_len_counts_satisfying_entries(map in small_map()) {
        let expected = map.values().filter(|value| **value % 2 == 0).count();
        let filtered = Stream::of(map).filter(|value, _| value % 2 == 0);
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn prop_limit_len_is_min(map in small_map(), count in 0_usize..40) {
        let original = map.len();
        prop_assert_eq!(Stream::of(map).limit(count).len(), count.min(original));
    }

    #[test]
    fn prop_skip_len_is_saturating_difference(map in small_map(), count in 0_usize..40) {
        let original = map.len();
        prop_assert_eq!(Stream::of(map).skip(count).len(), original.saturating_sub(count));
    }

    #[test]
    fn prop_limit_then_skip_partition_the_stream(map in small_map(), count in 0_usize..40) {
        let taken = Stream::of(map.clone()).limit(count).len();
        let dropped = Stream::of(map.clone()).skip(count).len();
        prop_assert_eq!(taken + dropped, map.len());
    }

    // =========================================================================
    // Order and key preservation
    // =========================================================================

    #[test]
    fn prop_filter_preserves_survivor_order(map in small_map()) {
        let expected: Vec<(i32, i32)> = map
            .iter()
            .filter(|(_, value)| **value > 0)
            .map(|(key, value)| (*key, *value))
            .collect();
        let survivors: Vec<(i32, i32)> = Stream::of(map)
            .filter(|value, _| *value > 0)
            .into_iter()
            .collect();
        prop_assert_eq!(survivors, expected);
    }

    #[test]
    fn prop_map_preserves_keys_and_count(map in small_map()) {
        let original_keys: Vec<i32> = map.keys().copied().collect();
        let mapped = Stream::of(map).map(|value, _| i64::from(value) * 2).into_inner();
        let mapped_keys: Vec<i32> = mapped.keys().copied().collect();
        prop_assert_eq!(mapped_keys, original_keys);
    }

    #[test]
    fn prop_map_applies_the_transform_to_every_value(map in small_map()) {
        let expected: Vec<i64> = map.values().map(|value| i64::from(*value) + 1).collect();
        let mapped = Stream::of(map)
            .map(|value, _| i64::from(value) + 1)
            .collect(collectors::to_values());
        prop_assert_eq!(mapped, expected);
    }

    #[test]
    fn prop_map_keys_never_grows_the_stream(map in small_map()) {
        let original = map.len();
        let rekeyed = Stream::of(map).map_keys(|_, key| key.rem_euclid(7));
        prop_assert!(rekeyed.len() <= original);
    }

    #[test]
    fn prop_values_reindexes_from_zero(map in small_map()) {
        let reindexed = Stream::of(map).values().into_inner();
        let keys: Vec<usize> = reindexed.keys().copied().collect();
        let expected: Vec<usize> = (0..reindexed.len()).collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn prop_keys_yields_the_original_keys_in_order(map in small_map()) {
        let expected: Vec<i32> = map.keys().copied().collect();
        let keyed = Stream::of(map).keys().collect(collectors::to_values());
        prop_assert_eq!(keyed, expected);
    }

    // =========================================================================
    // First and last
    // =========================================================================

    #[test]
    fn prop_first_and_last_match_iteration_order(map in small_map()) {
        let stream = Stream::of(map.clone());
        match (map.first(), map.last()) {
            (Some((_, first)), Some((_, last))) => {
                prop_assert_eq!(stream.first().unwrap(), *first);
                prop_assert_eq!(stream.last().unwrap(), *last);
            }
            _ => {
                prop_assert!(stream.first().is_empty());
                prop_assert!(stream.last().is_empty());
            }
        }
    }

    // =========================================================================
    // Put semantics
    // =========================================================================

    #[test]
    fn prop_insert_existing_key_keeps_len(map in small_map(), value in any::<i32>()) {
        let mut map = map;
        let original = map.len();
        let first_key = map.first().map(|(key, _)| *key);
        if let Some(key) = first_key {
            map.insert(key, value);
            prop_assert_eq!(map.len(), original);
            prop_assert_eq!(map.get(&key), Some(&value));
        }
    }

    #[test]
    fn prop_map_from_entries_matches_ordered_map_dedup(
        pairs in prop::collection::vec((0_i32..10, any::<i32>()), 0..20)
    ) {
        let expected: OrderedMap<i32, i32> = pairs.clone().into_iter().collect();
        let map = Map::from_entries(pairs);

        prop_assert_eq!(map.keys(), expected.keys().copied().collect::<Vec<_>>());
        prop_assert_eq!(map.values(), expected.values().copied().collect::<Vec<_>>());
    }
}
