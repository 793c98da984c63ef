//! Unit tests for key normalization.

use paste::paste;
use rstest::rstest;
use streamap::map::{IdentityKey, KeyHash, MapKey};

// =============================================================================
// Self-hashing primitive keys
// =============================================================================

macro_rules! integer_self_hash_tests {
    ($($integer:ty),* $(,)?) => {
        paste! {
            $(
                #[rstest]
                fn [<test_ $integer _keys_self_hash>]() {
                    let key: $integer = 11;
                    assert_eq!(key.key_hash(), KeyHash::Int(11));
                }
            )*
        }
    };
}

integer_self_hash_tests!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

#[rstest]
fn test_string_keys_self_hash() {
    assert_eq!("a".key_hash(), KeyHash::Str("a".to_string()));
    assert_eq!("a".to_string().key_hash(), KeyHash::Str("a".to_string()));
}

#[rstest]
fn test_borrowed_keys_normalize_like_owned_ones() {
    assert_eq!((&"a").key_hash(), "a".to_string().key_hash());
    assert_eq!((&7_i32).key_hash(), 7_i32.key_hash());
}

#[rstest]
fn test_normalized_forms_never_cross_variants() {
    assert_ne!(0_i64.key_hash(), "0".key_hash());
    assert_ne!("0".key_hash(), IdentityKey::new(0).key_hash());
}

// =============================================================================
// Identity keys
// =============================================================================

#[rstest]
fn test_identity_keys_hash_by_instance_not_structure() {
    let first = IdentityKey::new("same payload");
    let second = IdentityKey::new("same payload");

    assert_ne!(first.key_hash(), second.key_hash());
    assert_ne!(first, second);
}

#[rstest]
fn test_identity_key_clones_share_the_token() {
    let original = IdentityKey::new(vec![1, 2, 3]);
    let alias = original.clone();

    assert_eq!(original.key_hash(), alias.key_hash());
    assert_eq!(original, alias);
    assert_eq!(alias.value(), &vec![1, 2, 3]);
}
