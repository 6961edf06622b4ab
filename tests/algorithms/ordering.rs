//! Integration tests for reversal, shuffling, and cursors

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use xtofu_algorithms::{Cursor, reverse, reverse_range, shuffle, shuffle_range, shuffle_seeded};
use xtofu_foundation::{Array, ErrorCode, Value};

fn ints(items: &[i32]) -> Value {
    Value::from(Array::of(items.iter().copied()))
}

// =============================================================================
// Reverse
// =============================================================================

#[test]
fn reverse_chars() {
    let mut v = Value::from(Array::of(['a', 'b', 'c']));
    reverse(&mut v).unwrap();
    assert_eq!(v, Value::from(Array::of(['c', 'b', 'a'])));
}

#[test]
fn reverse_middle() {
    let mut v = ints(&[1, 2, 3, 4, 5]);
    reverse_range(&mut v, 1, 4).unwrap();
    assert_eq!(v, ints(&[1, 4, 3, 2, 5]));
    assert_eq!(
        reverse_range(&mut v, 2, 9).unwrap_err().code(),
        ErrorCode::BadRange
    );
}

// =============================================================================
// Shuffle
// =============================================================================

#[test]
fn shuffle_range_leaves_outside_alone() {
    let mut v = ints(&(0..20).collect::<Vec<_>>());
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    shuffle_range(&mut v, 5, 10, &mut rng).unwrap();
    let out = v.as_array().unwrap();
    for i in (0..5).chain(10..20) {
        assert_eq!(out.get(i), Some(&Value::Int(i32::try_from(i).unwrap())));
    }
}

#[test]
fn shuffle_rejects_non_array() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        shuffle(&mut Value::Bool(true), &mut rng).unwrap_err().code(),
        ErrorCode::InvalidOperation
    );
}

proptest! {
    #[test]
    fn seeded_shuffle_is_reproducible(items in prop::collection::vec(any::<i32>(), 0..40), seed in any::<u64>()) {
        let mut a = ints(&items);
        let mut b = ints(&items);
        shuffle_seeded(&mut a, seed).unwrap();
        shuffle_seeded(&mut b, seed).unwrap();
        prop_assert_eq!(&a, &b);

        let mut shuffled: Vec<i128> = a.as_array().unwrap().iter().filter_map(Value::as_integer).collect();
        shuffled.sort_unstable();
        let mut expected: Vec<i128> = items.iter().copied().map(i128::from).collect();
        expected.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }
}

// =============================================================================
// Cursor
// =============================================================================

#[test]
fn cursor_walks_both_ways() {
    let v = ints(&[10, 20, 30]);
    let start = Cursor::over(&v, 0).unwrap();
    assert_eq!(start.current(), Some(&Value::Int(10)));

    let end = start.next().next().next();
    assert!(end.is_end());
    assert_eq!(end.current(), None);
    assert_eq!(end.next(), end);

    let back = end.previous();
    assert_eq!(back.current(), Some(&Value::Int(30)));
    assert_eq!(start.previous(), start);
}

#[test]
fn cursor_remaining() {
    let v = ints(&[1, 2, 3, 4]);
    let cursor = Cursor::over(&v, 2).unwrap();
    let rest: Vec<_> = cursor.remaining().cloned().collect();
    assert_eq!(rest, vec![Value::Int(3), Value::Int(4)]);
    assert!(Cursor::over(&Value::Null, 0).is_err());
}
