//! Integration tests for sorting
//!
//! Every algorithm must agree with every other on every integer kind.

use proptest::prelude::*;
use xtofu_algorithms::{SortAlgorithm, compare, search_binary, sort, sort_with};
use xtofu_foundation::{Array, ErrorCode, Kind, Value};

fn ints(items: &[i32]) -> Value {
    Value::from(Array::of(items.iter().copied()))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn sort_five_ints() {
    let mut v = ints(&[5, 3, 8, 1, 7]);
    sort(&mut v).unwrap();
    assert_eq!(v, ints(&[1, 3, 5, 7, 8]));
}

#[test]
fn every_algorithm_sorts_the_same() {
    let input = [9, -4, 0, 9, 2, -4, 17, 3];
    let mut expected = input;
    expected.sort_unstable();

    for algorithm in SortAlgorithm::ALL {
        let mut v = ints(&input);
        sort_with(&mut v, algorithm).unwrap();
        assert_eq!(v, ints(&expected), "{algorithm}");
    }
}

#[test]
fn sort_hex_kind() {
    let mut v = Value::from(
        Array::from_values(
            Kind::Hex16,
            vec![Value::Hex16(0xff), Value::Hex16(0x10), Value::Hex16(0x0)],
        )
        .unwrap(),
    );
    sort(&mut v).unwrap();
    assert_eq!(v.to_string(), "[ 0x0, 0x10, 0xff ]");
}

#[test]
fn sort_unsigned_64_extremes() {
    let mut v = Value::from(Array::of([u64::MAX, 0, u64::MAX / 2]));
    sort_with(&mut v, SortAlgorithm::Quick).unwrap();
    assert_eq!(v, Value::from(Array::of([0, u64::MAX / 2, u64::MAX])));
}

// =============================================================================
// Preconditions
// =============================================================================

#[test]
fn sort_rejects_strings() {
    let mut v = Value::from(Array::of(["b", "a"]));
    for algorithm in SortAlgorithm::ALL {
        let err = sort_with(&mut v, algorithm).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidOperation);
    }
    assert_eq!(v, Value::from(Array::of(["b", "a"])));
}

#[test]
fn sort_rejects_scalar_and_erased() {
    assert_eq!(
        sort(&mut Value::Int(3)).unwrap_err().code(),
        ErrorCode::InvalidOperation
    );
    assert_eq!(
        sort(&mut Value::Invalid).unwrap_err().code(),
        ErrorCode::NullInput
    );
}

#[test]
fn sort_empty_is_noop() {
    let mut v = Value::from(Array::new(Kind::Int64).unwrap());
    sort(&mut v).unwrap();
    assert_eq!(v.as_array().map(Array::len), Some(0));
}

#[test]
fn sort_empty_non_integer_kind_fails() {
    for kind in [Kind::Float, Kind::String, Kind::Bool] {
        let mut v = Value::from(Array::new(kind).unwrap());
        for algorithm in SortAlgorithm::ALL {
            let err = sort_with(&mut v, algorithm).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidOperation, "{kind} {algorithm}");
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

fn algorithm() -> impl Strategy<Value = SortAlgorithm> {
    prop::sample::select(SortAlgorithm::ALL.to_vec())
}

proptest! {
    #[test]
    fn sorted_output_is_ordered(items in prop::collection::vec(any::<i16>(), 0..40), algo in algorithm()) {
        let mut v = Value::from(Array::of(items.clone()));
        sort_with(&mut v, algo).unwrap();
        let out = v.as_array().unwrap();
        prop_assert_eq!(out.len(), items.len());
        for pair in out.as_slice().windows(2) {
            prop_assert!(compare(&pair[0], &pair[1]).unwrap().is_le());
        }
    }

    #[test]
    fn binary_search_finds_every_key_after_sort(items in prop::collection::vec(-50i32..50, 1..40), algo in algorithm()) {
        let mut v = Value::from(Array::of(items.clone()));
        sort_with(&mut v, algo).unwrap();
        for key in items {
            let index = search_binary(&v, &Value::Int(key)).unwrap();
            prop_assert_eq!(v.as_array().unwrap().get(index), Some(&Value::Int(key)));
        }
        let err = search_binary(&v, &Value::Int(1000)).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
