//! Integration tests for functional operations
//!
//! Tests transform, filter, reduce, accumulate, partition, and for_each,
//! including the order in which preconditions are reported.

use proptest::prelude::*;
use xtofu_algorithms::{accumulate, filter, for_each, partition, reduce, transform};
use xtofu_foundation::{Array, ErrorCode, Kind, Value};

fn ints(items: &[i32]) -> Value {
    Value::from(Array::of(items.iter().copied()))
}

fn elements(v: &Value) -> Vec<i128> {
    v.as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_integer)
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn transform_squares() {
    let mut v = ints(&[5, 3, 8, 1, 7]);
    transform(&mut v, |x| x * x).unwrap();
    assert_eq!(v, ints(&[25, 9, 64, 1, 49]));
}

#[test]
fn accumulate_sums_to_single_element() {
    let mut v = ints(&[5, 3, 8, 1, 7]);
    accumulate(&mut v).unwrap();
    assert_eq!(v, ints(&[24]));
}

#[test]
fn filter_then_reduce() {
    let mut v = ints(&[1, 2, 3, 4, 5, 6]);
    filter(&mut v, |x| x.as_integer().is_some_and(|n| n % 2 == 0)).unwrap();
    assert_eq!(v, ints(&[2, 4, 6]));

    reduce(&mut v, |a, b| match (a, b) {
        (Value::Int(a), Value::Int(b)) => Value::Int(a * b),
        _ => Value::Invalid,
    })
    .unwrap();
    assert_eq!(v, ints(&[48]));
}

#[test]
fn filter_everything_leaves_empty_array() {
    let mut v = ints(&[1, 2]);
    filter(&mut v, |_| false).unwrap();
    assert_eq!(v.as_array().map(Array::len), Some(0));
    assert_eq!(v.as_array().map(Array::element_kind), Some(Kind::Int));
}

#[test]
fn partition_keeps_kind_and_order() {
    let v = Value::from(Array::of([4u16, 9, 2, 7]));
    let (small, large) = partition(&v, |x| x.as_integer().is_some_and(|n| n < 5)).unwrap();
    assert_eq!(small, Value::from(Array::of([4u16, 2])));
    assert_eq!(large, Value::from(Array::of([9u16, 7])));
    assert_eq!(v, Value::from(Array::of([4u16, 9, 2, 7])));
}

#[test]
fn for_each_visits_in_order() {
    let v = ints(&[3, 1, 2]);
    let mut seen = Vec::new();
    for_each(&v, |x| seen.push(x.clone())).unwrap();
    assert_eq!(seen, vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn accumulate_overflow_leaves_array() {
    let mut v = Value::from(Array::of([200u8, 100]));
    let err = accumulate(&mut v).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BadRange);
    assert_eq!(v, Value::from(Array::of([200u8, 100])));
}

#[test]
fn transform_overflow_leaves_array() {
    let mut v = Value::from(Array::of([1i8, 100]));
    assert!(transform(&mut v, |x| x * 2).is_err());
    assert_eq!(v, Value::from(Array::of([1i8, 100])));
}

#[test]
fn precondition_order() {
    let mut not_array = Value::from("text");
    assert_eq!(
        accumulate(&mut not_array).unwrap_err().code(),
        ErrorCode::InvalidOperation
    );

    let mut erased = Value::Invalid;
    assert_eq!(accumulate(&mut erased).unwrap_err().code(), ErrorCode::NullInput);

    let mut empty = Value::from(Array::new(Kind::Int).unwrap());
    assert_eq!(accumulate(&mut empty).unwrap_err().code(), ErrorCode::NullInput);
    assert_eq!(
        partition(&empty, |_| true).unwrap_err().code(),
        ErrorCode::NullInput
    );

    let mut empty_strings = Value::from(Array::new(Kind::String).unwrap());
    assert_eq!(
        transform(&mut empty_strings, |x| x).unwrap_err().code(),
        ErrorCode::NullInput
    );

    let mut floats = Value::from(Array::of([1.0, 2.0]));
    assert_eq!(
        accumulate(&mut floats).unwrap_err().code(),
        ErrorCode::InvalidOperation
    );
}

#[test]
fn non_integer_element_is_invalid_operation() {
    let mut v = ints(&[5, 0, 8]);
    v.as_array_mut().unwrap().as_mut_slice()[1] = Value::Bool(true);
    assert_eq!(
        accumulate(&mut v).unwrap_err().code(),
        ErrorCode::InvalidOperation
    );
    assert_eq!(
        transform(&mut v, |x| x + 1).unwrap_err().code(),
        ErrorCode::InvalidOperation
    );
}

#[test]
fn integer_width_mismatch_is_type_mismatch() {
    let mut v = ints(&[5, 3, 8]);
    v.as_array_mut().unwrap().as_mut_slice()[2] = Value::Int16(8);
    let err = filter(&mut v, |_| true).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TypeMismatch);
    assert_eq!(err.context.and_then(|c| c.index), Some(2));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn partition_preserves_multiset(items in prop::collection::vec(any::<i32>(), 1..50), pivot in any::<i32>()) {
        let v = ints(&items);
        let (lo, hi) = partition(&v, |x| x.as_integer().is_some_and(|n| n < i128::from(pivot))).unwrap();

        let mut joined = elements(&lo);
        joined.extend(elements(&hi));
        joined.sort_unstable();
        let mut expected: Vec<i128> = items.iter().copied().map(i128::from).collect();
        expected.sort_unstable();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn accumulate_matches_sum(items in prop::collection::vec(-1000i32..1000, 1..50)) {
        let mut v = ints(&items);
        accumulate(&mut v).unwrap();
        prop_assert_eq!(elements(&v), vec![items.iter().copied().map(i128::from).sum::<i128>()]);
    }
}
