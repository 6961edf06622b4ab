//! Integration tests for searching and comparison

use std::cmp::Ordering;

use xtofu_algorithms::{
    compare, equal, greater, less_equal, search_binary, search_binary_first,
    search_binary_last, search_linear, search_linear_first, search_linear_last,
};
use xtofu_foundation::{Array, ErrorCode, Kind, Value};

// =============================================================================
// Linear Search
// =============================================================================

#[test]
fn linear_search_unsorted() {
    let v = Value::from(Array::of([5, 3, 8, 1, 7]));
    assert_eq!(search_linear(&v, &Value::Int(8)).unwrap(), 2);
    assert_eq!(
        search_linear(&v, &Value::Int(4)).unwrap_err().code(),
        ErrorCode::NotFound
    );
}

#[test]
fn linear_search_strings() {
    let v = Value::from(Array::of(["pear", "fig", "pear", "kiwi"]));
    let key = Value::from("pear");
    assert_eq!(search_linear_first(&v, &key).unwrap(), 0);
    assert_eq!(search_linear_last(&v, &key).unwrap(), 2);
}

#[test]
fn search_key_kind_must_match() {
    let v = Value::from(Array::of([1, 2, 3]));
    let err = search_linear(&v, &Value::Int64(2)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TypeMismatch);
}

#[test]
fn search_empty_not_found() {
    let v = Value::from(Array::new(Kind::Char).unwrap());
    assert_eq!(
        search_binary(&v, &Value::Char('a')).unwrap_err().code(),
        ErrorCode::NotFound
    );
}

// =============================================================================
// Binary Search
// =============================================================================

#[test]
fn binary_search_bounds_on_runs() {
    let v = Value::from(Array::of([1, 2, 2, 2, 5, 9]));
    let key = Value::Int(2);
    let any = search_binary(&v, &key).unwrap();
    assert!((1..=3).contains(&any));
    assert_eq!(search_binary_first(&v, &key).unwrap(), 1);
    assert_eq!(search_binary_last(&v, &key).unwrap(), 3);
    assert!(search_binary(&v, &Value::Int(3)).is_err());
}

#[test]
fn search_matches_signed_zero() {
    let v = Value::from(Array::of([3.0, -0.0, 1.0]));
    assert_eq!(search_linear(&v, &Value::Double(0.0)).unwrap(), 1);

    let sorted = Value::from(Array::of([-2.0f32, -0.0, 4.0]));
    assert_eq!(search_binary(&sorted, &Value::Float(0.0)).unwrap(), 1);
    assert_eq!(
        compare(&Value::Double(-0.0), &Value::Double(0.0)).unwrap(),
        Ordering::Equal
    );
}

#[test]
fn binary_search_doubles() {
    let v = Value::from(Array::of([-1.5, 0.0, 2.25]));
    assert_eq!(search_binary(&v, &Value::Double(2.25)).unwrap(), 2);
}

// =============================================================================
// Comparison
// =============================================================================

#[test]
fn compare_scalars() {
    assert_eq!(compare(&Value::Int(1), &Value::Int(2)).unwrap(), Ordering::Less);
    assert!(equal(&Value::from("a"), &Value::from("a")).unwrap());
    assert!(greater(&Value::Char('b'), &Value::Char('a')).unwrap());
    assert!(less_equal(&Value::Bool(false), &Value::Bool(true)).unwrap());
}

#[test]
fn compare_mixed_kinds_fails() {
    let err = compare(&Value::Int(1), &Value::UInt(1)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TypeMismatch);
}

#[test]
fn compare_containers_unsupported() {
    let a = Value::from(Array::of([1]));
    assert_eq!(compare(&a, &a).unwrap_err().code(), ErrorCode::Unknown);
}
