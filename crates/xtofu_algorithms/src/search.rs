//! Linear and binary search over homogeneous arrays.
//!
//! Binary variants assume the array is sorted ascending and do not verify it.

use std::cmp::Ordering;

use xtofu_foundation::{Error, Result, Value};

use crate::compare::compare;
use crate::guard;

fn searchable<'a>(array: &'a Value, key: &Value, operation: &'static str) -> Result<&'a [Value]> {
    let a = guard::array(array, operation)?;
    if key.is_invalid() {
        return Err(Error::null_input(operation));
    }
    guard::homogeneous(a, operation)?;
    if key.kind() != a.element_kind() {
        return Err(Error::type_mismatch(a.element_kind(), key.kind()));
    }
    Ok(a.as_slice())
}

fn position(items: &[Value], key: &Value) -> Result<Option<usize>> {
    for (index, item) in items.iter().enumerate() {
        if compare(item, key)?.is_eq() {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// Returns the index of the first element equal to `key`.
///
/// # Errors
///
/// - not found if no element matches (including an empty array)
/// - type mismatch if `key` differs from the element kind or the array is
///   heterogeneous
/// - invalid operation if `array` is not an array
pub fn search_linear(array: &Value, key: &Value) -> Result<usize> {
    let items = searchable(array, key, "search_linear")?;
    position(items, key)?.ok_or_else(Error::not_found)
}

/// Returns the earliest index of an element equal to `key`.
///
/// # Errors
///
/// Same as [`search_linear`].
pub fn search_linear_first(array: &Value, key: &Value) -> Result<usize> {
    let items = searchable(array, key, "search_linear_first")?;
    position(items, key)?.ok_or_else(Error::not_found)
}

/// Returns the latest index of an element equal to `key`.
///
/// # Errors
///
/// Same as [`search_linear`].
pub fn search_linear_last(array: &Value, key: &Value) -> Result<usize> {
    let items = searchable(array, key, "search_linear_last")?;
    for (index, item) in items.iter().enumerate().rev() {
        if compare(item, key)?.is_eq() {
            return Ok(index);
        }
    }
    Err(Error::not_found())
}

/// Returns the index of some element equal to `key` in a sorted array.
///
/// # Errors
///
/// Same as [`search_linear`].
pub fn search_binary(array: &Value, key: &Value) -> Result<usize> {
    let items = searchable(array, key, "search_binary")?;
    let (mut low, mut high) = (0, items.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match compare(&items[mid], key)? {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    Err(Error::not_found())
}

/// Returns the earliest index of an element equal to `key` in a sorted array.
///
/// # Errors
///
/// Same as [`search_linear`].
pub fn search_binary_first(array: &Value, key: &Value) -> Result<usize> {
    let items = searchable(array, key, "search_binary_first")?;
    let index = bound(items, key, Ordering::is_lt)?;
    match items.get(index) {
        Some(item) if compare(item, key)?.is_eq() => Ok(index),
        _ => Err(Error::not_found()),
    }
}

/// Returns the latest index of an element equal to `key` in a sorted array.
///
/// # Errors
///
/// Same as [`search_linear`].
pub fn search_binary_last(array: &Value, key: &Value) -> Result<usize> {
    let items = searchable(array, key, "search_binary_last")?;
    let index = bound(items, key, Ordering::is_le)?;
    match index.checked_sub(1).and_then(|i| items.get(i).map(|item| (i, item))) {
        Some((i, item)) if compare(item, key)?.is_eq() => Ok(i),
        _ => Err(Error::not_found()),
    }
}

/// Returns the first index whose element does not satisfy `before` against `key`.
fn bound(items: &[Value], key: &Value, before: fn(Ordering) -> bool) -> Result<usize> {
    let (mut low, mut high) = (0, items.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if before(compare(&items[mid], key)?) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Ok(low)
}
