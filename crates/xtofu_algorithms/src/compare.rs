//! Three-way comparison of value cells.

use std::cmp::Ordering;

use xtofu_foundation::{Error, Result, Value};

/// Compares two cells of the same kind.
///
/// Integers, characters, booleans, and qbits compare by value. Floats also
/// compare by value, so `-0.0` equals `0.0`; NaN equals NaN and sorts above
/// every number. Strings compare bytewise. Two null cells are equal.
///
/// # Errors
///
/// - null input if either cell is invalid
/// - unknown if either cell is unknown
/// - type mismatch if the kinds differ
/// - unsupported (code unknown) for arrays and maps
pub fn compare(a: &Value, b: &Value) -> Result<Ordering> {
    match (a, b) {
        (Value::Invalid, _) | (_, Value::Invalid) => Err(Error::null_input("compare")),
        (Value::Unknown, other) | (other, Value::Unknown) => Err(Error::unknown(other.kind())),
        _ if a.kind() != b.kind() => Err(Error::type_mismatch(a.kind(), b.kind())),
        (Value::Float(x), Value::Float(y)) => Ok(by_value(*x, *y)),
        (Value::Double(x), Value::Double(y)) => Ok(by_value(*x, *y)),
        (Value::String(x), Value::String(y)) => Ok(x.as_bytes().cmp(y.as_bytes())),
        (Value::Char(x), Value::Char(y)) => Ok(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Ok(x.cmp(y)),
        (Value::Qbit(x), Value::Qbit(y)) => Ok(x.cmp(y)),
        (Value::Null, Value::Null) => Ok(Ordering::Equal),
        (Value::Array(_) | Value::Map(_), _) => Err(Error::unsupported("compare", a.kind())),
        _ => match (a.as_integer(), b.as_integer()) {
            (Some(x), Some(y)) => Ok(x.cmp(&y)),
            _ => Err(Error::unknown(a.kind())),
        },
    }
}

fn by_value<F: PartialOrd>(x: F, y: F) -> Ordering {
    x.partial_cmp(&y).unwrap_or_else(|| {
        let nan = |f: &F| f.partial_cmp(f).is_none();
        nan(&x).cmp(&nan(&y))
    })
}

/// Returns true if the cells compare equal.
///
/// # Errors
///
/// Propagates any [`compare`] error.
pub fn equal(a: &Value, b: &Value) -> Result<bool> {
    compare(a, b).map(Ordering::is_eq)
}

/// Returns true if the cells do not compare equal.
///
/// # Errors
///
/// Propagates any [`compare`] error.
pub fn not_equal(a: &Value, b: &Value) -> Result<bool> {
    compare(a, b).map(Ordering::is_ne)
}

/// Returns true if `a` orders before `b`.
///
/// # Errors
///
/// Propagates any [`compare`] error.
pub fn less(a: &Value, b: &Value) -> Result<bool> {
    compare(a, b).map(Ordering::is_lt)
}

/// Returns true if `a` orders before or equal to `b`.
///
/// # Errors
///
/// Propagates any [`compare`] error.
pub fn less_equal(a: &Value, b: &Value) -> Result<bool> {
    compare(a, b).map(Ordering::is_le)
}

/// Returns true if `a` orders after `b`.
///
/// # Errors
///
/// Propagates any [`compare`] error.
pub fn greater(a: &Value, b: &Value) -> Result<bool> {
    compare(a, b).map(Ordering::is_gt)
}

/// Returns true if `a` orders after or equal to `b`.
///
/// # Errors
///
/// Propagates any [`compare`] error.
pub fn greater_equal(a: &Value, b: &Value) -> Result<bool> {
    compare(a, b).map(Ordering::is_ge)
}
