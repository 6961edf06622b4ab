//! Construction, deep copy, move, and erasure of value cells.
//!
//! Every cell owns its payload. Copies are deep and reserve their storage
//! fallibly, so exhaustion surfaces as an allocation failure instead of an
//! abort. A failed copy drops whatever it had built so far.

use std::mem;

use crate::array::{Array, Map};
use crate::error::{Error, ErrorContext, Result};
use crate::kind::Kind;
use crate::value::Value;

/// Creates a cell of `kind` holding a deep copy of `value`.
///
/// # Errors
///
/// Returns a type mismatch error if `kind` is not constructible or `value`
/// is of another kind, and an allocation failure if copying fails.
pub fn create(kind: Kind, value: &Value) -> Result<Value> {
    if !kind.is_constructible() || value.kind() != kind {
        return Err(Error::type_mismatch(kind, value.kind())
            .with_context(ErrorContext::new().with_operation("create")));
    }
    copy(value)
}

/// Creates a zeroed cell of `kind`.
///
/// Integers and floats are zero, strings empty, characters `'\0'`, booleans
/// false, arrays empty with `Int` elements, and maps empty. `Unknown` has no
/// zero value and yields `Invalid`.
#[must_use]
pub fn create_default(kind: Kind) -> Value {
    match kind {
        Kind::Float => Value::Float(0.0),
        Kind::Double => Value::Double(0.0),
        Kind::String => Value::String(String::new()),
        Kind::Char => Value::Char('\0'),
        Kind::Bool => Value::Bool(false),
        Kind::Qbit => Value::Qbit(0),
        Kind::Array => Value::Array(Array::from_parts(Kind::Int, Vec::new())),
        Kind::Map => Value::Map(Map::new()),
        Kind::Null => Value::Null,
        Kind::Invalid | Kind::Unknown => Value::Invalid,
        integer => Value::integer(integer, 0).unwrap_or(Value::Invalid),
    }
}

/// Creates an array cell of `count` deep copies of `values`.
///
/// # Errors
///
/// Returns a bad range error if `count` differs from `values.len()`, a type
/// mismatch error if `kind` cannot be stored in an array or an element is of
/// another kind, and an allocation failure if copying fails.
pub fn create_array(kind: Kind, count: usize, values: &[Value]) -> Result<Value> {
    if count != values.len() {
        return Err(Error::bad_range(count, values.len())
            .with_context(ErrorContext::new().with_operation("create_array")));
    }
    if !kind.is_constructible() {
        return Err(Error::type_mismatch(Kind::Array, kind)
            .with_context(ErrorContext::new().with_operation("create_array")));
    }

    let mut elements = Vec::new();
    elements.try_reserve_exact(count)?;
    for (index, value) in values.iter().enumerate() {
        if value.kind() != kind {
            return Err(Error::type_mismatch(kind, value.kind()).with_context(
                ErrorContext::new()
                    .with_operation("create_array")
                    .with_index(index),
            ));
        }
        elements.push(copy(value)?);
    }
    Ok(Value::Array(Array::from_parts(kind, elements)))
}

/// Produces an independent deep copy of `source`.
///
/// # Errors
///
/// Returns a null input error for an invalid cell, an unknown error for an
/// unknown cell, and an allocation failure if storage cannot be reserved.
pub fn copy(source: &Value) -> Result<Value> {
    match source {
        Value::Invalid => Err(Error::null_input("copy")),
        Value::Unknown => Err(Error::unknown(Kind::Unknown)),
        Value::String(s) => Ok(Value::String(duplicate_str(s)?)),
        Value::Array(a) => copy_array(a).map(Value::Array),
        Value::Map(m) => copy_map(m).map(Value::Map),
        scalar => Ok(scalar.clone()),
    }
}

fn copy_array(source: &Array) -> Result<Array> {
    let mut elements = Vec::new();
    elements.try_reserve_exact(source.len())?;
    for (index, value) in source.iter().enumerate() {
        let copied = copy(value).map_err(|e| {
            e.with_context(ErrorContext::new().with_operation("copy").with_index(index))
        })?;
        elements.push(copied);
    }
    Ok(Array::from_parts(source.element_kind(), elements))
}

fn copy_map(source: &Map) -> Result<Map> {
    let mut keys = Vec::new();
    let mut values = Vec::new();
    keys.try_reserve_exact(source.len())?;
    values.try_reserve_exact(source.len())?;
    for (key, value) in source.iter() {
        keys.push(copy(key)?);
        values.push(copy(value)?);
    }
    Ok(Map::from_parts(keys, values))
}

/// Transfers the payload out of `source`, leaving it invalid.
///
/// # Errors
///
/// Returns a null input error if `source` is already invalid.
pub fn move_value(source: &mut Value) -> Result<Value> {
    if source.is_invalid() {
        return Err(Error::null_input("move"));
    }
    Ok(mem::take(source))
}

/// Releases everything `value` owns and marks it invalid.
///
/// Nested arrays and maps are released recursively.
///
/// # Errors
///
/// Returns a null input error if `value` is already invalid.
pub fn erase(value: &mut Value) -> Result<()> {
    if value.is_invalid() {
        return Err(Error::null_input("erase"));
    }
    *value = Value::Invalid;
    Ok(())
}

/// Exchanges the contents of two cells.
pub fn swap(a: &mut Value, b: &mut Value) {
    mem::swap(a, b);
}

/// Copies a string into freshly reserved storage.
///
/// # Errors
///
/// Returns an allocation failure if the reservation fails.
pub fn duplicate_str(source: &str) -> Result<String> {
    let mut out = String::new();
    out.try_reserve_exact(source.len())?;
    out.push_str(source);
    Ok(out)
}
