//! Precondition checks shared by every algorithm.

use xtofu_foundation::{Array, Error, ErrorContext, Result, Value};

/// Borrows the array inside `value`.
pub(crate) fn array<'a>(value: &'a Value, operation: &'static str) -> Result<&'a Array> {
    match value {
        Value::Array(a) => Ok(a),
        Value::Invalid => Err(Error::null_input(operation)),
        other => Err(Error::invalid_operation(operation, other.kind())),
    }
}

/// Mutably borrows the array inside `value`.
pub(crate) fn array_mut<'a>(value: &'a mut Value, operation: &'static str) -> Result<&'a mut Array> {
    match value {
        Value::Array(a) => Ok(a),
        Value::Invalid => Err(Error::null_input(operation)),
        other => Err(Error::invalid_operation(operation, other.kind())),
    }
}

pub(crate) fn homogeneous(array: &Array, operation: &'static str) -> Result<()> {
    array.check_homogeneous().map_err(|e| {
        let mut context = e.context.clone().unwrap_or_default();
        context.operation = Some(operation);
        e.with_context(context)
    })
}

/// Requires an integer element kind and elements that all carry it.
///
/// A non-integer kind, declared or found in an element, is an invalid
/// operation. An integer element of another width is a type mismatch.
pub(crate) fn integers(array: &Array, operation: &'static str) -> Result<()> {
    let declared = array.element_kind();
    if !declared.is_integer() {
        return Err(Error::invalid_operation(operation, declared));
    }
    let stray = array
        .iter()
        .enumerate()
        .find(|(_, item)| item.kind() != declared);
    let Some((index, item)) = stray else {
        return Ok(());
    };
    let found = item.kind();
    let err = if found.is_integer() {
        Error::type_mismatch(declared, found)
    } else {
        Error::invalid_operation(operation, found)
    };
    Err(err.with_context(
        ErrorContext::new()
            .with_operation(operation)
            .with_index(index),
    ))
}

pub(crate) fn non_empty(array: &Array, operation: &'static str) -> Result<()> {
    if array.is_empty() {
        Err(Error::null_input(operation))
    } else {
        Ok(())
    }
}

/// Requires `start <= end <= len`.
pub(crate) fn range(start: usize, end: usize, len: usize, operation: &'static str) -> Result<()> {
    if start > end {
        Err(Error::bad_range(start, end)
            .with_context(ErrorContext::new().with_operation(operation)))
    } else if end > len {
        Err(Error::bad_range(end, len)
            .with_context(ErrorContext::new().with_operation(operation)))
    } else {
        Ok(())
    }
}

/// Reads an element already validated as integer-kind.
pub(crate) fn int_key(value: &Value) -> i128 {
    value.as_integer().unwrap_or_default()
}
