//! Higher-order operations over integer arrays.
//!
//! Preconditions are checked in order: the cell must be an array (invalid
//! operation otherwise), non-empty (null input), and hold integers only. A
//! non-integer element is an invalid operation; an integer element of
//! another width is a type mismatch. Mutating operations leave the array
//! untouched when they fail.

use xtofu_foundation::{Array, Error, ErrorContext, Result, Value, copy};

use crate::guard::{self, int_key};

fn checked<'a>(value: &'a Value, operation: &'static str) -> Result<&'a Array> {
    let array = guard::array(value, operation)?;
    guard::non_empty(array, operation)?;
    guard::integers(array, operation)?;
    Ok(array)
}

fn checked_mut<'a>(value: &'a mut Value, operation: &'static str) -> Result<&'a mut Array> {
    let array = guard::array_mut(value, operation)?;
    guard::non_empty(array, operation)?;
    guard::integers(array, operation)?;
    Ok(array)
}

/// Rewrites every element with `f`.
///
/// ```
/// use xtofu_algorithms::transform;
/// use xtofu_foundation::{Array, Value};
///
/// let mut v = Value::from(Array::of([1, 2, 3]));
/// transform(&mut v, |x| x * 10).unwrap();
/// assert_eq!(v, Value::from(Array::of([10, 20, 30])));
/// ```
///
/// # Errors
///
/// Besides the shared preconditions, fails with a bad range error if any
/// result does not fit the element kind.
pub fn transform(array: &mut Value, mut f: impl FnMut(i128) -> i128) -> Result<()> {
    let array = checked_mut(array, "transform")?;
    let kind = array.element_kind();

    let mut out = Vec::new();
    out.try_reserve_exact(array.len())?;
    for (index, item) in array.iter().enumerate() {
        let value = Value::integer(kind, f(int_key(item))).map_err(|e| {
            e.with_context(
                ErrorContext::new()
                    .with_operation("transform")
                    .with_index(index),
            )
        })?;
        out.push(value);
    }
    array.replace(out)
}

/// Keeps only the elements matching `predicate`, preserving order.
///
/// # Errors
///
/// Fails only on the shared preconditions.
pub fn filter(array: &mut Value, predicate: impl FnMut(&Value) -> bool) -> Result<()> {
    checked_mut(array, "filter")?.retain(predicate);
    Ok(())
}

/// Left-folds the array into its first slot, leaving a single element.
///
/// Arrays of one element are left as they are.
///
/// # Errors
///
/// Besides the shared preconditions, fails with a type mismatch if `f`
/// returns a cell of another kind.
pub fn reduce(array: &mut Value, mut f: impl FnMut(&Value, &Value) -> Value) -> Result<()> {
    let array = checked_mut(array, "reduce")?;
    let kind = array.element_kind();
    let Some((first, rest)) = array.as_slice().split_first() else {
        return Ok(());
    };
    if rest.is_empty() {
        return Ok(());
    }

    let mut acc = copy(first)?;
    for (offset, item) in rest.iter().enumerate() {
        acc = f(&acc, item);
        if acc.kind() != kind {
            return Err(Error::type_mismatch(kind, acc.kind()).with_context(
                ErrorContext::new()
                    .with_operation("reduce")
                    .with_index(offset + 1),
            ));
        }
    }
    array.replace(vec![acc])
}

/// Sums the elements into a single-element array.
///
/// # Errors
///
/// Besides the shared preconditions, fails with a bad range error if the
/// sum does not fit the element kind.
pub fn accumulate(array: &mut Value) -> Result<()> {
    let array = checked_mut(array, "accumulate")?;
    let kind = array.element_kind();
    let sum = array
        .iter()
        .try_fold(0i128, |acc, item| acc.checked_add(int_key(item)))
        .ok_or_else(|| Error::overflow(kind))?;
    let total = Value::integer(kind, sum)
        .map_err(|e| e.with_context(ErrorContext::new().with_operation("accumulate")))?;
    array.replace(vec![total])
}

/// Splits the array into `(matching, rest)`, both of the same element kind.
///
/// Every input element lands in exactly one output, in its original order.
/// The input is not modified.
///
/// # Errors
///
/// Fails on the shared preconditions and with an allocation failure if the
/// copies cannot be made.
pub fn partition(
    array: &Value,
    mut predicate: impl FnMut(&Value) -> bool,
) -> Result<(Value, Value)> {
    let array = checked(array, "partition")?;
    let kind = array.element_kind();

    let mut matching = Array::new(kind)?;
    let mut rest = Array::new(kind)?;
    for item in array {
        if predicate(item) {
            matching.push(copy(item)?)?;
        } else {
            rest.push(copy(item)?)?;
        }
    }
    Ok((Value::Array(matching), Value::Array(rest)))
}

/// Calls `f` on every element in order.
///
/// # Errors
///
/// Fails only on the shared preconditions.
pub fn for_each(array: &Value, f: impl FnMut(&Value)) -> Result<()> {
    checked(array, "for_each")?.iter().for_each(f);
    Ok(())
}
