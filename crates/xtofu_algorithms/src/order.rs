//! Order reversal for homogeneous arrays of any element kind.

use xtofu_foundation::{Result, Value};

use crate::guard;

/// Reverses the array in place.
///
/// # Errors
///
/// Fails with an invalid operation error for non-arrays and a type mismatch
/// for heterogeneous arrays.
pub fn reverse(array: &mut Value) -> Result<()> {
    let array = guard::array_mut(array, "reverse")?;
    guard::homogeneous(array, "reverse")?;
    array.as_mut_slice().reverse();
    Ok(())
}

/// Reverses the elements in `start..end`.
///
/// # Errors
///
/// As [`reverse`], plus a bad range error unless `start <= end <= len`.
pub fn reverse_range(array: &mut Value, start: usize, end: usize) -> Result<()> {
    let array = guard::array_mut(array, "reverse_range")?;
    guard::homogeneous(array, "reverse_range")?;
    guard::range(start, end, array.len(), "reverse_range")?;
    array.as_mut_slice()[start..end].reverse();
    Ok(())
}
