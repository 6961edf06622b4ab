//! Numeric limits per integer representation.
//!
//! A flat table of bounds plus the helpers the lifecycle and algorithm layers
//! use to validate arithmetic results before narrowing them back into a cell.

use crate::error::{Error, Result};
use crate::kind::Kind;

/// Smallest 8-bit signed value.
pub const S8_MIN: i128 = i8::MIN as i128;
/// Largest 8-bit signed value.
pub const S8_MAX: i128 = i8::MAX as i128;
/// Smallest 16-bit signed value.
pub const S16_MIN: i128 = i16::MIN as i128;
/// Largest 16-bit signed value.
pub const S16_MAX: i128 = i16::MAX as i128;
/// Smallest 32-bit signed value.
pub const S32_MIN: i128 = i32::MIN as i128;
/// Largest 32-bit signed value.
pub const S32_MAX: i128 = i32::MAX as i128;
/// Smallest 64-bit signed value.
pub const S64_MIN: i128 = i64::MIN as i128;
/// Largest 64-bit signed value.
pub const S64_MAX: i128 = i64::MAX as i128;

/// Smallest unsigned value of any width.
pub const U_MIN: i128 = 0;
/// Largest 8-bit unsigned value.
pub const U8_MAX: i128 = u8::MAX as i128;
/// Largest 16-bit unsigned value.
pub const U16_MAX: i128 = u16::MAX as i128;
/// Largest 32-bit unsigned value.
pub const U32_MAX: i128 = u32::MAX as i128;
/// Largest 64-bit unsigned value.
pub const U64_MAX: i128 = u64::MAX as i128;

/// Largest 8-bit hexadecimal value.
pub const HEX8_MAX: i128 = U8_MAX;
/// Largest 16-bit hexadecimal value.
pub const HEX16_MAX: i128 = U16_MAX;
/// Largest 32-bit hexadecimal value.
pub const HEX32_MAX: i128 = U32_MAX;
/// Largest 64-bit hexadecimal value.
pub const HEX64_MAX: i128 = U64_MAX;

/// Largest 8-bit octal value.
pub const OCT8_MAX: i128 = U8_MAX;
/// Largest 16-bit octal value.
pub const OCT16_MAX: i128 = U16_MAX;
/// Largest 32-bit octal value.
pub const OCT32_MAX: i128 = U32_MAX;
/// Largest 64-bit octal value.
pub const OCT64_MAX: i128 = U64_MAX;

/// Largest 8-bit bitwise value.
pub const BIN8_MAX: i128 = U8_MAX;
/// Largest 16-bit bitwise value.
pub const BIN16_MAX: i128 = U16_MAX;
/// Largest 32-bit bitwise value.
pub const BIN32_MAX: i128 = U32_MAX;
/// Largest 64-bit bitwise value.
pub const BIN64_MAX: i128 = U64_MAX;

/// Returns the inclusive `(min, max)` bounds for an integer kind.
///
/// Non-integer kinds have no bounds.
#[must_use]
pub const fn bounds(kind: Kind) -> Option<(i128, i128)> {
    if kind.is_signed() {
        return match kind.bit_width() {
            Some(8) => Some((S8_MIN, S8_MAX)),
            Some(16) => Some((S16_MIN, S16_MAX)),
            Some(32) => Some((S32_MIN, S32_MAX)),
            Some(64) => Some((S64_MIN, S64_MAX)),
            _ => None,
        };
    }
    if kind.is_unsigned() {
        return match kind.bit_width() {
            Some(8) => Some((U_MIN, U8_MAX)),
            Some(16) => Some((U_MIN, U16_MAX)),
            Some(32) => Some((U_MIN, U32_MAX)),
            Some(64) => Some((U_MIN, U64_MAX)),
            _ => None,
        };
    }
    None
}

/// Returns true if `value` fits the limits of `kind`.
#[must_use]
pub const fn fits(kind: Kind, value: i128) -> bool {
    match bounds(kind) {
        Some((min, max)) => value >= min && value <= max,
        None => false,
    }
}

/// Validates `value` against the limits of `kind`.
///
/// # Errors
///
/// Returns an invalid operation error for non-integer kinds and an overflow
/// error when the value falls outside the kind's bounds.
pub fn check(kind: Kind, value: i128) -> Result<i128> {
    match bounds(kind) {
        None => Err(Error::invalid_operation("limits check", kind)),
        Some((min, max)) if value < min || value > max => Err(Error::overflow(kind)),
        Some(_) => Ok(value),
    }
}
