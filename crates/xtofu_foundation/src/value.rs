//! Core value cell type.

use std::fmt;

use crate::array::{Array, Map};
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::limits;

/// A runtime-typed value cell.
///
/// Every variant corresponds to exactly one [`Kind`], so the tag and the
/// active payload can never disagree. Strings, arrays, and maps own their
/// storage exclusively: cloning or [`copy`](crate::lifecycle::copy)ing is deep,
/// and [`move_value`](crate::lifecycle::move_value) leaves the source `Invalid`.
#[derive(Clone, Default)]
pub enum Value {
    /// Native signed integer.
    Int(i32),
    /// 8-bit signed integer.
    Int8(i8),
    /// 16-bit signed integer.
    Int16(i16),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// Native unsigned integer.
    UInt(u32),
    /// 8-bit unsigned integer.
    UInt8(u8),
    /// 16-bit unsigned integer.
    UInt16(u16),
    /// 32-bit unsigned integer.
    UInt32(u32),
    /// 64-bit unsigned integer.
    UInt64(u64),
    /// 8-bit value displayed in octal.
    Octal8(u8),
    /// 16-bit value displayed in octal.
    Octal16(u16),
    /// 32-bit value displayed in octal.
    Octal32(u32),
    /// 64-bit value displayed in octal.
    Octal64(u64),
    /// 8-bit bit pattern.
    Bitwise8(u8),
    /// 16-bit bit pattern.
    Bitwise16(u16),
    /// 32-bit bit pattern.
    Bitwise32(u32),
    /// 64-bit bit pattern.
    Bitwise64(u64),
    /// 8-bit value displayed in hexadecimal.
    Hex8(u8),
    /// 16-bit value displayed in hexadecimal.
    Hex16(u16),
    /// 32-bit value displayed in hexadecimal.
    Hex32(u32),
    /// 64-bit value displayed in hexadecimal.
    Hex64(u64),
    /// Single precision float.
    Float(f32),
    /// Double precision float.
    Double(f64),
    /// Owned string.
    String(String),
    /// Single character.
    Char(char),
    /// Boolean.
    Bool(bool),
    /// Opaque 64-bit pattern.
    Qbit(u64),
    /// Homogeneous array of cells.
    Array(Array),
    /// Parallel key/value sequences.
    Map(Map),
    /// The null cell.
    Null,
    /// Erased or moved-from cell.
    #[default]
    Invalid,
    /// Uninterpretable cell.
    Unknown,
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::Int8(_) => Kind::Int8,
            Self::Int16(_) => Kind::Int16,
            Self::Int32(_) => Kind::Int32,
            Self::Int64(_) => Kind::Int64,
            Self::UInt(_) => Kind::UInt,
            Self::UInt8(_) => Kind::UInt8,
            Self::UInt16(_) => Kind::UInt16,
            Self::UInt32(_) => Kind::UInt32,
            Self::UInt64(_) => Kind::UInt64,
            Self::Octal8(_) => Kind::Octal8,
            Self::Octal16(_) => Kind::Octal16,
            Self::Octal32(_) => Kind::Octal32,
            Self::Octal64(_) => Kind::Octal64,
            Self::Bitwise8(_) => Kind::Bitwise8,
            Self::Bitwise16(_) => Kind::Bitwise16,
            Self::Bitwise32(_) => Kind::Bitwise32,
            Self::Bitwise64(_) => Kind::Bitwise64,
            Self::Hex8(_) => Kind::Hex8,
            Self::Hex16(_) => Kind::Hex16,
            Self::Hex32(_) => Kind::Hex32,
            Self::Hex64(_) => Kind::Hex64,
            Self::Float(_) => Kind::Float,
            Self::Double(_) => Kind::Double,
            Self::String(_) => Kind::String,
            Self::Char(_) => Kind::Char,
            Self::Bool(_) => Kind::Bool,
            Self::Qbit(_) => Kind::Qbit,
            Self::Array(_) => Kind::Array,
            Self::Map(_) => Kind::Map,
            Self::Null => Kind::Null,
            Self::Invalid => Kind::Invalid,
            Self::Unknown => Kind::Unknown,
        }
    }

    /// Returns true if this cell was erased or moved from.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Returns true if this is the null cell.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Builds an integer cell of `kind` from a wide integer.
    ///
    /// # Errors
    ///
    /// Returns an invalid operation error if `kind` is not an integer kind and
    /// an overflow error if `value` does not fit it.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn integer(kind: Kind, value: i128) -> Result<Self> {
        let n = limits::check(kind, value)?;
        Ok(match kind {
            Kind::Int => Self::Int(n as i32),
            Kind::Int8 => Self::Int8(n as i8),
            Kind::Int16 => Self::Int16(n as i16),
            Kind::Int32 => Self::Int32(n as i32),
            Kind::Int64 => Self::Int64(n as i64),
            Kind::UInt => Self::UInt(n as u32),
            Kind::UInt8 => Self::UInt8(n as u8),
            Kind::UInt16 => Self::UInt16(n as u16),
            Kind::UInt32 => Self::UInt32(n as u32),
            Kind::UInt64 => Self::UInt64(n as u64),
            Kind::Octal8 => Self::Octal8(n as u8),
            Kind::Octal16 => Self::Octal16(n as u16),
            Kind::Octal32 => Self::Octal32(n as u32),
            Kind::Octal64 => Self::Octal64(n as u64),
            Kind::Bitwise8 => Self::Bitwise8(n as u8),
            Kind::Bitwise16 => Self::Bitwise16(n as u16),
            Kind::Bitwise32 => Self::Bitwise32(n as u32),
            Kind::Bitwise64 => Self::Bitwise64(n as u64),
            Kind::Hex8 => Self::Hex8(n as u8),
            Kind::Hex16 => Self::Hex16(n as u16),
            Kind::Hex32 => Self::Hex32(n as u32),
            Kind::Hex64 => Self::Hex64(n as u64),
            other => return Err(Error::invalid_operation("integer", other)),
        })
    }

    /// Reads any integer kind as a wide integer.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i128> {
        Some(match *self {
            Self::Int(n) | Self::Int32(n) => n as i128,
            Self::Int8(n) => n as i128,
            Self::Int16(n) => n as i128,
            Self::Int64(n) => n as i128,
            Self::UInt8(n) | Self::Octal8(n) | Self::Bitwise8(n) | Self::Hex8(n) => n as i128,
            Self::UInt16(n) | Self::Octal16(n) | Self::Bitwise16(n) | Self::Hex16(n) => {
                n as i128
            }
            Self::UInt(n)
            | Self::UInt32(n)
            | Self::Octal32(n)
            | Self::Bitwise32(n)
            | Self::Hex32(n) => n as i128,
            Self::UInt64(n) | Self::Octal64(n) | Self::Bitwise64(n) | Self::Hex64(n) => {
                n as i128
            }
            _ => return None,
        })
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a character.
    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Attempts to extract a single precision float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a double precision float.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a qbit pattern.
    #[must_use]
    pub const fn as_qbit(&self) -> Option<u64> {
        match self {
            Self::Qbit(bits) => Some(*bits),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an array reference.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract a mutable array reference.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract a map reference.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a mutable map reference.
    #[must_use]
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

// Floats compare by bit pattern so a copied NaN equals its source.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Qbit(a), Self::Qbit(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Null, Self::Null)
            | (Self::Invalid, Self::Invalid)
            | (Self::Unknown, Self::Unknown) => true,
            _ => self.kind() == other.kind() && self.as_integer() == other.as_integer(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Char(c) => write!(f, "{c:?}"),
            Self::Array(a) => write!(f, "{a:?}"),
            Self::Map(m) => write!(f, "{m:?}"),
            Self::Null | Self::Invalid | Self::Unknown => write!(f, "{}", self.kind()),
            _ => write!(f, "{}({self})", self.kind()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) | Self::Int32(n) => write!(f, "{n}"),
            Self::Int8(n) => write!(f, "{n}"),
            Self::Int16(n) => write!(f, "{n}"),
            Self::Int64(n) => write!(f, "{n}"),
            Self::UInt8(n) => write!(f, "{n}"),
            Self::UInt16(n) => write!(f, "{n}"),
            Self::UInt(n) | Self::UInt32(n) => write!(f, "{n}"),
            Self::UInt64(n) => write!(f, "{n}"),
            Self::Octal8(n) => write!(f, "{n:#o}"),
            Self::Octal16(n) => write!(f, "{n:#o}"),
            Self::Octal32(n) => write!(f, "{n:#o}"),
            Self::Octal64(n) => write!(f, "{n:#o}"),
            Self::Bitwise8(n) | Self::Hex8(n) => write!(f, "{n:#x}"),
            Self::Bitwise16(n) | Self::Hex16(n) => write!(f, "{n:#x}"),
            Self::Bitwise32(n) | Self::Hex32(n) => write!(f, "{n:#x}"),
            Self::Bitwise64(n) | Self::Hex64(n) => write!(f, "{n:#x}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Qbit(bits) => write!(f, "0b{bits:064b}"),
            Self::Array(a) => {
                if a.is_empty() {
                    return write!(f, "[]");
                }
                write!(f, "[ ")?;
                for (i, item) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, " ]")
            }
            Self::Map(m) => {
                if m.is_empty() {
                    return write!(f, "<>");
                }
                write!(f, "< ")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, " >")
            }
            Self::Null => write!(f, "cnullptr"),
            Self::Invalid | Self::Unknown => write!(f, "[Invalid or Unknown Type]"),
        }
    }
}

/// Rust types that map onto exactly one scalar [`Kind`].
///
/// Used by [`Array::of`] to build homogeneous arrays from typed slices.
pub trait Scalar: Into<Value> {
    /// The kind every value of this type produces.
    const KIND: Kind;
}

macro_rules! scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }

            impl Scalar for $ty {
                const KIND: Kind = Kind::$variant;
            }
        )*
    };
}

scalar! {
    i32 => Int,
    i8 => Int8,
    i16 => Int16,
    i64 => Int64,
    u32 => UInt,
    u8 => UInt8,
    u16 => UInt16,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    char => Char,
    String => String,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl Scalar for &str {
    const KIND: Kind = Kind::String;
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Self::Map(m)
    }
}
