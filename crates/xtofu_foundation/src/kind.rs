//! Kind descriptors: the runtime tag of every value cell.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The discriminant of a [`Value`](crate::Value).
///
/// Integer kinds come in three families: signed (`Int*`), unsigned (`UInt*`),
/// and unsigned views that only differ in how they are displayed
/// (`Octal*`, `Hex*`, `Bitwise*`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// Native signed integer (32-bit).
    Int,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Native unsigned integer (32-bit).
    UInt,
    /// 8-bit unsigned integer.
    UInt8,
    /// 16-bit unsigned integer.
    UInt16,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit unsigned integer.
    UInt64,
    /// 8-bit octal view.
    Octal8,
    /// 16-bit octal view.
    Octal16,
    /// 32-bit octal view.
    Octal32,
    /// 64-bit octal view.
    Octal64,
    /// 8-bit bitwise view.
    Bitwise8,
    /// 16-bit bitwise view.
    Bitwise16,
    /// 32-bit bitwise view.
    Bitwise32,
    /// 64-bit bitwise view.
    Bitwise64,
    /// 8-bit hexadecimal view.
    Hex8,
    /// 16-bit hexadecimal view.
    Hex16,
    /// 32-bit hexadecimal view.
    Hex32,
    /// 64-bit hexadecimal view.
    Hex64,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Owned string.
    String,
    /// Single character.
    Char,
    /// Boolean.
    Bool,
    /// Opaque 64-bit pattern.
    Qbit,
    /// Homogeneous array of cells.
    Array,
    /// Parallel key/value sequences.
    Map,
    /// The null cell.
    Null,
    /// A cell that was erased or moved from.
    Invalid,
    /// A kind this library cannot interpret.
    Unknown,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 33] = [
        Kind::Int,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::UInt,
        Kind::UInt8,
        Kind::UInt16,
        Kind::UInt32,
        Kind::UInt64,
        Kind::Octal8,
        Kind::Octal16,
        Kind::Octal32,
        Kind::Octal64,
        Kind::Bitwise8,
        Kind::Bitwise16,
        Kind::Bitwise32,
        Kind::Bitwise64,
        Kind::Hex8,
        Kind::Hex16,
        Kind::Hex32,
        Kind::Hex64,
        Kind::Float,
        Kind::Double,
        Kind::String,
        Kind::Char,
        Kind::Bool,
        Kind::Qbit,
        Kind::Array,
        Kind::Map,
        Kind::Null,
        Kind::Invalid,
        Kind::Unknown,
    ];

    /// Returns true for every signed, unsigned, octal, hex, and bitwise kind.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    /// Returns true for the signed integer kinds.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64
        )
    }

    /// Returns true for the unsigned integer kinds, including the octal,
    /// hex, and bitwise views.
    #[must_use]
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::UInt
                | Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
                | Self::Octal8
                | Self::Octal16
                | Self::Octal32
                | Self::Octal64
                | Self::Bitwise8
                | Self::Bitwise16
                | Self::Bitwise32
                | Self::Bitwise64
                | Self::Hex8
                | Self::Hex16
                | Self::Hex32
                | Self::Hex64
        )
    }

    /// Returns true for `Float` and `Double`.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Returns true for kinds that own nested cells.
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::Array | Self::Map)
    }

    /// Returns true if the scalar constructor accepts this kind.
    ///
    /// Compound kinds and the `Invalid`/`Unknown` markers cannot be built
    /// through [`create`](crate::lifecycle::create), and arrays cannot hold them.
    #[must_use]
    pub const fn is_constructible(self) -> bool {
        !matches!(
            self,
            Self::Array | Self::Map | Self::Invalid | Self::Unknown
        )
    }

    /// Returns the bit width of integer kinds.
    #[must_use]
    pub const fn bit_width(self) -> Option<u32> {
        match self {
            Self::Int8 | Self::UInt8 | Self::Octal8 | Self::Bitwise8 | Self::Hex8 => Some(8),
            Self::Int16 | Self::UInt16 | Self::Octal16 | Self::Bitwise16 | Self::Hex16 => {
                Some(16)
            }
            Self::Int
            | Self::Int32
            | Self::UInt
            | Self::UInt32
            | Self::Octal32
            | Self::Bitwise32
            | Self::Hex32 => Some(32),
            Self::Int64
            | Self::UInt64
            | Self::Octal64
            | Self::Bitwise64
            | Self::Hex64
            | Self::Qbit => Some(64),
            _ => None,
        }
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt => "uint",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Octal8 => "octal8",
            Self::Octal16 => "octal16",
            Self::Octal32 => "octal32",
            Self::Octal64 => "octal64",
            Self::Bitwise8 => "bitwise8",
            Self::Bitwise16 => "bitwise16",
            Self::Bitwise32 => "bitwise32",
            Self::Bitwise64 => "bitwise64",
            Self::Hex8 => "hex8",
            Self::Hex16 => "hex16",
            Self::Hex32 => "hex32",
            Self::Hex64 => "hex64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::Qbit => "qbit",
            Self::Array => "array",
            Self::Map => "map",
            Self::Null => "null",
            Self::Invalid => "invalid",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
