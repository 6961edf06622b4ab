//! Error types for xtofu operations.
//!
//! Uses `thiserror` for ergonomic error definition with rich context. Every
//! [`ErrorKind`] also maps onto a flat [`ErrorCode`] so callers that only care
//! about the category can match on it without inspecting payloads.

use std::collections::TryReserveError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::Kind;

/// Result alias used by every fallible xtofu operation.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for xtofu operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Returns the flat error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Creates a null input error.
    #[must_use]
    pub fn null_input(operation: &'static str) -> Self {
        Self::new(ErrorKind::NullInput { operation })
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an index/count out of range error.
    #[must_use]
    pub fn bad_range(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::BadRange { index, length })
    }

    /// Creates an error for a number that does not fit the given kind.
    #[must_use]
    pub fn overflow(kind: Kind) -> Self {
        Self::new(ErrorKind::Overflow { kind })
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Creates an invalid operation error.
    #[must_use]
    pub fn invalid_operation(operation: &'static str, kind: Kind) -> Self {
        Self::new(ErrorKind::InvalidOperation { operation, kind })
    }

    /// Creates an unsupported kind error.
    #[must_use]
    pub fn unsupported(operation: &'static str, kind: Kind) -> Self {
        Self::new(ErrorKind::Unsupported { operation, kind })
    }

    /// Creates an unknown kind error.
    #[must_use]
    pub fn unknown(kind: Kind) -> Self {
        Self::new(ErrorKind::Unknown(kind))
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Self::new(ErrorKind::AllocationFailure(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required cell was absent (erased or moved from).
    #[error("null input to {operation}")]
    NullInput {
        /// The operation that received the absent cell.
        operation: &'static str,
    },

    /// Kind mismatch between operands or inside an array.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected kind.
        expected: Kind,
        /// The kind encountered.
        actual: Kind,
    },

    /// Index or count outside valid bounds.
    #[error("index out of range: {index} (length {length})")]
    BadRange {
        /// The index or count that was supplied.
        index: usize,
        /// The length it was checked against.
        length: usize,
    },

    /// A number did not fit the limits of its kind.
    #[error("value out of range for {kind}")]
    Overflow {
        /// The kind whose limits were exceeded.
        kind: Kind,
    },

    /// Heap reservation failed.
    #[error("allocation failure: {0}")]
    AllocationFailure(TryReserveError),

    /// Search found no matching element.
    #[error("element not found")]
    NotFound,

    /// Operation not defined for the cell's kind.
    #[error("{operation} is not defined for {kind}")]
    InvalidOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// The kind it was attempted on.
        kind: Kind,
    },

    /// Compound kind reached a path that only handles scalars.
    #[error("{operation} does not support {kind}")]
    Unsupported {
        /// The operation that was attempted.
        operation: &'static str,
        /// The unsupported kind.
        kind: Kind,
    },

    /// A kind this library cannot interpret.
    #[error("unknown kind: {0}")]
    Unknown(Kind),
}

impl ErrorKind {
    /// Maps this kind onto the flat error catalogue.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NullInput { .. } => ErrorCode::NullInput,
            Self::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            Self::BadRange { .. } | Self::Overflow { .. } => ErrorCode::BadRange,
            Self::AllocationFailure(_) => ErrorCode::AllocationFailure,
            Self::NotFound => ErrorCode::NotFound,
            Self::InvalidOperation { .. } => ErrorCode::InvalidOperation,
            Self::Unsupported { .. } | Self::Unknown(_) => ErrorCode::Unknown,
        }
    }
}

/// Flat error catalogue with stable numeric values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[repr(i32)]
pub enum ErrorCode {
    /// Operation completed successfully.
    Ok = 0,
    /// Kind mismatch.
    TypeMismatch = -1,
    /// Out of range.
    BadRange = -2,
    /// Absent input.
    NullInput = -3,
    /// Heap exhaustion.
    AllocationFailure = -4,
    /// Unsupported or unknown kind.
    Unknown = -5,
    /// Search failed.
    NotFound = -6,
    /// Operation not defined for the kind.
    InvalidOperation = -7,
}

impl ErrorCode {
    /// Every code, in catalogue order.
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::Ok,
        ErrorCode::TypeMismatch,
        ErrorCode::BadRange,
        ErrorCode::NullInput,
        ErrorCode::AllocationFailure,
        ErrorCode::Unknown,
        ErrorCode::NotFound,
        ErrorCode::InvalidOperation,
    ];

    /// Returns the numeric value of this code.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Looks a code up by its numeric value.
    #[must_use]
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_i32() == value)
    }

    /// Returns the human-readable message for this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Ok => "Operation completed successfully.",
            Self::TypeMismatch => "Data mismatch error.",
            Self::BadRange => "Out-of-range error.",
            Self::NullInput => "Null pointer error.",
            Self::AllocationFailure => "Memory allocation error.",
            Self::Unknown => "Unknown error.",
            Self::NotFound => "Element not found error.",
            Self::InvalidOperation => "Invalid operation on the data structure error.",
        }
    }

    /// Returns the short symbolic name of this code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::TypeMismatch => "type-mismatch",
            Self::BadRange => "bad-range",
            Self::NullInput => "null-input",
            Self::AllocationFailure => "allocation-failure",
            Self::Unknown => "unknown",
            Self::NotFound => "not-found",
            Self::InvalidOperation => "invalid-operation",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed.
    pub operation: Option<&'static str>,
    /// The element index being processed, if any.
    pub index: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Sets the element index.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = self.operation {
            write!(f, "in {operation}")?;
        }
        if let Some(index) = self.index {
            if self.operation.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at element {index}")?;
        }
        Ok(())
    }
}
