//! Trace event and record types.
//!
//! This module defines the events recorded while a session runs operations.

use serde::Serialize;
use xtofu_foundation::{Error, ErrorCode, Kind};

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced while operating on value cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum TraceEvent {
    /// A cell was constructed.
    Create {
        /// The kind of the new cell.
        kind: Kind,
    },

    /// A cell was deep-copied.
    Copy {
        /// The kind of the copied cell.
        kind: Kind,
    },

    /// Ownership moved out of a cell.
    Move {
        /// The kind of the moved payload.
        kind: Kind,
    },

    /// A cell was erased.
    Erase {
        /// The kind the cell held before erasure.
        kind: Kind,
    },

    /// An algorithm ran over an array.
    Algorithm {
        /// The operation name.
        operation: &'static str,
        /// The array's element kind.
        kind: Kind,
        /// Element count before the operation.
        len_before: usize,
        /// Element count after the operation.
        len_after: usize,
    },

    /// An operation failed.
    Failure {
        /// The operation name.
        operation: &'static str,
        /// The flat error code.
        code: ErrorCode,
        /// The rendered error message.
        message: String,
    },
}

impl TraceEvent {
    /// Builds a failure event from an error.
    #[must_use]
    pub fn failure(operation: &'static str, error: &Error) -> Self {
        Self::Failure {
            operation,
            code: error.code(),
            message: error.to_string(),
        }
    }

    /// Returns the serialized tag of this event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Copy { .. } => "copy",
            Self::Move { .. } => "move",
            Self::Erase { .. } => "erase",
            Self::Algorithm { .. } => "algorithm",
            Self::Failure { .. } => "failure",
        }
    }

    /// Returns the category this event is filtered and counted under.
    #[must_use]
    pub const fn category(&self) -> EventCategory {
        match self {
            Self::Create { .. } | Self::Copy { .. } | Self::Move { .. } | Self::Erase { .. } => {
                EventCategory::Lifecycle
            }
            Self::Algorithm { .. } => EventCategory::Algorithm,
            Self::Failure { .. } => EventCategory::Failure,
        }
    }
}

/// Broad grouping of [`TraceEvent`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventCategory {
    /// Create, copy, move, and erase.
    Lifecycle,
    /// Successful algorithm runs.
    Algorithm,
    /// Failed operations of either kind.
    Failure,
}

impl EventCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 3] = [Self::Lifecycle, Self::Algorithm, Self::Failure];
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug, Serialize)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// The logical step when this event occurred.
    pub step: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    #[serde(flatten)]
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, step: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            step,
            timestamp_ns,
            event,
        }
    }

    /// Returns the category of the recorded event.
    #[must_use]
    pub const fn category(&self) -> EventCategory {
        self.event.category()
    }
}

// =============================================================================
// Tests
// =============================================================================
