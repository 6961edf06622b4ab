//! Tracing and traced sessions for xtofu.
//!
//! This crate provides:
//! - [`Tracer`] - Ring-buffered recording of lifecycle and algorithm events
//! - [`TraceFormatter`] - Human-readable and JSON renderings of records
//! - [`Session`] - A traced facade with a seeded random number generator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod session;
pub mod trace;

pub use config::SessionConfig;
pub use session::Session;
pub use trace::{
    EventCategory, HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent,
    TraceFormat, TraceFormatter, TraceRecord, Tracer, TracerConfig,
};
