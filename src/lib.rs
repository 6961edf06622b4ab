//! xtofu - Runtime-typed value cells with generic array algorithms
//!
//! This crate re-exports all layers of the xtofu system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: xtofu_debug       — Tracing, traced sessions
//! Layer 1: xtofu_algorithms  — Compare, sort, search, functional ops, shuffle, cursor
//! Layer 0: xtofu_foundation  — Value cells, kinds, errors, lifecycle, limits, timing
//! ```

pub use xtofu_algorithms as algorithms;
pub use xtofu_debug as debug;
pub use xtofu_foundation as foundation;
