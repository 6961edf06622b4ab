//! Value cells, kinds, and ownership-aware lifecycle for xtofu.
//!
//! This crate provides:
//! - [`Value`] - The runtime-typed value cell
//! - [`Kind`] - The tag describing what a cell holds
//! - [`Array`] and [`Map`] - Exclusively owned compound containers
//! - [`Error`] - Rich error types with a flat [`ErrorCode`] catalogue
//! - [`lifecycle`] - Create, copy, move, and erase operations
//! - [`limits`] - Numeric bounds per integer kind
//! - [`Timing`] and [`Stamped`] - Execution time attached to results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod array;
pub mod error;
pub mod kind;
pub mod lifecycle;
pub mod limits;
pub mod timing;
pub mod value;

pub use array::{Array, ArrayBuilder, Map};
pub use error::{Error, ErrorCode, ErrorContext, ErrorKind, Result};
pub use kind::Kind;
pub use lifecycle::{copy, create, create_array, create_default, erase, move_value, swap};
pub use timing::{Stamped, Timing};
pub use value::{Scalar, Value};
