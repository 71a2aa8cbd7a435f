//! structeq Core - Recursive structural equality over runtime values
//!
//! This crate provides:
//! - The `Value` model: primitives, arrays, plain objects, dates, regular
//!   expressions, ordered maps and unique sets
//! - The structural equality engine (`deep_equal`) and its per-kind comparators
//! - The error facility for value construction and mutation
//! - The structured logging facility
//!
//! Values are `Rc`-based and single-threaded by construction.

pub mod engine;
pub mod errors;
pub mod logging_facility;
pub mod value;

// Re-export commonly used types
pub use engine::{deep_equal, same_value_zero, strict_equals};
pub use errors::{ExError, ExErrorKind, Result, StructEqError};
pub use value::Value;
