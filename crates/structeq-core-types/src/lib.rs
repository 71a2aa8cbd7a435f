//! Core types shared across structeq facilities
//!
//! This crate provides foundational types used by the value model, the
//! equality engine and the logging facility:
//!
//! - **Kind taxonomy**: ValueKind, TypeFamily
//! - **Schema constants**: Canonical field keys and event names

pub mod kind;
pub mod schema;

pub use kind::{TypeFamily, ValueKind};
