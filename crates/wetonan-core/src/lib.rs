//! # wetonan-core
//!
//! Core types and error definitions for wetonan-rs.
//!
//! This crate provides the building blocks shared across the workspace:
//! the error enum, the `Result` alias, the `ensure_date!` macro, and the
//! primitive type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure_date!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A Julian Day Number: the continuous count of days since the Julian
/// proleptic epoch, used as the calendar-agnostic pivot for all conversions.
pub type JulianDayNumber = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
