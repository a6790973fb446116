//! # wetonan
//!
//! Javanese weton and selamatan calendar engine.
//!
//! Converts a Gregorian date to its Julian Day Number, derives the weekday
//! and the 5-day pasaran cycle from it, approximates the Javanese lunar
//! date with the tabular Hijri cycle, and computes the fixed schedule of
//! commemorative (selamatan) dates after a death.
//!
//! This crate is a **façade** that re-exports the workspace member crates.
//! Application code should depend on this crate rather than the individual
//! `wetonan-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use wetonan::time::{format_weton, selamatan_schedule, Date};
//!
//! let geblag = Date::from_ymd(2023, 7, 19)?;
//! assert_eq!(format_weton(geblag)?, "Rabu Legi, 1 Suro");
//!
//! let today = Date::from_ymd(2024, 1, 1)?;
//! let schedule = selamatan_schedule(geblag, today)?;
//! assert_eq!(schedule.len(), 8);
//! # Ok::<(), wetonan::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types and error definitions.
pub use wetonan_core as core;

/// Date, weton, Javanese lunar calendar, and selamatan schedule types.
pub use wetonan_time as time;
