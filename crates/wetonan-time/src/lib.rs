//! # wetonan-time
//!
//! Date, weton, Javanese lunar calendar, and selamatan schedule types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type (serial number = Julian Day Number).
pub mod date;

/// Javanese lunar (tabular Hijri-cycle) calendar.
pub mod lunar;

/// `Month` — Gregorian month of the year.
pub mod month;

/// `Pasaran` — the 5-day Javanese market cycle.
pub mod pasaran;

/// Selamatan commemorative-event schedule.
pub mod selamatan;

/// `Weekday` — day of the week.
pub mod weekday;

/// `Weton` — weekday/pasaran pairing and its display form.
pub mod weton;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use lunar::{javanese_from_jdn, JavaneseDate, JavaneseMonth};
pub use month::Month;
pub use pasaran::Pasaran;
pub use selamatan::{selamatan_schedule, Occurrence, Selamatan, Status, SELAMATAN_EVENTS};
pub use weekday::Weekday;
pub use weton::{format_weton, Weton};
