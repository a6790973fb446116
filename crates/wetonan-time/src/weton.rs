//! `Weton` — the weekday/pasaran pairing and its canonical display string.
//!
//! A weton is the combination of the 7-day week and the 5-day market cycle;
//! the two cycles align every 35 days (a *selapan*).

use crate::date::Date;
use crate::lunar::javanese_from_jdn;
use crate::pasaran::Pasaran;
use crate::weekday::Weekday;
use wetonan_core::errors::Result;

/// A weekday/pasaran pairing, e.g. Jumat Legi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weton {
    /// Day of the 7-day week.
    pub weekday: Weekday,
    /// Day of the 5-day market cycle.
    pub pasaran: Pasaran,
}

impl Weton {
    /// Return the weton of a date.
    pub fn of(date: Date) -> Self {
        Self {
            weekday: date.weekday(),
            pasaran: date.pasaran(),
        }
    }
}

impl std::fmt::Display for Weton {
    /// `"<Hari> <Pasaran>"`, e.g. `"Jumat Legi"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.weekday, self.pasaran)
    }
}

/// Render the full weton display string for a date:
/// `"<Hari> <Pasaran>, <day> <JavaneseMonth>"`, e.g. `"Rabu Legi, 1 Suro"`.
///
/// # Errors
/// Propagates the lunar conversion failure for dates the tabular calendar
/// cannot express.
pub fn format_weton(date: Date) -> Result<String> {
    let weton = Weton::of(date);
    let lunar = javanese_from_jdn(date.jdn())?;
    Ok(format!("{weton}, {} {}", lunar.day, lunar.month))
}
