//! `Date` type.
//!
//! A date is represented as a serial number of days, and the serial number
//! **is** the Julian Day Number (JDN).  Every derived cycle falls out of the
//! serial by modular arithmetic: weekday = `jdn mod 7`, pasaran =
//! `jdn mod 5`, and the Javanese lunar date is a tabular function of the
//! same pivot (see [`crate::lunar`]).
//!
//! # Serial number convention
//! * The calendar is the proleptic Gregorian calendar.
//! * The valid range is 0001-01-01 (JDN 1 721 426) to 9999-12-31
//!   (JDN 5 373 484).
//! * JDN 2 451 545 = 1 January 2000, the usual reference value.

use crate::month::Month;
use crate::pasaran::Pasaran;
use crate::weekday::Weekday;
use wetonan_core::errors::Result;
use wetonan_core::{ensure_date, JulianDayNumber};

/// A proleptic Gregorian calendar date, stored as its Julian Day Number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(JulianDayNumber);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: 1 January 1 CE (JDN 1 721 426).
    pub const MIN: Date = Date(1_721_426);

    /// Maximum valid date: 31 December 9999 (JDN 5 373 484).
    pub const MAX: Date = Date(5_373_484);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a Julian Day Number.
    ///
    /// Returns an error if the value falls outside the supported range.
    pub fn from_jdn(jdn: JulianDayNumber) -> Result<Self> {
        ensure_date!(
            (Self::MIN.0..=Self::MAX.0).contains(&jdn),
            "JDN {jdn} out of range [{}, {}]",
            Self::MIN.0,
            Self::MAX.0
        );
        Ok(Date(jdn))
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    ///
    /// The input is validated against real calendar bounds; Feb 30 and the
    /// like are rejected rather than normalised.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure_date!(
            (1..=9999).contains(&year),
            "year {year} out of range [1, 9999]"
        );
        ensure_date!(
            (1..=12).contains(&month),
            "month {month} out of range [1, 12]"
        );
        let days_in = days_in_month(year, month);
        ensure_date!(
            day >= 1 && day <= days_in,
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        );
        Ok(Date(jdn_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the Julian Day Number.
    pub fn jdn(&self) -> JulianDayNumber {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_jdn(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = ymd_from_jdn(self.0).1;
        Month::from_number(m).expect("JDN decomposition always yields a valid month")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_jdn(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let first = jdn_from_ymd(self.year(), 1, 1);
        (self.0 - first + 1) as u16
    }

    /// Return the weekday.
    ///
    /// JDN 1 721 426 (1 January 1 CE) is a Monday, and the cycle has period
    /// 7, so the ordinal is `jdn mod 7` shifted to 1..=7.
    pub fn weekday(&self) -> Weekday {
        let w = (self.0.rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return the pasaran (5-day market-cycle day).
    pub fn pasaran(&self) -> Pasaran {
        Pasaran::from_jdn(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days (negative `n` goes backward).
    ///
    /// Returns an error if the result is out of range.  Because dates are
    /// whole serial numbers there is no time-of-day component to truncate;
    /// adding `n` days always moves exactly `n` calendar days.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let jdn = self.0 + n;
        ensure_date!(
            (Self::MIN.0..=Self::MAX.0).contains(&jdn),
            "date arithmetic: JDN {jdn} out of range"
        );
        Ok(Date(jdn))
    }

    /// Return the number of whole calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition out of range");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction out of range");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    /// Indonesian long form, e.g. `"17 Agustus 1945"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_jdn(self.0);
        let mon = Month::from_number(m).expect("JDN decomposition always yields a valid month");
        write!(f, "{d} {mon} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_jdn(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a Julian Day Number.
///
/// Standard astronomical closed-form formula; all divisions are truncating
/// integer division, which is exact here because every operand is
/// non-negative for years >= 1.
fn jdn_from_ymd(year: u16, month: u8, day: u8) -> JulianDayNumber {
    let (y, m, d) = (year as i32, month as i32, day as i32);
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Decompose a Julian Day Number into (year, month, day).
///
/// Closed-form inverse of [`jdn_from_ymd`] (Richards' algorithm with the
/// March-based internal year).
fn ymd_from_jdn(jdn: JulianDayNumber) -> (u16, u8, u8) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as u16, month as u8, day as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
