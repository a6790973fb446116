//! Javanese lunar calendar, computed with the tabular Hijri cycle.
//!
//! The Javanese calendar tracks the tabular Islamic calendar month for
//! month: 12 alternating 30/29-day months with 11 leap days spread over a
//! 30-year cycle (10 631 days per cycle).  The conversion below is the
//! standard Kuwaiti-algorithm integer arithmetic on that cycle, pivoting on
//! the Julian Day Number.
//!
//! # Calibration and accuracy
//! The epoch is the civil tabular epoch, 1 Muharram 1 AH = JDN 1 948 440
//! (16 July 622).  With this anchor, 19 July 2023 (JDN 2 460 145) maps to
//! 1 Suro 1445 AH — the published start of the Javanese year 1957 AJ.
//! Tabular months can differ from observational (rukyat) month starts by up
//! to one day; results carry that ±1-day tolerance.
//!
//! Years are reported in Anno Javanico (AJ), which runs 512 ahead of the
//! Hijri year count.

use wetonan_core::errors::{Error, Result};
use wetonan_core::{ensure_date, JulianDayNumber};

/// JDN of 1 Muharram 1 AH in the civil tabular reckoning.
pub const LUNAR_EPOCH_JDN: JulianDayNumber = 1_948_440;

/// Offset between the Javanese (AJ) and Hijri (AH) year counts.
pub const AJ_YEAR_OFFSET: i32 = 512;

/// Days in one 30-year tabular cycle.
const CYCLE_DAYS: i32 = 10_631;

/// Month of the Javanese lunar year.
///
/// Variants are numbered 1–12 (Suro = 1, Besar = 12), aligned with the
/// Hijri months (Suro = Muharram, Poso = Ramadan, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum JavaneseMonth {
    /// Suro (1), aligned with Muharram.
    Suro = 1,
    /// Sapar (2).
    Sapar = 2,
    /// Mulud (3).
    Mulud = 3,
    /// Bakda Mulud (4).
    BakdaMulud = 4,
    /// Jumadil Awal (5).
    JumadilAwal = 5,
    /// Jumadil Akhir (6).
    JumadilAkhir = 6,
    /// Rajeb (7).
    Rajeb = 7,
    /// Ruwah (8).
    Ruwah = 8,
    /// Poso (9), the fasting month, aligned with Ramadan.
    Poso = 9,
    /// Sawal (10).
    Sawal = 10,
    /// Sela (11).
    Sela = 11,
    /// Besar (12).
    Besar = 12,
}

impl JavaneseMonth {
    /// Construct from a number (1 = Suro … 12 = Besar).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(JavaneseMonth::Suro),
            2 => Some(JavaneseMonth::Sapar),
            3 => Some(JavaneseMonth::Mulud),
            4 => Some(JavaneseMonth::BakdaMulud),
            5 => Some(JavaneseMonth::JumadilAwal),
            6 => Some(JavaneseMonth::JumadilAkhir),
            7 => Some(JavaneseMonth::Rajeb),
            8 => Some(JavaneseMonth::Ruwah),
            9 => Some(JavaneseMonth::Poso),
            10 => Some(JavaneseMonth::Sawal),
            11 => Some(JavaneseMonth::Sela),
            12 => Some(JavaneseMonth::Besar),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the name (`"Suro"`, `"Sapar"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            JavaneseMonth::Suro => "Suro",
            JavaneseMonth::Sapar => "Sapar",
            JavaneseMonth::Mulud => "Mulud",
            JavaneseMonth::BakdaMulud => "Bakda Mulud",
            JavaneseMonth::JumadilAwal => "Jumadil Awal",
            JavaneseMonth::JumadilAkhir => "Jumadil Akhir",
            JavaneseMonth::Rajeb => "Rajeb",
            JavaneseMonth::Ruwah => "Ruwah",
            JavaneseMonth::Poso => "Poso",
            JavaneseMonth::Sawal => "Sawal",
            JavaneseMonth::Sela => "Sela",
            JavaneseMonth::Besar => "Besar",
        }
    }
}

impl std::fmt::Display for JavaneseMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A date in the Javanese lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JavaneseDate {
    /// Day of the lunar month (1–30).
    pub day: u8,
    /// Lunar month.
    pub month: JavaneseMonth,
    /// Year in Anno Javanico (AJ = AH + 512).
    pub year: i32,
}

impl JavaneseDate {
    /// Return the year in the Hijri (AH) count.
    pub fn year_ah(&self) -> i32 {
        self.year - AJ_YEAR_OFFSET
    }
}

impl std::fmt::Display for JavaneseDate {
    /// Full form, e.g. `"1 Suro 1957"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

/// Convert a Julian Day Number to a Javanese lunar date.
///
/// # Errors
/// * `Error::Date` if `jdn` precedes the lunar epoch (1 Muharram 1 AH).
/// * `Error::LunarConversion` if the tabular arithmetic yields a month
///   index outside 1..=12.
pub fn javanese_from_jdn(jdn: JulianDayNumber) -> Result<JavaneseDate> {
    ensure_date!(
        jdn >= LUNAR_EPOCH_JDN,
        "JDN {jdn} precedes the lunar epoch (JDN {LUNAR_EPOCH_JDN})"
    );

    // Day count since the epoch, biased by one full cycle so the cycle
    // index arithmetic stays positive.
    let mut l = jdn - LUNAR_EPOCH_JDN + CYCLE_DAYS + 1;
    let n = (l - 1) / CYCLE_DAYS;
    l = l - CYCLE_DAYS * n + 354;
    // Leap-day correction within the 30-year cycle.
    let j = ((10_985 - l) / 5_316) * ((50 * l) / 17_719) + (l / 5_670) * ((43 * l) / 15_238);
    l = l - ((30 - j) / 15) * ((17_719 * j) / 50) - (j / 16) * ((15_238 * j) / 43) + 29;
    let month = (24 * l) / 709;
    let day = l - (709 * month) / 24;
    let year_ah = 30 * n + j - 30;

    let month = JavaneseMonth::from_number(u8::try_from(month).unwrap_or(0))
        .ok_or(Error::LunarConversion { jdn, month })?;
    Ok(JavaneseDate {
        day: day as u8,
        month,
        year: year_ah + AJ_YEAR_OFFSET,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_first_of_suro() {
        let jd = javanese_from_jdn(LUNAR_EPOCH_JDN).unwrap();
        assert_eq!(jd.day, 1);
        assert_eq!(jd.month, JavaneseMonth::Suro);
        assert_eq!(jd.year_ah(), 1);
        assert_eq!(jd.year, 1 + AJ_YEAR_OFFSET);
    }

    #[test]
    fn suro_1957_anchor() {
        // 19 July 2023 = JDN 2460145 = 1 Suro 1445 AH = 1957 AJ
        let jd = javanese_from_jdn(2_460_145).unwrap();
        assert_eq!(jd.day, 1);
        assert_eq!(jd.month, JavaneseMonth::Suro);
        assert_eq!(jd.year, 1957);
        // The day before belongs to the preceding year
        let prev = javanese_from_jdn(2_460_144).unwrap();
        assert_eq!(prev.month, JavaneseMonth::Besar);
        assert_eq!(prev.year, 1956);
    }

    #[test]
    fn new_year_2024() {
        // 1 January 2024 = JDN 2460311 = 19 Jumadil Akhir 1445 AH
        let jd = javanese_from_jdn(2_460_311).unwrap();
        assert_eq!(jd.day, 19);
        assert_eq!(jd.month, JavaneseMonth::JumadilAkhir);
        assert_eq!(jd.year_ah(), 1445);
    }

    #[test]
    fn before_epoch_is_rejected() {
        let err = javanese_from_jdn(LUNAR_EPOCH_JDN - 1).unwrap_err();
        assert!(matches!(err, Error::Date(_)));
    }

    #[test]
    fn day_and_month_stay_in_range() {
        // Sweep a few decades around the anchors; every result must be a
        // real lunar date, never a sentinel.
        for jdn in 2_450_000..2_465_000 {
            let jd = javanese_from_jdn(jdn).unwrap();
            assert!((1..=30).contains(&jd.day), "day {} at JDN {jdn}", jd.day);
        }
    }

    #[test]
    fn months_advance_by_29_or_30_days() {
        let mut prev = javanese_from_jdn(2_460_000).unwrap();
        let mut month_start = 2_460_000;
        for jdn in 2_460_001..2_463_000 {
            let cur = javanese_from_jdn(jdn).unwrap();
            if cur.month != prev.month {
                let len = jdn - month_start;
                // First span is a partial month; full months are 29 or 30 days.
                assert!(
                    len <= 30,
                    "month {} lasted {len} days ending at JDN {jdn}",
                    prev.month
                );
                assert_eq!(cur.day, 1, "month must start at day 1 (JDN {jdn})");
                month_start = jdn;
            }
            prev = cur;
        }
    }

    #[test]
    fn display_forms() {
        let jd = javanese_from_jdn(2_460_145).unwrap();
        assert_eq!(jd.to_string(), "1 Suro 1957");
    }
}
