//! `Pasaran` — the 5-day Javanese market cycle.

use wetonan_core::JulianDayNumber;

/// Day of the 5-day Javanese market cycle.
///
/// Variants are numbered 1–5 (Legi = 1, Kliwon = 5).  A date's pasaran is
/// `jdn mod 5` shifted to this ordinal, so JDN ≡ 0 (mod 5) is Legi.
///
/// # Calibration
/// The cycle has no astronomical anchor, so the offset is a pure calibration
/// constant.  `jdn mod 5 == 0 → Legi` is validated against two published
/// reference dates: 17 August 1945 (JDN 2 431 685, historically Jumat Legi)
/// and 1 January 2000 (JDN 2 451 545, Sabtu Legi).  This single constant is
/// used everywhere; there is no per-caller offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Pasaran {
    /// Legi (1).
    Legi = 1,
    /// Pahing (2).
    Pahing = 2,
    /// Pon (3).
    Pon = 3,
    /// Wage (4).
    Wage = 4,
    /// Kliwon (5).
    Kliwon = 5,
}

impl Pasaran {
    /// Construct from the ordinal (1 = Legi … 5 = Kliwon).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Pasaran::Legi),
            2 => Some(Pasaran::Pahing),
            3 => Some(Pasaran::Pon),
            4 => Some(Pasaran::Wage),
            5 => Some(Pasaran::Kliwon),
            _ => None,
        }
    }

    /// Return the pasaran of the day with the given Julian Day Number.
    pub fn from_jdn(jdn: JulianDayNumber) -> Self {
        let n = (jdn.rem_euclid(5) + 1) as u8;
        Self::from_ordinal(n).expect("rem_euclid always in 1..=5")
    }

    /// Return the ordinal (1 = Legi … 5 = Kliwon).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the name (`"Legi"`, `"Pahing"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            Pasaran::Legi => "Legi",
            Pasaran::Pahing => "Pahing",
            Pasaran::Pon => "Pon",
            Pasaran::Wage => "Wage",
            Pasaran::Kliwon => "Kliwon",
        }
    }
}

impl std::fmt::Display for Pasaran {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=5u8 {
            let p = Pasaran::from_ordinal(n).unwrap();
            assert_eq!(p.ordinal(), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(Pasaran::from_ordinal(0).is_none());
        assert!(Pasaran::from_ordinal(6).is_none());
    }

    #[test]
    fn calibration_anchor() {
        // 17 August 1945 = JDN 2431685 = Jumat Legi
        assert_eq!(Pasaran::from_jdn(2_431_685), Pasaran::Legi);
        // 1 January 2000 = JDN 2451545 = Sabtu Legi
        assert_eq!(Pasaran::from_jdn(2_451_545), Pasaran::Legi);
    }

    #[test]
    fn five_day_period() {
        for jdn in 2_460_000..2_460_050 {
            assert_eq!(Pasaran::from_jdn(jdn), Pasaran::from_jdn(jdn + 5));
            assert_ne!(Pasaran::from_jdn(jdn), Pasaran::from_jdn(jdn + 1));
        }
    }
}
