//! Error types for wetonan-rs.
//!
//! The engine is pure arithmetic, so the taxonomy is deliberately narrow:
//! a date is either invalid at the boundary, or the tabular lunar
//! conversion produced an impossible month index.

use thiserror::Error;

/// The top-level error type used throughout wetonan-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date-related error: invalid calendar input or out-of-range
    /// date arithmetic.
    #[error("date error: {0}")]
    Date(String),

    /// The tabular lunar algorithm produced a month index outside 1..=12.
    ///
    /// Surfaced as a typed failure so callers can distinguish it from any
    /// valid lunar date; never coerced to a placeholder month name.
    #[error("lunar conversion failed for JDN {jdn}: month index {month} out of range [1, 12]")]
    LunarConversion {
        /// The Julian Day Number that was being converted.
        jdn: i32,
        /// The out-of-range month index the algorithm produced.
        month: i32,
    },
}

/// Shorthand `Result` type used throughout wetonan-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validation guard for date boundaries.
///
/// Returns `Err(Error::Date(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wetonan_core::ensure_date;
/// fn month_in_range(m: u8) -> wetonan_core::Result<u8> {
///     ensure_date!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month_in_range(6).is_ok());
/// assert!(month_in_range(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure_date {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Date(format!($($msg)*)));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_error_message() {
        let err = Error::Date("day 30 out of range [1, 29] for 2024-02".into());
        assert_eq!(
            err.to_string(),
            "date error: day 30 out of range [1, 29] for 2024-02"
        );
    }

    #[test]
    fn lunar_error_message() {
        let err = Error::LunarConversion {
            jdn: 2_460_311,
            month: 13,
        };
        assert_eq!(
            err.to_string(),
            "lunar conversion failed for JDN 2460311: month index 13 out of range [1, 12]"
        );
    }
}
