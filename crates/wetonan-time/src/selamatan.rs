//! Selamatan commemorative-event schedule.
//!
//! Javanese tradition fixes a sequence of commemorations after a death,
//! counted in days from the day of death (the *geblag*).  The offsets are
//! one less than the traditional ordinal because the geblag itself counts
//! as day one: the "3-day" selamatan falls 2 days after it, and so on.

use crate::date::Date;
use crate::weton::format_weton;
use wetonan_core::errors::Result;

/// A commemorative event in the selamatan sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selamatan {
    /// Traditional name of the commemoration.
    pub name: &'static str,
    /// Short description of the interval ("Hari H", "3 Hari", …).
    pub description: &'static str,
    /// Days after the geblag.
    pub offset_days: i32,
}

/// The fixed selamatan sequence, in chronological order.
///
/// The order is significant and is preserved by [`selamatan_schedule`].
pub const SELAMATAN_EVENTS: [Selamatan; 8] = [
    Selamatan { name: "Geblag", description: "Hari H", offset_days: 0 },
    Selamatan { name: "Nelung", description: "3 Hari", offset_days: 2 },
    Selamatan { name: "Mitung", description: "7 Hari", offset_days: 6 },
    Selamatan { name: "Matang", description: "40 Hari", offset_days: 39 },
    Selamatan { name: "Nyatus", description: "100 Hari", offset_days: 99 },
    Selamatan { name: "Pendhak I", description: "1 Tahun", offset_days: 353 },
    Selamatan { name: "Pendhak II", description: "2 Tahun", offset_days: 707 },
    Selamatan { name: "Nyewu", description: "1000 Hari", offset_days: 999 },
];

/// Position of an occurrence relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The occurrence date is before today.
    Past,
    /// The occurrence date is today.
    Today,
    /// The occurrence date is after today.
    Future,
}

impl Status {
    /// Classify from a signed whole-day difference (occurrence − today).
    pub fn classify(days_from_today: i32) -> Self {
        match days_from_today {
            d if d < 0 => Status::Past,
            0 => Status::Today,
            _ => Status::Future,
        }
    }
}

/// One scheduled selamatan occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The event this occurrence realises.
    pub event: Selamatan,
    /// The occurrence date (geblag date + offset).
    pub date: Date,
    /// Whole days from `today` to the occurrence; negative if past.
    pub days_from_today: i32,
    /// Past/Today/Future relative to `today`.
    pub status: Status,
    /// The occurrence's weton display string.
    pub weton: String,
}

/// Compute the selamatan schedule for a geblag (death) date.
///
/// `today` is injected rather than read from the clock, keeping the
/// computation pure.  Both dates are whole calendar days, so the day
/// differences are exact; there is no time-of-day truncation.
///
/// Returns exactly one occurrence per entry of [`SELAMATAN_EVENTS`], in
/// table order, never filtered or reordered.
///
/// # Errors
/// Propagates date-range and lunar-conversion failures for occurrence
/// dates the calendars cannot express.
pub fn selamatan_schedule(base: Date, today: Date) -> Result<Vec<Occurrence>> {
    SELAMATAN_EVENTS
        .iter()
        .map(|&event| {
            let date = base.add_days(event.offset_days)?;
            let days_from_today = today.days_between(date);
            Ok(Occurrence {
                event,
                date,
                days_from_today,
                status: Status::classify(days_from_today),
                weton: format_weton(date)?,
            })
        })
        .collect()
}
