//! Integration tests for the selamatan schedule: exact offsets, status
//! classification, order preservation, and idempotence.

use wetonan_time::{format_weton, selamatan_schedule, Date, Status, SELAMATAN_EVENTS};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn exact_offsets_from_2024_01_01() {
    let base = date(2024, 1, 1);
    let occurrences = selamatan_schedule(base, base).unwrap();

    let expected = [
        (2024, 1, 1),   // Geblag, +0
        (2024, 1, 3),   // Nelung, +2
        (2024, 1, 7),   // Mitung, +6
        (2024, 2, 9),   // Matang, +39
        (2024, 4, 9),   // Nyatus, +99
        (2024, 12, 19), // Pendhak I, +353
        (2025, 12, 8),  // Pendhak II, +707
        (2026, 9, 26),  // Nyewu, +999
    ];
    assert_eq!(occurrences.len(), expected.len());
    for (occ, (y, m, d)) in occurrences.iter().zip(expected) {
        assert_eq!(occ.date, date(y, m, d), "wrong date for {}", occ.event.name);
        assert_eq!(occ.date - base, occ.event.offset_days);
    }
}

#[test]
fn status_relative_to_now() {
    let base = date(2024, 1, 1);

    // On the geblag day itself: Today, then all Future.
    let on_the_day = selamatan_schedule(base, base).unwrap();
    assert_eq!(on_the_day[0].status, Status::Today);
    assert!(on_the_day[1..].iter().all(|o| o.status == Status::Future));

    // A few days in: passed events are Past, the rest Future or Today.
    let now = date(2024, 1, 5);
    let midway = selamatan_schedule(base, now).unwrap();
    assert_eq!(midway[0].status, Status::Past); // Geblag, Jan 1
    assert_eq!(midway[0].days_from_today, -4);
    assert_eq!(midway[1].status, Status::Past); // Nelung, Jan 3
    assert_eq!(midway[2].status, Status::Future); // Mitung, Jan 7
    assert_eq!(midway[2].days_from_today, 2);

    // After the last offset: everything Past.
    let late = selamatan_schedule(base, date(2026, 9, 27)).unwrap();
    assert!(late.iter().all(|o| o.status == Status::Past));
    assert_eq!(late[7].days_from_today, -1);
}

#[test]
fn order_matches_table() {
    let base = date(2023, 7, 19);
    let occurrences = selamatan_schedule(base, date(2024, 1, 1)).unwrap();
    for (occ, ev) in occurrences.iter().zip(SELAMATAN_EVENTS) {
        assert_eq!(occ.event.name, ev.name);
    }
}

#[test]
fn weton_strings_attached() {
    let base = date(2024, 1, 1);
    let occurrences = selamatan_schedule(base, base).unwrap();
    // Matang (+39) falls on 9 February 2024, a Jumat Legi.
    assert_eq!(occurrences[3].weton, "Jumat Legi, 29 Rajeb");
    // Every occurrence carries the same string format_weton would produce.
    for occ in &occurrences {
        assert_eq!(occ.weton, format_weton(occ.date).unwrap());
    }
}

#[test]
fn idempotent() {
    let base = date(2023, 7, 19);
    let now = date(2024, 6, 1);
    let a = selamatan_schedule(base, now).unwrap();
    let b = selamatan_schedule(base, now).unwrap();
    assert_eq!(a, b);
}

#[test]
fn leap_day_base() {
    // A geblag on 29 February must still land on exact day offsets.
    let base = date(2024, 2, 29);
    let occurrences = selamatan_schedule(base, base).unwrap();
    assert_eq!(occurrences[1].date, date(2024, 3, 2)); // +2
    assert_eq!(occurrences[4].date, date(2024, 6, 7)); // +99
    assert_eq!(occurrences[7].date - base, 999);
}
