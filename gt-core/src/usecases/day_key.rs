use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::prelude::*;

/// All day boundaries are computed in this fixed timezone so every
/// viewer shares the same calendar date, wherever they are.
pub const REFERENCE_TZ: Tz = chrono_tz::America::Denver;

/// The day key an instant falls on, in the reference timezone.
pub fn day_key(at: Timestamp) -> DayKey {
    let utc: DateTime<Utc> = at.into();
    utc.with_timezone(&REFERENCE_TZ).date_naive().into()
}

/// The instant a day's tree locks: midnight at the start of the next
/// calendar day in the reference timezone.
///
/// The UTC offset is resolved through the timezone rules for that very
/// instant, never a fixed constant, so the days around a DST transition
/// lock 23 or 25 hours apart.
pub fn lock_instant(day: &DayKey) -> Timestamp {
    let next = day.date().succ_opt().expect("next calendar day");
    let midnight = next.and_hms_opt(0, 0, 0).expect("midnight");
    let resolved = match REFERENCE_TZ.from_local_datetime(&midnight) {
        LocalResult::Single(at) => at,
        // Clocks fell back over midnight: the first occurrence starts
        // the day.
        LocalResult::Ambiguous(first, _) => first,
        // Clocks sprang forward over midnight: the day starts the
        // moment the gap ends.
        LocalResult::None => resolve_skipped(midnight),
    };
    resolved.with_timezone(&Utc).into()
}

// No IANA zone skips more than one hour at a DST transition.
fn resolve_skipped(local: NaiveDateTime) -> DateTime<Tz> {
    REFERENCE_TZ
        .from_local_datetime(&(local + Duration::hours(1)))
        .earliest()
        .expect("local time right after a one-hour gap")
}

/// Day-picker keys: today first, going back `len - 1` days.
pub fn recent_days(now: Timestamp, len: usize) -> Vec<DayKey> {
    let today = day_key(now).date();
    (0..len)
        .map(|i| DayKey::from(today - Duration::days(i as i64)))
        .collect()
}

/// Provisioning keys: today first, going forward `len - 1` days.
pub fn upcoming_days(now: Timestamp, len: usize) -> Vec<DayKey> {
    let today = day_key(now).date();
    (0..len)
        .map(|i| DayKey::from(today + Duration::days(i as i64)))
        .collect()
}
