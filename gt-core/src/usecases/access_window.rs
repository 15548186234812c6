use super::{day_key::lock_instant, prelude::*};

/// Whether a day's tree still accepts entries at `now`.
///
/// The store pushes no lock event; callers re-evaluate this on every
/// render pass or day switch.
pub fn is_open(day: &DayKey, now: Timestamp) -> bool {
    now < lock_instant(day)
}
