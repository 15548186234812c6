use super::prelude::*;

/// Hard cap of entries one account may add to a single day's tree.
pub const MAX_ENTRIES_PER_DAY: usize = 3;

/// How many entries the author has already contributed to the day.
/// A filtered read, evaluated once per submission attempt or day
/// switch, not kept live.
pub fn count_entries_by<R: EntryRepo>(repo: &R, day: &DayKey, author: &AuthorId) -> Result<usize> {
    Ok(repo.count_entries_of_author(day, author)?)
}

/// Whether the author may still add an entry to the day.
///
/// The count this reads can be stale: two submissions in flight at the
/// same time may both pass before either write lands, so the cap can
/// transiently be exceeded by `in_flight - 1`. The store does not
/// serialize submissions.
pub fn can_submit<R: EntryRepo>(repo: &R, day: &DayKey, author: &AuthorId) -> Result<bool> {
    Ok(count_entries_by(repo, day, author)? < MAX_ENTRIES_PER_DAY)
}
