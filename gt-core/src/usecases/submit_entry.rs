use super::{prelude::*, quota};

/// Maximum entry length, in characters, checked before the write ever
/// reaches the store.
pub const MAX_TEXT_CHARS: usize = 120;

/// A candidate entry as captured from the form.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub author       : AuthorId,
    pub text         : String,
    pub display_name : Option<String>,
    pub anonymous    : bool,
    pub parent       : Option<Id>,
}

/// A successful submission, with the form's updated quota state.
///
/// `count` is derived locally from the pre-write count; the form can
/// disable itself without waiting for a feed update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub entry: Entry,
    pub count: usize,
    pub at_limit: bool,
}

/// Validates and persists one entry.
///
/// Checks run in order and the first failure wins: empty text, text too
/// long, quota reached. Nothing is written when any check fails. The
/// access window is not checked here; the store rejects writes to
/// locked days.
pub fn submit_entry<R: EntryRepo>(repo: &R, day: &DayKey, new: NewEntry) -> Result<Submitted> {
    let NewEntry {
        author,
        text,
        display_name,
        anonymous,
        parent,
    } = new;
    let text = text.trim().to_owned();
    if text.is_empty() {
        return Err(Error::EmptyText);
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(Error::TextTooLong);
    }
    let count = quota::count_entries_by(repo, day, &author)?;
    if count >= quota::MAX_ENTRIES_PER_DAY {
        return Err(Error::QuotaExceeded);
    }
    let display_name = display_name
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty());
    let entry = repo.create_entry(
        day,
        NewEntryRecord {
            author,
            display_name,
            anonymous,
            text,
            parent,
        },
    )?;
    log::debug!("Created entry {} in tree {day}", entry.id);
    let count = count + 1;
    Ok(Submitted {
        at_limit: count >= quota::MAX_ENTRIES_PER_DAY,
        entry,
        count,
    })
}
