use super::*;

/// A draft as captured from the entry form, before any identity is
/// attached.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub text         : String,
    pub display_name : Option<String>,
    pub anonymous    : bool,
    pub parent       : Option<Id>,
}

/// Validates and persists one entry on behalf of the signed-in account.
///
/// Returns `None` when nobody is signed in: a submit on a signed-out
/// form is ignored, not an error. Validation failures and write
/// failures surface as errors and leave no partial state behind.
pub fn submit_entry<D: EntryRepo>(
    db: &D,
    identity: Option<&Identity>,
    day: &DayKey,
    draft: EntryDraft,
) -> Result<Option<usecases::Submitted>> {
    let identity = match identity {
        Some(identity) => identity,
        None => return Ok(None),
    };
    let EntryDraft {
        text,
        display_name,
        anonymous,
        parent,
    } = draft;
    let new = usecases::NewEntry {
        author: identity.uid.clone(),
        text,
        display_name,
        anonymous,
        parent,
    };
    let submitted = usecases::submit_entry(db, day, new)?;
    info!(
        "Entry {} added to tree {} ({}/{})",
        submitted.entry.id,
        day,
        submitted.count,
        usecases::MAX_ENTRIES_PER_DAY
    );
    Ok(Some(submitted))
}
