// Low-level access traits for the backing document store.
// Each repository is responsible for a single collection; related
// documents are only referenced by their id and never loaded or
// modified through another repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// The client-chosen fields of a new entry. The store assigns the id
/// and the creation timestamp.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewEntryRecord {
    pub author       : AuthorId,
    pub display_name : Option<String>,
    pub anonymous    : bool,
    pub text         : String,
    pub parent       : Option<Id>,
}

pub trait EntryRepo {
    /// Appends one immutable entry document to a day's tree and returns
    /// it with the assigned id and (server) creation timestamp.
    fn create_entry(&self, day: &DayKey, new: NewEntryRecord) -> Result<Entry>;

    // Ascending by creation time; entries with a pending timestamp first.
    fn entries_of_day(&self, day: &DayKey) -> Result<Vec<Entry>>;
    fn entries_of_author(&self, day: &DayKey, author: &AuthorId) -> Result<Vec<Entry>>;

    fn count_entries_of_author(&self, day: &DayKey, author: &AuthorId) -> Result<usize> {
        Ok(self.entries_of_author(day, author)?.len())
    }
}

pub trait DayRepo {
    fn create_or_update_day(&self, day: &Day) -> Result<()>;
    fn get_day(&self, key: &DayKey) -> Result<Day>;
    fn all_days(&self) -> Result<Vec<Day>>;
}
