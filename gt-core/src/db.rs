use crate::repositories::*;

/// Everything a fully featured backend provides.
pub trait Db: EntryRepo + DayRepo {}

impl<T: EntryRepo + DayRepo> Db for T {}
