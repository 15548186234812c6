//! In-process document store for GratiTree.
//!
//! Keeps the day and entry collections in memory, assigns ids and
//! creation timestamps on append, and fans live snapshots out to
//! subscribers. An optional JSON snapshot file keeps the CLI stateful
//! between invocations.
//!
//! Single-threaded by design, like the event model it backs: tables use
//! interior mutability and feed callbacks are not `Send`.

mod feed;
mod models;

use std::{cell::RefCell, fs, path::Path};

use anyhow::anyhow;

use gt_core::{
    entities::*,
    gateways::feed::{EntryFeed, FeedCallback, FeedError, FeedSubscription},
    repositories::{DayRepo, EntryRepo, Error as RepoError, NewEntryRecord},
};

use crate::feed::FeedRegistry;
use crate::models::{DayRecord, EntryRecord, Snapshot, TreeRecord};

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MemDb {
    days: RefCell<Vec<Day>>,
    entries: RefCell<Vec<(DayKey, Entry)>>,
    feeds: FeedRegistry,
}

impl MemDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the snapshot at `path`, or starts empty if there is none.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No store snapshot at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let raw = fs::read_to_string(path)?;
        let snapshot: Snapshot =
            serde_json::from_str(&raw).map_err(|err| RepoError::Other(anyhow!(err)))?;
        let db = Self::new();
        {
            let mut days = db.days.borrow_mut();
            for record in &snapshot.days {
                let day = Day::try_from(record).map_err(|err| RepoError::Other(anyhow!(err)))?;
                days.push(day);
            }
        }
        {
            let mut entries = db.entries.borrow_mut();
            for tree in snapshot.trees {
                let day: DayKey = tree
                    .day
                    .parse()
                    .map_err(|err| RepoError::Other(anyhow!("{err}: {}", tree.day)))?;
                entries.extend(tree.entries.into_iter().map(|record| (day, record.into())));
            }
        }
        Ok(db)
    }

    /// Writes the whole store as one JSON snapshot.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut trees: Vec<TreeRecord> = Vec::new();
        for (day, entry) in self.entries.borrow().iter() {
            let key = day.to_string();
            let record = EntryRecord::from(entry);
            match trees.iter_mut().find(|tree| tree.day == key) {
                Some(tree) => tree.entries.push(record),
                None => trees.push(TreeRecord {
                    day: key,
                    entries: vec![record],
                }),
            }
        }
        let snapshot = Snapshot {
            days: self.days.borrow().iter().map(DayRecord::from).collect(),
            trees,
        };
        let raw =
            serde_json::to_string_pretty(&snapshot).map_err(|err| RepoError::Other(anyhow!(err)))?;
        fs::write(path, raw)?;
        Ok(())
    }

    fn sorted_entries_of_day(&self, day: &DayKey) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .entries
            .borrow()
            .iter()
            .filter(|(key, _)| key == day)
            .map(|(_, entry)| entry.clone())
            .collect();
        entries.sort_by_key(|entry| entry.created_at.map_or(0, Timestamp::as_millis));
        entries
    }
}

impl EntryRepo for MemDb {
    fn create_entry(&self, day: &DayKey, new: NewEntryRecord) -> Result<Entry> {
        let entry = Entry {
            id: Id::new(),
            author: new.author,
            display_name: new.display_name,
            anonymous: new.anonymous,
            text: new.text,
            parent: new.parent,
            // This store plays the server: the timestamp resolves
            // immediately instead of arriving with a later snapshot.
            created_at: Some(Timestamp::now()),
        };
        self.entries.borrow_mut().push((*day, entry.clone()));
        self.feeds.notify(day, self.sorted_entries_of_day(day));
        Ok(entry)
    }

    fn entries_of_day(&self, day: &DayKey) -> Result<Vec<Entry>> {
        Ok(self.sorted_entries_of_day(day))
    }

    fn entries_of_author(&self, day: &DayKey, author: &AuthorId) -> Result<Vec<Entry>> {
        Ok(self
            .sorted_entries_of_day(day)
            .into_iter()
            .filter(|entry| &entry.author == author)
            .collect())
    }
}

impl DayRepo for MemDb {
    fn create_or_update_day(&self, day: &Day) -> Result<()> {
        let mut days = self.days.borrow_mut();
        match days.iter_mut().find(|existing| existing.key == day.key) {
            Some(existing) => *existing = *day,
            None => days.push(*day),
        }
        Ok(())
    }

    fn get_day(&self, key: &DayKey) -> Result<Day> {
        self.days
            .borrow()
            .iter()
            .find(|day| &day.key == key)
            .copied()
            .ok_or(RepoError::NotFound)
    }

    fn all_days(&self) -> Result<Vec<Day>> {
        Ok(self.days.borrow().clone())
    }
}

impl EntryFeed for MemDb {
    fn subscribe(
        &self,
        day: &DayKey,
        on_update: FeedCallback,
    ) -> std::result::Result<Box<dyn FeedSubscription>, FeedError> {
        Ok(self
            .feeds
            .subscribe(*day, self.sorted_entries_of_day(day), on_update))
    }
}
