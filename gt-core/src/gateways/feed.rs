use thiserror::Error;

use gt_entities::{day::DayKey, entry::Entry};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Missing or insufficient permissions: {0}")]
    PermissionDenied(String),
    #[error("The live query failed: {0}")]
    Query(String),
}

/// One update delivered by the store's change feed.
///
/// Every change produces a fresh, complete snapshot of the day's
/// entries, ascending by creation time.
#[derive(Debug, Clone)]
pub enum FeedMessage {
    Snapshot(Vec<Entry>),
    Failure(FeedError),
}

/// Callbacks run on the single event thread and need not be `Send`.
pub type FeedCallback = Box<dyn Fn(FeedMessage)>;

/// Handle of one live subscription.
pub trait FeedSubscription {
    /// Tears the subscription down. No callback fires once this returns.
    fn cancel(self: Box<Self>);
}

/// Live-query seam of the document store.
pub trait EntryFeed {
    /// Starts a live query over a day's entries. The current snapshot
    /// is delivered through `on_update` before this returns; afterwards
    /// every change to the day delivers a fresh snapshot until the
    /// subscription is canceled.
    fn subscribe(
        &self,
        day: &DayKey,
        on_update: FeedCallback,
    ) -> Result<Box<dyn FeedSubscription>, FeedError>;
}
