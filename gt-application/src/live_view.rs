use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::gateways::feed::{EntryFeed, FeedMessage, FeedSubscription};
use crate::usecases::ReplyOption;

/// What a day switch resolved to, for the caller's chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayMode {
    /// The tree still accepts entries. The full tree is not readable
    /// yet; quota state and reply targets come from the viewer's own
    /// entries.
    Open {
        own_count: Option<usize>,
        at_limit: bool,
    },
    /// The tree is locked and readable; snapshots stream into the view
    /// state until the next day switch.
    Locked,
}

/// Everything derived from the latest snapshot of the displayed day.
#[derive(Debug, Default)]
pub struct ViewState {
    pub day: Option<DayKey>,
    pub forest: Vec<TreeNode>,
    pub reply_options: Vec<ReplyOption>,
    /// Set when the feed reports a failure. The forest keeps its last
    /// successfully rendered value.
    pub error: Option<String>,
}

/// Owner of the single live subscription and of the displayed day.
///
/// Switching days tears the previous subscription down before anything
/// else happens, and every snapshot is checked against the currently
/// displayed day, so a late callback from a replaced subscription can
/// never overwrite fresher state.
pub struct LiveView {
    state: Rc<RefCell<ViewState>>,
    subscription: Option<Box<dyn FeedSubscription>>,
}

impl Default for LiveView {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveView {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewState::default())),
            subscription: None,
        }
    }

    /// Shared handle to the rendered state.
    pub fn state(&self) -> Rc<RefCell<ViewState>> {
        Rc::clone(&self.state)
    }

    pub fn current_day(&self) -> Option<DayKey> {
        self.state.borrow().day
    }

    /// Cancels the active subscription, if any.
    pub fn unsubscribe(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }

    /// Switches the view to `day` and returns whether it is open or
    /// locked at `now`.
    pub fn switch_day<D, F>(
        &mut self,
        db: &D,
        feed: &F,
        identity: Option<&Identity>,
        day: DayKey,
        now: Timestamp,
    ) -> Result<DayMode>
    where
        D: EntryRepo,
        F: EntryFeed,
    {
        self.unsubscribe();
        {
            let mut state = self.state.borrow_mut();
            state.day = Some(day);
            state.forest.clear();
            state.reply_options.clear();
            state.error = None;
        }

        if usecases::is_open(&day, now) {
            let (own_count, at_limit, options) = match identity {
                Some(identity) => {
                    let own = db.entries_of_author(&day, &identity.uid)?;
                    let count = own.len();
                    let options = usecases::reply_options(&usecases::build_forest(own));
                    (
                        Some(count),
                        count >= usecases::MAX_ENTRIES_PER_DAY,
                        options,
                    )
                }
                None => (None, false, Vec::new()),
            };
            self.state.borrow_mut().reply_options = options;
            return Ok(DayMode::Open {
                own_count,
                at_limit,
            });
        }

        let state = Rc::clone(&self.state);
        let subscription = feed.subscribe(
            &day,
            Box::new(move |message| {
                let mut state = state.borrow_mut();
                // A late callback of a replaced subscription carries a
                // day that is no longer displayed; drop it.
                if state.day != Some(day) {
                    return;
                }
                match message {
                    FeedMessage::Snapshot(entries) => {
                        let forest = usecases::build_forest(entries);
                        state.reply_options = usecases::reply_options(&forest);
                        state.forest = forest;
                        state.error = None;
                    }
                    FeedMessage::Failure(err) => {
                        warn!("Live query for tree {day} failed: {err}");
                        state.error = Some(err.to_string());
                    }
                }
            }),
        )?;
        self.subscription = Some(subscription);
        Ok(DayMode::Locked)
    }
}

impl Drop for LiveView {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
