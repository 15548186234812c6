use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use gt_core::{
    entities::*,
    gateways::feed::{FeedCallback, FeedMessage, FeedSubscription},
};

/// The registered live queries of one store, keyed by day.
///
/// Callbacks run synchronously on the caller's thread. Canceling
/// removes the callback before returning, so a canceled subscription
/// never fires again. Callbacks must not subscribe or cancel from
/// within a notification.
#[derive(Default)]
pub struct FeedRegistry {
    listeners: Rc<RefCell<Vec<Listener>>>,
    next_id: Cell<u64>,
}

struct Listener {
    id: u64,
    day: DayKey,
    callback: FeedCallback,
}

impl FeedRegistry {
    /// Registers a live query. The initial snapshot is delivered before
    /// this returns.
    pub fn subscribe(
        &self,
        day: DayKey,
        initial: Vec<Entry>,
        callback: FeedCallback,
    ) -> Box<dyn FeedSubscription> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        callback(FeedMessage::Snapshot(initial));
        self.listeners.borrow_mut().push(Listener { id, day, callback });
        log::debug!("Feed {id} subscribed to tree {day}");
        Box::new(CancelOnDemand {
            listeners: Rc::clone(&self.listeners),
            id,
        })
    }

    /// Fans a fresh snapshot of `day` out to its live queries.
    pub fn notify(&self, day: &DayKey, snapshot: Vec<Entry>) {
        for listener in self.listeners.borrow().iter() {
            if &listener.day == day {
                (listener.callback)(FeedMessage::Snapshot(snapshot.clone()));
            }
        }
    }
}

struct CancelOnDemand {
    listeners: Rc<RefCell<Vec<Listener>>>,
    id: u64,
}

impl FeedSubscription for CancelOnDemand {
    fn cancel(self: Box<Self>) {
        self.listeners.borrow_mut().retain(|l| l.id != self.id);
        log::debug!("Feed {} canceled", self.id);
    }
}
