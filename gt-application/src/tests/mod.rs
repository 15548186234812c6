use std::{cell::RefCell, rc::Rc};

use gt_db_mem::MemDb;
use gt_entities::builders::Builder;

use super::prelude::*;
use crate::{
    error::{AppError, BError},
    gateways::{
        feed::{EntryFeed, FeedCallback, FeedError, FeedMessage, FeedSubscription},
        identity::{Error as IdentityError, IdentityGateway},
    },
    usecases, DayKey, Entry, EntryRepo, Identity, Timestamp,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn user(uid: &str) -> Identity {
    Identity {
        uid: uid.into(),
        display_name: None,
        email: None,
        admin: false,
    }
}

fn admin(uid: &str) -> Identity {
    Identity {
        admin: true,
        ..user(uid)
    }
}

fn locked_day() -> DayKey {
    "2020-01-01".parse().unwrap()
}

fn draft(text: &str) -> EntryDraft {
    EntryDraft {
        text: text.into(),
        ..Default::default()
    }
}

/// Identity provider with scripted answers.
#[derive(Default)]
struct FakeIdentityGateway {
    current: Option<Identity>,
    refreshed: Option<Identity>,
    fail_sign_out: bool,
}

impl IdentityGateway for FakeIdentityGateway {
    fn current_identity(&self) -> Result<Option<Identity>, IdentityError> {
        Ok(self.current.clone())
    }

    fn refreshed_identity(&self) -> Result<Option<Identity>, IdentityError> {
        Ok(self.refreshed.clone())
    }

    fn sign_out(&self) -> Result<(), IdentityError> {
        if self.fail_sign_out {
            return Err(IdentityError::SignOut("network unreachable".into()));
        }
        Ok(())
    }
}

/// A feed whose subscriptions never really die: callbacks stay around
/// after cancel so tests can replay late messages.
#[derive(Default)]
struct LeakyFeed {
    callbacks: RefCell<Vec<(DayKey, Rc<FeedCallback>)>>,
}

impl LeakyFeed {
    fn fire(&self, index: usize, message: FeedMessage) {
        let callback = Rc::clone(&self.callbacks.borrow()[index].1);
        (callback.as_ref())(message);
    }
}

struct NoopHandle;

impl FeedSubscription for NoopHandle {
    fn cancel(self: Box<Self>) {}
}

impl EntryFeed for LeakyFeed {
    fn subscribe(
        &self,
        day: &DayKey,
        on_update: FeedCallback,
    ) -> Result<Box<dyn FeedSubscription>, FeedError> {
        on_update(FeedMessage::Snapshot(Vec::new()));
        self.callbacks.borrow_mut().push((*day, Rc::new(on_update)));
        Ok(Box::new(NoopHandle))
    }
}

mod submitting {
    use super::*;

    #[test]
    fn without_identity_nothing_happens() {
        init_logging();
        let db = MemDb::new();
        let outcome = submit_entry(&db, None, &locked_day(), draft("thanks")).unwrap();
        assert!(outcome.is_none());
        assert!(db.entries_of_day(&locked_day()).unwrap().is_empty());
    }

    #[test]
    fn a_signed_in_submit_persists_and_counts() {
        init_logging();
        let db = MemDb::new();
        let jo = user("jo");
        let day = locked_day();
        let submitted = submit_entry(&db, Some(&jo), &day, draft("thankful"))
            .unwrap()
            .unwrap();
        assert_eq!(submitted.entry.author, jo.uid);
        assert_eq!(submitted.count, 1);
        assert_eq!(db.entries_of_day(&day).unwrap().len(), 1);
    }

    #[test]
    fn validation_failures_have_distinct_messages() {
        init_logging();
        let db = MemDb::new();
        let jo = user("jo");
        let day = locked_day();

        let empty = submit_entry(&db, Some(&jo), &day, draft("  ")).unwrap_err();
        assert_eq!(empty.to_string(), "Required fields are missing");

        let long = submit_entry(&db, Some(&jo), &day, draft(&"x".repeat(121))).unwrap_err();
        assert_eq!(long.to_string(), "Entry must be 120 characters or less");

        for i in 0..3 {
            submit_entry(&db, Some(&jo), &day, draft(&format!("entry {i}")))
                .unwrap()
                .unwrap();
        }
        let quota = submit_entry(&db, Some(&jo), &day, draft("no. 4")).unwrap_err();
        assert_eq!(
            quota.to_string(),
            "You've reached the limit of 3 entries for today"
        );
        assert!(matches!(
            quota,
            AppError::Business(BError::Parameter(usecases::Error::QuotaExceeded))
        ));
        assert_eq!(db.entries_of_day(&day).unwrap().len(), 3);
    }

    #[test]
    fn the_third_entry_reports_at_limit() {
        init_logging();
        let db = MemDb::new();
        let jo = user("jo");
        let day = locked_day();
        for expected in [false, false, true] {
            let submitted = submit_entry(&db, Some(&jo), &day, draft("thanks"))
                .unwrap()
                .unwrap();
            assert_eq!(submitted.at_limit, expected);
        }
    }
}

mod live_view {
    use super::*;

    #[test]
    fn a_locked_day_streams_snapshots_into_the_state() {
        init_logging();
        let db = MemDb::new();
        let day = locked_day();
        let mut view = LiveView::new();
        let mode = view
            .switch_day(&db, &db, Some(&user("jo")), day, Timestamp::now())
            .unwrap();
        assert_eq!(mode, DayMode::Locked);
        assert!(view.state().borrow().forest.is_empty());

        // A new entry fans out to the live view without a re-read.
        submit_entry(&db, Some(&user("ada")), &day, draft("late thanks"))
            .unwrap()
            .unwrap();
        let state = view.state();
        let state = state.borrow();
        assert_eq!(state.forest.len(), 1);
        assert_eq!(state.reply_options.len(), 1);
        assert_eq!(state.reply_options[0].label, "late thanks");
    }

    #[test]
    fn replies_nest_in_the_rendered_forest() {
        init_logging();
        let db = MemDb::new();
        let day = locked_day();
        let root = submit_entry(&db, Some(&user("jo")), &day, draft("root"))
            .unwrap()
            .unwrap();
        let mut reply = draft("reply");
        reply.parent = Some(root.entry.id.clone());
        submit_entry(&db, Some(&user("ada")), &day, reply)
            .unwrap()
            .unwrap();

        let mut view = LiveView::new();
        view.switch_day(&db, &db, None, day, Timestamp::now())
            .unwrap();
        let state = view.state();
        let state = state.borrow();
        assert_eq!(state.forest.len(), 1);
        assert_eq!(state.forest[0].children.len(), 1);
        // Reply targets flatten parent-before-child.
        assert_eq!(state.reply_options[0].label, "root");
        assert_eq!(state.reply_options[1].label, "reply");
    }

    #[test]
    fn switching_days_cancels_the_previous_subscription() {
        init_logging();
        let db = MemDb::new();
        let first = locked_day();
        let second: DayKey = "2020-01-02".parse().unwrap();
        let mut view = LiveView::new();
        view.switch_day(&db, &db, None, first, Timestamp::now())
            .unwrap();
        view.switch_day(&db, &db, None, second, Timestamp::now())
            .unwrap();
        assert_eq!(view.current_day(), Some(second));

        // Activity on the first day must not reach the view anymore.
        submit_entry(&db, Some(&user("jo")), &first, draft("too late"))
            .unwrap()
            .unwrap();
        assert!(view.state().borrow().forest.is_empty());
    }

    #[test]
    fn an_open_day_reads_only_the_viewers_own_entries() {
        init_logging();
        let db = MemDb::new();
        let now = Timestamp::now();
        let today = usecases::day_key(now);
        let jo = user("jo");
        submit_entry(&db, Some(&jo), &today, draft("mine")).unwrap().unwrap();
        submit_entry(&db, Some(&user("ada")), &today, draft("hers"))
            .unwrap()
            .unwrap();

        let mut view = LiveView::new();
        let mode = view.switch_day(&db, &db, Some(&jo), today, now).unwrap();
        assert_eq!(
            mode,
            DayMode::Open {
                own_count: Some(1),
                at_limit: false,
            }
        );
        let state = view.state();
        let state = state.borrow();
        // No live forest while the day is open, and the reply targets
        // cover the viewer's own entries only.
        assert!(state.forest.is_empty());
        assert_eq!(state.reply_options.len(), 1);
        assert_eq!(state.reply_options[0].label, "mine");
    }

    #[test]
    fn an_open_day_without_identity_has_no_quota_state() {
        init_logging();
        let db = MemDb::new();
        let now = Timestamp::now();
        let today = usecases::day_key(now);
        let mut view = LiveView::new();
        let mode = view.switch_day(&db, &db, None, today, now).unwrap();
        assert_eq!(
            mode,
            DayMode::Open {
                own_count: None,
                at_limit: false,
            }
        );
    }

    #[test]
    fn a_feed_failure_keeps_the_last_rendered_forest() {
        init_logging();
        let feed = LeakyFeed::default();
        let db = MemDb::new();
        let day = locked_day();
        let mut view = LiveView::new();
        view.switch_day(&db, &feed, None, day, Timestamp::now())
            .unwrap();

        let entry = Entry::build().id("e1").text("still here").created_at(1).finish();
        feed.fire(0, FeedMessage::Snapshot(vec![entry]));
        assert_eq!(view.state().borrow().forest.len(), 1);

        feed.fire(
            0,
            FeedMessage::Failure(FeedError::PermissionDenied("rules".into())),
        );
        let state = view.state();
        let state = state.borrow();
        assert!(state.error.is_some());
        assert_eq!(state.forest.len(), 1);
    }

    #[test]
    fn a_recovered_feed_clears_the_error_banner() {
        init_logging();
        let feed = LeakyFeed::default();
        let db = MemDb::new();
        let mut view = LiveView::new();
        view.switch_day(&db, &feed, None, locked_day(), Timestamp::now())
            .unwrap();
        feed.fire(0, FeedMessage::Failure(FeedError::Query("offline".into())));
        assert!(view.state().borrow().error.is_some());
        feed.fire(0, FeedMessage::Snapshot(Vec::new()));
        assert!(view.state().borrow().error.is_none());
    }

    #[test]
    fn late_callbacks_of_a_replaced_subscription_are_discarded() {
        init_logging();
        let feed = LeakyFeed::default();
        let db = MemDb::new();
        let first = locked_day();
        let second: DayKey = "2020-01-02".parse().unwrap();
        let mut view = LiveView::new();
        view.switch_day(&db, &feed, None, first, Timestamp::now())
            .unwrap();
        view.switch_day(&db, &feed, None, second, Timestamp::now())
            .unwrap();

        // The first subscription fires again even though it was
        // canceled; the stale snapshot must not leak into the view.
        let stale = Entry::build().id("stale").text("stale").created_at(1).finish();
        feed.fire(0, FeedMessage::Snapshot(vec![stale]));
        let state = view.state();
        let state = state.borrow();
        assert_eq!(state.day, Some(second));
        assert!(state.forest.is_empty());
    }
}

mod provisioning {
    use super::*;
    use crate::DayRepo;

    #[test]
    fn the_refreshed_claim_decides() {
        init_logging();
        let db = MemDb::new();
        // Signed in without the claim, but the refreshed token has it.
        let gateway = FakeIdentityGateway {
            current: Some(user("jo")),
            refreshed: Some(admin("jo")),
            ..Default::default()
        };
        let days = provision_days(&db, &gateway, Timestamp::now(), 7).unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(db.all_days().unwrap().len(), 7);
        for day in days {
            assert_eq!(db.get_day(&day.key).unwrap(), day);
            assert_eq!(day.open_until, usecases::lock_instant(&day.key));
        }
    }

    #[test]
    fn without_the_claim_nothing_is_created() {
        init_logging();
        let db = MemDb::new();
        let gateway = FakeIdentityGateway {
            current: Some(user("jo")),
            refreshed: Some(user("jo")),
            ..Default::default()
        };
        let err = provision_days(&db, &gateway, Timestamp::now(), 7).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Unauthorized))
        ));
        assert!(db.all_days().unwrap().is_empty());
    }

    #[test]
    fn signed_out_is_unauthorized() {
        init_logging();
        let db = MemDb::new();
        let gateway = FakeIdentityGateway::default();
        assert!(provision_days(&db, &gateway, Timestamp::now(), 7).is_err());
    }
}

mod session {
    use super::*;

    #[test]
    fn sign_out_errors_are_reported_not_fatal() {
        init_logging();
        let ok = FakeIdentityGateway::default();
        assert!(sign_out(&ok).is_ok());

        let failing = FakeIdentityGateway {
            fail_sign_out: true,
            ..Default::default()
        };
        let err = sign_out(&failing).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Identity(IdentityError::SignOut(_)))
        ));
    }
}
