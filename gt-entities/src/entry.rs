use crate::{id::Id, time::Timestamp, user::AuthorId};

/// Label rendered instead of a name for anonymous entries (and for
/// entries whose author left the name blank).
pub const ANONYMOUS_LABEL: &str = "Anonymous";

/// One gratitude post.
///
/// Entries are immutable once created, never deleted, and scoped to
/// exactly one day's tree.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id           : Id,
    pub author       : AuthorId,
    pub display_name : Option<String>,
    pub anonymous    : bool,
    pub text         : String,
    /// Reply target within the same day; `None` marks a root entry.
    pub parent       : Option<Id>,
    /// Assigned by the store; `None` while the server timestamp is
    /// still pending.
    pub created_at   : Option<Timestamp>,
}

impl Entry {
    /// The author label to render next to the text.
    pub fn display_label(&self) -> &str {
        if self.anonymous {
            return ANONYMOUS_LABEL;
        }
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_LABEL)
    }
}
