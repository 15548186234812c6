use thiserror::Error;

use crate::repositories;

// One variant per user-visible rejection; the messages are what the
// form shows inline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Required fields are missing")]
    EmptyText,
    #[error("Entry must be 120 characters or less")]
    TextTooLong,
    #[error("You've reached the limit of 3 entries for today")]
    QuotaExceeded,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
