use thiserror::Error;

use gt_entities::user::Identity;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not sign out: {0}")]
    SignOut(String),
    #[error("Could not refresh the identity token: {0}")]
    TokenRefresh(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Session state as exposed by the hosted identity provider.
///
/// Sign-in and sign-out are single operations; no intermediate states
/// leak into this crate.
pub trait IdentityGateway {
    /// The identity of the signed-in account, if any.
    fn current_identity(&self) -> Result<Option<Identity>>;

    /// Like [`IdentityGateway::current_identity`], but forces a token
    /// refresh first so recently granted custom claims become visible.
    fn refreshed_identity(&self) -> Result<Option<Identity>>;

    fn sign_out(&self) -> Result<()>;
}
