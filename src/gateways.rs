//! Local gateway implementations for the CLI.

use gt_core::{
    entities::Identity,
    gateways::identity::{Error, IdentityGateway},
};

use crate::config::IdentityConfig;

/// Identity "provider" backed by the config file and environment.
///
/// The hosted auth provider of the web app is unreachable from a
/// terminal; the configured identity plays its role, admin claim
/// included.
#[derive(Debug, Clone)]
pub struct EnvIdentity {
    identity: Option<Identity>,
}

impl EnvIdentity {
    pub fn from_config(config: &IdentityConfig) -> Self {
        let identity = config.uid.as_ref().map(|uid| Identity {
            uid: uid.as_str().into(),
            display_name: config.display_name.clone(),
            email: config.email.clone(),
            admin: config.admin,
        });
        Self { identity }
    }
}

impl IdentityGateway for EnvIdentity {
    fn current_identity(&self) -> Result<Option<Identity>, Error> {
        Ok(self.identity.clone())
    }

    fn refreshed_identity(&self) -> Result<Option<Identity>, Error> {
        // Nothing to refresh locally; the claim is as fresh as the
        // config it came from.
        Ok(self.identity.clone())
    }

    fn sign_out(&self) -> Result<(), Error> {
        Ok(())
    }
}
