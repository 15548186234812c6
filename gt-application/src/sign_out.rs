use super::*;
use crate::gateways::identity::IdentityGateway;

/// Ends the current session. A failure is reported to the caller but is
/// never fatal; no session state is left half-cleared on this side.
pub fn sign_out<G: IdentityGateway>(identity: &G) -> Result<()> {
    identity.sign_out()?;
    info!("Signed out");
    Ok(())
}
