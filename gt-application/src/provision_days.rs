use super::*;
use crate::gateways::identity::IdentityGateway;

/// Pre-creates the day records for the upcoming week.
///
/// The identity is re-read with a forced token refresh so a freshly
/// granted admin claim is honored without a new sign-in.
pub fn provision_days<D, G>(db: &D, identity: &G, now: Timestamp, len: usize) -> Result<Vec<Day>>
where
    D: DayRepo,
    G: IdentityGateway,
{
    let identity = identity
        .refreshed_identity()?
        .ok_or(usecases::Error::Unauthorized)?;
    let days = usecases::provision_days(db, &identity, now, len)?;
    info!("Provisioned {} day records", days.len());
    Ok(days)
}
