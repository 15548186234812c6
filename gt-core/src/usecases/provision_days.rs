use super::{day_key, prelude::*};

/// How many day records the provisioning tool creates ahead of time.
pub const PROVISION_DAYS: usize = 7;

/// Pre-creates the day records (key + lock deadline) for today and the
/// following days. Requires the elevated-privilege claim on `identity`.
pub fn provision_days<R: DayRepo>(
    repo: &R,
    identity: &Identity,
    now: Timestamp,
    len: usize,
) -> Result<Vec<Day>> {
    if !identity.admin {
        return Err(Error::Unauthorized);
    }
    let mut created = Vec::with_capacity(len);
    for key in day_key::upcoming_days(now, len) {
        let day = Day {
            key,
            open_until: day_key::lock_instant(&key),
        };
        repo.create_or_update_day(&day)?;
        log::info!("Provisioned tree {} (locks at {})", day.key, day.open_until);
        created.push(day);
    }
    Ok(created)
}
