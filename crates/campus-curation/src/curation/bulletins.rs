use chrono::NaiveDateTime;

use super::calendar::resolve_day_key;
use super::domain::{DayKey, FacilityProfile, StaffBulletinItem};

/// Staff bulletins running today, in catalog order.
pub fn bulletins_for_today(
    profile: &FacilityProfile,
    now: Option<NaiveDateTime>,
) -> Vec<&StaffBulletinItem> {
    bulletins_for_day(profile, resolve_day_key(now))
}

/// Bulletins whose schedule matches `day`. Duplicates in the catalog are kept.
pub fn bulletins_for_day(profile: &FacilityProfile, day: DayKey) -> Vec<&StaffBulletinItem> {
    profile
        .bulletins()
        .iter()
        .filter(|item| item.schedule.runs_on(day))
        .collect()
}
