use super::domain::{AudienceMode, CampusResource, FacilityProfile, VisitStage};
use super::priority::AudiencePriorityTable;

/// Orders every resource in `profile` by role priority for `mode`.
///
/// The sort is stable: resources sharing an audience keep their catalog order.
pub fn rank_resources(profile: &FacilityProfile, mode: AudienceMode) -> Vec<&CampusResource> {
    rank_resources_with_table(profile, mode, &AudiencePriorityTable::standard())
}

pub fn rank_resources_with_table<'a>(
    profile: &'a FacilityProfile,
    mode: AudienceMode,
    table: &AudiencePriorityTable,
) -> Vec<&'a CampusResource> {
    let mut ranked: Vec<&CampusResource> = profile.resources.iter().collect();
    ranked.sort_by_key(|resource| table.rank_of(mode, resource.audience));
    ranked
}

/// Ranks for `mode`, then pulls resources tagged for `stage` to the front.
///
/// This is a stable partition of [`rank_resources`]: relative order within the
/// tagged and untagged groups is unchanged. Resources without stages are never
/// tagged.
pub fn rank_resources_for_stage(
    profile: &FacilityProfile,
    mode: AudienceMode,
    stage: VisitStage,
) -> Vec<&CampusResource> {
    rank_resources_for_stage_with_table(profile, mode, stage, &AudiencePriorityTable::standard())
}

pub fn rank_resources_for_stage_with_table<'a>(
    profile: &'a FacilityProfile,
    mode: AudienceMode,
    stage: VisitStage,
    table: &AudiencePriorityTable,
) -> Vec<&'a CampusResource> {
    let ranked = rank_resources_with_table(profile, mode, table);
    let (mut staged, rest): (Vec<_>, Vec<_>) = ranked
        .into_iter()
        .partition(|resource| resource.applies_to_stage(stage));
    staged.extend(rest);
    staged
}
