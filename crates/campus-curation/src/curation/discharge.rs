use super::domain::{CampusResource, FacilityProfile, VisitStage};

/// Resources flagged for hand-home guidance or tagged for the discharge stage.
pub fn discharge_resources(profile: &FacilityProfile) -> Vec<&CampusResource> {
    profile
        .resources
        .iter()
        .filter(|resource| {
            resource.is_discharge_bundle() || resource.applies_to_stage(VisitStage::Discharge)
        })
        .collect()
}
