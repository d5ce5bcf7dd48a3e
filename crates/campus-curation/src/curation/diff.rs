use serde::Serialize;

use super::domain::FacilityProfile;
use super::registry::ProfileRegistry;

pub const PARKING_CATEGORY: &str = "Parking";
pub const DINING_CATEGORY: &str = "Dining";

/// Operational differences a visitor notices when moving between two sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDiff {
    pub from_name: String,
    pub to_name: String,
    pub differences: Vec<String>,
}

/// Comparison result that keeps "could not compare" apart from "nothing changed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProfileComparison {
    Unresolved { missing: Vec<String> },
    Unchanged,
    Changed(ProfileDiff),
}

impl ProfileComparison {
    pub fn into_diff(self) -> Option<ProfileDiff> {
        match self {
            ProfileComparison::Changed(diff) => Some(diff),
            ProfileComparison::Unresolved { .. } | ProfileComparison::Unchanged => None,
        }
    }
}

pub fn compare_profiles(registry: &ProfileRegistry, from_id: &str, to_id: &str) -> ProfileComparison {
    let (from, to) = match (registry.get(from_id), registry.get(to_id)) {
        (Some(from), Some(to)) => (from, to),
        (from, to) => {
            let missing = [(from_id, from.is_none()), (to_id, to.is_none())]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(id, _)| id.to_string())
                .collect();
            return ProfileComparison::Unresolved { missing };
        }
    };

    let differences = profile_differences(from, to);
    if differences.is_empty() {
        return ProfileComparison::Unchanged;
    }

    ProfileComparison::Changed(ProfileDiff {
        from_name: from.name.clone(),
        to_name: to.name.clone(),
        differences,
    })
}

/// `None` when either id is unknown or when the profiles do not differ.
pub fn diff_profiles(registry: &ProfileRegistry, from_id: &str, to_id: &str) -> Option<ProfileDiff> {
    compare_profiles(registry, from_id, to_id).into_diff()
}

/// Notes in fixed order: parking, dining, campus type, neighborhood.
pub fn profile_differences(from: &FacilityProfile, to: &FacilityProfile) -> Vec<String> {
    let mut notes = Vec::new();

    if let (Some(from_parking), Some(to_parking)) = (
        from.first_in_category(PARKING_CATEGORY),
        to.first_in_category(PARKING_CATEGORY),
    ) {
        if from_parking.open_hours != to_parking.open_hours {
            notes.push(format!(
                "Parking at {} is open {} (at {} it was {})",
                to.short_name, to_parking.open_hours, from.short_name, from_parking.open_hours
            ));
        }
        if from_parking.description != to_parking.description {
            notes.push(format!(
                "Parking works differently at {}: {}",
                to.short_name, to_parking.description
            ));
        }
    }

    if let (Some(from_dining), Some(to_dining)) = (
        from.first_in_category(DINING_CATEGORY),
        to.first_in_category(DINING_CATEGORY),
    ) {
        if from_dining.open_hours != to_dining.open_hours {
            notes.push(format!(
                "Dining at {} is open {} (at {} it was {})",
                to.short_name, to_dining.open_hours, from.short_name, from_dining.open_hours
            ));
        }
    }

    if from.campus_type != to.campus_type {
        notes.push(format!(
            "Campus type at {} is {} (at {} it was {})",
            to.short_name,
            to.campus_type.as_str(),
            from.short_name,
            from.campus_type.as_str()
        ));
    }

    if from.neighborhood != to.neighborhood {
        notes.push(format!(
            "{} is in {}, not {}",
            to.short_name, to.neighborhood, from.neighborhood
        ));
    }

    notes
}
