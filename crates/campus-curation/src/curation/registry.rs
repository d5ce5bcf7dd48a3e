use std::collections::HashMap;

use super::catalog::CatalogError;
use super::domain::FacilityProfile;

/// Read-only lookup of facility profiles by slug.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: Vec<FacilityProfile>,
    index: HashMap<String, usize>,
}

impl ProfileRegistry {
    pub fn new(profiles: Vec<FacilityProfile>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(profiles.len());
        for (position, profile) in profiles.iter().enumerate() {
            if index.insert(profile.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProfile(profile.id.clone()));
            }
        }

        Ok(Self { profiles, index })
    }

    /// `None` for empty or unknown ids; a miss means "no curation available".
    pub fn get(&self, id: &str) -> Option<&FacilityProfile> {
        if id.is_empty() {
            return None;
        }
        self.index
            .get(id)
            .and_then(|position| self.profiles.get(*position))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|profile| profile.id.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FacilityProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
