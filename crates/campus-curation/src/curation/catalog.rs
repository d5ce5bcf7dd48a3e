//! Load-time handling of authored catalogs: reading, parsing and authoring checks.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::domain::FacilityProfile;
use super::registry::ProfileRegistry;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse catalog {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate profile id '{0}'")]
    DuplicateProfile(String),
    #[error("catalog failed validation with {} error(s)", .0.len())]
    Invalid(Vec<CatalogIssue>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Warning,
    Error,
}

impl IssueSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single authoring problem found while validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    pub severity: IssueSeverity,
    pub profile_id: String,
    pub message: String,
}

impl CatalogIssue {
    fn error(profile_id: &str, message: String) -> Self {
        Self {
            severity: IssueSeverity::Error,
            profile_id: profile_id.to_string(),
            message,
        }
    }

    fn warning(profile_id: &str, message: String) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            profile_id: profile_id.to_string(),
            message,
        }
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity.label(),
            self.profile_id,
            self.message
        )
    }
}

/// Parses a catalog document: either `{ "profiles": [...] }` or a bare array.
pub fn parse_catalog(raw: &str) -> Result<Vec<FacilityProfile>, serde_json::Error> {
    let document: Value = serde_json::from_str(raw)?;
    let profiles = match document {
        Value::Object(mut object) => match object.remove("profiles") {
            Some(profiles) => profiles,
            None => Value::Object(object),
        },
        other => other,
    };
    serde_json::from_value(profiles)
}

/// Authoring checks. The engine assumes a catalog that passes without errors.
pub fn validate_catalog(profiles: &[FacilityProfile]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for profile in profiles {
        let id = profile.id.as_str();
        if id.trim().is_empty() {
            issues.push(CatalogIssue::error(
                "<unnamed>",
                format!("profile '{}' has an empty id", profile.name),
            ));
        }

        let mut resource_ids = HashSet::new();
        for resource in &profile.resources {
            if !resource_ids.insert(resource.id.as_str()) {
                issues.push(CatalogIssue::error(
                    id,
                    format!("duplicate resource id '{}'", resource.id),
                ));
            }
            if resource.category.trim().is_empty() {
                issues.push(CatalogIssue::error(
                    id,
                    format!("resource '{}' has an empty category", resource.id),
                ));
            }
            if resource.is_discharge_bundle() && !profile.ships_discharge_content() {
                issues.push(CatalogIssue::warning(
                    id,
                    format!(
                        "resource '{}' is in the discharge bundle but the profile has no discharge content",
                        resource.id
                    ),
                ));
            }
        }

        let mut bulletin_ids = HashSet::new();
        for bulletin in profile.bulletins() {
            if !bulletin_ids.insert(bulletin.id.as_str()) {
                issues.push(CatalogIssue::error(
                    id,
                    format!("duplicate bulletin id '{}'", bulletin.id),
                ));
            }
        }
    }

    issues
}

/// Reads, parses and validates a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<FacilityProfile>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profiles = parse_catalog(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let (errors, warnings): (Vec<_>, Vec<_>) = validate_catalog(&profiles)
        .into_iter()
        .partition(|issue| issue.severity == IssueSeverity::Error);
    for issue in &warnings {
        warn!(profile = %issue.profile_id, "{}", issue.message);
    }
    if !errors.is_empty() {
        return Err(CatalogError::Invalid(errors));
    }

    info!(
        path = %path.display(),
        profiles = profiles.len(),
        "facility catalog loaded"
    );
    Ok(profiles)
}

pub fn load_registry(path: &Path) -> Result<ProfileRegistry, CatalogError> {
    ProfileRegistry::new(load_catalog(path)?)
}
