use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::curation::AudienceMode;

const DEFAULT_CATALOG_PATH: &str = "catalog/facilities.json";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = env::var("CURATION_CATALOG_PATH")
            .unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
        if path.trim().is_empty() {
            return Err(ConfigError::EmptyCatalogPath);
        }

        let raw_mode = env::var("CURATION_DEFAULT_MODE").unwrap_or_else(|_| "visitor".to_string());
        let default_mode =
            AudienceMode::parse(&raw_mode).ok_or(ConfigError::InvalidDefaultMode(raw_mode))?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            catalog: CatalogConfig {
                path: PathBuf::from(path),
                default_mode,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the facility catalog lives and how requests default.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
    pub default_mode: AudienceMode,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyCatalogPath,
    InvalidDefaultMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyCatalogPath => write!(f, "CURATION_CATALOG_PATH must not be empty"),
            ConfigError::InvalidDefaultMode(value) => write!(
                f,
                "CURATION_DEFAULT_MODE '{}' must be one of urgent, treatment, visitor, staff",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
