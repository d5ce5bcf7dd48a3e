//! Contextual resource curation for facility guides.
//!
//! The [`curation`] module holds the rules engine: given a facility profile and a
//! visitor's situational context it ranks, stages, filters and compares content.
//! Everything else in the crate is the surrounding plumbing the engine itself stays
//! free of: catalog loading, configuration, telemetry and the application error type.

pub mod config;
pub mod curation;
pub mod error;
pub mod telemetry;
