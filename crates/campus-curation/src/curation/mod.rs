//! Contextual resource curation engine.
//!
//! Every operation is a pure function of a [`FacilityProfile`] (or a
//! [`ProfileRegistry`]) and the caller's context. Results borrow from the profile and
//! never mutate it, so calls can run concurrently and be recomputed per request.

mod bulletins;
pub mod calendar;
pub mod catalog;
mod diff;
mod discharge;
pub mod domain;
mod engine;
mod priority;
mod ranking;
mod registry;
mod tips;

#[cfg(test)]
mod tests;

pub use bulletins::{bulletins_for_day, bulletins_for_today};
pub use calendar::resolve_day_key;
pub use catalog::{
    load_catalog, load_registry, parse_catalog, validate_catalog, CatalogError, CatalogIssue,
    IssueSeverity,
};
pub use diff::{
    compare_profiles, diff_profiles, profile_differences, ProfileComparison, ProfileDiff,
    DINING_CATEGORY, PARKING_CATEGORY,
};
pub use discharge::discharge_resources;
pub use domain::{
    Audience, AudienceMode, BulletinCategory, BulletinSchedule, CallToAction, CampusResource,
    CampusType, CategoryBoost, DayKey, DischargeCard, FacilityProfile, HalfCallToAction,
    NeighborhoodTip, Season, StaffBulletinItem, TimeContext, TipAudience, VisitStage,
};
pub use engine::{CuratedView, CurationContext, CurationEngine};
pub use priority::{standard_order, AudiencePriorityTable};
pub use ranking::{
    rank_resources, rank_resources_for_stage, rank_resources_for_stage_with_table,
    rank_resources_with_table,
};
pub use registry::ProfileRegistry;
pub use tips::{select_tips, TipContext};
