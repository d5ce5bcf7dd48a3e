use chrono::NaiveDateTime;
use serde::Serialize;

use super::bulletins::bulletins_for_today;
use super::discharge::discharge_resources;
use super::domain::{
    AudienceMode, CampusResource, NeighborhoodTip, StaffBulletinItem, VisitStage,
};
use super::priority::AudiencePriorityTable;
use super::ranking::{rank_resources_for_stage_with_table, rank_resources_with_table};
use super::registry::ProfileRegistry;
use super::tips::{select_tips, TipContext};

/// Situational context for one curation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurationContext {
    pub mode: AudienceMode,
    pub stage: Option<VisitStage>,
    pub tips: Option<TipContext>,
    pub now: Option<NaiveDateTime>,
}

impl CurationContext {
    pub fn new(mode: AudienceMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_stage(mut self, stage: VisitStage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn with_tips(mut self, tips: TipContext) -> Self {
        self.tips = Some(tips);
        self
    }

    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }
}

/// Everything the guide screen shows for one profile and context.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedView<'a> {
    pub profile_id: &'a str,
    pub profile_name: &'a str,
    pub mode: AudienceMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<VisitStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<&'a str>,
    pub resources: Vec<&'a CampusResource>,
    pub tips: Vec<&'a NeighborhoodTip>,
    pub bulletins: Vec<&'a StaffBulletinItem>,
    pub discharge: Vec<&'a CampusResource>,
}

/// Composes the individual curation rules over a registry.
pub struct CurationEngine<'a> {
    registry: &'a ProfileRegistry,
    table: AudiencePriorityTable,
}

impl<'a> CurationEngine<'a> {
    pub fn new(registry: &'a ProfileRegistry, table: AudiencePriorityTable) -> Self {
        Self { registry, table }
    }

    pub fn with_defaults(registry: &'a ProfileRegistry) -> Self {
        Self::new(registry, AudiencePriorityTable::standard())
    }

    pub fn registry(&self) -> &'a ProfileRegistry {
        self.registry
    }

    /// `None` when the profile is unknown. Bulletins are only gathered in staff mode
    /// and the discharge bundle only at the discharge stage.
    pub fn curate(&self, profile_id: &str, context: &CurationContext) -> Option<CuratedView<'a>> {
        let registry: &'a ProfileRegistry = self.registry;
        let profile = registry.get(profile_id)?;

        let resources = match context.stage {
            Some(stage) => {
                rank_resources_for_stage_with_table(profile, context.mode, stage, &self.table)
            }
            None => rank_resources_with_table(profile, context.mode, &self.table),
        };

        let bulletins = if context.mode == AudienceMode::Staff {
            bulletins_for_today(profile, context.now)
        } else {
            Vec::new()
        };

        let discharge = if context.stage == Some(VisitStage::Discharge) {
            discharge_resources(profile)
        } else {
            Vec::new()
        };

        Some(CuratedView {
            profile_id: &profile.id,
            profile_name: &profile.name,
            mode: context.mode,
            stage: context.stage,
            hero: context.stage.and_then(|stage| profile.hero_for_stage(stage)),
            resources,
            tips: select_tips(profile, context.mode, context.tips.as_ref()),
            bulletins,
            discharge,
        })
    }
}
