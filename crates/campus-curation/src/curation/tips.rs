use serde::{Deserialize, Serialize};

use super::domain::{
    Audience, AudienceMode, DayKey, FacilityProfile, NeighborhoodTip, Season, TimeContext,
    TipAudience,
};

/// Temporal context used to narrow tips. Any dimension may be left unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_context: Option<TimeContext>,
}

impl TipContext {
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_day(mut self, day: DayKey) -> Self {
        self.day_of_week = Some(day);
        self
    }

    pub fn with_time(mut self, time: TimeContext) -> Self {
        self.time_context = Some(time);
        self
    }

    /// Fail-open match: a tip is rejected only when it and the context both specify
    /// a dimension and disagree on it.
    pub fn admits(&self, tip: &NeighborhoodTip) -> bool {
        if tip.is_timeless() {
            return true;
        }

        !(conflicts(tip.season, self.season)
            || conflicts(tip.day_of_week, self.day_of_week)
            || conflicts(tip.time_context, self.time_context))
    }
}

fn conflicts<T: PartialEq>(authored: Option<T>, requested: Option<T>) -> bool {
    matches!((authored, requested), (Some(authored), Some(requested)) if authored != requested)
}

/// Tips for `mode`: the role's base set (plus `all`), then caregiver tips for the
/// visitor and treatment modes, narrowed by `opts` when given.
pub fn select_tips<'a>(
    profile: &'a FacilityProfile,
    mode: AudienceMode,
    opts: Option<&TipContext>,
) -> Vec<&'a NeighborhoodTip> {
    let target = mode.tip_audience();
    let mut selected: Vec<&NeighborhoodTip> = profile
        .tips
        .iter()
        .filter(|tip| tip.audience.includes(target))
        .collect();

    if mode.widens_to_caregivers() {
        let widened: Vec<&NeighborhoodTip> = profile
            .tips
            .iter()
            .filter(|tip| tip.audience == TipAudience::Role(Audience::Caregiver))
            .filter(|tip| !selected.iter().any(|chosen| std::ptr::eq(*chosen, *tip)))
            .collect();
        selected.extend(widened);
    }

    match opts {
        Some(context) => selected
            .into_iter()
            .filter(|tip| context.admits(tip))
            .collect(),
        None => selected,
    }
}
