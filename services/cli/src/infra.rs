use campus_curation::curation::{
    AudienceMode, DayKey, Season, TimeContext, TipContext, VisitStage,
};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M"))
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DDTHH:MM ({err})"))
}

pub(crate) fn parse_stage(raw: &str) -> Result<VisitStage, String> {
    VisitStage::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not one of pre_admission, inpatient, discharge"))
}

pub(crate) fn parse_season(raw: &str) -> Result<Season, String> {
    Season::parse(raw).ok_or_else(|| format!("'{raw}' is not one of spring, summer, fall, winter"))
}

pub(crate) fn parse_day(raw: &str) -> Result<DayKey, String> {
    DayKey::parse(raw).ok_or_else(|| format!("'{raw}' is not a day of the week"))
}

pub(crate) fn parse_time(raw: &str) -> Result<TimeContext, String> {
    TimeContext::parse(raw).ok_or_else(|| format!("'{raw}' is not one of day, night"))
}

/// Unknown modes degrade to the visitor ordering, matching the engine's default.
pub(crate) fn resolve_mode(raw: Option<&str>, default_mode: AudienceMode) -> AudienceMode {
    match raw {
        None => default_mode,
        Some(label) => {
            let mode = AudienceMode::from_label(label);
            if AudienceMode::parse(label).is_none() {
                warn!(mode = label, "unrecognized audience mode, using visitor ordering");
            }
            mode
        }
    }
}

/// Builds the tip context from `--now` plus explicit overrides; explicit flags win.
/// `None` when no temporal flag was given, so tips are not narrowed at all.
pub(crate) fn tip_context(
    now: Option<NaiveDateTime>,
    season: Option<Season>,
    day: Option<DayKey>,
    time: Option<TimeContext>,
) -> Option<TipContext> {
    if now.is_none() && season.is_none() && day.is_none() && time.is_none() {
        return None;
    }

    let mut context = now.map(TipContext::at).unwrap_or_default();
    if let Some(season) = season {
        context = context.with_season(season);
    }
    if let Some(day) = day {
        context = context.with_day(day);
    }
    if let Some(time) = time {
        context = context.with_time(time);
    }
    Some(context)
}
