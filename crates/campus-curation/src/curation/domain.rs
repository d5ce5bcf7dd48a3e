use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Consumer role a resource or tip is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Patient,
    Caregiver,
    Visitor,
    Staff,
}

impl Audience {
    pub const fn ordered() -> [Self; 4] {
        [Self::Patient, Self::Caregiver, Self::Visitor, Self::Staff]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Caregiver => "caregiver",
            Self::Visitor => "visitor",
            Self::Staff => "staff",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Caregiver => "Caregiver",
            Self::Visitor => "Visitor",
            Self::Staff => "Staff",
        }
    }
}

/// Caller-supplied context selecting whose priorities govern ordering.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AudienceMode {
    Urgent,
    Treatment,
    #[default]
    Visitor,
    Staff,
}

impl AudienceMode {
    pub const fn ordered() -> [Self; 4] {
        [Self::Urgent, Self::Treatment, Self::Visitor, Self::Staff]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Treatment => "treatment",
            Self::Visitor => "visitor",
            Self::Staff => "staff",
        }
    }

    /// Strict lookup, `None` for labels outside the closed set.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "urgent" => Some(Self::Urgent),
            "treatment" => Some(Self::Treatment),
            "visitor" => Some(Self::Visitor),
            "staff" => Some(Self::Staff),
            _ => None,
        }
    }

    /// Lenient lookup: unrecognized labels resolve to `Visitor`.
    pub fn from_label(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::Visitor)
    }

    /// Role whose tips form the base set for this mode.
    pub const fn tip_audience(self) -> Audience {
        match self {
            Self::Urgent | Self::Treatment => Audience::Patient,
            Self::Visitor => Audience::Visitor,
            Self::Staff => Audience::Staff,
        }
    }

    /// Whether caregiver-oriented tips are appended after the base set.
    pub const fn widens_to_caregivers(self) -> bool {
        matches!(self, Self::Visitor | Self::Treatment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStage {
    PreAdmission,
    Inpatient,
    Discharge,
}

impl VisitStage {
    pub const fn ordered() -> [Self; 3] {
        [Self::PreAdmission, Self::Inpatient, Self::Discharge]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreAdmission => "pre_admission",
            Self::Inpatient => "inpatient",
            Self::Discharge => "discharge",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PreAdmission => "Pre-Admission",
            Self::Inpatient => "Inpatient",
            Self::Discharge => "Discharge",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "pre_admission" => Some(Self::PreAdmission),
            "inpatient" => Some(Self::Inpatient),
            "discharge" => Some(Self::Discharge),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampusType {
    Flagship,
    Urban,
    Suburban,
    Community,
    Pediatric,
}

impl CampusType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flagship => "flagship",
            Self::Urban => "urban",
            Self::Suburban => "suburban",
            Self::Community => "community",
            Self::Pediatric => "pediatric",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    #[serde(alias = "autumn")]
    Fall,
    Winter,
}

impl Season {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "fall" | "autumn" => Some(Self::Fall),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeContext {
    Day,
    Night,
}

impl TimeContext {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "day" => Some(Self::Day),
            "night" => Some(Self::Night),
            _ => None,
        }
    }
}

/// One of the seven fixed day-of-week keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKey {
    #[serde(alias = "monday")]
    Mon,
    #[serde(alias = "tuesday")]
    Tue,
    #[serde(alias = "wednesday")]
    Wed,
    #[serde(alias = "thursday")]
    Thu,
    #[serde(alias = "friday")]
    Fri,
    #[serde(alias = "saturday")]
    Sat,
    #[serde(alias = "sunday")]
    Sun,
}

impl DayKey {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Mon,
            Self::Tue,
            Self::Wed,
            Self::Thu,
            Self::Fri,
            Self::Sat,
            Self::Sun,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
            Self::Sat => "sat",
            Self::Sun => "sun",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mon => "monday",
            Self::Tue => "tuesday",
            Self::Wed => "wednesday",
            Self::Thu => "thursday",
            Self::Fri => "friday",
            Self::Sat => "saturday",
            Self::Sun => "sunday",
        }
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Sat | Self::Sun)
    }

    /// Accepts the short key or the full English day name.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|day| key == day.as_str() || key == day.name())
    }
}

/// Audience tag on a tip: a concrete role or the `all` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipAudience {
    All,
    #[serde(untagged)]
    Role(Audience),
}

impl TipAudience {
    pub fn includes(self, role: Audience) -> bool {
        match self {
            TipAudience::All => true,
            TipAudience::Role(audience) => audience == role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletinCategory {
    Cme,
    Wellness,
    FoodSpecial,
    Announcement,
}

impl BulletinCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cme => "CME",
            Self::Wellness => "Wellness",
            Self::FoodSpecial => "Food Special",
            Self::Announcement => "Announcement",
        }
    }
}

/// When a staff bulletin runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletinSchedule {
    Today,
    Weekday,
    Weekend,
    #[serde(untagged)]
    Day(DayKey),
}

impl BulletinSchedule {
    pub fn runs_on(self, day: DayKey) -> bool {
        match self {
            BulletinSchedule::Today => true,
            BulletinSchedule::Weekday => !day.is_weekend(),
            BulletinSchedule::Weekend => day.is_weekend(),
            BulletinSchedule::Day(key) => key == day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{owner} sets only one of ctaLabel/ctaUrl")]
pub struct HalfCallToAction {
    pub owner: String,
}

fn pair_call_to_action(
    owner: &str,
    label: Option<String>,
    url: Option<String>,
) -> Result<Option<CallToAction>, HalfCallToAction> {
    match (label, url) {
        (Some(label), Some(url)) => Ok(Some(CallToAction { label, url })),
        (None, None) => Ok(None),
        _ => Err(HalfCallToAction {
            owner: owner.to_string(),
        }),
    }
}

fn split_call_to_action(cta: Option<CallToAction>) -> (Option<String>, Option<String>) {
    match cta {
        Some(CallToAction { label, url }) => (Some(label), Some(url)),
        None => (None, None),
    }
}

/// A single piece of on-site guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCampusResource", into = "RawCampusResource")]
pub struct CampusResource {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub open_hours: String,
    pub location_hint: String,
    pub audience: Audience,
    pub cta: Option<CallToAction>,
    pub stages: Option<Vec<VisitStage>>,
    pub discharge_bundle: Option<bool>,
}

impl CampusResource {
    pub fn applies_to_stage(&self, stage: VisitStage) -> bool {
        self.stages
            .as_ref()
            .map(|stages| stages.contains(&stage))
            .unwrap_or(false)
    }

    pub fn is_discharge_bundle(&self) -> bool {
        self.discharge_bundle.unwrap_or(false)
    }
}

/// Catalog shape: the CTA travels as flat `ctaLabel` / `ctaUrl` fields.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCampusResource {
    id: String,
    category: String,
    name: String,
    description: String,
    open_hours: String,
    location_hint: String,
    audience: Audience,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cta_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cta_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stages: Option<Vec<VisitStage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discharge_bundle: Option<bool>,
}

impl TryFrom<RawCampusResource> for CampusResource {
    type Error = HalfCallToAction;

    fn try_from(raw: RawCampusResource) -> Result<Self, Self::Error> {
        let cta = pair_call_to_action(&format!("resource {}", raw.id), raw.cta_label, raw.cta_url)?;
        Ok(Self {
            id: raw.id,
            category: raw.category,
            name: raw.name,
            description: raw.description,
            open_hours: raw.open_hours,
            location_hint: raw.location_hint,
            audience: raw.audience,
            cta,
            stages: raw.stages,
            discharge_bundle: raw.discharge_bundle,
        })
    }
}

impl From<CampusResource> for RawCampusResource {
    fn from(resource: CampusResource) -> Self {
        let (cta_label, cta_url) = split_call_to_action(resource.cta);
        Self {
            id: resource.id,
            category: resource.category,
            name: resource.name,
            description: resource.description,
            open_hours: resource.open_hours,
            location_hint: resource.location_hint,
            audience: resource.audience,
            cta_label,
            cta_url,
            stages: resource.stages,
            discharge_bundle: resource.discharge_bundle,
        }
    }
}

/// A short piece of off-site advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodTip {
    pub text: String,
    pub audience: TipAudience,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_context: Option<TimeContext>,
}

impl NeighborhoodTip {
    pub fn is_timeless(&self) -> bool {
        self.season.is_none() && self.day_of_week.is_none() && self.time_context.is_none()
    }
}

/// A time-boxed staff-only notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStaffBulletinItem", into = "RawStaffBulletinItem")]
pub struct StaffBulletinItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: BulletinCategory,
    pub schedule: BulletinSchedule,
    pub time_hint: String,
    pub cta: Option<CallToAction>,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStaffBulletinItem {
    id: String,
    title: String,
    description: String,
    category: BulletinCategory,
    schedule: BulletinSchedule,
    time_hint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cta_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cta_url: Option<String>,
}

impl TryFrom<RawStaffBulletinItem> for StaffBulletinItem {
    type Error = HalfCallToAction;

    fn try_from(raw: RawStaffBulletinItem) -> Result<Self, Self::Error> {
        let cta = pair_call_to_action(&format!("bulletin {}", raw.id), raw.cta_label, raw.cta_url)?;
        Ok(Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            category: raw.category,
            schedule: raw.schedule,
            time_hint: raw.time_hint,
            cta,
        })
    }
}

impl From<StaffBulletinItem> for RawStaffBulletinItem {
    fn from(item: StaffBulletinItem) -> Self {
        let (cta_label, cta_url) = split_call_to_action(item.cta);
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            category: item.category,
            schedule: item.schedule,
            time_hint: item.time_hint,
            cta_label,
            cta_url,
        }
    }
}

/// Weighting hint for a resource category, consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBoost {
    pub category: String,
    pub weight: f32,
}

/// Pass-through card shown around discharge (transport, follow-up).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDischargeCard", into = "RawDischargeCard")]
pub struct DischargeCard {
    pub title: String,
    pub detail: String,
    pub cta: Option<CallToAction>,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDischargeCard {
    title: String,
    detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cta_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cta_url: Option<String>,
}

impl TryFrom<RawDischargeCard> for DischargeCard {
    type Error = HalfCallToAction;

    fn try_from(raw: RawDischargeCard) -> Result<Self, Self::Error> {
        let cta = pair_call_to_action(
            &format!("discharge card {}", raw.title),
            raw.cta_label,
            raw.cta_url,
        )?;
        Ok(Self {
            title: raw.title,
            detail: raw.detail,
            cta,
        })
    }
}

impl From<DischargeCard> for RawDischargeCard {
    fn from(card: DischargeCard) -> Self {
        let (cta_label, cta_url) = split_call_to_action(card.cta);
        Self {
            title: card.title,
            detail: card.detail,
            cta_label,
            cta_url,
        }
    }
}

/// Authored guide content for one physical site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityProfile {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub neighborhood: String,
    pub campus_type: CampusType,
    #[serde(default)]
    pub category_boosts: Vec<CategoryBoost>,
    #[serde(default)]
    pub resources: Vec<CampusResource>,
    #[serde(default)]
    pub tips: Vec<NeighborhoodTip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulletins: Option<Vec<StaffBulletinItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_hero: Option<BTreeMap<VisitStage, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharge_category_boosts: Option<Vec<CategoryBoost>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharge_transport: Option<Vec<DischargeCard>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharge_follow_up: Option<Vec<DischargeCard>>,
}

impl FacilityProfile {
    pub fn hero_for_stage(&self, stage: VisitStage) -> Option<&str> {
        self.stage_hero
            .as_ref()
            .and_then(|heroes| heroes.get(&stage))
            .map(String::as_str)
    }

    /// First resource in catalog order with exactly this category.
    pub fn first_in_category(&self, category: &str) -> Option<&CampusResource> {
        self.resources
            .iter()
            .find(|resource| resource.category == category)
    }

    pub fn bulletins(&self) -> &[StaffBulletinItem] {
        self.bulletins.as_deref().unwrap_or(&[])
    }

    pub(crate) fn ships_discharge_content(&self) -> bool {
        self.discharge_transport.is_some()
            || self.discharge_follow_up.is_some()
            || self.discharge_category_boosts.is_some()
            || self
                .stage_hero
                .as_ref()
                .map(|heroes| heroes.contains_key(&VisitStage::Discharge))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_pairs_cta_fields() {
        let resource: CampusResource = serde_json::from_value(json!({
            "id": "garage",
            "category": "Parking",
            "name": "Main Garage",
            "description": "Visitor garage off the east entrance",
            "openHours": "24/7",
            "locationHint": "East entrance",
            "audience": "visitor",
            "ctaLabel": "Rates",
            "ctaUrl": "https://example.org/parking"
        }))
        .expect("resource deserializes");

        assert_eq!(
            resource.cta,
            Some(CallToAction {
                label: "Rates".to_string(),
                url: "https://example.org/parking".to_string(),
            })
        );
        assert!(!resource.is_discharge_bundle());
        assert!(!resource.applies_to_stage(VisitStage::Inpatient));
    }

    #[test]
    fn resource_rejects_half_cta() {
        let err = serde_json::from_value::<CampusResource>(json!({
            "id": "garage",
            "category": "Parking",
            "name": "Main Garage",
            "description": "",
            "openHours": "24/7",
            "locationHint": "",
            "audience": "visitor",
            "ctaLabel": "Rates"
        }))
        .expect_err("half cta rejected");

        assert!(err.to_string().contains("resource garage"));
    }

    #[test]
    fn schedule_and_tip_audience_accept_day_keys_and_sentinels() {
        let schedules: Vec<BulletinSchedule> =
            serde_json::from_value(json!(["today", "weekday", "weekend", "thu"]))
                .expect("schedules deserialize");
        assert_eq!(
            schedules,
            vec![
                BulletinSchedule::Today,
                BulletinSchedule::Weekday,
                BulletinSchedule::Weekend,
                BulletinSchedule::Day(DayKey::Thu),
            ]
        );

        let audiences: Vec<TipAudience> =
            serde_json::from_value(json!(["all", "caregiver"])).expect("audiences deserialize");
        assert_eq!(
            audiences,
            vec![TipAudience::All, TipAudience::Role(Audience::Caregiver)]
        );
    }

    #[test]
    fn schedule_runs_on_matching_days() {
        assert!(BulletinSchedule::Weekend.runs_on(DayKey::Sun));
        assert!(!BulletinSchedule::Weekend.runs_on(DayKey::Fri));
        assert!(BulletinSchedule::Weekday.runs_on(DayKey::Mon));
        assert!(BulletinSchedule::Day(DayKey::Wed).runs_on(DayKey::Wed));
        assert!(!BulletinSchedule::Day(DayKey::Wed).runs_on(DayKey::Thu));
    }

    #[test]
    fn unknown_mode_label_falls_back_to_visitor() {
        assert_eq!(AudienceMode::from_label("kiosk"), AudienceMode::Visitor);
        assert_eq!(AudienceMode::from_label(" Staff "), AudienceMode::Staff);
        assert_eq!(AudienceMode::parse("kiosk"), None);
    }

    #[test]
    fn calls_to_action_serialize_as_flat_pairs() {
        let bulletin = StaffBulletinItem {
            id: "grand-rounds".to_string(),
            title: "Grand Rounds".to_string(),
            description: "One CME credit.".to_string(),
            category: BulletinCategory::Cme,
            schedule: BulletinSchedule::Day(DayKey::Thu),
            time_hint: "8 AM".to_string(),
            cta: Some(CallToAction {
                label: "Register".to_string(),
                url: "https://example.org/cme".to_string(),
            }),
        };

        let value = serde_json::to_value(&bulletin).expect("bulletin serializes");
        assert_eq!(value["ctaLabel"], "Register");
        assert_eq!(value["ctaUrl"], "https://example.org/cme");
        assert_eq!(value["timeHint"], "8 AM");
        assert!(value.get("cta").is_none());

        let back: StaffBulletinItem = serde_json::from_value(value).expect("bulletin reloads");
        assert_eq!(back, bulletin);
    }

    #[test]
    fn resource_without_cta_omits_both_fields() {
        let resource = CampusResource {
            id: "chapel".to_string(),
            category: "Quiet".to_string(),
            name: "Chapel".to_string(),
            description: String::new(),
            open_hours: "24/7".to_string(),
            location_hint: "Level 1".to_string(),
            audience: Audience::Caregiver,
            cta: None,
            stages: Some(vec![VisitStage::Inpatient]),
            discharge_bundle: None,
        };

        let value = serde_json::to_value(&resource).expect("resource serializes");
        assert!(value.get("ctaLabel").is_none());
        assert!(value.get("ctaUrl").is_none());
        assert!(value.get("dischargeBundle").is_none());
        assert_eq!(value["openHours"], "24/7");

        let back: CampusResource = serde_json::from_value(value).expect("resource reloads");
        assert_eq!(back, resource);
    }

    #[test]
    fn discharge_cards_use_the_flat_cta_shape() {
        let card: DischargeCard = serde_json::from_value(json!({
            "title": "Book a follow-up",
            "detail": "Within two weeks.",
            "ctaLabel": "Schedule",
            "ctaUrl": "https://example.org/follow-up"
        }))
        .expect("card deserializes");
        assert_eq!(card.cta.as_ref().map(|cta| cta.label.as_str()), Some("Schedule"));
        assert_eq!(
            serde_json::to_value(&card).expect("card serializes")["ctaUrl"],
            "https://example.org/follow-up"
        );

        let err = serde_json::from_value::<DischargeCard>(json!({
            "title": "Rideshare",
            "detail": "Door 3.",
            "ctaUrl": "https://example.org/ride"
        }))
        .expect_err("half cta rejected");
        assert!(err.to_string().contains("discharge card Rideshare"));
    }

    #[test]
    fn catalog_day_fields_accept_long_names() {
        let schedules: Vec<BulletinSchedule> =
            serde_json::from_value(json!(["saturday", "wed"])).expect("schedules deserialize");
        assert_eq!(
            schedules,
            vec![
                BulletinSchedule::Day(DayKey::Sat),
                BulletinSchedule::Day(DayKey::Wed),
            ]
        );

        let tip: NeighborhoodTip = serde_json::from_value(json!({
            "text": "Farmers market on the plaza.",
            "audience": "all",
            "dayOfWeek": "sunday"
        }))
        .expect("tip deserializes");
        assert_eq!(tip.day_of_week, Some(DayKey::Sun));
        assert_eq!(
            serde_json::to_value(DayKey::Sun).expect("day serializes"),
            "sun"
        );
    }

    #[test]
    fn day_key_parse_accepts_long_names() {
        assert_eq!(DayKey::parse("saturday"), Some(DayKey::Sat));
        assert_eq!(DayKey::parse("Tue"), Some(DayKey::Tue));
        assert_eq!(DayKey::parse("sunny"), None);
    }
}
