use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::curation::{
    Audience, BulletinCategory, BulletinSchedule, CampusResource, CampusType, DayKey,
    DischargeCard, FacilityProfile, NeighborhoodTip, ProfileRegistry, Season, StaffBulletinItem,
    TimeContext, TipAudience, VisitStage,
};

pub(super) fn resource(id: &str, category: &str, audience: Audience) -> CampusResource {
    CampusResource {
        id: id.to_string(),
        category: category.to_string(),
        name: format!("{category} {id}"),
        description: format!("{category} guidance"),
        open_hours: "Daily 7 AM-7 PM".to_string(),
        location_hint: "Main lobby".to_string(),
        audience,
        cta: None,
        stages: None,
        discharge_bundle: None,
    }
}

pub(super) fn staged(mut resource: CampusResource, stages: &[VisitStage]) -> CampusResource {
    resource.stages = Some(stages.to_vec());
    resource
}

pub(super) fn bundled(mut resource: CampusResource) -> CampusResource {
    resource.discharge_bundle = Some(true);
    resource
}

pub(super) fn with_hours(mut resource: CampusResource, hours: &str) -> CampusResource {
    resource.open_hours = hours.to_string();
    resource
}

pub(super) fn with_description(mut resource: CampusResource, description: &str) -> CampusResource {
    resource.description = description.to_string();
    resource
}

pub(super) fn tip(text: &str, audience: TipAudience) -> NeighborhoodTip {
    NeighborhoodTip {
        text: text.to_string(),
        audience,
        season: None,
        day_of_week: None,
        time_context: None,
    }
}

pub(super) fn seasonal_tip(text: &str, audience: TipAudience, season: Season) -> NeighborhoodTip {
    NeighborhoodTip {
        season: Some(season),
        ..tip(text, audience)
    }
}

pub(super) fn evening_tip(text: &str, audience: TipAudience, day: DayKey) -> NeighborhoodTip {
    NeighborhoodTip {
        day_of_week: Some(day),
        time_context: Some(TimeContext::Night),
        ..tip(text, audience)
    }
}

pub(super) fn bulletin(id: &str, schedule: BulletinSchedule) -> StaffBulletinItem {
    StaffBulletinItem {
        id: id.to_string(),
        title: format!("Bulletin {id}"),
        description: "Staff notice".to_string(),
        category: BulletinCategory::Announcement,
        schedule,
        time_hint: "All day".to_string(),
        cta: None,
    }
}

pub(super) fn profile(id: &str, campus_type: CampusType) -> FacilityProfile {
    FacilityProfile {
        id: id.to_string(),
        name: format!("{id} Medical Center"),
        short_name: id.to_string(),
        neighborhood: "Riverside".to_string(),
        campus_type,
        category_boosts: Vec::new(),
        resources: Vec::new(),
        tips: Vec::new(),
        bulletins: None,
        stage_hero: None,
        discharge_category_boosts: None,
        discharge_transport: None,
        discharge_follow_up: None,
    }
}

/// Flagship campus with a resource per audience, stage tags, tips and bulletins.
pub(super) fn flagship() -> FacilityProfile {
    let mut profile = profile("flagship", CampusType::Flagship);
    profile.resources = vec![
        with_description(
            with_hours(resource("garage", "Parking", Audience::Visitor), "Daily 5 AM-11 PM"),
            "Garage B off Elm Street, validated at the front desk",
        ),
        staged(
            resource("admitting", "Admissions", Audience::Patient),
            &[VisitStage::PreAdmission],
        ),
        with_hours(resource("cafe", "Dining", Audience::Visitor), "6 AM-8 PM"),
        resource("locker-room", "Staff Facilities", Audience::Staff),
        staged(
            resource("family-lounge", "Family Support", Audience::Caregiver),
            &[VisitStage::Inpatient, VisitStage::Discharge],
        ),
        bundled(staged(
            resource("pharmacy", "Pharmacy", Audience::Patient),
            &[VisitStage::Discharge],
        )),
        bundled(resource("med-guide", "Medication", Audience::Patient)),
        staged(
            resource("chapel", "Spiritual Care", Audience::Visitor),
            &[VisitStage::Inpatient],
        ),
    ];
    profile.tips = vec![
        tip("Riverwalk loop is step-free", TipAudience::All),
        tip("Bring your insurance card", TipAudience::Role(Audience::Patient)),
        tip("Caregiver meals are half price", TipAudience::Role(Audience::Caregiver)),
        tip("Visitor badges at the east desk", TipAudience::Role(Audience::Visitor)),
        seasonal_tip("Rooftop garden is open", TipAudience::All, Season::Summer),
        evening_tip("Late-night diner on Elm", TipAudience::All, DayKey::Fri),
        tip("Staff shuttle every 15 minutes", TipAudience::Role(Audience::Staff)),
        tip("Quiet room on floor 4", TipAudience::Role(Audience::Caregiver)),
    ];
    profile.bulletins = Some(vec![
        bulletin("town-hall", BulletinSchedule::Today),
        bulletin("grand-rounds", BulletinSchedule::Weekday),
        bulletin("brunch", BulletinSchedule::Weekend),
        bulletin("yoga", BulletinSchedule::Day(DayKey::Sat)),
        bulletin("taco-tuesday", BulletinSchedule::Day(DayKey::Tue)),
    ]);
    profile.stage_hero = Some(BTreeMap::from([(
        VisitStage::Discharge,
        "Heading home? Here's what to bring.".to_string(),
    )]));
    profile.discharge_transport = Some(vec![DischargeCard {
        title: "Rideshare pickup".to_string(),
        detail: "Door 3 on the river side".to_string(),
        cta: None,
    }]);
    profile
}

/// Downtown campus whose parking and campus type differ from [`flagship`].
pub(super) fn downtown() -> FacilityProfile {
    let mut profile = profile("downtown", CampusType::Urban);
    profile.resources = vec![
        with_description(
            with_hours(resource("street", "Parking", Audience::Visitor), "24/7"),
            "Metered street parking and the Fifth Avenue deck",
        ),
        with_hours(resource("deli", "Dining", Audience::Visitor), "6 AM-8 PM"),
    ];
    profile
}

pub(super) fn registry() -> ProfileRegistry {
    ProfileRegistry::new(vec![flagship(), downtown()]).expect("fixture ids are unique")
}

pub(super) fn ids<'a>(resources: &[&'a CampusResource]) -> Vec<&'a str> {
    resources.iter().map(|resource| resource.id.as_str()).collect()
}

pub(super) fn texts<'a>(tips: &[&'a NeighborhoodTip]) -> Vec<&'a str> {
    tips.iter().map(|tip| tip.text.as_str()).collect()
}

pub(super) fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}
