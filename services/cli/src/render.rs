use campus_curation::curation::{
    AudienceMode, CampusResource, CatalogIssue, CuratedView, DayKey, FacilityProfile,
    NeighborhoodTip, ProfileComparison, StaffBulletinItem, TipAudience, TipContext, VisitStage,
};
use campus_curation::error::AppError;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileSummary<'a> {
    pub(crate) id: &'a str,
    pub(crate) name: &'a str,
    pub(crate) campus_type: &'static str,
    pub(crate) neighborhood: &'a str,
    pub(crate) resources: usize,
}

impl<'a> From<&'a FacilityProfile> for ProfileSummary<'a> {
    fn from(profile: &'a FacilityProfile) -> Self {
        Self {
            id: &profile.id,
            name: &profile.name,
            campus_type: profile.campus_type.as_str(),
            neighborhood: &profile.neighborhood,
            resources: profile.resources.len(),
        }
    }
}

pub(crate) fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_missing_profile(id: &str) {
    println!("No curation available for profile '{id}'.");
}

pub(crate) fn print_profiles(summaries: &[ProfileSummary<'_>]) {
    println!("Catalog profiles ({})", summaries.len());
    for summary in summaries {
        println!(
            "  {:<20} {} [{}; {}] - {} resource(s)",
            summary.id, summary.name, summary.campus_type, summary.neighborhood, summary.resources
        );
    }
}

fn resource_line(index: usize, resource: &CampusResource, marker: &str) -> String {
    let mut line = format!(
        "  {:>2}.{marker} [{}] {} ({}) - {} @ {}",
        index + 1,
        resource.audience.as_str(),
        resource.name,
        resource.category,
        resource.open_hours,
        resource.location_hint
    );
    if let Some(cta) = &resource.cta {
        line.push_str(&format!(" -> {}: {}", cta.label, cta.url));
    }
    line
}

pub(crate) fn print_resources(
    profile: &FacilityProfile,
    mode: AudienceMode,
    stage: Option<VisitStage>,
    resources: &[&CampusResource],
) {
    match stage {
        Some(stage) => println!(
            "{} resources for {} mode at the {} stage",
            profile.short_name,
            mode.as_str(),
            stage.label()
        ),
        None => println!("{} resources for {} mode", profile.short_name, mode.as_str()),
    }
    for (index, resource) in resources.iter().enumerate() {
        let marker = match stage {
            Some(stage) if resource.applies_to_stage(stage) => "*",
            _ => " ",
        };
        println!("{}", resource_line(index, resource, marker));
    }
}

fn tip_audience_label(audience: TipAudience) -> &'static str {
    match audience {
        TipAudience::All => "all",
        TipAudience::Role(role) => role.as_str(),
    }
}

fn describe_context(context: &TipContext) -> String {
    let parts: Vec<&str> = [
        context.season.map(|season| season.as_str()),
        context.day_of_week.map(|day| day.as_str()),
        context.time_context.map(|time| time.as_str()),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        "no temporal context".to_string()
    } else {
        parts.join(", ")
    }
}

pub(crate) fn print_tips(
    profile: &FacilityProfile,
    mode: AudienceMode,
    context: Option<&TipContext>,
    tips: &[&NeighborhoodTip],
) {
    println!(
        "{} tips for {} mode ({})",
        profile.short_name,
        mode.as_str(),
        context
            .map(describe_context)
            .unwrap_or_else(|| "no temporal context".to_string())
    );
    for tip in tips {
        println!("  - {} [{}]", tip.text, tip_audience_label(tip.audience));
    }
}

pub(crate) fn print_bulletins(
    profile: &FacilityProfile,
    day: DayKey,
    bulletins: &[&StaffBulletinItem],
) {
    println!("{} staff bulletins for {}", profile.short_name, day.name());
    if bulletins.is_empty() {
        println!("  Nothing scheduled.");
    }
    for item in bulletins {
        println!(
            "  - {} [{}] {} - {}",
            item.title,
            item.category.label(),
            item.time_hint,
            item.description
        );
    }
}

pub(crate) fn print_discharge(profile: &FacilityProfile, resources: &[&CampusResource]) {
    println!("{} discharge bundle", profile.short_name);
    for (index, resource) in resources.iter().enumerate() {
        println!("{}", resource_line(index, resource, " "));
    }

    let cards = profile
        .discharge_transport
        .iter()
        .flatten()
        .chain(profile.discharge_follow_up.iter().flatten());
    for card in cards {
        println!("  * {}: {}", card.title, card.detail);
    }
}

pub(crate) fn print_comparison(from: &str, to: &str, comparison: &ProfileComparison) {
    match comparison {
        ProfileComparison::Unresolved { missing } => {
            println!("Cannot compare: profile not found ({})", missing.join(", "));
        }
        ProfileComparison::Unchanged => {
            println!("No operational differences between '{from}' and '{to}'.");
        }
        ProfileComparison::Changed(diff) => {
            println!("Moving from {} to {}:", diff.from_name, diff.to_name);
            for note in &diff.differences {
                println!("  - {note}");
            }
        }
    }
}

pub(crate) fn print_view(view: &CuratedView<'_>) {
    println!("{} ({} mode)", view.profile_name, view.mode.as_str());
    if let Some(hero) = view.hero {
        println!("{hero}");
    }

    println!("\nResources");
    for (index, resource) in view.resources.iter().enumerate() {
        let marker = match view.stage {
            Some(stage) if resource.applies_to_stage(stage) => "*",
            _ => " ",
        };
        println!("{}", resource_line(index, resource, marker));
    }

    if !view.tips.is_empty() {
        println!("\nNeighborhood tips");
        for tip in &view.tips {
            println!("  - {}", tip.text);
        }
    }

    if !view.bulletins.is_empty() {
        println!("\nToday's bulletins");
        for item in &view.bulletins {
            println!("  - {} ({})", item.title, item.time_hint);
        }
    }

    if !view.discharge.is_empty() {
        println!("\nTake home");
        for resource in &view.discharge {
            println!("  - {}: {}", resource.name, resource.description);
        }
    }
}

pub(crate) fn print_issues(path: &Path, profiles: usize, issues: &[CatalogIssue]) {
    println!("{}: {} profile(s)", path.display(), profiles);
    if issues.is_empty() {
        println!("  No issues found.");
    }
    for issue in issues {
        println!("  {issue}");
    }
}
