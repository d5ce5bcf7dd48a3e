use super::common::*;
use crate::curation::{
    compare_profiles, diff_profiles, discharge_resources, profile_differences, Audience,
    CampusType, ProfileComparison, ProfileRegistry, VisitStage,
};

#[test]
fn flagship_to_downtown_reports_parking_and_campus_type() {
    let registry = registry();

    let diff = diff_profiles(&registry, "flagship", "downtown").expect("profiles differ");

    assert_eq!(diff.from_name, "flagship Medical Center");
    assert_eq!(diff.to_name, "downtown Medical Center");
    assert_eq!(diff.differences.len(), 3);
    assert!(diff.differences[0].contains("24/7"));
    assert!(diff.differences[1].contains("Fifth Avenue deck"));
    assert!(diff.differences[2].contains("urban"));
}

#[test]
fn parking_hours_only_profiles_produce_two_notes() {
    let mut a = profile("a", CampusType::Flagship);
    a.resources = vec![with_hours(
        resource("lot", "Parking", Audience::Visitor),
        "Daily 5 AM-11 PM",
    )];
    let mut b = profile("b", CampusType::Urban);
    b.resources = vec![with_hours(resource("lot", "Parking", Audience::Visitor), "24/7")];
    let registry = ProfileRegistry::new(vec![a, b]).expect("unique ids");

    let diff = diff_profiles(&registry, "a", "b").expect("profiles differ");

    assert_eq!(diff.differences.len(), 2);
    assert!(diff
        .differences
        .iter()
        .any(|note| note.contains("Parking") && note.contains("24/7")));
    assert!(diff.differences.iter().any(|note| note.contains("urban")));
}

#[test]
fn missing_profiles_and_self_comparison_return_none() {
    let registry = registry();

    assert!(diff_profiles(&registry, "missing-a", "missing-b").is_none());
    assert!(diff_profiles(&registry, "flagship", "missing-b").is_none());
    assert!(diff_profiles(&registry, "", "flagship").is_none());
    assert!(diff_profiles(&registry, "flagship", "flagship").is_none());
}

#[test]
fn comparison_separates_unresolved_from_unchanged() {
    let registry = registry();

    assert_eq!(
        compare_profiles(&registry, "flagship", "nowhere"),
        ProfileComparison::Unresolved {
            missing: vec!["nowhere".to_string()]
        }
    );
    assert_eq!(
        compare_profiles(&registry, "gone", "nowhere"),
        ProfileComparison::Unresolved {
            missing: vec!["gone".to_string(), "nowhere".to_string()]
        }
    );
    assert_eq!(
        compare_profiles(&registry, "downtown", "downtown"),
        ProfileComparison::Unchanged
    );
    assert!(matches!(
        compare_profiles(&registry, "downtown", "flagship"),
        ProfileComparison::Changed(_)
    ));
}

#[test]
fn notes_follow_parking_dining_campus_neighborhood_order() {
    let mut from = profile("north", CampusType::Suburban);
    from.resources = vec![
        with_hours(resource("cafe", "Dining", Audience::Visitor), "7 AM-3 PM"),
        with_hours(resource("lot", "Parking", Audience::Visitor), "Daily 6 AM-10 PM"),
    ];
    let mut to = profile("south", CampusType::Pediatric);
    to.neighborhood = "Old Town".to_string();
    to.resources = vec![
        with_description(
            with_hours(resource("deck", "Parking", Audience::Visitor), "24/7"),
            "Deck under the children's tower",
        ),
        with_hours(resource("grill", "Dining", Audience::Visitor), "24/7"),
    ];

    let notes = profile_differences(&from, &to);

    assert_eq!(notes.len(), 5);
    assert!(notes[0].starts_with("Parking at south is open 24/7"));
    assert!(notes[1].contains("children's tower"));
    assert!(notes[2].starts_with("Dining at south"));
    assert!(notes[3].contains("pediatric") && notes[3].contains("suburban"));
    assert!(notes[4].contains("Old Town") && notes[4].contains("Riverside"));
}

#[test]
fn only_first_parking_resource_is_compared_and_absent_categories_are_skipped() {
    let mut from = profile("east", CampusType::Community);
    from.resources = vec![
        with_hours(resource("lot", "Parking", Audience::Visitor), "24/7"),
        with_hours(resource("valet", "Parking", Audience::Visitor), "8 AM-5 PM"),
        with_hours(resource("cafe", "Dining", Audience::Visitor), "7 AM-3 PM"),
    ];
    let mut to = profile("west", CampusType::Community);
    to.resources = vec![with_hours(
        resource("garage", "Parking", Audience::Visitor),
        "24/7",
    )];

    assert!(profile_differences(&from, &to).is_empty());
}

#[test]
fn discharge_bundle_lists_flagged_and_staged_resources_once() {
    let profile = flagship();

    let bundle = discharge_resources(&profile);

    assert_eq!(ids(&bundle), vec!["family-lounge", "pharmacy", "med-guide"]);
    let pharmacy = bundle
        .iter()
        .find(|resource| resource.id == "pharmacy")
        .expect("pharmacy in bundle");
    assert!(pharmacy.is_discharge_bundle() && pharmacy.applies_to_stage(VisitStage::Discharge));
}

#[test]
fn discharge_bundle_is_empty_without_flags_or_stage_tags() {
    assert!(discharge_resources(&downtown()).is_empty());
}
