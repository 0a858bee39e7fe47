use std::collections::HashSet;

use crate::workflows::wizard::{steps_for, StepSchema, UserRole, WizardKind, WizardStep};

#[test]
fn every_role_gets_a_non_empty_deterministic_schema() {
    for role in UserRole::ordered() {
        let first = steps_for(role);
        assert!(!first.is_empty(), "{role} schema must not be empty");
        assert_eq!(first, steps_for(role));

        for kind in [WizardKind::Onboarding, WizardKind::Listing] {
            let schema = StepSchema::for_role(kind, role);
            assert!(!schema.is_empty());
            assert_eq!(schema, StepSchema::for_role(kind, role));
        }
    }
}

#[test]
fn step_labels_are_unique_within_each_schema() {
    for role in UserRole::ordered() {
        for kind in [WizardKind::Onboarding, WizardKind::Listing] {
            let labels = StepSchema::for_role(kind, role).labels();
            let unique: HashSet<_> = labels.iter().collect();
            assert_eq!(unique.len(), labels.len(), "{kind} / {role} repeats a step");
        }
    }
}

#[test]
fn owners_and_sellers_describe_their_property() {
    for role in [UserRole::Owner, UserRole::Seller] {
        let schema = StepSchema::onboarding(role);
        assert_eq!(
            schema.labels(),
            vec![
                "Personal Info",
                "Location",
                "Preferences",
                "Property Details",
                "Verification",
                "Review"
            ]
        );
        assert!(schema.has_section("propertyDetails"));
    }
}

#[test]
fn buyers_and_renters_skip_property_details() {
    for role in [UserRole::Buyer, UserRole::Renter] {
        let steps = steps_for(role);
        assert_eq!(steps.len(), 5);
        assert!(!steps.contains(&WizardStep::PropertyDetails));
        assert_eq!(steps.last(), Some(&WizardStep::Review));
    }
}

#[test]
fn listing_schema_ignores_role() {
    let owner = StepSchema::listing(UserRole::Owner);
    let renter = StepSchema::listing(UserRole::Renter);
    assert_eq!(owner.steps(), renter.steps());
    assert_eq!(
        owner.labels(),
        vec!["Property Type", "Location", "Details", "Images", "Documents", "Review"]
    );
    assert_eq!(owner.title(), "List Your Property");
}

#[test]
fn review_step_has_no_section() {
    let views = StepSchema::onboarding(UserRole::Buyer).views();
    let review = views.last().expect("review step present");
    assert_eq!(review.label, "Review");
    assert!(review.section.is_none());
    assert_eq!(views[0].section, Some("personalInfo"));
}
