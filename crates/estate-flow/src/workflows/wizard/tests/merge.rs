use serde_json::json;

use super::common::*;
use crate::workflows::estimation::{Furnishing, PropertyType};
use crate::workflows::wizard::sections::{ListingDetailsSection, ListingTypeSection, PersonalInfo};
use crate::workflows::wizard::{UserRole, WizardError, WizardSession};

#[test]
fn new_session_tracks_one_empty_section_per_step() {
    let session = WizardSession::onboarding(UserRole::Owner);
    let names: Vec<&str> = session.record().section_names().collect();
    assert_eq!(names.len(), 5);
    for name in ["personalInfo", "location", "preferences", "propertyDetails", "verification"] {
        let section = session.record().section(name).expect("section initialised");
        assert!(section.is_empty());
    }
}

#[test]
fn update_overwrites_only_supplied_fields() {
    let mut session = WizardSession::onboarding(UserRole::Buyer);
    session
        .update_section("personalInfo", fields(json!({ "name": "A", "phone": "Y" })))
        .expect("personal info accepted");
    session
        .update_section("personalInfo", fields(json!({ "phone": "X" })))
        .expect("phone edit accepted");

    let section = session.record().section("personalInfo").expect("section present");
    assert_eq!(section.get("name"), Some(&json!("A")));
    assert_eq!(section.get("phone"), Some(&json!("X")));
}

#[test]
fn updates_to_one_section_leave_others_alone() {
    let mut session = WizardSession::onboarding(UserRole::Renter);
    session
        .update_section("personalInfo", personal_info())
        .expect("personal info accepted");
    session
        .update_section("location", fields(json!({ "city": "Bengaluru" })))
        .expect("location accepted");

    assert_eq!(
        session.record().field("personalInfo", "email"),
        Some(&json!("asha@example.com"))
    );
    assert!(session
        .record()
        .section("preferences")
        .expect("preferences tracked")
        .is_empty());
}

#[test]
fn unknown_section_is_rejected() {
    let mut session = WizardSession::onboarding(UserRole::Owner);
    let err = session
        .update_section("paymentInfo", fields(json!({ "card": "4111" })))
        .expect_err("unknown section rejected");
    assert!(matches!(err, WizardError::InvalidSection { ref section, .. } if section == "paymentInfo"));
}

#[test]
fn section_outside_the_role_schema_is_rejected() {
    let mut session = WizardSession::onboarding(UserRole::Buyer);
    let err = session
        .update_section("propertyDetails", fields(json!({ "title": "2BHK" })))
        .expect_err("buyers have no property details");
    assert!(err.to_string().contains("Buyer"));
    assert!(session.record().section("propertyDetails").is_none());
}

#[test]
fn typed_views_fill_missing_fields_with_defaults() {
    let mut session = WizardSession::onboarding(UserRole::Seller);
    session
        .update_section("personalInfo", fields(json!({ "name": "Asha Rao" })))
        .expect("name accepted");

    let info: PersonalInfo = session.record().view("personalInfo").expect("view builds");
    assert_eq!(info.name, "Asha Rao");
    assert!(info.email.is_empty());
}

#[test]
fn malformed_section_surfaces_shape_error() {
    let mut session = WizardSession::listing(UserRole::Owner);
    session
        .update_section("details", fields(json!({ "bhk": "two" })))
        .expect("raw edits are stored as-is");

    let err = session
        .record()
        .view::<ListingDetailsSection>("details")
        .expect_err("bhk must be numeric");
    assert!(matches!(err, WizardError::SectionShape { .. }));
}

#[test]
fn listing_details_feed_the_rent_estimator() {
    let mut session = WizardSession::listing(UserRole::Owner);
    session
        .update_section("propertyType", fields(json!({ "propertyType": "Villa" })))
        .expect("type accepted");
    session
        .update_section(
            "details",
            fields(json!({ "bhk": 3, "area": 1800.0, "furnished": "semi", "amenities": ["Gym", "Garden"] })),
        )
        .expect("details accepted");

    let kind: ListingTypeSection = session.record().view("propertyType").expect("type view");
    let details: ListingDetailsSection = session.record().view("details").expect("details view");
    let input = details
        .rent_estimate_input(kind.parsed().expect("known type"))
        .expect("input builds");

    assert_eq!(input.property_type, PropertyType::Villa);
    assert_eq!(input.furnishing, Furnishing::SemiFurnished);
    assert_eq!(input.bedroom_count, 3);
    assert_eq!(input.amenity_count(), 2);
}
