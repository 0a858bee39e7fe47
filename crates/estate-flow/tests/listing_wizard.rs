use estate_flow::workflows::estimation::RentEstimator;
use estate_flow::workflows::wizard::sections::{ListingDetailsSection, ListingTypeSection};
use estate_flow::workflows::wizard::{
    CompletedWizard, CompletionError, CompletionSink, SectionFields, UserRole, WizardKind,
    WizardSession,
};
use serde_json::{json, Value};
use std::sync::Mutex;

#[derive(Default)]
struct PublishQueue {
    published: Mutex<Vec<CompletedWizard>>,
}

impl CompletionSink for PublishQueue {
    fn complete(&self, wizard: CompletedWizard) -> Result<(), CompletionError> {
        if wizard.record.section("details").map_or(true, |details| details.is_empty()) {
            return Err(CompletionError::Rejected("listing has no details".to_string()));
        }
        self.published
            .lock()
            .expect("queue mutex poisoned")
            .push(wizard);
        Ok(())
    }
}

fn fields(value: Value) -> SectionFields {
    value.as_object().cloned().expect("object payload")
}

#[test]
fn listing_publishes_through_the_completion_sink() {
    let queue = PublishQueue::default();
    let mut session = WizardSession::listing(UserRole::Owner);

    session
        .update_section("propertyType", fields(json!({ "propertyType": "Apartment" })))
        .expect("type saved");
    session
        .update_section("location", fields(json!({ "city": "Bengaluru", "area": "Koramangala" })))
        .expect("location saved");
    session
        .update_section(
            "details",
            fields(json!({
                "bhk": 2,
                "area": 1200,
                "rent": 30000,
                "deposit": 100000,
                "furnished": "semi",
                "amenities": ["Parking", "Gym", "Security"]
            })),
        )
        .expect("details saved");

    let mut current = Some(session);
    let mut hints = Vec::new();
    while let Some(session) = current.take() {
        hints.push(session.hint());
        current = session.advance_into(&queue).expect("queue accepts listing");
    }

    assert_eq!(hints.len(), 6);
    assert!(hints[5].starts_with("Ready to publish"));

    let published = queue.published.lock().expect("queue mutex poisoned");
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].kind, WizardKind::Listing);
    assert_eq!(published[0].role, UserRole::Owner);
}

#[test]
fn empty_listing_is_rejected_by_the_sink() {
    let queue = PublishQueue::default();
    let mut session = WizardSession::listing(UserRole::Seller);
    for _ in 0..5 {
        session = session
            .advance_into(&queue)
            .expect("intermediate steps never reach the sink")
            .expect("still inside the wizard");
    }

    let err = session
        .advance_into(&queue)
        .expect_err("sink rejects listings without details");
    assert!(matches!(err, CompletionError::Rejected(_)));
}

#[test]
fn listing_details_price_check_uses_the_rent_estimator() {
    let mut session = WizardSession::listing(UserRole::Owner);
    session
        .update_section("propertyType", fields(json!({ "propertyType": "studio" })))
        .expect("type saved");
    session
        .update_section("details", fields(json!({ "bhk": 1, "area": 450 })))
        .expect("details saved");

    let kind: ListingTypeSection = session.record().view("propertyType").expect("type view");
    let details: ListingDetailsSection = session.record().view("details").expect("details view");
    let input = details
        .rent_estimate_input(kind.parsed().expect("known type"))
        .expect("estimator input");
    let estimate = RentEstimator::default()
        .estimate(&input)
        .expect("estimate computed");

    assert!((estimate.average - 450.0 * 15.0 * 0.7).abs() < 1e-9);
    assert!(estimate.min <= estimate.average && estimate.average <= estimate.max);
}
