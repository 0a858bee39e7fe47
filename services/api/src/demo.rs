use crate::infra::{delay_for, InMemoryCompletionSink};
use crate::tools::render_verification;
use clap::Args;
use estate_flow::config::AppConfig;
use estate_flow::error::AppError;
use estate_flow::workflows::estimation::format::format_inr;
use estate_flow::workflows::estimation::RentEstimator;
use estate_flow::workflows::pending::Request;
use estate_flow::workflows::verification::{pending_verification, VerificationRequest};
use estate_flow::workflows::wizard::sections::{ListingDetailsSection, ListingTypeSection};
use estate_flow::workflows::wizard::{SectionFields, UserRole, WizardRecord, WizardSession};
use serde_json::json;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// owner, seller, buyer or renter
    #[arg(long, default_value = "owner")]
    pub(crate) role: UserRole,
    /// Skip the simulated latency before the rent estimate and document review
    #[arg(long)]
    pub(crate) instant: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let sink = InMemoryCompletionSink::default();

    println!("Estate flow demo ({})", args.role);
    walk(WizardSession::onboarding(args.role), &sink)?;

    if !args.role.lists_property() {
        println!("\n{} wizards completed", sink.completed().len());
        return Ok(());
    }

    let listing = walk(WizardSession::listing(args.role), &sink)?;

    let kind: ListingTypeSection = listing.view("propertyType")?;
    let details: ListingDetailsSection = listing.view("details")?;
    let input = details.rent_estimate_input(kind.parsed()?)?;
    let estimator = RentEstimator::new(config.tools.rent_model)?;

    let request = Request::pending("listing_rent_check", config.tools.simulated_latency, {
        let input = input.clone();
        move || estimator.estimate(&input)
    });
    println!("\nChecking the asking rent against the market...");
    if let Some(estimate) = request.resolve(delay_for(args.instant)).into_resolved() {
        let estimate = estimate?;
        println!(
            "- Asking {} | market {} (range {} to {})",
            format_inr(details.rent),
            format_inr(estimate.average),
            format_inr(estimate.min),
            format_inr(estimate.max)
        );
    }

    let documents = VerificationRequest::from_record(&listing)?;
    println!("\nReviewing the listing documents...");
    let report = pending_verification(documents, config.tools.verification_latency)
        .resolve(delay_for(args.instant))?;
    print!("{}", render_verification(&report));

    println!("\n{} wizards completed", sink.completed().len());
    Ok(())
}

/// Fills every section with sample data and advances to completion, printing each step.
fn walk(
    mut session: WizardSession,
    sink: &InMemoryCompletionSink,
) -> Result<WizardRecord, AppError> {
    println!("\n{}", session.schema().title());
    loop {
        let step = session.current();
        if let Some(section) = step.section() {
            if let Some(fields) = sample_section(section) {
                session.update_section(section, fields)?;
            }
        }
        println!(
            "[{:>3}%] {}: {}",
            session.progress_percent(),
            step.label(),
            session.hint()
        );

        let record = session.record().clone();
        match session.advance_into(sink)? {
            Some(next) => session = next,
            None => return Ok(record),
        }
    }
}

fn sample_section(section: &str) -> Option<SectionFields> {
    let value = match section {
        "personalInfo" => json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "phone": "98450 00000",
            "occupation": "Architect"
        }),
        "location" => json!({ "city": "Bengaluru", "area": "Koramangala", "pincode": "560034" }),
        "preferences" => json!({
            "budget": { "min": 25000, "max": 40000 },
            "propertyTypes": ["Apartment"],
            "amenities": ["Parking", "Gym"],
            "urgency": "Within a month"
        }),
        "propertyDetails" => json!({
            "title": "Sunny 2BHK near Sony Signal",
            "price": 32000,
            "area": 1150,
            "bedrooms": 2,
            "bathrooms": 2,
            "furnished": "semi"
        }),
        "verification" => json!({ "documents": ["aadhaar.pdf"], "verified": true }),
        "propertyType" => json!({ "propertyType": "apartment" }),
        "details" => json!({
            "bhk": 2,
            "area": 1150,
            "rent": 32000,
            "deposit": 150000,
            "furnished": "semi",
            "amenities": ["Parking", "Gym", "Power Backup"]
        }),
        "images" => json!({ "images": ["living.jpg", "kitchen.jpg", "balcony.jpg"] }),
        "documents" => json!({ "documents": ["noc.pdf", "rent-agreement.pdf"] }),
        _ => return None,
    };
    value.as_object().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_flow::workflows::wizard::{steps_for, StepSchema, WizardKind};

    #[test]
    fn every_schema_section_has_sample_data() {
        for role in UserRole::ordered() {
            for kind in [WizardKind::Onboarding, WizardKind::Listing] {
                for section in StepSchema::for_role(kind, role).sections() {
                    assert!(sample_section(section).is_some(), "no sample for {section}");
                }
            }
        }
        assert_eq!(steps_for(UserRole::Owner).len(), 6);
    }

    #[test]
    fn walking_a_listing_completes_into_the_sink() {
        let sink = InMemoryCompletionSink::default();
        let record = walk(WizardSession::listing(UserRole::Seller), &sink)
            .expect("listing completes");

        let details: ListingDetailsSection = record.view("details").expect("details view");
        assert_eq!(details.bhk, 2);
        assert_eq!(sink.completed().len(), 1);

        let documents = VerificationRequest::from_record(&record).expect("documents");
        assert!(!documents.documents.is_empty());
        assert!(!documents.is_complete());
    }
}
