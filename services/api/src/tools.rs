use crate::infra::delay_for;
use chrono::NaiveDate;
use clap::Args;
use estate_flow::config::AppConfig;
use estate_flow::error::AppError;
use estate_flow::workflows::agreement::{generate_agreement, AgreementRequest, GeneratedAgreement};
use estate_flow::workflows::estimation::format::{format_compact_inr, format_inr};
use estate_flow::workflows::estimation::{
    calculate_emi, AmortizationResult, Furnishing, LoanParameters, PropertyType, RentEstimate,
    RentEstimateInput, RentEstimator,
};
use estate_flow::workflows::pending::PendingRequest;
use estate_flow::workflows::verification::{
    pending_verification, DocumentKind, DocumentStatus, PropertyIdentity, SubmittedDocument,
    VerificationReport, VerificationRequest,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct EmiArgs {
    /// Loan amount in rupees
    #[arg(long, default_value_t = 5_000_000.0)]
    pub(crate) principal: f64,
    /// Annual interest rate in percent
    #[arg(long, default_value_t = 8.5)]
    pub(crate) rate: f64,
    /// Loan tenure in years
    #[arg(long, default_value_t = 20)]
    pub(crate) years: u32,
    /// Skip the simulated calculation latency
    #[arg(long)]
    pub(crate) instant: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RentArgs {
    /// Carpet area in square feet
    #[arg(long)]
    pub(crate) area: f64,
    /// Number of bedrooms (BHK)
    #[arg(long, default_value_t = 1)]
    pub(crate) bedrooms: u32,
    /// apartment, house, villa, studio or penthouse
    #[arg(long, default_value = "apartment")]
    pub(crate) property_type: PropertyType,
    /// unfurnished, semi or fully
    #[arg(long, default_value = "unfurnished")]
    pub(crate) furnishing: Furnishing,
    /// Amenity available at the property (repeatable)
    #[arg(long)]
    pub(crate) amenity: Vec<String>,
    /// Skip the simulated calculation latency
    #[arg(long)]
    pub(crate) instant: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AgreementArgs {
    /// JSON file describing the parties, property and terms
    pub(crate) request: PathBuf,
    /// Override the start date (YYYY-MM-DD); the end date is re-derived from the duration
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Write the agreement text to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Skip the simulated drafting latency
    #[arg(long)]
    pub(crate) instant: bool,
}

#[derive(Args, Debug)]
pub(crate) struct VerifyArgs {
    /// Submitted document as KIND=FILE, e.g. title_deed=deed.pdf (repeatable)
    #[arg(long = "document", value_parser = crate::infra::parse_document)]
    pub(crate) documents: Vec<SubmittedDocument>,
    /// Document kind already verified by the registrar (repeatable)
    #[arg(long)]
    pub(crate) verified: Vec<DocumentKind>,
    /// Document kind rejected on a previous review (repeatable)
    #[arg(long)]
    pub(crate) rejected: Vec<DocumentKind>,
    /// Registered owner name
    #[arg(long)]
    pub(crate) owner: Option<String>,
    /// Property address
    #[arg(long)]
    pub(crate) address: Option<String>,
    /// Skip the simulated review latency
    #[arg(long)]
    pub(crate) instant: bool,
}

pub(crate) fn run_emi(args: EmiArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let params = LoanParameters::new(args.principal, args.rate, args.years);

    let result = resolve(
        "emi",
        config.tools.simulated_latency,
        args.instant,
        move || calculate_emi(&params),
    )?;
    print!("{}", render_emi(&params, &result));
    Ok(())
}

pub(crate) fn run_rent(args: RentArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let estimator = RentEstimator::new(config.tools.rent_model)?;
    let input = RentEstimateInput {
        area_sq_ft: args.area,
        bedroom_count: args.bedrooms,
        property_type: args.property_type,
        furnishing: args.furnishing,
        amenities: args.amenity.into_iter().collect(),
    };

    let estimate = resolve(
        "rent_estimate",
        config.tools.simulated_latency,
        args.instant,
        {
            let input = input.clone();
            move || estimator.estimate(&input)
        },
    )?;
    print!("{}", render_rent(&input, &estimate));
    Ok(())
}

pub(crate) fn run_agreement(args: AgreementArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let mut request = load_agreement_request(&args.request)?;
    if let Some(start_date) = args.start_date {
        request.terms.start_date = start_date;
        request.terms.end_date = None;
    }

    let agreement: GeneratedAgreement = resolve(
        "agreement",
        config.tools.simulated_latency,
        args.instant,
        move || generate_agreement(&request),
    )?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &agreement.text)?;
            println!(
                "{} ({} to {}) written to {}",
                agreement.kind.label(),
                agreement.start_date,
                agreement.end_date,
                path.display()
            );
        }
        None => print!("{}", agreement.text),
    }
    Ok(())
}

pub(crate) fn run_verify(args: VerifyArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let property = PropertyIdentity {
        owner_name: args.owner.unwrap_or_default(),
        address: args.address.unwrap_or_default(),
        ..PropertyIdentity::default()
    };
    let request = verification_request(args.documents, &args.verified, &args.rejected, property);

    let pending = pending_verification(request, config.tools.verification_latency);
    if !args.instant && !pending.latency().is_zero() {
        println!("Verifying documents...");
    }
    let report = pending.resolve(delay_for(args.instant))?;
    print!("{}", render_verification(&report));
    Ok(())
}

fn load_agreement_request(path: &Path) -> Result<AgreementRequest, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| AppError::request_file(path, source))
}

fn verification_request(
    mut documents: Vec<SubmittedDocument>,
    verified: &[DocumentKind],
    rejected: &[DocumentKind],
    property: PropertyIdentity,
) -> VerificationRequest {
    for document in &mut documents {
        if rejected.contains(&document.kind) {
            document.status = DocumentStatus::Rejected;
        } else if verified.contains(&document.kind) {
            document.status = DocumentStatus::Verified;
        }
    }
    VerificationRequest {
        documents,
        property,
    }
}

fn resolve<T, E, F>(
    label: &'static str,
    latency: Duration,
    instant: bool,
    operation: F,
) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    E: Into<AppError>,
{
    let pending = PendingRequest::new(label, latency, operation);
    if !instant && !latency.is_zero() {
        println!("Calculating...");
    }
    pending.resolve(delay_for(instant)).map_err(Into::into)
}

pub(crate) fn render_emi(params: &LoanParameters, result: &AmortizationResult) -> String {
    format!(
        "EMI Calculator\n\
- Loan amount: {} ({})\n\
- Interest rate: {:.2}% p.a. over {} years ({} installments)\n\
- Monthly EMI: {}\n\
- Total interest: {}\n\
- Total amount payable: {}\n\
- Principal {:.1}% | Interest {:.1}%\n",
        format_inr(params.principal),
        format_compact_inr(params.principal),
        params.annual_rate_percent,
        params.tenure_years,
        result.installments,
        format_inr(result.monthly_payment),
        format_inr(result.total_interest),
        format_inr(result.total_payable),
        result.principal_share,
        result.interest_share,
    )
}

pub(crate) fn render_rent(input: &RentEstimateInput, estimate: &RentEstimate) -> String {
    format!(
        "Rent Estimator\n\
- {} BHK {} | {} sq ft | {}\n\
- Amenities counted: {}\n\
- Estimated rent: {} per month\n\
- Expected range: {} to {}\n",
        input.bedroom_count,
        input.property_type.label(),
        input.area_sq_ft,
        input.furnishing.label(),
        input.amenity_count(),
        format_inr(estimate.average),
        format_inr(estimate.min),
        format_inr(estimate.max),
    )
}

pub(crate) fn render_verification(report: &VerificationReport) -> String {
    let mut lines = vec![
        "Property Verification".to_string(),
        format!(
            "- Verification score: {}/100 ({:?})",
            report.overall_score, report.outcome
        ),
    ];
    for check in &report.checks {
        lines.push(format!(
            "  - {}: {} ({:?})",
            check.name, check.score, check.status
        ));
    }
    for kind in &report.missing {
        lines.push(format!("- Missing: {} ({})", kind.label(), kind.description()));
    }
    for issue in &report.issues {
        lines.push(format!("- Issue: {issue}"));
    }
    for recommendation in &report.recommendations {
        lines.push(format!("- Recommendation: {recommendation}"));
    }
    lines.join("\n") + "\n"
}
