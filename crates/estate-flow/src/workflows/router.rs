use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::agreement::{generate_agreement, AgreementRequest, GeneratedAgreement};
use super::estimation::{
    calculate_emi, AmortizationResult, LoanParameters, RentEstimate, RentEstimateInput,
    RentEstimator,
};
use super::verification::{verify_documents, VerificationReport, VerificationRequest};
use super::wizard::{StepSchema, StepView, UserRole, WizardKind};
use crate::error::AppError;

/// Stateless endpoints for the calculators, document verification, and the wizard step
/// schemas.
pub fn tools_router(estimator: Arc<RentEstimator>) -> Router {
    Router::new()
        .route("/api/v1/tools/emi", post(emi_handler))
        .route("/api/v1/tools/rent-estimate", post(rent_estimate_handler))
        .route("/api/v1/tools/agreement", post(agreement_handler))
        .route("/api/v1/tools/verification", post(verification_handler))
        .route("/api/v1/wizards/:kind/:role/steps", get(wizard_steps_handler))
        .with_state(estimator)
}

#[derive(Debug, Serialize)]
pub struct WizardStepsResponse {
    pub kind: WizardKind,
    pub role: UserRole,
    pub title: &'static str,
    pub steps: Vec<StepView>,
}

pub(crate) async fn emi_handler(
    Json(params): Json<LoanParameters>,
) -> Result<Json<AmortizationResult>, AppError> {
    Ok(Json(calculate_emi(&params)?))
}

pub(crate) async fn rent_estimate_handler(
    State(estimator): State<Arc<RentEstimator>>,
    Json(input): Json<RentEstimateInput>,
) -> Result<Json<RentEstimate>, AppError> {
    Ok(Json(estimator.estimate(&input)?))
}

pub(crate) async fn agreement_handler(
    Json(request): Json<AgreementRequest>,
) -> Result<Json<GeneratedAgreement>, AppError> {
    Ok(Json(generate_agreement(&request)?))
}

pub(crate) async fn verification_handler(
    Json(request): Json<VerificationRequest>,
) -> Result<Json<VerificationReport>, AppError> {
    Ok(Json(verify_documents(&request)?))
}

pub(crate) async fn wizard_steps_handler(
    Path((kind, role)): Path<(String, String)>,
) -> Result<Json<WizardStepsResponse>, AppError> {
    let kind: WizardKind = kind.parse()?;
    let role: UserRole = role.parse()?;
    let schema = StepSchema::for_role(kind, role);

    Ok(Json(WizardStepsResponse {
        kind,
        role,
        title: schema.title(),
        steps: schema.views(),
    }))
}
