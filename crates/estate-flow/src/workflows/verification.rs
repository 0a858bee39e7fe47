//! Property document verification.
//!
//! Owners submit the documents a listing needs before it can be published. The check
//! scores them against a fixed table of required documents and reports what is missing,
//! what was rejected, and what is still awaiting review. Submissions can be assembled
//! by hand or read from a wizard record (`documents`, `images`, and `verification`
//! sections).

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::workflows::pending::PendingRequest;
use crate::workflows::wizard::sections::{DocumentsSection, ImagesSection, VerificationSection};
use crate::workflows::wizard::{WizardError, WizardRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    TitleDeed,
    TaxReceipt,
    SurveySettlement,
    BuildingApproval,
    NoObjection,
    Photos,
}

impl DocumentKind {
    /// Every document a listing must carry, in display order.
    pub const fn required() -> [Self; 6] {
        [
            Self::TitleDeed,
            Self::TaxReceipt,
            Self::SurveySettlement,
            Self::BuildingApproval,
            Self::NoObjection,
            Self::Photos,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::TitleDeed => "title_deed",
            Self::TaxReceipt => "tax_receipt",
            Self::SurveySettlement => "survey_settlement",
            Self::BuildingApproval => "building_approval",
            Self::NoObjection => "no_objection",
            Self::Photos => "photos",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TitleDeed => "Title Deed",
            Self::TaxReceipt => "Property Tax Receipt",
            Self::SurveySettlement => "Survey Settlement",
            Self::BuildingApproval => "Building Approval",
            Self::NoObjection => "No Objection Certificate",
            Self::Photos => "Property Photos",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::TitleDeed => "Property ownership document",
            Self::TaxReceipt => "Latest tax payment proof",
            Self::SurveySettlement => "Land survey document",
            Self::BuildingApproval => "Construction approval document",
            Self::NoObjection => "NOC from relevant authorities",
            Self::Photos => "Current property images",
        }
    }

    /// Guesses the document kind from an uploaded file name.
    pub fn infer(file_name: &str) -> Option<Self> {
        let name = file_name.trim().to_ascii_lowercase();
        let stem = name.rsplit_once('.').map_or(name.as_str(), |(stem, _)| stem);
        let extension = name.rsplit_once('.').map(|(_, ext)| ext);

        if stem.contains("deed") || stem.contains("title") {
            Some(Self::TitleDeed)
        } else if stem.contains("tax") {
            Some(Self::TaxReceipt)
        } else if stem.contains("survey") {
            Some(Self::SurveySettlement)
        } else if stem.contains("approval") || stem.contains("sanction") {
            Some(Self::BuildingApproval)
        } else if stem.contains("noc") || stem.contains("objection") {
            Some(Self::NoObjection)
        } else if stem.contains("photo")
            || matches!(extension, Some("jpg" | "jpeg" | "png" | "webp" | "heic"))
        {
            Some(Self::Photos)
        } else {
            None
        }
    }
}

impl FromStr for DocumentKind {
    type Err = VerificationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::required()
            .into_iter()
            .find(|kind| kind.key() == normalized)
            .ok_or_else(|| VerificationError::UnknownDocument(value.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl DocumentStatus {
    const fn score(self) -> u8 {
        match self {
            Self::Verified => 100,
            Self::Pending => 70,
            Self::Rejected => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedDocument {
    pub kind: DocumentKind,
    pub file_name: String,
    #[serde(default)]
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyIdentity {
    pub address: String,
    pub survey_number: String,
    pub registration_number: String,
    pub owner_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub documents: Vec<SubmittedDocument>,
    #[serde(default)]
    pub property: PropertyIdentity,
}

impl VerificationRequest {
    /// Collects the documents attached to a wizard record.
    ///
    /// Listing `documents`, listing `images` (always photos), and onboarding
    /// `verification` entries are classified by file name; names that match no required
    /// document are skipped. A `verified` flag on the verification section marks every
    /// collected document as verified.
    pub fn from_record(record: &WizardRecord) -> Result<Self, WizardError> {
        let mut documents = Vec::new();

        if record.section("documents").is_some() {
            let section: DocumentsSection = record.view("documents")?;
            documents.extend(classify(&section.documents, DocumentStatus::Pending));
        }
        if record.section("images").is_some() {
            let section: ImagesSection = record.view("images")?;
            documents.extend(section.images.iter().map(|file| SubmittedDocument {
                kind: DocumentKind::Photos,
                file_name: file.clone(),
                status: DocumentStatus::Pending,
            }));
        }
        if record.section("verification").is_some() {
            let section: VerificationSection = record.view("verification")?;
            documents.extend(classify(&section.documents, DocumentStatus::Pending));
            if section.verified {
                for document in &mut documents {
                    document.status = DocumentStatus::Verified;
                }
            }
        }

        Ok(Self {
            documents,
            property: PropertyIdentity::default(),
        })
    }

    /// Best submission per required document; verified beats pending beats rejected.
    pub fn best_by_kind(&self) -> BTreeMap<DocumentKind, &SubmittedDocument> {
        let mut best: BTreeMap<DocumentKind, &SubmittedDocument> = BTreeMap::new();
        for document in &self.documents {
            best.entry(document.kind)
                .and_modify(|current| {
                    if document.status.score() > current.status.score() {
                        *current = document;
                    }
                })
                .or_insert(document);
        }
        best
    }

    pub fn missing_documents(&self) -> Vec<DocumentKind> {
        let present = self.best_by_kind();
        DocumentKind::required()
            .into_iter()
            .filter(|kind| !present.contains_key(kind))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_documents().is_empty()
    }
}

fn classify(
    files: &[String],
    status: DocumentStatus,
) -> impl Iterator<Item = SubmittedDocument> + '_ {
    files.iter().filter_map(move |file| {
        DocumentKind::infer(file).map(|kind| SubmittedDocument {
            kind,
            file_name: file.clone(),
            status,
        })
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Warning,
    Failed,
}

impl CheckStatus {
    fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Passed,
            60..=79 => Self::Warning,
            _ => Self::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationCheck {
    pub name: &'static str,
    pub status: CheckStatus,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    Verified,
    NeedsReview,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    pub overall_score: u8,
    pub outcome: VerificationOutcome,
    pub checks: Vec<VerificationCheck>,
    pub missing: Vec<DocumentKind>,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerificationError {
    #[error("at least one document must be submitted for verification")]
    NoDocuments,
    #[error("unknown document type '{0}'")]
    UnknownDocument(String),
}

const CHECKS: [(&str, &[DocumentKind]); 5] = [
    (
        "Document Authenticity",
        &[
            DocumentKind::TitleDeed,
            DocumentKind::TaxReceipt,
            DocumentKind::SurveySettlement,
            DocumentKind::BuildingApproval,
            DocumentKind::NoObjection,
            DocumentKind::Photos,
        ],
    ),
    (
        "Legal Compliance",
        &[DocumentKind::SurveySettlement, DocumentKind::NoObjection],
    ),
    ("Property Ownership", &[DocumentKind::TitleDeed]),
    ("Building Approval", &[DocumentKind::BuildingApproval]),
    ("Tax Compliance", &[DocumentKind::TaxReceipt]),
];

/// Scores the submission. Each check averages the best status of the documents it
/// relies on, counting a missing document as zero.
pub fn verify_documents(
    request: &VerificationRequest,
) -> Result<VerificationReport, VerificationError> {
    if request.documents.is_empty() {
        return Err(VerificationError::NoDocuments);
    }

    let best = request.best_by_kind();
    let checks: Vec<VerificationCheck> = CHECKS
        .iter()
        .map(|&(name, kinds)| {
            let total: u32 = kinds
                .iter()
                .map(|kind| best.get(kind).map_or(0, |doc| u32::from(doc.status.score())))
                .sum();
            let score = average(total, kinds.len());
            VerificationCheck {
                name,
                status: CheckStatus::from_score(score),
                score,
            }
        })
        .collect();

    let overall_score = average(
        checks.iter().map(|check| u32::from(check.score)).sum(),
        checks.len(),
    );
    let any_failed = checks
        .iter()
        .any(|check| check.status == CheckStatus::Failed);
    let outcome = match overall_score {
        80..=u8::MAX if !any_failed => VerificationOutcome::Verified,
        60..=u8::MAX => VerificationOutcome::NeedsReview,
        _ => VerificationOutcome::Rejected,
    };

    let missing = request.missing_documents();
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();
    for kind in DocumentKind::required() {
        match best.get(&kind).map(|doc| doc.status) {
            None => {
                issues.push(format!("{} has not been submitted.", kind.label()));
                recommendations.push(format!("Upload the {}", kind.label()));
            }
            Some(DocumentStatus::Rejected) => {
                issues.push(format!("{} was rejected.", kind.label()));
                recommendations.push(format!("Re-submit a current {}", kind.label()));
            }
            Some(DocumentStatus::Pending) => {
                issues.push(format!("{} is awaiting review.", kind.label()));
            }
            Some(DocumentStatus::Verified) => {}
        }
    }
    if request.property.owner_name.trim().is_empty() {
        recommendations.push("Add the registered owner name".to_string());
    }

    info!(
        documents = request.documents.len(),
        missing = missing.len(),
        overall_score,
        ?outcome,
        "property verification scored"
    );

    Ok(VerificationReport {
        overall_score,
        outcome,
        checks,
        missing,
        issues,
        recommendations,
    })
}

/// Defers [`verify_documents`] behind the simulated review latency.
pub fn pending_verification(
    request: VerificationRequest,
    latency: Duration,
) -> PendingRequest<Result<VerificationReport, VerificationError>> {
    PendingRequest::new("property_verification", latency, move || {
        verify_documents(&request)
    })
}

fn average(total: u32, count: usize) -> u8 {
    let count = u32::try_from(count).unwrap_or(u32::MAX).max(1);
    u8::try_from((total + count / 2) / count).unwrap_or(u8::MAX)
}
