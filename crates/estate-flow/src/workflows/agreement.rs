//! Rental agreement drafting.
//!
//! Produces a plain-text agreement from the landlord, tenant, property, and terms
//! collected by the agreement tool. Nothing is stored; callers render or download the text.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::workflows::estimation::format::format_inr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementKind {
    Rental,
    Lease,
    LeaveAndLicense,
}

impl AgreementKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rental => "Rental Agreement",
            Self::Lease => "Lease Agreement",
            Self::LeaveAndLicense => "Leave & License",
        }
    }

    const fn heading(self) -> &'static str {
        match self {
            Self::Rental => "RENTAL AGREEMENT",
            Self::Lease => "LEASE AGREEMENT",
            Self::LeaveAndLicense => "LEAVE AND LICENSE AGREEMENT",
        }
    }

    const fn party_titles(self) -> (&'static str, &'static str) {
        match self {
            Self::LeaveAndLicense => ("LICENSOR", "LICENSEE"),
            Self::Rental | Self::Lease => ("LANDLORD", "TENANT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceResponsibility {
    Landlord,
    Tenant,
    Shared,
}

impl MaintenanceResponsibility {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Landlord => "Landlord",
            Self::Tenant => "Tenant",
            Self::Shared => "Shared",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementProperty {
    pub address: String,
    pub property_type: String,
    pub area_sq_ft: f64,
    pub monthly_rent: f64,
    pub security_deposit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementTerms {
    pub duration_months: u32,
    pub start_date: NaiveDate,
    /// Derived from `start_date + duration_months` when omitted.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub maintenance_by: MaintenanceResponsibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementRequest {
    pub kind: AgreementKind,
    pub landlord: Party,
    pub tenant: Party,
    pub property: AgreementProperty,
    pub terms: AgreementTerms,
    #[serde(default)]
    pub conditions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedAgreement {
    pub kind: AgreementKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgreementError {
    #[error("`{0}` is required")]
    MissingField(&'static str),
    #[error("lease duration must be at least one month")]
    InvalidDuration,
    #[error("agreement must end after it starts ({start} to {end})")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
    #[error("`{0}` must be a finite, non-negative amount")]
    InvalidAmount(&'static str),
}

pub fn generate_agreement(request: &AgreementRequest) -> Result<GeneratedAgreement, AgreementError> {
    validate(request)?;

    let AgreementTerms {
        duration_months,
        start_date,
        end_date,
        maintenance_by,
    } = request.terms;

    let end_date = match end_date {
        Some(end) => end,
        None => start_date
            .checked_add_months(Months::new(duration_months))
            .ok_or(AgreementError::InvalidDuration)?,
    };
    if end_date <= start_date {
        return Err(AgreementError::InvalidPeriod {
            start: start_date,
            end: end_date,
        });
    }

    let (first_party, second_party) = request.kind.party_titles();
    let property = &request.property;
    let conditions = match request.conditions.trim() {
        "" => "None",
        text => text,
    };

    let text = format!(
        "{heading}\n\n\
This {label} is made on {start} between:\n\n\
{first}\
{second}\
PROPERTY DETAILS:\n\
Address: {address}\n\
Type: {property_type}\n\
Area: {area} sq ft\n\
Monthly Rent: {rent}\n\
Security Deposit: {deposit}\n\n\
TERMS & CONDITIONS:\n\
1. Lease Duration: {duration_months} months\n\
2. Lease Period: {start} to {end}\n\
3. Maintenance: {maintenance}\n\
4. Additional Conditions: {conditions}\n\n\
SIGNATURES:\n\
{first_sign}: _________________ Date: _________\n\
{second_sign}: _________________ Date: _________\n",
        heading = request.kind.heading(),
        label = request.kind.label(),
        start = long_date(start_date),
        end = long_date(end_date),
        first = party_block(first_party, &request.landlord),
        second = party_block(second_party, &request.tenant),
        address = property.address.trim(),
        property_type = property.property_type.trim(),
        area = property.area_sq_ft,
        rent = format_inr(property.monthly_rent),
        deposit = format_inr(property.security_deposit),
        maintenance = maintenance_by.label(),
        first_sign = title_case(first_party),
        second_sign = title_case(second_party),
    );

    Ok(GeneratedAgreement {
        kind: request.kind,
        start_date,
        end_date,
        text,
    })
}

fn validate(request: &AgreementRequest) -> Result<(), AgreementError> {
    if request.landlord.name.trim().is_empty() {
        return Err(AgreementError::MissingField("landlord.name"));
    }
    if request.tenant.name.trim().is_empty() {
        return Err(AgreementError::MissingField("tenant.name"));
    }
    if request.property.address.trim().is_empty() {
        return Err(AgreementError::MissingField("property.address"));
    }
    if request.terms.duration_months == 0 {
        return Err(AgreementError::InvalidDuration);
    }

    for (field, amount) in [
        ("property.area_sq_ft", request.property.area_sq_ft),
        ("property.monthly_rent", request.property.monthly_rent),
        ("property.security_deposit", request.property.security_deposit),
    ] {
        if !amount.is_finite() || amount < 0.0 {
            return Err(AgreementError::InvalidAmount(field));
        }
    }

    Ok(())
}

fn party_block(title: &str, party: &Party) -> String {
    format!(
        "{title}: {}\nAddress: {}\nPhone: {}\nEmail: {}\n\n",
        party.name.trim(),
        party.address.trim(),
        party.phone.trim(),
        party.email.trim()
    )
}

fn long_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}
