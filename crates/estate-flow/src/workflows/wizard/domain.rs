use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketplace persona chosen before a wizard starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Owner,
    Seller,
    Buyer,
    Renter,
}

impl UserRole {
    pub const fn ordered() -> [Self; 4] {
        [Self::Owner, Self::Seller, Self::Buyer, Self::Renter]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Seller => "Seller",
            Self::Buyer => "Buyer",
            Self::Renter => "Renter",
        }
    }

    pub const fn onboarding_title(self) -> &'static str {
        match self {
            Self::Owner => "Property Owner Onboarding",
            Self::Seller => "Seller Onboarding",
            Self::Buyer => "Buyer Onboarding",
            Self::Renter => "Renter Onboarding",
        }
    }

    /// Owners and sellers describe a property of their own during onboarding.
    pub const fn lists_property(self) -> bool {
        matches!(self, Self::Owner | Self::Seller)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserRole {
    type Err = WizardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "seller" => Ok(Self::Seller),
            "buyer" => Ok(Self::Buyer),
            "renter" | "tenant" => Ok(Self::Renter),
            _ => Err(WizardError::UnknownRole(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardKind {
    Onboarding,
    Listing,
}

impl WizardKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::Listing => "listing",
        }
    }
}

impl fmt::Display for WizardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WizardKind {
    type Err = WizardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "onboarding" => Ok(Self::Onboarding),
            "listing" | "property-listing" => Ok(Self::Listing),
            _ => Err(WizardError::UnknownKind(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    Location,
    Preferences,
    PropertyDetails,
    Verification,
    PropertyType,
    ListingDetails,
    Images,
    Documents,
    Review,
}

impl WizardStep {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Location => "Location",
            Self::Preferences => "Preferences",
            Self::PropertyDetails => "Property Details",
            Self::Verification => "Verification",
            Self::PropertyType => "Property Type",
            Self::ListingDetails => "Details",
            Self::Images => "Images",
            Self::Documents => "Documents",
            Self::Review => "Review",
        }
    }

    /// Record section written by this step. Review only reads.
    pub const fn section(self) -> Option<&'static str> {
        match self {
            Self::PersonalInfo => Some("personalInfo"),
            Self::Location => Some("location"),
            Self::Preferences => Some("preferences"),
            Self::PropertyDetails => Some("propertyDetails"),
            Self::Verification => Some("verification"),
            Self::PropertyType => Some("propertyType"),
            Self::ListingDetails => Some("details"),
            Self::Images => Some("images"),
            Self::Documents => Some("documents"),
            Self::Review => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("section `{section}` is not part of the {kind} wizard for {role}")]
    InvalidSection {
        section: String,
        kind: WizardKind,
        role: UserRole,
    },
    #[error("section `{section}` does not match its expected shape: {source}")]
    SectionShape {
        section: String,
        source: serde_json::Error,
    },
    #[error("unknown role '{0}'")]
    UnknownRole(String),
    #[error("unknown wizard '{0}'")]
    UnknownKind(String),
}
