//! Typed views over wizard record sections.
//!
//! Sections are stored untyped so partial edits can be merged field by field; these
//! structs are how the review step and the calculators read them back. Every field is
//! optional on the wire and falls back to its default.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::workflows::estimation::{EstimationError, Furnishing, PropertyType, RentEstimateInput};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub occupation: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferencesSection {
    pub budget: BudgetRange,
    pub property_types: Vec<String>,
    pub amenities: Vec<String>,
    pub urgency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationSection {
    pub city: String,
    pub area: String,
    pub pincode: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyDetailsSection {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub furnished: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerificationSection {
    pub documents: Vec<String>,
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingTypeSection {
    pub property_type: String,
}

impl ListingTypeSection {
    pub fn parsed(&self) -> Result<PropertyType, EstimationError> {
        self.property_type.parse()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingDetailsSection {
    pub bhk: u32,
    pub area: f64,
    pub rent: f64,
    pub deposit: f64,
    pub furnished: String,
    pub amenities: Vec<String>,
    pub description: String,
}

impl ListingDetailsSection {
    /// Feeds the listing's own details into the rent estimator.
    pub fn rent_estimate_input(
        &self,
        property_type: PropertyType,
    ) -> Result<RentEstimateInput, EstimationError> {
        let furnishing: Furnishing = if self.furnished.trim().is_empty() {
            Furnishing::Unfurnished
        } else {
            self.furnished.parse()?
        };

        Ok(RentEstimateInput {
            area_sq_ft: self.area,
            bedroom_count: self.bhk,
            property_type,
            furnishing,
            amenities: self.amenities.iter().cloned().collect::<BTreeSet<_>>(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesSection {
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsSection {
    pub documents: Vec<String>,
}
