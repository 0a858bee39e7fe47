use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::RentEstimatorConfig;
use super::EstimationError;

/// Fixed +/-20% band reported around the point estimate.
const LOWER_BAND: f64 = 0.8;
const UPPER_BAND: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Studio,
    Penthouse,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Apartment,
            Self::House,
            Self::Villa,
            Self::Studio,
            Self::Penthouse,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Villa => "Villa",
            Self::Studio => "Studio",
            Self::Penthouse => "Penthouse",
        }
    }
}

impl FromStr for PropertyType {
    type Err = EstimationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "apartment" | "flat" => Ok(Self::Apartment),
            "house" => Ok(Self::House),
            "villa" => Ok(Self::Villa),
            "studio" => Ok(Self::Studio),
            "penthouse" => Ok(Self::Penthouse),
            other => Err(EstimationError::invalid(
                "property_type",
                format!("unknown property type '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Furnishing {
    Unfurnished,
    SemiFurnished,
    FullyFurnished,
}

impl Furnishing {
    pub const fn ordered() -> [Self; 3] {
        [Self::Unfurnished, Self::SemiFurnished, Self::FullyFurnished]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unfurnished => "Unfurnished",
            Self::SemiFurnished => "Semi Furnished",
            Self::FullyFurnished => "Fully Furnished",
        }
    }
}

impl FromStr for Furnishing {
    type Err = EstimationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "unfurnished" | "none" => Ok(Self::Unfurnished),
            "semi" | "semifurnished" => Ok(Self::SemiFurnished),
            "fully" | "full" | "fullyfurnished" | "furnished" => Ok(Self::FullyFurnished),
            _ => Err(EstimationError::invalid(
                "furnishing",
                format!("unknown furnishing level '{}'", value.trim()),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentEstimateInput {
    pub area_sq_ft: f64,
    pub bedroom_count: u32,
    pub property_type: PropertyType,
    pub furnishing: Furnishing,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
}

impl RentEstimateInput {
    /// Distinct, non-blank amenities.
    pub fn amenity_count(&self) -> usize {
        self.amenities
            .iter()
            .filter(|amenity| !amenity.trim().is_empty())
            .count()
    }
}

/// Monthly rent range; `min <= average <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentEstimate {
    pub min: f64,
    pub average: f64,
    pub max: f64,
}

/// Heuristic rent estimator configured with a multiplier table.
#[derive(Debug, Clone, Default)]
pub struct RentEstimator {
    config: RentEstimatorConfig,
}

impl RentEstimator {
    pub fn new(config: RentEstimatorConfig) -> Result<Self, EstimationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RentEstimatorConfig {
        &self.config
    }

    pub fn estimate(&self, input: &RentEstimateInput) -> Result<RentEstimate, EstimationError> {
        if !input.area_sq_ft.is_finite() || input.area_sq_ft <= 0.0 {
            return Err(EstimationError::invalid(
                "area_sq_ft",
                format!("must be greater than zero (got {})", input.area_sq_ft),
            ));
        }
        if input.bedroom_count == 0 {
            return Err(EstimationError::invalid(
                "bedroom_count",
                "must be at least one",
            ));
        }

        let base = input.area_sq_ft * self.config.rate_per_sq_ft;
        let type_multiplier = self.config.property_types.for_type(input.property_type);
        let furnishing_multiplier = self.config.furnishing.for_level(input.furnishing);
        let amenities_bonus = input.amenity_count() as f64 * self.config.per_amenity_bonus;

        let average = base
            * bedroom_multiplier(input.bedroom_count)
            * type_multiplier
            * furnishing_multiplier
            + amenities_bonus;

        debug!(
            area = input.area_sq_ft,
            bedrooms = input.bedroom_count,
            property_type = input.property_type.label(),
            furnishing = input.furnishing.label(),
            average,
            "rent estimate computed"
        );

        Ok(RentEstimate {
            min: average * LOWER_BAND,
            average,
            max: average * UPPER_BAND,
        })
    }
}

fn bedroom_multiplier(bedrooms: u32) -> f64 {
    f64::from(bedrooms)
}
