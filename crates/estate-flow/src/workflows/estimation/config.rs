use serde::{Deserialize, Serialize};

use super::rent::{Furnishing, PropertyType};
use super::EstimationError;

/// Tunable constants for the rent heuristic. The defaults are market assumptions,
/// not measurements, so deployments are expected to override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentEstimatorConfig {
    pub rate_per_sq_ft: f64,
    pub per_amenity_bonus: f64,
    pub property_types: PropertyTypeMultipliers,
    pub furnishing: FurnishingMultipliers,
}

impl Default for RentEstimatorConfig {
    fn default() -> Self {
        Self {
            rate_per_sq_ft: 15.0,
            per_amenity_bonus: 1000.0,
            property_types: PropertyTypeMultipliers::default(),
            furnishing: FurnishingMultipliers::default(),
        }
    }
}

impl RentEstimatorConfig {
    pub fn validate(&self) -> Result<(), EstimationError> {
        non_negative("rate_per_sq_ft", self.rate_per_sq_ft)?;
        non_negative("per_amenity_bonus", self.per_amenity_bonus)?;

        for kind in PropertyType::ordered() {
            positive("property_types", self.property_types.for_type(kind))?;
        }
        for level in Furnishing::ordered() {
            positive("furnishing", self.furnishing.for_level(level))?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyTypeMultipliers {
    pub apartment: f64,
    pub house: f64,
    pub villa: f64,
    pub studio: f64,
    pub penthouse: f64,
}

impl Default for PropertyTypeMultipliers {
    fn default() -> Self {
        Self {
            apartment: 1.0,
            house: 1.0,
            villa: 1.5,
            studio: 0.7,
            penthouse: 1.5,
        }
    }
}

impl PropertyTypeMultipliers {
    pub fn for_type(&self, kind: PropertyType) -> f64 {
        match kind {
            PropertyType::Apartment => self.apartment,
            PropertyType::House => self.house,
            PropertyType::Villa => self.villa,
            PropertyType::Studio => self.studio,
            PropertyType::Penthouse => self.penthouse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FurnishingMultipliers {
    pub unfurnished: f64,
    pub semi_furnished: f64,
    pub fully_furnished: f64,
}

impl Default for FurnishingMultipliers {
    fn default() -> Self {
        Self {
            unfurnished: 1.0,
            semi_furnished: 1.15,
            fully_furnished: 1.3,
        }
    }
}

impl FurnishingMultipliers {
    pub fn for_level(&self, level: Furnishing) -> f64 {
        match level {
            Furnishing::Unfurnished => self.unfurnished,
            Furnishing::SemiFurnished => self.semi_furnished,
            Furnishing::FullyFurnished => self.fully_furnished,
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), EstimationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EstimationError::invalid(
            field,
            format!("must be a finite, non-negative number (got {value})"),
        ))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), EstimationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimationError::invalid(
            field,
            format!("multipliers must be finite and positive (got {value})"),
        ))
    }
}
