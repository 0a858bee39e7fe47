//! Stateless calculators behind the EMI and rent estimator tools.
//!
//! Everything here is a pure function of its inputs: no clocks, no I/O, and no shared
//! state, so a single [`RentEstimator`] can be shared across threads behind an `Arc`.
//! Results are returned unrounded; rounding to whole currency units is a display concern
//! handled by [`format`].

mod config;
mod emi;
pub mod format;
mod rent;

pub use config::{FurnishingMultipliers, PropertyTypeMultipliers, RentEstimatorConfig};
pub use emi::{calculate_emi, AmortizationResult, LoanParameters};
pub use rent::{Furnishing, PropertyType, RentEstimate, RentEstimateInput, RentEstimator};

/// Out-of-domain input handed to a calculator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimationError {
    #[error("invalid `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

impl EstimationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidParameter { field, .. } => field,
        }
    }
}
