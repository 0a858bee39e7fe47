use serde::{Deserialize, Serialize};

use super::EstimationError;

/// Inputs for a fixed-rate home loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure_years: u32,
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_years,
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 12.0 / 100.0
    }

    fn validate(&self) -> Result<u32, EstimationError> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(EstimationError::invalid(
                "principal",
                format!("must be greater than zero (got {})", self.principal),
            ));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(EstimationError::invalid(
                "annual_rate_percent",
                format!("must not be negative (got {})", self.annual_rate_percent),
            ));
        }
        if self.tenure_years == 0 {
            return Err(EstimationError::invalid(
                "tenure_years",
                "must be at least one year",
            ));
        }

        self.tenure_years
            .checked_mul(12)
            .ok_or_else(|| EstimationError::invalid("tenure_years", "installment count overflows"))
    }
}

/// EMI breakdown. Shares are percentages of `total_payable` and sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmortizationResult {
    pub monthly_payment: f64,
    pub total_payable: f64,
    pub total_interest: f64,
    pub principal_share: f64,
    pub interest_share: f64,
    pub installments: u32,
}

/// Standard reducing-balance EMI.
///
/// A zero rate is computed as a straight `principal / n` split rather than through the
/// amortization formula, which divides zero by zero at `r == 0`. For positive rates the
/// growth term `(1 + r)^n - 1` is taken as `exp_m1(n * ln_1p(r))` so tiny rates keep
/// their precision; the installment never drops below `principal / n`.
pub fn calculate_emi(params: &LoanParameters) -> Result<AmortizationResult, EstimationError> {
    let installments = params.validate()?;
    let n = f64::from(installments);
    let rate = params.monthly_rate();
    let interest_free = params.principal / n;

    let monthly_payment = if rate == 0.0 {
        interest_free
    } else {
        let growth_m1 = (n * rate.ln_1p()).exp_m1();
        if !growth_m1.is_finite() {
            return Err(EstimationError::invalid(
                "annual_rate_percent",
                "rate compounded over the tenure exceeds the representable range",
            ));
        }
        (params.principal * (rate / growth_m1) * (growth_m1 + 1.0)).max(interest_free)
    };

    let total_payable = monthly_payment * n;
    if !monthly_payment.is_finite() || !total_payable.is_finite() {
        return Err(EstimationError::invalid(
            "principal",
            "amount payable exceeds the representable range",
        ));
    }

    let total_interest = (total_payable - params.principal).max(0.0);
    let principal_share = params.principal / total_payable * 100.0;

    Ok(AmortizationResult {
        monthly_payment,
        total_payable,
        total_interest,
        principal_share,
        interest_share: 100.0 - principal_share,
        installments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_gap(a: f64, b: f64) -> f64 {
        (a - b).abs() / b.abs().max(1.0)
    }

    #[test]
    fn reference_home_loan_matches_published_figures() {
        let result = calculate_emi(&LoanParameters::new(5_000_000.0, 8.5, 20)).expect("valid loan");

        assert_eq!(result.installments, 240);
        assert!((result.monthly_payment - 43_391.0).abs() < 1.0);
        assert!(relative_gap(result.total_payable, 10_413_878.8) < 1e-6);
        assert!(relative_gap(result.total_interest, 5_413_878.8) < 1e-6);
        assert!(
            relative_gap(result.total_interest + 5_000_000.0, result.total_payable) < 1e-6,
            "interest plus principal must equal the payable total"
        );
        assert!((result.principal_share + result.interest_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_rate_splits_principal_evenly() {
        let result = calculate_emi(&LoanParameters::new(1_200_000.0, 0.0, 10)).expect("valid loan");
        assert_eq!(result.monthly_payment, 1_200_000.0 / 120.0);
        assert!(result.total_interest.abs() < 1e-6);
    }

    #[test]
    fn rejects_non_positive_principal_and_tenure() {
        let zero_principal = calculate_emi(&LoanParameters::new(0.0, 8.5, 20));
        assert_eq!(
            zero_principal.expect_err("zero principal").field(),
            "principal"
        );

        let negative_principal = calculate_emi(&LoanParameters::new(-10.0, 8.5, 20));
        assert!(negative_principal.is_err());

        let zero_tenure = calculate_emi(&LoanParameters::new(5_000_000.0, 8.5, 0));
        assert_eq!(zero_tenure.expect_err("zero tenure").field(), "tenure_years");
    }

    #[test]
    fn rejects_negative_and_nan_rates() {
        let negative = calculate_emi(&LoanParameters::new(100_000.0, -1.0, 5));
        assert_eq!(negative.expect_err("negative rate").field(), "annual_rate_percent");

        let nan = calculate_emi(&LoanParameters::new(100_000.0, f64::NAN, 5));
        assert!(nan.is_err());
    }

    #[test]
    fn tiny_positive_rates_never_undercut_the_interest_free_split() {
        let principal = 1_200_000.0;
        for rate in [1e-14, 1e-9, 1e-6, 1e-3] {
            let result = calculate_emi(&LoanParameters::new(principal, rate, 10))
                .unwrap_or_else(|err| panic!("rate {rate} rejected: {err}"));
            assert!(
                result.monthly_payment >= principal / 120.0,
                "rate {rate} gave {}",
                result.monthly_payment
            );
            assert!(result.total_interest >= 0.0, "rate {rate} gave negative interest");
        }
    }

    #[test]
    fn overflow_names_the_input_that_caused_it() {
        let huge_principal = calculate_emi(&LoanParameters::new(f64::MAX, 8.5, 20));
        assert_eq!(huge_principal.expect_err("overflowing total").field(), "principal");

        let runaway_rate = calculate_emi(&LoanParameters::new(100_000.0, 1e6, 30));
        assert_eq!(
            runaway_rate.expect_err("overflowing growth").field(),
            "annual_rate_percent"
        );
    }

    #[test]
    fn higher_rates_cost_more_interest() {
        let low = calculate_emi(&LoanParameters::new(2_000_000.0, 6.0, 15)).expect("low rate");
        let high = calculate_emi(&LoanParameters::new(2_000_000.0, 11.0, 15)).expect("high rate");
        assert!(high.monthly_payment > low.monthly_payment);
        assert!(high.interest_share > low.interest_share);
    }
}
