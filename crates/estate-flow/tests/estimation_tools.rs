use estate_flow::workflows::estimation::format::{format_compact_inr, format_inr};
use estate_flow::workflows::estimation::{
    calculate_emi, EstimationError, Furnishing, LoanParameters, PropertyType, RentEstimateInput,
    RentEstimator, RentEstimatorConfig,
};
use estate_flow::workflows::pending::{NoDelay, Request};
use std::collections::BTreeSet;
use std::time::Duration;

fn apartment(area: f64) -> RentEstimateInput {
    RentEstimateInput {
        area_sq_ft: area,
        bedroom_count: 3,
        property_type: PropertyType::Apartment,
        furnishing: Furnishing::Unfurnished,
        amenities: BTreeSet::new(),
    }
}

#[test]
fn reference_loan_renders_like_the_calculator() {
    let result = calculate_emi(&LoanParameters::new(5_000_000.0, 8.5, 20)).expect("valid loan");

    assert_eq!(format_inr(result.monthly_payment), "₹43,391");
    assert!((result.total_payable - 10_413_878.8).abs() < 1.0);
    assert!((result.total_interest - 5_413_878.8).abs() < 1.0);
    assert_eq!(format_compact_inr(5_000_000.0), "₹50.0L");
    assert!((result.principal_share - 48.0).abs() < 0.1);
}

#[test]
fn invalid_loans_are_caller_errors() {
    for params in [
        LoanParameters::new(0.0, 8.5, 20),
        LoanParameters::new(-5.0, 8.5, 20),
        LoanParameters::new(5_000_000.0, 8.5, 0),
        LoanParameters::new(5_000_000.0, -0.5, 20),
    ] {
        let err = calculate_emi(&params).expect_err("out-of-domain loan rejected");
        assert!(matches!(err, EstimationError::InvalidParameter { .. }));
    }
}

#[test]
fn interest_free_loan_is_exact() {
    let result = calculate_emi(&LoanParameters::new(900_000.0, 0.0, 3)).expect("valid loan");
    assert_eq!(result.monthly_payment, 900_000.0 / 36.0);
    assert_eq!(result.installments, 36);
}

#[test]
fn custom_rate_table_changes_the_estimate() {
    let config = RentEstimatorConfig {
        rate_per_sq_ft: 30.0,
        ..RentEstimatorConfig::default()
    };
    let estimator = RentEstimator::new(config).expect("valid table");
    let estimate = estimator.estimate(&apartment(1000.0)).expect("estimate");
    assert!((estimate.average - 90_000.0).abs() < 1e-9);

    let invalid = RentEstimatorConfig {
        rate_per_sq_ft: f64::NAN,
        ..RentEstimatorConfig::default()
    };
    assert!(RentEstimator::new(invalid).is_err());
}

#[test]
fn estimate_band_and_area_monotonicity_hold_across_inputs() {
    let estimator = RentEstimator::default();
    for property_type in PropertyType::ordered() {
        for furnishing in Furnishing::ordered() {
            let mut previous = f64::MIN;
            for area in [120.0, 480.0, 960.0, 2400.0] {
                let input = RentEstimateInput {
                    property_type,
                    furnishing,
                    ..apartment(area)
                };
                let estimate = estimator.estimate(&input).expect("estimate");
                assert!((estimate.min - estimate.average * 0.8).abs() < 1e-9);
                assert!((estimate.max - estimate.average * 1.2).abs() < 1e-9);
                assert!(estimate.average >= previous);
                previous = estimate.average;
            }
        }
    }
}

#[test]
fn calculations_resolve_through_a_zero_delay() {
    let params = LoanParameters::new(2_500_000.0, 9.0, 15);
    let request = Request::pending("emi", Duration::from_millis(2000), move || {
        calculate_emi(&params)
    });
    assert!(request.is_pending());

    let result = request
        .resolve(&NoDelay)
        .into_resolved()
        .expect("resolved")
        .expect("valid loan");
    assert!(result.monthly_payment > 0.0);
}
