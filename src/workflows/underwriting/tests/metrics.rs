use crate::workflows::underwriting::metrics::compute_metrics;

#[test]
fn loan_to_income_ratio_divides_amount_by_income() {
    let metrics = compute_metrics(1_200_000.0, 2_560_000.0, 36);
    assert!((metrics.loan_to_income_ratio - 2_560_000.0 / 1_200_000.0).abs() < 1e-12);
    assert!(metrics.loan_to_income_ratio >= 0.0);
}

#[test]
fn zero_income_resolves_both_ratios_to_zero() {
    let metrics = compute_metrics(0.0, 2_560_000.0, 36);
    assert_eq!(metrics.loan_to_income_ratio, 0.0);

    let projection = metrics.emi.expect("loan still amortizes without income");
    assert!(projection.monthly_emi > 0.0);
    assert_eq!(projection.emi_to_income_ratio, 0.0);
}

#[test]
fn emi_matches_the_amortization_formula_reference_case() {
    // P = 2,560,000 over 36 months at 1% per month.
    let metrics = compute_metrics(1_200_000.0, 2_560_000.0, 36);
    let projection = metrics.emi.expect("projection defined");

    assert!((projection.monthly_emi - 85_028.63).abs() < 1.0);
    assert!((projection.emi_to_income_ratio - projection.monthly_emi * 12.0 / 1_200_000.0).abs() < 1e-12);
}

#[test]
fn emi_is_deterministic() {
    let first = compute_metrics(1_200_000.0, 2_560_000.0, 36);
    let second = compute_metrics(1_200_000.0, 2_560_000.0, 36);
    assert_eq!(first, second);
}

#[test]
fn zero_amount_loan_has_no_projection_rather_than_a_zero_one() {
    let metrics = compute_metrics(1_200_000.0, 0.0, 36);
    assert_eq!(metrics.loan_to_income_ratio, 0.0);
    assert!(metrics.emi.is_none());
}

#[test]
fn zero_tenure_has_no_projection() {
    let metrics = compute_metrics(1_200_000.0, 2_560_000.0, 0);
    assert!(metrics.emi.is_none());
    assert!(metrics.loan_to_income_ratio > 0.0);
}

#[test]
fn single_month_tenure_repays_principal_plus_one_period_of_interest() {
    let metrics = compute_metrics(0.0, 10_000.0, 1);
    let projection = metrics.emi.expect("projection defined");
    assert!((projection.monthly_emi - 10_100.0).abs() < 1e-6);
}
