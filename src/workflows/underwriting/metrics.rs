use serde::{Deserialize, Serialize};

/// Nominal annual interest rate assumed when projecting the installment.
///
/// The quoted product rate is a flat indicative 12% regardless of loan type
/// or purpose; the projection is an affordability estimate, not an offer.
pub const ASSUMED_ANNUAL_RATE: f64 = 0.12;

/// Installment projection, present only when the loan has a repayable
/// principal and a tenure of at least one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiProjection {
    pub monthly_emi: f64,
    /// Twelve months of installments relative to annual income; zero when
    /// the applicant declared no income.
    pub emi_to_income_ratio: f64,
}

/// Ratios derived from the raw application before any model call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub loan_to_income_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emi: Option<EmiProjection>,
}

/// Compute the loan-to-income ratio and the amortized installment estimate.
///
/// Pure and deterministic. Divisions by a zero income resolve to `0.0`; an
/// absent [`EmiProjection`] means the installment is undefined for the loan
/// parameters, which is distinct from a zero installment.
pub fn compute_metrics(income: f64, loan_amount: f64, loan_tenure_months: u32) -> DerivedMetrics {
    let loan_to_income_ratio = if income > 0.0 {
        loan_amount / income
    } else {
        0.0
    };

    let emi = if loan_amount > 0.0 && loan_tenure_months >= 1 {
        let monthly_rate = ASSUMED_ANNUAL_RATE / 12.0;
        let growth = (1.0 + monthly_rate).powi(loan_tenure_months as i32);
        let monthly_emi = loan_amount * monthly_rate * growth / (growth - 1.0);
        let emi_to_income_ratio = if income > 0.0 {
            monthly_emi * 12.0 / income
        } else {
            0.0
        };
        Some(EmiProjection {
            monthly_emi,
            emi_to_income_ratio,
        })
    } else {
        None
    };

    DerivedMetrics {
        loan_to_income_ratio,
        emi,
    }
}
