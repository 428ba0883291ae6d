use serde::{Deserialize, Serialize};

use super::domain::{LoanApplication, LoanPurpose, LoanType, ResidenceType};
use super::metrics::compute_metrics;

/// Letter grade bands over the 300-900 credit score scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CreditRating {
    A,
    B,
    C,
    D,
}

impl CreditRating {
    pub const fn from_score(score: u16) -> Self {
        if score >= 750 {
            CreditRating::A
        } else if score >= 650 {
            CreditRating::B
        } else if score >= 500 {
            CreditRating::C
        } else {
            CreditRating::D
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CreditRating::A => "A",
            CreditRating::B => "B",
            CreditRating::C => "C",
            CreditRating::D => "D",
        }
    }
}

/// Model output consumed by the recommendation generator and the API views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Default probability in `[0, 1]`.
    pub probability: f64,
    pub credit_score: u16,
    pub rating: CreditRating,
}

/// Failure surfaced unmodified from the model boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictorError {
    #[error("predictor unavailable: {0}")]
    Unavailable(String),
    #[error("predictor returned a malformed result: {0}")]
    Malformed(String),
}

/// Boundary to the trained default-probability model.
///
/// Invoked at most once per submission; callers perform no retries, caching,
/// or fallback scoring around this call.
pub trait RiskPredictor: Send + Sync {
    fn predict(&self, application: &LoanApplication) -> Result<Prediction, PredictorError>;
}

const SCORE_FLOOR: f64 = 300.0;
const SCORE_SPAN: f64 = 600.0;

/// Transparent points-based stand-in for the trained classifier.
///
/// A logistic over hand-weighted application features. The weights are
/// indicative only; a production model replaces this behind
/// [`RiskPredictor`] without touching the rest of the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScorecardPredictor;

impl ScorecardPredictor {
    fn log_odds(application: &LoanApplication) -> f64 {
        let metrics = compute_metrics(
            application.income,
            application.loan_amount,
            application.loan_tenure_months,
        );

        let mut z = -4.0;
        z += 0.6 * metrics.loan_to_income_ratio;
        z += 0.025 * f64::from(application.delinquency_ratio);
        z += 0.02 * f64::from(application.credit_utilization_ratio);
        z += 0.015 * application.avg_dpd_per_delinquency;
        z += 0.25 * f64::from(application.num_open_accounts.saturating_sub(1));
        z += match application.loan_type {
            LoanType::Unsecured => 0.3,
            LoanType::Secured => 0.0,
        };
        z += match application.residence_type {
            ResidenceType::Rented => 0.2,
            ResidenceType::Mortgage => 0.1,
            ResidenceType::Owned => 0.0,
        };
        z += match application.loan_purpose {
            LoanPurpose::Personal => 0.25,
            LoanPurpose::Auto => 0.1,
            LoanPurpose::Education => 0.05,
            LoanPurpose::Home => 0.0,
        };
        z -= 0.01 * f64::from(application.age.saturating_sub(18));
        z
    }
}

impl RiskPredictor for ScorecardPredictor {
    fn predict(&self, application: &LoanApplication) -> Result<Prediction, PredictorError> {
        let z = Self::log_odds(application);
        let probability = 1.0 / (1.0 + (-z).exp());
        let credit_score = (SCORE_FLOOR + (1.0 - probability) * SCORE_SPAN).round() as u16;

        Ok(Prediction {
            probability,
            credit_score,
            rating: CreditRating::from_score(credit_score),
        })
    }
}
