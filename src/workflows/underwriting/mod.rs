//! Loan application intake, derived metrics, heuristic flagging, and
//! model-backed assessment.
//!
//! The pipeline is a single forward pass per submission: screen the raw
//! fields, derive affordability ratios, apply the threshold rules, hand the
//! application to the predictor boundary, and map its output to advisories.

pub mod batch;
pub mod domain;
pub(crate) mod intake;
pub mod metrics;
pub mod predictor;
pub mod recommendations;
pub mod risk;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{applications_from_path, applications_from_reader, BatchImportError};
pub use domain::{LoanApplication, LoanPurpose, LoanType, ResidenceType};
pub use intake::ValidationError;
pub use metrics::{compute_metrics, DerivedMetrics, EmiProjection, ASSUMED_ANNUAL_RATE};
pub use predictor::{CreditRating, Prediction, PredictorError, RiskPredictor, ScorecardPredictor};
pub use recommendations::{generate_recommendations, Recommendation};
pub use risk::{flag_risk, RiskFactor, RiskFlags, RiskLevel, RiskSummaryView};
pub use router::underwriting_router;
pub use service::{ApplicationPreview, Assessment, UnderwritingError, UnderwritingService};
