use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::domain::LoanApplication;
use super::intake::{self, ValidationError};
use super::metrics::{compute_metrics, DerivedMetrics};
use super::predictor::{Prediction, PredictorError, RiskPredictor};
use super::recommendations::{generate_recommendations, Recommendation};
use super::risk::{flag_risk, RiskFlags};

/// Service composing intake screening, derived metrics, heuristic flagging,
/// and the model boundary into a single synchronous pass per submission.
pub struct UnderwritingService<P> {
    predictor: Arc<P>,
}

/// Metrics and heuristic flags for the live intake panel; no model call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationPreview {
    pub metrics: DerivedMetrics,
    pub risk: RiskFlags,
}

/// Full result bundle for one assessed application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub metrics: DerivedMetrics,
    pub risk: RiskFlags,
    pub prediction: Prediction,
    pub recommendations: Vec<Recommendation>,
    pub evaluated_at: DateTime<Utc>,
}

impl<P> UnderwritingService<P>
where
    P: RiskPredictor,
{
    pub fn new(predictor: Arc<P>) -> Self {
        Self { predictor }
    }

    /// Screen the application and compute derived metrics and risk flags.
    pub fn preview(
        &self,
        application: &LoanApplication,
    ) -> Result<ApplicationPreview, UnderwritingError> {
        intake::screen(application)?;
        Ok(build_preview(application))
    }

    /// Screen, derive, flag, predict, and advise in one forward pass.
    ///
    /// The predictor is called exactly once; its failures surface unmodified
    /// with no retry and no fallback scoring.
    pub fn assess(&self, application: &LoanApplication) -> Result<Assessment, UnderwritingError> {
        intake::screen(application)?;
        let ApplicationPreview { metrics, risk } = build_preview(application);

        let prediction = self.predictor.predict(application)?;
        let recommendations =
            generate_recommendations(prediction.probability, prediction.credit_score);

        info!(
            probability = prediction.probability,
            credit_score = prediction.credit_score,
            risk_score = risk.score,
            "application assessed"
        );

        Ok(Assessment {
            metrics,
            risk,
            prediction,
            recommendations,
            evaluated_at: Utc::now(),
        })
    }
}

fn build_preview(application: &LoanApplication) -> ApplicationPreview {
    let metrics = compute_metrics(
        application.income,
        application.loan_amount,
        application.loan_tenure_months,
    );
    let risk = flag_risk(
        metrics.loan_to_income_ratio,
        application.delinquency_ratio,
        application.credit_utilization_ratio,
    );

    ApplicationPreview { metrics, risk }
}

/// Error raised by the underwriting service.
#[derive(Debug, thiserror::Error)]
pub enum UnderwritingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Predictor(#[from] PredictorError),
}
