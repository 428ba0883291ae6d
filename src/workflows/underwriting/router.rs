use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::domain::LoanApplication;
use super::metrics::DerivedMetrics;
use super::predictor::{Prediction, RiskPredictor};
use super::risk::RiskSummaryView;
use super::service::{ApplicationPreview, Assessment, UnderwritingError, UnderwritingService};

/// Router builder exposing the intake preview and assessment endpoints.
pub fn underwriting_router<P>(service: Arc<UnderwritingService<P>>) -> Router
where
    P: RiskPredictor + 'static,
{
    Router::new()
        .route("/api/v1/underwriting/preview", post(preview_handler::<P>))
        .route(
            "/api/v1/underwriting/assessments",
            post(assess_handler::<P>),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct PreviewResponse {
    metrics: DerivedMetrics,
    risk: RiskSummaryView,
}

#[derive(Debug, Serialize)]
struct AssessmentResponse {
    metrics: DerivedMetrics,
    risk: RiskSummaryView,
    prediction: PredictionView,
    recommendations: Vec<&'static str>,
    evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct PredictionView {
    probability: f64,
    credit_score: u16,
    rating: &'static str,
}

impl From<Prediction> for PredictionView {
    fn from(prediction: Prediction) -> Self {
        Self {
            probability: prediction.probability,
            credit_score: prediction.credit_score,
            rating: prediction.rating.label(),
        }
    }
}

pub(crate) async fn preview_handler<P>(
    State(service): State<Arc<UnderwritingService<P>>>,
    axum::Json(application): axum::Json<LoanApplication>,
) -> Response
where
    P: RiskPredictor + 'static,
{
    match service.preview(&application) {
        Ok(ApplicationPreview { metrics, risk }) => {
            let body = PreviewResponse {
                metrics,
                risk: risk.summary(),
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assess_handler<P>(
    State(service): State<Arc<UnderwritingService<P>>>,
    axum::Json(application): axum::Json<LoanApplication>,
) -> Response
where
    P: RiskPredictor + 'static,
{
    match service.assess(&application) {
        Ok(assessment) => {
            let Assessment {
                metrics,
                risk,
                prediction,
                recommendations,
                evaluated_at,
            } = assessment;
            let body = AssessmentResponse {
                metrics,
                risk: risk.summary(),
                prediction: prediction.into(),
                recommendations: recommendations
                    .iter()
                    .map(|recommendation| recommendation.message())
                    .collect(),
                evaluated_at,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: UnderwritingError) -> Response {
    let status = match &error {
        UnderwritingError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        UnderwritingError::Predictor(_) => StatusCode::BAD_GATEWAY,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
