use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::underwriting::domain::{
    LoanApplication, LoanPurpose, LoanType, ResidenceType,
};
use crate::workflows::underwriting::predictor::{
    CreditRating, Prediction, PredictorError, RiskPredictor,
};
use crate::workflows::underwriting::router::underwriting_router;
use crate::workflows::underwriting::service::UnderwritingService;

/// The intake form's default applicant.
pub(super) fn application() -> LoanApplication {
    LoanApplication {
        age: 28,
        income: 1_200_000.0,
        residence_type: ResidenceType::Owned,
        loan_amount: 2_560_000.0,
        loan_tenure_months: 36,
        loan_purpose: LoanPurpose::Education,
        loan_type: LoanType::Unsecured,
        num_open_accounts: 2,
        avg_dpd_per_delinquency: 20.0,
        delinquency_ratio: 30,
        credit_utilization_ratio: 30,
    }
}

/// Predictor stub returning a canned result and counting invocations.
pub(super) struct FixedPredictor {
    prediction: Prediction,
    calls: AtomicU32,
}

impl FixedPredictor {
    pub(super) fn new(probability: f64, credit_score: u16) -> Self {
        Self {
            prediction: Prediction {
                probability,
                credit_score,
                rating: CreditRating::from_score(credit_score),
            },
            calls: AtomicU32::new(0),
        }
    }

    pub(super) fn calls(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl RiskPredictor for FixedPredictor {
    fn predict(&self, _application: &LoanApplication) -> Result<Prediction, PredictorError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.prediction)
    }
}

pub(super) struct FailingPredictor;

impl RiskPredictor for FailingPredictor {
    fn predict(&self, _application: &LoanApplication) -> Result<Prediction, PredictorError> {
        Err(PredictorError::Unavailable(
            "model runtime offline".to_string(),
        ))
    }
}

pub(super) fn service_with<P: RiskPredictor>(
    predictor: Arc<P>,
) -> (UnderwritingService<P>, Arc<P>) {
    (UnderwritingService::new(predictor.clone()), predictor)
}

pub(super) fn router_with<P: RiskPredictor + 'static>(predictor: Arc<P>) -> axum::Router {
    underwriting_router(Arc::new(UnderwritingService::new(predictor)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
