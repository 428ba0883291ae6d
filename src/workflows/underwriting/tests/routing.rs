use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::util::ServiceExt;

use super::common::{application, read_json_body, router_with, FailingPredictor, FixedPredictor};
use crate::workflows::underwriting::domain::LoanApplication;

fn post_json(uri: &str, application: &LoanApplication) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(application).expect("serializable application"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn assessments_endpoint_returns_the_full_bundle() {
    let router = router_with(Arc::new(FixedPredictor::new(0.05, 760)));

    let response = router
        .oneshot(post_json("/api/v1/underwriting/assessments", &application()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;

    assert_eq!(body["prediction"]["credit_score"], 760);
    assert_eq!(body["prediction"]["rating"], "A");
    assert_eq!(body["risk"]["level_label"], "Medium Risk");
    assert_eq!(body["risk"]["factors"][0], "High delinquency ratio");
    assert_eq!(
        body["recommendations"][0],
        "Low risk profile. Eligible for competitive rates."
    );
    assert_eq!(
        body["recommendations"][1],
        "Excellent credit score! Eligible for premium loan products."
    );
    assert!(body["evaluated_at"].is_string());
}

#[tokio::test]
async fn preview_endpoint_skips_the_model() {
    let router = router_with(Arc::new(FailingPredictor));

    let response = router
        .oneshot(post_json("/api/v1/underwriting/preview", &application()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;

    assert!(body["metrics"]["loan_to_income_ratio"].is_number());
    assert!(body["metrics"]["emi"]["monthly_emi"].is_number());
    assert_eq!(body["risk"]["score"], 1);
    assert!(body.get("prediction").is_none());
}

#[tokio::test]
async fn invalid_fields_map_to_unprocessable_entity() {
    let router = router_with(Arc::new(FixedPredictor::new(0.05, 760)));

    let mut invalid = application();
    invalid.age = 10;

    let response = router
        .oneshot(post_json("/api/v1/underwriting/assessments", &invalid))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("age"));
}

#[tokio::test]
async fn predictor_outages_map_to_bad_gateway() {
    let router = router_with(Arc::new(FailingPredictor));

    let response = router
        .oneshot(post_json("/api/v1/underwriting/assessments", &application()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = read_json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("predictor unavailable"));
}

#[tokio::test]
async fn omitted_emi_is_absent_from_the_payload() {
    let router = router_with(Arc::new(FixedPredictor::new(0.05, 700)));

    let mut no_loan = application();
    no_loan.loan_amount = 0.0;

    let response = router
        .oneshot(post_json("/api/v1/underwriting/preview", &no_loan))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(body["metrics"].get("emi").is_none());
}
