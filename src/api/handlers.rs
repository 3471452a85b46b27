//! HTTP request handlers for the babysitter pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, FamilySummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/families", get(families_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a shift and a family and returns the pay breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let started = Instant::now();
    match calculate(
        &request.start_time,
        &request.end_time,
        &request.family,
        state.registry(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                family = %result.family,
                total_hours = result.total_hours,
                total_pay = %result.total_pay.normalize(),
                duration_us = started.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, CalculationResponse::from(result))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Handler for GET /families endpoint.
///
/// Lists every configured family with its rate tiers.
async fn families_handler(State(state): State<AppState>) -> Response {
    let families: Vec<FamilySummary> = state
        .registry()
        .schedules()
        .map(FamilySummary::from)
        .collect();
    info!(families = families.len(), "Listing families");
    json_response(StatusCode::OK, families)
}

fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config").expect("Failed to load config");
        AppState::new(config)
    }

    fn create_request(start_time: &str, end_time: &str, family: &str) -> CalculationRequest {
        CalculationRequest {
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            family: family.to_string(),
        }
    }

    async fn post_calculate(body: String) -> (StatusCode, Value) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let state = create_test_state();
        let router = create_router(state);

        let request = create_request("9:00 PM", "1:00 AM", "A");
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(result["total_pay"], "70");
        assert_eq!(result["total_hours"], 4);
        assert_eq!(result["family"], "A");
        assert_eq!(result["breakdown"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, error) = post_calculate("{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_family_returns_validation_error() {
        let body = r#"{ "start_time": "5:00 PM", "end_time": "9:00 PM" }"#;
        let (status, error) = post_calculate(body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "VALIDATION_ERROR");
        assert!(error["message"].as_str().unwrap().contains("missing field"));
    }

    #[tokio::test]
    async fn test_unknown_family_returns_400() {
        let request = create_request("5:00 PM", "9:00 PM", "D");
        let (status, error) = post_calculate(serde_json::to_string(&request).unwrap()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "UNKNOWN_FAMILY");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());
        let request = create_request("5:00 PM", "9:00 PM", "A");

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .body(Body::from(serde_json::to_string(&request).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_families_lists_configured_schedules() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/families")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let families: Value = serde_json::from_slice(&body).unwrap();
        let families = families.as_array().unwrap();

        assert_eq!(families.len(), 3);
        assert_eq!(families[1]["id"], "B");
        assert_eq!(families[1]["tiers"][1]["period"], "10:00 PM - 12:00 AM");
        assert_eq!(families[1]["tiers"][1]["rate"], "8");
    }
}
