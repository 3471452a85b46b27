//! Response types for the babysitter pay API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::format_period;
use crate::config::FamilySchedule;
use crate::error::EngineError;
use crate::models::PayResult;

/// Success body for `/calculate`.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    /// The engine result.
    #[serde(flatten)]
    pub result: PayResult,
    /// Average earnings per paid hour.
    pub average_rate: Decimal,
}

impl From<PayResult> for CalculationResponse {
    fn from(result: PayResult) -> Self {
        let average_rate = result.average_rate();
        Self {
            result,
            average_rate,
        }
    }
}

/// One tier in a family listing.
#[derive(Debug, Clone, Serialize)]
pub struct TierSummary {
    /// Clock range covered by the tier, e.g. `"5:00 PM - 11:00 PM"`.
    pub period: String,
    /// The tier's display label.
    pub label: String,
    /// Hourly rate.
    pub rate: Decimal,
}

/// One family in the `/families` listing.
#[derive(Debug, Clone, Serialize)]
pub struct FamilySummary {
    /// Family identifier to send back in `/calculate`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Summary of the rates.
    pub description: String,
    /// Tiers in chronological order.
    pub tiers: Vec<TierSummary>,
}

impl From<&FamilySchedule> for FamilySummary {
    fn from(schedule: &FamilySchedule) -> Self {
        Self {
            id: schedule.id().to_string(),
            name: schedule.name().to_string(),
            description: schedule.description().to_string(),
            tiers: schedule
                .tier_bounds()
                .map(|(start, tier)| TierSummary {
                    period: format_period(start, tier.cutoff),
                    label: tier.label.clone(),
                    rate: tier.rate,
                })
                .collect(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::ParseError { input, .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "PARSE_ERROR",
                    message,
                    format!("'{}' is not a time like 5:00 PM or 17:00", input),
                ),
            ),
            EngineError::OutOfWindow { endpoint } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "OUT_OF_WINDOW",
                    message,
                    format!("{} time is outside the babysitting window", endpoint),
                ),
            ),
            EngineError::Ordering => (
                StatusCode::BAD_REQUEST,
                ApiError::new("ORDERING_ERROR", message),
            ),
            EngineError::MinimumDuration => (
                StatusCode::BAD_REQUEST,
                ApiError::new("MINIMUM_DURATION", message),
            ),
            EngineError::UnknownFamily { family } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "UNKNOWN_FAMILY",
                    message,
                    format!("The family '{}' has no configured rate schedule", family),
                ),
            ),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidSchedule { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Endpoint;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_input_errors_are_bad_request() {
        let cases = [
            (
                EngineError::ParseError {
                    input: "x".to_string(),
                    message: "hour is not a number".to_string(),
                },
                "PARSE_ERROR",
            ),
            (
                EngineError::OutOfWindow {
                    endpoint: Endpoint::Start,
                },
                "OUT_OF_WINDOW",
            ),
            (EngineError::Ordering, "ORDERING_ERROR"),
            (EngineError::MinimumDuration, "MINIMUM_DURATION"),
            (
                EngineError::UnknownFamily {
                    family: "D".to_string(),
                },
                "UNKNOWN_FAMILY",
            ),
        ];

        for (engine_error, code) in cases {
            let message = engine_error.to_string();
            let api_error: ApiErrorResponse = engine_error.into();
            assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
            assert_eq!(api_error.error.code, code);
            assert_eq!(api_error.error.message, message);
        }
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let engine_error = EngineError::ConfigNotFound {
            path: "config/families.yaml".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_calculation_response_flattens_result() {
        let result = PayResult {
            total_pay: Decimal::from(70),
            total_hours: 4,
            breakdown: vec![],
            family: "A".to_string(),
        };
        let json = serde_json::to_value(CalculationResponse::from(result)).unwrap();
        assert_eq!(json["total_pay"], "70");
        assert_eq!(json["average_rate"], "17.5");
        assert_eq!(json["family"], "A");
    }
}
